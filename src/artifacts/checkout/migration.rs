//! Snapshot migration
//!
//! A migration turns a working tree that matches one snapshot (HEAD) into one
//! that matches another (the target):
//!
//! 1. every file tracked by the target is written with the target's content
//! 2. every file tracked by HEAD but not by the target is deleted
//!
//! Files tracked by neither are left alone. Blob contents are loaded while
//! planning, so a missing object aborts the migration before any file changes.

use crate::areas::database::Database;
use crate::areas::workspace::WorkingTree;
use crate::artifacts::objects::commit::TrackedFiles;
use bytes::Bytes;
use std::collections::{BTreeMap, BTreeSet};
use std::path::PathBuf;
use tracing::debug;

/// Type of file system action required for a migration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionType {
    Write,
    Delete,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Migration {
    writes: BTreeMap<PathBuf, Bytes>,
    deletes: BTreeSet<PathBuf>,
}

impl Migration {
    /// Plan the switch from `head_files` to `target_files`
    pub fn plan(
        database: &Database,
        head_files: &TrackedFiles,
        target_files: &TrackedFiles,
    ) -> anyhow::Result<Self> {
        let mut writes = BTreeMap::new();
        for (path, blob_oid) in target_files {
            let blob = database.load_blob(blob_oid)?;
            writes.insert(path.clone(), blob.into_content());
        }

        let deletes = head_files
            .keys()
            .filter(|path| !target_files.contains_key(*path))
            .cloned()
            .collect();

        Ok(Migration { writes, deletes })
    }

    pub fn actions(&self) -> impl Iterator<Item = (ActionType, &PathBuf)> {
        self.writes
            .keys()
            .map(|path| (ActionType::Write, path))
            .chain(self.deletes.iter().map(|path| (ActionType::Delete, path)))
    }

    pub fn apply(&self, workspace: &dyn WorkingTree) -> anyhow::Result<()> {
        for (path, content) in &self.writes {
            workspace.write_file(path, content)?;
        }
        for path in &self.deletes {
            workspace.remove_file(path)?;
        }

        debug!(
            written = self.writes.len(),
            deleted = self.deletes.len(),
            "applied migration"
        );

        Ok(())
    }
}
