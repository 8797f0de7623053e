//! Working tree status
//!
//! Status compares three views of every path: what HEAD tracks, what is
//! staged, and what the working tree holds. Paths fall into these buckets:
//!
//! - **staged**: staged for addition
//! - **removed**: staged for removal
//! - **modified, not staged**: the working copy no longer matches the version
//!   that HEAD or the staging area expects, or is missing entirely
//! - **untracked**: present in the working tree but neither staged for
//!   addition nor tracked by HEAD; also a file staged for removal that
//!   reappeared in the working tree
//!
//! A path is reported at most once under "modified, not staged", and a
//! modification wins over a deletion. A file staged for removal that comes
//! back with new content is only untracked. Every list is sorted.

use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::objects::commit::TrackedFiles;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::status::file_change::ModificationKind;
use std::collections::{BTreeMap, BTreeSet};
use std::path::PathBuf;

pub type FileSet = BTreeSet<PathBuf>;
pub type ChangeSet = BTreeMap<PathBuf, ModificationKind>;

/// Blob id of every file in the working tree
pub type WorkingFiles = BTreeMap<PathBuf, ObjectId>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusInfo {
    pub(crate) branches: Vec<BranchName>,
    pub(crate) current_branch: BranchName,
    pub(crate) staged: FileSet,
    pub(crate) removed: FileSet,
    pub(crate) modified: ChangeSet,
    pub(crate) untracked: FileSet,
}

/// Inputs of a status computation
#[derive(Debug, Clone, Default)]
pub struct StatusInputs<'a> {
    pub head_files: Option<&'a TrackedFiles>,
    pub staged_additions: Option<&'a TrackedFiles>,
    pub staged_removals: Option<&'a FileSet>,
    pub working_files: Option<&'a WorkingFiles>,
}

impl StatusInfo {
    pub fn compute(
        branches: Vec<BranchName>,
        current_branch: BranchName,
        inputs: StatusInputs<'_>,
    ) -> StatusInfo {
        let empty_files = TrackedFiles::new();
        let empty_set = FileSet::new();
        let head_files = inputs.head_files.unwrap_or(&empty_files);
        let staged_additions = inputs.staged_additions.unwrap_or(&empty_files);
        let staged_removals = inputs.staged_removals.unwrap_or(&empty_set);
        let working_files = inputs.working_files.unwrap_or(&empty_files);

        let mut untracked = FileSet::new();
        let mut modified = ChangeSet::new();

        for (path, working_oid) in working_files {
            let is_staged = staged_additions.contains_key(path);
            let is_tracked = head_files.contains_key(path);
            let is_removed = staged_removals.contains(path);

            if (!is_staged && !is_tracked) || (is_removed && !is_staged) {
                untracked.insert(path.clone());
            }

            let head_changed = !is_staged
                && !is_removed
                && head_files
                    .get(path)
                    .is_some_and(|head_oid| head_oid != working_oid);
            let stage_changed = staged_additions
                .get(path)
                .is_some_and(|staged_oid| staged_oid != working_oid);

            if head_changed || stage_changed {
                modified.insert(path.clone(), ModificationKind::Modified);
            }
        }

        let staged_but_missing = staged_additions
            .keys()
            .filter(|path| !working_files.contains_key(*path));
        let tracked_but_missing = head_files.keys().filter(|path| {
            !working_files.contains_key(*path) && !staged_removals.contains(*path)
        });

        for path in staged_but_missing.chain(tracked_but_missing) {
            modified
                .entry(path.clone())
                .or_insert(ModificationKind::Deleted);
        }

        StatusInfo {
            branches,
            current_branch,
            staged: staged_additions.keys().cloned().collect(),
            removed: staged_removals.clone(),
            modified,
            untracked,
        }
    }

    pub fn branches(&self) -> &[BranchName] {
        &self.branches
    }

    pub fn current_branch(&self) -> &BranchName {
        &self.current_branch
    }

    pub fn staged(&self) -> &FileSet {
        &self.staged
    }

    pub fn removed(&self) -> &FileSet {
        &self.removed
    }

    pub fn modified(&self) -> &ChangeSet {
        &self.modified
    }

    pub fn untracked(&self) -> &FileSet {
        &self.untracked
    }

    pub fn is_clean(&self) -> bool {
        self.staged.is_empty()
            && self.removed.is_empty()
            && self.modified.is_empty()
            && self.untracked.is_empty()
    }
}
