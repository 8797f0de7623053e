//! Staging area
//!
//! The staging area holds the changes that the next commit will record. It is
//! made of two disjoint sets:
//!
//! - **additions**: paths whose captured content will be tracked by the next commit
//! - **removals**: paths the next commit will stop tracking, along with the
//!   content they had, so the removal can be inspected or undone
//!
//! ## On-disk Layout
//!
//! Each set is a directory mirroring the working tree:
//!
//! ```text
//! .gitlet/staging/addition/<path>   literal content staged for addition
//! .gitlet/staging/removal/<path>    last tracked content of a removed path
//! ```
//!
//! A path is never present in both directories: staging one side always
//! clears the other.

use crate::artifacts::objects::blob::Blob;
use crate::artifacts::core::{normalize_working_path, prune_empty_parent_dirs};
use anyhow::Context;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::trace;
use walkdir::WalkDir;

pub const ADDITION_DIR: &str = "addition";
pub const REMOVAL_DIR: &str = "removal";

/// Staged path → captured content
pub type StagedFiles = BTreeMap<PathBuf, Blob>;

#[derive(Debug, Clone)]
pub struct Index {
    /// Path to the staging directory (typically `.gitlet/staging`)
    path: Box<Path>,
}

impl Index {
    /// Create a handle on the staging directory
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the staging directory (typically `.gitlet/staging`)
    pub fn new(path: Box<Path>) -> Self {
        Index { path }
    }

    /// Create both staging directories
    pub fn initialize(&self) -> anyhow::Result<()> {
        for area in [self.addition_path(), self.removal_path()] {
            std::fs::create_dir_all(&area)
                .with_context(|| format!("Unable to create staging directory {:?}", area))?;
        }

        Ok(())
    }

    pub fn addition_path(&self) -> PathBuf {
        self.path.join(ADDITION_DIR)
    }

    pub fn removal_path(&self) -> PathBuf {
        self.path.join(REMOVAL_DIR)
    }

    /// All paths staged for addition with their captured content
    pub fn additions(&self) -> anyhow::Result<StagedFiles> {
        Self::read_area(&self.addition_path())
    }

    /// All paths staged for removal with their last tracked content
    pub fn removals(&self) -> anyhow::Result<StagedFiles> {
        Self::read_area(&self.removal_path())
    }

    /// Content staged for addition at `path`, if any
    pub fn staged_addition(&self, path: &Path) -> anyhow::Result<Option<Blob>> {
        let staged_path = Self::area_file(&self.addition_path(), path)?;
        if !staged_path.is_file() {
            return Ok(None);
        }

        let content = std::fs::read(&staged_path)
            .with_context(|| format!("Unable to read staged file {:?}", staged_path))?;
        Ok(Some(Blob::new(content.into())))
    }

    pub fn is_staged_for_addition(&self, path: &Path) -> bool {
        Self::area_file(&self.addition_path(), path).is_ok_and(|staged_path| staged_path.is_file())
    }

    pub fn is_staged_for_removal(&self, path: &Path) -> bool {
        Self::area_file(&self.removal_path(), path).is_ok_and(|staged_path| staged_path.is_file())
    }

    /// Stage `blob` as the next content of `path`
    ///
    /// Any pending removal of the same path is dropped.
    pub fn stage_addition(&self, path: &Path, blob: &Blob) -> anyhow::Result<()> {
        self.unstage_removal(path)?;
        Self::write_area_file(&self.addition_path(), path, blob)?;
        trace!(path = %path.display(), "staged for addition");

        Ok(())
    }

    /// Stage the removal of `path`, keeping its last tracked content
    ///
    /// Any pending addition of the same path is dropped.
    pub fn stage_removal(&self, path: &Path, blob: &Blob) -> anyhow::Result<()> {
        self.unstage_addition(path)?;
        Self::write_area_file(&self.removal_path(), path, blob)?;
        trace!(path = %path.display(), "staged for removal");

        Ok(())
    }

    /// Drop a pending addition; returns whether one existed
    pub fn unstage_addition(&self, path: &Path) -> anyhow::Result<bool> {
        Self::remove_area_file(&self.addition_path(), path)
    }

    /// Drop a pending removal; returns whether one existed
    pub fn unstage_removal(&self, path: &Path) -> anyhow::Result<bool> {
        Self::remove_area_file(&self.removal_path(), path)
    }

    /// Whether both sets are empty
    pub fn is_empty(&self) -> anyhow::Result<bool> {
        Ok(self.additions()?.is_empty() && self.removals()?.is_empty())
    }

    /// Empty both sets
    pub fn clear(&self) -> anyhow::Result<()> {
        for area in [self.addition_path(), self.removal_path()] {
            if area.exists() {
                std::fs::remove_dir_all(&area)
                    .with_context(|| format!("Unable to clear staging directory {:?}", area))?;
            }
        }
        trace!("cleared staging area");

        self.initialize()
    }

    fn read_area(area: &Path) -> anyhow::Result<StagedFiles> {
        let mut staged = StagedFiles::new();
        if !area.exists() {
            return Ok(staged);
        }

        for entry in WalkDir::new(area) {
            let entry = entry.with_context(|| format!("Unable to walk staging directory {:?}", area))?;
            if !entry.file_type().is_file() {
                continue;
            }

            let relative_path = entry.path().strip_prefix(area)?.to_path_buf();
            let content = std::fs::read(entry.path())
                .with_context(|| format!("Unable to read staged file {:?}", entry.path()))?;
            staged.insert(relative_path, Blob::new(content.into()));
        }

        Ok(staged)
    }

    /// Location of `path` inside one staging directory
    fn area_file(area: &Path, path: &Path) -> anyhow::Result<PathBuf> {
        let relative_path = normalize_working_path(path)
            .with_context(|| format!("{:?} cannot be staged", path))?;

        Ok(area.join(relative_path))
    }

    fn write_area_file(area: &Path, path: &Path, blob: &Blob) -> anyhow::Result<()> {
        let staged_path = Self::area_file(area, path)?;
        if let Some(parent) = staged_path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Unable to create staging directory {:?}", parent))?;
        }

        std::fs::write(&staged_path, blob.content())
            .with_context(|| format!("Unable to write staged file {:?}", staged_path))
    }

    fn remove_area_file(area: &Path, path: &Path) -> anyhow::Result<bool> {
        let staged_path = Self::area_file(area, path)?;
        if !staged_path.is_file() {
            return Ok(false);
        }

        std::fs::remove_file(&staged_path)
            .with_context(|| format!("Unable to remove staged file {:?}", staged_path))?;
        prune_empty_parent_dirs(area, &staged_path)?;

        Ok(true)
    }
}
