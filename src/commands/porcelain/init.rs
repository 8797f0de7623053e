use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::objects::commit::{Commit, TrackedFiles};
use crate::artifacts::objects::object_id::ObjectId;
use crate::config::{DEFAULT_BRANCH, INITIAL_COMMIT_MESSAGE};
use crate::errors::{Error, Result};
use anyhow::Context;
use chrono::DateTime;
use std::fs;
use tracing::info;

impl Repository {
    /// Create the repository layout, the root commit and the default branch
    pub fn init(&self) -> Result<ObjectId> {
        if self.is_initialized() {
            return Err(Error::RepositoryExists);
        }

        fs::create_dir_all(self.database().objects_path())
            .context("Failed to create .gitlet/objects directory")?;
        fs::create_dir_all(self.refs().branches_path())
            .context("Failed to create .gitlet/branches directory")?;
        self.index().initialize()?;

        let root = Commit::new(
            None,
            None,
            DateTime::UNIX_EPOCH.fixed_offset(),
            TrackedFiles::new(),
            INITIAL_COMMIT_MESSAGE.to_string(),
        );
        let root_oid = self.database().store(&root)?;

        let default_branch = BranchName::try_parse(DEFAULT_BRANCH.to_string())?;
        self.refs().update_branch(&default_branch, &root_oid)?;
        self.refs().set_head(&default_branch)?;

        info!(path = %self.git_path().display(), root = %root_oid, "initialized repository");

        Ok(root_oid)
    }
}
