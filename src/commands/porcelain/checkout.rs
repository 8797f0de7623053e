use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::branch::revision::Revision;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::{Error, Result};
use std::path::Path;
use tracing::debug;

impl Repository {
    /// Restore HEAD's version of `path`; staging is left alone
    pub fn checkout_file(&self, path: &Path) -> Result<()> {
        self.require_repository()?;

        let path = self.working_path(path)?;
        let head_oid = self.refs().read_head()?;
        self.restore_file(&head_oid, &path)
    }

    /// Restore the version of `path` recorded in the commit `revision` names
    pub fn checkout_file_at(&self, revision: &str, path: &Path) -> Result<()> {
        self.require_repository()?;

        let path = self.working_path(path)?;
        let commit_oid = Revision::try_parse(revision)?.resolve(self.database())?;
        self.restore_file(&commit_oid, &path)
    }

    /// Switch the working tree and HEAD to another branch
    pub fn checkout_branch(&self, name: &str) -> Result<()> {
        self.require_repository()?;

        let branch_name = BranchName::try_parse(name.to_string())
            .map_err(|_| Error::NoSuchBranch(name.to_string()))?;
        let target_oid = self
            .refs()
            .read_branch(&branch_name)?
            .ok_or_else(|| Error::NoSuchBranch(name.to_string()))?;
        if self.refs().is_current_branch(&branch_name)? {
            return Err(Error::AlreadyCurrentBranch(name.to_string()));
        }

        self.switch_snapshot(&target_oid)?;
        self.refs().set_head(&branch_name)?;

        debug!(branch = %branch_name, "checked out branch");

        Ok(())
    }

    fn restore_file(&self, commit_oid: &ObjectId, path: &Path) -> Result<()> {
        let commit = self.database().load_commit(commit_oid)?;
        let blob_oid = commit
            .tracked_blob(path)
            .ok_or_else(|| Error::FileNotInCommit(path.to_path_buf()))?;
        let blob = self.database().load_blob(blob_oid)?;

        self.workspace().write_file(path, blob.content())?;

        Ok(())
    }
}
