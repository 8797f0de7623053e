use crate::areas::repository::Repository;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::{Error, Result};
use tracing::debug;

impl Repository {
    /// Record the staged snapshot on the current branch
    pub fn commit(&self, message: &str) -> Result<ObjectId> {
        self.require_repository()?;

        if message.is_empty() {
            return Err(Error::EmptyCommitMessage);
        }
        if self.index().is_empty()? {
            return Err(Error::NothingToCommit);
        }

        self.write_commit(message, None)
    }

    /// Build a commit from HEAD's snapshot plus the staging area, advance the
    /// current branch to it and clear staging
    pub(crate) fn write_commit(
        &self,
        message: &str,
        merged_in_parent: Option<ObjectId>,
    ) -> Result<ObjectId> {
        let (parent_oid, parent) = self.head_commit()?;
        let mut tracked_files = parent.tracked_files().clone();

        for (path, blob) in self.index().additions()? {
            // stored already by `add`, but staged content is the source of truth
            let blob_oid = self.database().store(&blob)?;
            tracked_files.insert(path, blob_oid);
        }
        for path in self.index().removals()?.keys() {
            tracked_files.remove(path);
        }

        let commit = Commit::new(
            Some(parent_oid),
            merged_in_parent,
            self.config().commit_timestamp(),
            tracked_files,
            message.to_string(),
        );
        let commit_oid = self.database().store(&commit)?;

        let current_branch = self.refs().current_branch()?;
        self.refs().update_branch(&current_branch, &commit_oid)?;
        self.index().clear()?;

        debug!(
            branch = %current_branch,
            commit = %commit_oid.to_short_oid(),
            files = commit.tracked_files().len(),
            "created commit"
        );

        Ok(commit_oid)
    }
}
