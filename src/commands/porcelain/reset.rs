use crate::areas::repository::Repository;
use crate::artifacts::branch::revision::Revision;
use crate::errors::Result;
use tracing::debug;

impl Repository {
    /// Move the current branch to the commit `revision` names and check out
    /// its snapshot
    pub fn reset(&self, revision: &str) -> Result<()> {
        self.require_repository()?;

        let target_oid = Revision::try_parse(revision)?.resolve(self.database())?;
        self.switch_snapshot(&target_oid)?;

        let current_branch = self.refs().current_branch()?;
        self.refs().update_branch(&current_branch, &target_oid)?;

        debug!(branch = %current_branch, target = %target_oid.to_short_oid(), "reset branch");

        Ok(())
    }
}
