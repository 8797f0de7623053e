use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::errors::{Error, Result};

impl Repository {
    /// Create a branch pointing at the HEAD commit; HEAD does not move
    pub fn branch(&self, name: &str) -> Result<()> {
        self.require_repository()?;

        let branch_name = BranchName::try_parse(name.to_string())
            .map_err(|_| Error::InvalidBranchName(name.to_string()))?;
        if self.refs().branch_exists(&branch_name) {
            return Err(Error::BranchExists(name.to_string()));
        }

        let head_oid = self.refs().read_head()?;
        self.refs().create_branch(&branch_name, &head_oid)?;

        Ok(())
    }

    /// Delete a branch pointer; commits stay in the store
    pub fn rm_branch(&self, name: &str) -> Result<()> {
        self.require_repository()?;

        let branch_name = self.existing_branch(name)?;
        if self.refs().is_current_branch(&branch_name)? {
            return Err(Error::CannotDeleteCurrentBranch(name.to_string()));
        }

        self.refs().delete_branch(&branch_name)?;

        Ok(())
    }

    /// Parse `name` and make sure the branch exists
    pub(crate) fn existing_branch(&self, name: &str) -> Result<BranchName> {
        BranchName::try_parse(name.to_string())
            .ok()
            .filter(|branch_name| self.refs().branch_exists(branch_name))
            .ok_or_else(|| Error::BranchNotFound(name.to_string()))
    }
}
