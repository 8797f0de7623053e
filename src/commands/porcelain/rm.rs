use crate::areas::repository::Repository;
use crate::errors::{Error, Result};
use std::path::Path;

impl Repository {
    /// Unstage `path`, and if HEAD tracks it, stage its removal and delete
    /// the working copy
    pub fn rm(&self, path: &Path) -> Result<()> {
        self.require_repository()?;

        let path = self.working_path(path)?;
        let path = path.as_path();
        let (_, head) = self.head_commit()?;
        let was_staged = self.index().unstage_addition(path)?;

        match head.tracked_blob(path) {
            Some(blob_oid) => {
                let blob = self.database().load_blob(blob_oid)?;
                self.index().stage_removal(path, &blob)?;
                self.workspace().remove_file(path)?;
            }
            None if was_staged => {}
            None => return Err(Error::NothingToRemove(path.to_path_buf())),
        }

        Ok(())
    }
}
