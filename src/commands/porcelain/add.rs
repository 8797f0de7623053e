use crate::areas::repository::Repository;
use crate::artifacts::objects::object::Object;
use crate::errors::{Error, Result};
use std::path::Path;
use tracing::debug;

impl Repository {
    /// Stage the working copy of `path` for the next commit
    ///
    /// A file whose content matches what HEAD already tracks is unstaged
    /// instead. Either way a pending removal of `path` is cancelled.
    pub fn add(&self, path: &Path) -> Result<()> {
        self.require_repository()?;

        let path = self.working_path(path)?;
        let path = path.as_path();
        let blob = self
            .workspace()
            .parse_blob(path)?
            .ok_or_else(|| Error::FileMissing(path.to_path_buf()))?;
        let blob_oid = blob.object_id()?;
        let (_, head) = self.head_commit()?;

        if head.tracked_blob(path) == Some(&blob_oid) {
            self.index().unstage_addition(path)?;
            self.index().unstage_removal(path)?;
            debug!(path = %path.display(), "content matches HEAD, nothing staged");
        } else {
            self.database().store(&blob)?;
            self.index().stage_addition(path, &blob)?;
        }

        Ok(())
    }
}
