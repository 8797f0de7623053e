use crate::areas::repository::Repository;
use crate::artifacts::checkout::migration::Migration;
use crate::artifacts::merge::resolution::{MergeAction, MergePlan, conflict_content};
use crate::artifacts::merge::split_point::SplitPointFinder;
use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::{Error, Result};
use anyhow::Context;
use bytes::Bytes;
use std::path::Path;
use tracing::debug;

pub const FAST_FORWARD_NOTICE: &str = "Current branch fast-forwarded.";
pub const ANCESTOR_NOTICE: &str = "Given branch is an ancestor of the current branch.";
pub const CONFLICT_NOTICE: &str = "Encountered a merge conflict.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MergeOutcome {
    /// The given branch is already part of the current history
    AlreadyMerged,
    /// The current branch was moved forward to the given commit
    FastForwarded(ObjectId),
    Merged { commit: ObjectId, conflicted: bool },
}

impl MergeOutcome {
    /// Line reported to the user, if any
    pub fn notice(&self) -> Option<&'static str> {
        match self {
            MergeOutcome::AlreadyMerged => Some(ANCESTOR_NOTICE),
            MergeOutcome::FastForwarded(_) => Some(FAST_FORWARD_NOTICE),
            MergeOutcome::Merged { conflicted: true, .. } => Some(CONFLICT_NOTICE),
            MergeOutcome::Merged { .. } => None,
        }
    }
}

impl Repository {
    /// Merge the branch `name` into the current branch
    ///
    /// Every precondition is checked before anything is touched.
    pub fn merge(&self, name: &str) -> Result<MergeOutcome> {
        self.require_repository()?;

        if !self.index().is_empty()? {
            return Err(Error::UncommittedChanges);
        }
        let given_branch = self.existing_branch(name)?;
        let current_branch = self.refs().current_branch()?;
        if given_branch == current_branch {
            return Err(Error::SelfMerge);
        }

        let (ours_oid, ours) = self.head_commit()?;
        let theirs_oid = self
            .refs()
            .read_branch(&given_branch)?
            .ok_or_else(|| Error::BranchNotFound(name.to_string()))?;
        let theirs = self.database().load_commit(&theirs_oid)?;

        self.check_untracked_obstruction(&ours, &theirs)?;

        let split_oid = self.find_split_point(&ours_oid, &theirs_oid)?;

        if split_oid == theirs_oid {
            return Ok(MergeOutcome::AlreadyMerged);
        }

        if split_oid == ours_oid {
            let migration = Migration::plan(self.database(), ours.tracked_files(), theirs.tracked_files())?;
            migration.apply(self.workspace())?;
            self.refs().update_branch(&current_branch, &theirs_oid)?;
            self.index().clear()?;

            debug!(branch = %current_branch, target = %theirs_oid.to_short_oid(), "fast-forwarded");
            return Ok(MergeOutcome::FastForwarded(theirs_oid));
        }

        let split = self.database().load_commit(&split_oid)?;
        let plan = MergePlan::new(split.tracked_files(), ours.tracked_files(), theirs.tracked_files());

        for (path, action) in plan.actions() {
            self.apply_merge_action(path, action, &ours, &theirs)?;
        }

        let message = format!("Merged {} into {}.", given_branch, current_branch);
        let commit = self.write_commit(&message, Some(theirs_oid))?;

        Ok(MergeOutcome::Merged {
            commit,
            conflicted: plan.has_conflicts(),
        })
    }

    fn find_split_point(&self, ours_oid: &ObjectId, theirs_oid: &ObjectId) -> Result<ObjectId> {
        let finder = SplitPointFinder::new(|oid: &ObjectId| -> anyhow::Result<Vec<ObjectId>> {
            Ok(self.database().load_commit(oid)?.parents())
        });

        finder
            .find_split_point(ours_oid, theirs_oid)?
            .ok_or_else(|| Error::NoCommonAncestor {
                ours: ours_oid.to_string(),
                theirs: theirs_oid.to_string(),
            })
    }

    fn apply_merge_action(
        &self,
        path: &Path,
        action: MergeAction,
        ours: &Commit,
        theirs: &Commit,
    ) -> Result<()> {
        match action {
            MergeAction::Keep => return Ok(()),
            MergeAction::TakeTheirs => {
                let blob = self.tracked_blob(theirs, path)?;
                self.workspace().write_file(path, blob.content())?;
                self.index().stage_addition(path, &blob)?;
            }
            MergeAction::Remove => {
                let blob = self.tracked_blob(ours, path)?;
                self.index().stage_removal(path, &blob)?;
                self.workspace().remove_file(path)?;
            }
            MergeAction::Conflict => {
                let ours_content = self.tracked_content(ours, path)?;
                let theirs_content = self.tracked_content(theirs, path)?;
                let blob = Blob::new(conflict_content(
                    ours_content.as_deref(),
                    theirs_content.as_deref(),
                ));

                self.workspace().write_file(path, blob.content())?;
                self.database().store(&blob)?;
                self.index().stage_addition(path, &blob)?;
            }
        }

        debug!(path = %path.display(), ?action, "applied merge action");

        Ok(())
    }

    fn tracked_blob(&self, commit: &Commit, path: &Path) -> Result<Blob> {
        let blob_oid = commit
            .tracked_blob(path)
            .with_context(|| format!("{} is not tracked by the merged commit", path.display()))?;

        Ok(self.database().load_blob(blob_oid)?)
    }

    fn tracked_content(&self, commit: &Commit, path: &Path) -> Result<Option<Bytes>> {
        match commit.tracked_blob(path) {
            Some(blob_oid) => Ok(Some(self.database().load_blob(blob_oid)?.into_content())),
            None => Ok(None),
        }
    }
}
