use crate::areas::repository::Repository;
use crate::artifacts::objects::commit::TrackedFiles;
use crate::artifacts::objects::object::Object;
use crate::artifacts::status::status_info::{FileSet, StatusInfo, StatusInputs};
use crate::errors::Result;
use std::io::Write;

impl Repository {
    pub fn status(&self) -> Result<()> {
        self.require_repository()?;

        let status = self.status_info()?;
        let color = self.config().color();
        let mut writer = self.writer();

        writeln!(writer, "=== Branches ===")?;
        for branch in status.branches() {
            let marker = if branch == status.current_branch() { "*" } else { "" };
            writeln!(writer, "{}{}", marker, branch)?;
        }
        writeln!(writer)?;

        writeln!(writer, "=== Staged Files ===")?;
        for path in status.staged() {
            writeln!(writer, "{}", path.display())?;
        }
        writeln!(writer)?;

        writeln!(writer, "=== Removed Files ===")?;
        for path in status.removed() {
            writeln!(writer, "{}", path.display())?;
        }
        writeln!(writer)?;

        writeln!(writer, "=== Modifications Not Staged For Commit ===")?;
        for (path, kind) in status.modified() {
            let label = if color {
                kind.colored_label().to_string()
            } else {
                kind.label().to_string()
            };
            writeln!(writer, "{} {}", path.display(), label)?;
        }
        writeln!(writer)?;

        writeln!(writer, "=== Untracked Files ===")?;
        for path in status.untracked() {
            writeln!(writer, "{}", path.display())?;
        }
        writeln!(writer)?;

        Ok(())
    }

    pub fn status_info(&self) -> Result<StatusInfo> {
        let (_, head) = self.head_commit()?;

        let staged_additions = self
            .index()
            .additions()?
            .into_iter()
            .map(|(path, blob)| Ok((path, blob.object_id()?)))
            .collect::<anyhow::Result<TrackedFiles>>()?;
        let staged_removals = self
            .index()
            .removals()?
            .into_keys()
            .collect::<FileSet>();
        let working_files = self.working_files()?;

        let branches = self.refs().list_branches()?;
        let current_branch = self.refs().current_branch()?;

        Ok(StatusInfo::compute(
            branches,
            current_branch,
            StatusInputs {
                head_files: Some(head.tracked_files()),
                staged_additions: Some(&staged_additions),
                staged_removals: Some(&staged_removals),
                working_files: Some(&working_files),
            },
        ))
    }
}
