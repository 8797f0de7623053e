use crate::areas::repository::Repository;
use crate::artifacts::log::rev_list::RevList;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::{Error, Result};
use std::io::Write;

impl Repository {
    /// Print the first-parent history of HEAD, newest first
    pub fn log(&self) -> Result<()> {
        self.require_repository()?;

        for entry in self.history()? {
            let (oid, commit) = entry?;
            self.print_log_entry(&oid, &commit)?;
        }

        Ok(())
    }

    /// Lazy first-parent walk from HEAD
    pub fn history(&self) -> Result<RevList<'_>> {
        let head_oid = self.refs().read_head()?;

        Ok(RevList::new(self.database(), head_oid))
    }

    /// Print every commit ever made, in no particular order
    pub fn global_log(&self) -> Result<()> {
        self.require_repository()?;

        for (oid, commit) in self.database().commits()? {
            self.print_log_entry(&oid, &commit)?;
        }

        Ok(())
    }

    /// Print the ids of all commits with exactly this message
    pub fn find(&self, message: &str) -> Result<()> {
        self.require_repository()?;

        for oid in self.find_commits(message)? {
            writeln!(self.writer(), "{}", oid)?;
        }

        Ok(())
    }

    pub fn find_commits(&self, message: &str) -> Result<Vec<ObjectId>> {
        let matches = self
            .database()
            .commits()?
            .into_iter()
            .filter(|(_, commit)| commit.message() == message)
            .map(|(oid, _)| oid)
            .collect::<Vec<_>>();

        if matches.is_empty() {
            return Err(Error::NoCommitWithMessage(message.to_string()));
        }

        Ok(matches)
    }

    fn print_log_entry(&self, oid: &ObjectId, commit: &Commit) -> Result<()> {
        let mut writer = self.writer();

        writeln!(writer, "===")?;
        writeln!(writer, "commit {}", oid)?;
        if let (Some(parent), Some(merged_in_parent)) = (commit.parent(), commit.merged_in_parent()) {
            writeln!(
                writer,
                "Merge: {} {}",
                parent.to_short_oid(),
                merged_in_parent.to_short_oid()
            )?;
        }
        writeln!(writer, "Date: {}", commit.readable_timestamp())?;
        writeln!(writer, "{}", commit.message())?;
        writeln!(writer)?;

        Ok(())
    }
}
