//! Porcelain commands (user-facing operations)
//!
//! ## Commands
//!
//! - `init`: Create a repository with its root commit
//! - `add`, `rm`: Stage additions and removals
//! - `commit`: Record the staged snapshot
//! - `log`: First-parent history, every commit, or commits by message
//! - `status`: Branches, staging area and working tree state
//! - `checkout`: Restore files or switch branches
//! - `branch`: Create or delete branches
//! - `reset`: Move the current branch to any commit
//! - `merge`: Three-way merge of another branch into the current one

pub mod add;
pub mod branch;
pub mod checkout;
pub mod commit;
pub mod init;
pub mod log;
pub mod merge;
pub mod reset;
pub mod rm;
pub mod status;

#[cfg(test)]
pub(crate) mod fixtures;
