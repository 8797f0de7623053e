//! Error kinds surfaced by repository operations
//!
//! Every variant renders as the message the command line prints for it.
//! Storage failures raised inside the areas carry their `anyhow` context
//! chain through the transparent [`Error::Storage`] variant.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("A Gitlet version-control system already exists in the current directory.")]
    RepositoryExists,

    #[error("Not in an initialized Gitlet directory.")]
    NoRepository,

    #[error("File does not exist.")]
    FileMissing(PathBuf),

    #[error("{} is not a file of the working tree.", .0.display())]
    InvalidPath(PathBuf),

    #[error("File does not exist in that commit.")]
    FileNotInCommit(PathBuf),

    #[error("Please enter a commit message.")]
    EmptyCommitMessage,

    #[error("No changes added to the commit.")]
    NothingToCommit,

    #[error("No reason to remove the file.")]
    NothingToRemove(PathBuf),

    #[error("No commit with that id exists.")]
    NoSuchCommit(String),

    #[error("Commit id {prefix} is ambiguous; it matches {candidates} commits.")]
    AmbiguousCommitPrefix { prefix: String, candidates: usize },

    #[error("Found no commit with that message.")]
    NoCommitWithMessage(String),

    /// Raised by `checkout <branch>`
    #[error("No such branch exists.")]
    NoSuchBranch(String),

    /// Raised by `rm-branch` and `merge`
    #[error("A branch with that name does not exist.")]
    BranchNotFound(String),

    #[error("A branch with that name already exists.")]
    BranchExists(String),

    #[error("Invalid branch name: {0}")]
    InvalidBranchName(String),

    #[error("Cannot remove the current branch.")]
    CannotDeleteCurrentBranch(String),

    #[error("No need to checkout the current branch.")]
    AlreadyCurrentBranch(String),

    #[error("There is an untracked file in the way; delete it, or add and commit it first.")]
    UntrackedObstruction(PathBuf),

    #[error("You have uncommitted changes.")]
    UncommittedChanges,

    #[error("Cannot merge a branch with itself.")]
    SelfMerge,

    #[error("No common ancestor between {ours} and {theirs}.")]
    NoCommonAncestor { ours: String, theirs: String },

    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Storage(err.into())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
