//! Core repository components
//!
//! - `database`: content-addressed object store for blobs and commits
//! - `index`: staging area for additions and removals
//! - `refs`: branch pointers and the symbolic HEAD
//! - `repository`: ties the areas together for commands
//! - `workspace`: the working tree, on disk or in memory

pub mod database;
pub mod index;
pub mod refs;
pub mod repository;
pub mod workspace;
