//! Switching the working tree between snapshots
//!
//! Used by branch checkout, reset and fast-forward merges:
//! - [`conflict`] finds untracked files a switch would clobber
//! - [`migration`] plans and applies the file writes and deletions
//!
//! Everything is planned and every blob loaded before the first file changes.

pub mod conflict;
pub mod migration;
