//! Domain artifacts built on top of the storage areas
//!
//! - `objects`: blob and commit objects and their ids
//! - `branch`: branch names and commit id resolution
//! - `log`: first-parent history walks
//! - `status`: working tree status computation
//! - `checkout`: snapshot switching and untracked file protection
//! - `merge`: split point search and three-way classification
//! - `core`: shared filesystem helpers

pub mod branch;
pub mod checkout;
pub mod core;
pub mod log;
pub mod merge;
pub mod objects;
pub mod status;
