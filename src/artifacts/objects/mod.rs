//! Stored objects
//!
//! Two kinds of objects are content-addressed:
//!
//! - **Blob**: raw bytes of one file version
//! - **Commit**: a snapshot record (parents, timestamp, tracked files, message)
//!
//! Both serialize as `<type> <size>\0<content>` and are identified by the
//! SHA-1 of that serialization.

pub mod blob;
pub mod commit;
pub mod object;
pub mod object_id;
pub mod object_type;

/// Length of a SHA-1 hash in hexadecimal format
pub const OBJECT_ID_LENGTH: usize = 40;
