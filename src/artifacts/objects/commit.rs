//! Commit object
//!
//! A commit is an immutable snapshot record. It holds:
//! - The first parent (absent only for the root commit)
//! - The merged-in parent (merge commits only)
//! - A timestamp with its UTC offset
//! - The full map of tracked paths to blob ids
//! - The commit message
//!
//! ## Format
//!
//! On disk:
//! ```text
//! commit <size>\0
//! parent <parent-sha>
//! merged <merged-in-parent-sha>
//! timestamp <unix-seconds> <+hhmm>
//! file <blob-sha> <path>\0
//! file <blob-sha> <path>\0
//!
//! <commit message>
//! ```
//!
//! `parent` and `merged` lines are omitted when absent. File entries are written
//! in path order so that identical snapshots always hash identically.
//!
//! A path is stored as its raw bytes and terminated by a NUL, so names holding
//! newlines or bytes that are not UTF-8 survive a round trip unchanged.

use crate::artifacts::objects::object::{Object, Packable, Unpackable, frame};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use anyhow::Context;
use bytes::Bytes;
use chrono::{DateTime, FixedOffset};
use std::collections::BTreeMap;
use std::ffi::OsString;
use std::io::{BufRead, Read, Write};
use std::os::unix::ffi::{OsStrExt, OsStringExt};
use std::path::PathBuf;

/// Tracked path → blob id, ordered by path
pub type TrackedFiles = BTreeMap<PathBuf, ObjectId>;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S %z";

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Commit {
    parent: Option<ObjectId>,
    merged_in_parent: Option<ObjectId>,
    timestamp: DateTime<FixedOffset>,
    tracked_files: TrackedFiles,
    message: String,
}

impl Commit {
    pub fn new(
        parent: Option<ObjectId>,
        merged_in_parent: Option<ObjectId>,
        timestamp: DateTime<FixedOffset>,
        tracked_files: TrackedFiles,
        message: String,
    ) -> Self {
        Commit {
            parent,
            merged_in_parent,
            timestamp,
            tracked_files,
            message,
        }
    }

    pub fn parent(&self) -> Option<&ObjectId> {
        self.parent.as_ref()
    }

    pub fn merged_in_parent(&self) -> Option<&ObjectId> {
        self.merged_in_parent.as_ref()
    }

    /// Every parent edge, first parent before merged-in parent
    pub fn parents(&self) -> Vec<ObjectId> {
        self.parent
            .iter()
            .chain(self.merged_in_parent.iter())
            .cloned()
            .collect()
    }

    pub fn is_merge(&self) -> bool {
        self.merged_in_parent.is_some()
    }

    pub fn timestamp(&self) -> DateTime<FixedOffset> {
        self.timestamp
    }

    /// Format timestamp like "Thu Jan 01 00:00:00 1970 +0000"
    pub fn readable_timestamp(&self) -> String {
        self.timestamp.format("%a %b %d %H:%M:%S %Y %z").to_string()
    }

    pub fn tracked_files(&self) -> &TrackedFiles {
        &self.tracked_files
    }

    pub fn tracked_blob(&self, path: &std::path::Path) -> Option<&ObjectId> {
        self.tracked_files.get(path)
    }

    pub fn tracks(&self, path: &std::path::Path) -> bool {
        self.tracked_files.contains_key(path)
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    fn payload(&self) -> anyhow::Result<Vec<u8>> {
        let mut payload = Vec::new();

        if let Some(parent) = &self.parent {
            writeln!(payload, "parent {parent}")?;
        }
        if let Some(merged_in_parent) = &self.merged_in_parent {
            writeln!(payload, "merged {merged_in_parent}")?;
        }
        writeln!(
            payload,
            "timestamp {} {}",
            self.timestamp.timestamp(),
            self.timestamp.format("%z")
        )?;
        for (path, blob_oid) in &self.tracked_files {
            write!(payload, "file {blob_oid} ")?;
            payload.write_all(path.as_os_str().as_bytes())?;
            payload.write_all(b"\0\n")?;
        }
        payload.write_all(b"\n")?;
        payload.write_all(self.message.as_bytes())?;

        Ok(payload)
    }

    fn read_path(reader: &mut impl BufRead) -> anyhow::Result<PathBuf> {
        let mut path_bytes = Vec::new();
        let n = reader.read_until(b'\0', &mut path_bytes)?;
        if n == 0 || path_bytes.pop() != Some(b'\0') {
            anyhow::bail!("Invalid commit object: unexpected EOF in file path");
        }

        let mut line_end = [0u8; 1];
        reader
            .read_exact(&mut line_end)
            .context("Invalid commit object: unexpected EOF after file path")?;
        if line_end[0] != b'\n' {
            anyhow::bail!("Invalid commit object: missing newline after file path");
        }

        Ok(PathBuf::from(OsString::from_vec(path_bytes)))
    }

    fn parse_timestamp(value: &str) -> anyhow::Result<DateTime<FixedOffset>> {
        let (seconds, timezone) = value
            .split_once(' ')
            .context("Invalid commit object: malformed timestamp line")?;
        let seconds = seconds
            .parse::<i64>()
            .context("Invalid commit object: timestamp is not a number")?;

        let utc = DateTime::from_timestamp(seconds, 0)
            .context("Invalid commit object: timestamp out of range")?;
        let offset = DateTime::parse_from_str(
            &format!("1970-01-01 00:00:00 {timezone}"),
            TIMESTAMP_FORMAT,
        )
        .context("Invalid commit object: invalid timezone")?
        .offset()
        .to_owned();

        Ok(utc.with_timezone(&offset))
    }
}

impl Packable for Commit {
    fn serialize(&self) -> anyhow::Result<Bytes> {
        frame(self.object_type(), &self.payload()?)
    }
}

impl Unpackable for Commit {
    fn deserialize(mut reader: impl BufRead) -> anyhow::Result<Self> {
        let mut parent = None;
        let mut merged_in_parent = None;
        let mut timestamp = None;
        let mut tracked_files = TrackedFiles::new();

        let mut key_bytes = Vec::new();
        loop {
            let next_byte = reader.fill_buf()?.first().copied();
            match next_byte {
                None => anyhow::bail!("Invalid commit object: missing message separator"),
                Some(b'\n') => {
                    reader.consume(1);
                    break;
                }
                Some(_) => {}
            }

            key_bytes.clear();
            reader.read_until(b' ', &mut key_bytes)?;
            if key_bytes.pop() != Some(b' ') {
                anyhow::bail!(
                    "Invalid commit object: malformed line {:?}",
                    String::from_utf8_lossy(&key_bytes)
                );
            }

            if key_bytes == b"file" {
                let mut oid_bytes = Vec::new();
                reader.read_until(b' ', &mut oid_bytes)?;
                if oid_bytes.pop() != Some(b' ') {
                    anyhow::bail!("Invalid commit object: malformed file entry");
                }
                let blob_oid = ObjectId::try_parse(String::from_utf8(oid_bytes)?)?;
                tracked_files.insert(Self::read_path(&mut reader)?, blob_oid);
                continue;
            }

            let mut value = String::new();
            reader
                .read_line(&mut value)
                .context("Invalid commit object: header is not valid UTF-8")?;
            let value = value.trim_end_matches('\n');

            match key_bytes.as_slice() {
                b"parent" => parent = Some(ObjectId::try_parse(value.to_string())?),
                b"merged" => merged_in_parent = Some(ObjectId::try_parse(value.to_string())?),
                b"timestamp" => timestamp = Some(Self::parse_timestamp(value)?),
                other => anyhow::bail!(
                    "Invalid commit object: unknown header {}",
                    String::from_utf8_lossy(other)
                ),
            }
        }

        let mut message = String::new();
        reader
            .read_to_string(&mut message)
            .context("Invalid commit object: message is not valid UTF-8")?;
        let timestamp = timestamp.context("Invalid commit object: missing timestamp line")?;

        Ok(Self::new(
            parent,
            merged_in_parent,
            timestamp,
            tracked_files,
            message,
        ))
    }
}

impl Object for Commit {
    fn object_type(&self) -> ObjectType {
        ObjectType::Commit
    }
}
