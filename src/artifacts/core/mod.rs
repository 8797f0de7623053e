//! Core utilities and shared types
//!
//! This module contains filesystem helpers shared by the on-disk areas.

use crate::config::REPOSITORY_DIR;
use anyhow::Context;
use std::path::{Component, Path, PathBuf};

/// Canonical relative form of a working tree path
///
/// `.` components are dropped. Returns `None` for an empty path, for anything
/// absolute or climbing out through `..`, and for anything passing through a
/// repository directory, which working tree listings never show.
pub fn normalize_working_path(path: &Path) -> Option<PathBuf> {
    let mut normalized = PathBuf::new();

    for component in path.components() {
        match component {
            Component::Normal(name) => {
                if name == REPOSITORY_DIR {
                    return None;
                }
                normalized.push(name);
            }
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => return None,
        }
    }

    if normalized.as_os_str().is_empty() {
        None
    } else {
        Some(normalized)
    }
}

/// Remove the now-empty directories between `path` and `root`
///
/// Walks upward from the parent of `path`, stopping at the first non-empty
/// directory or at `root` itself, which is never removed.
pub fn prune_empty_parent_dirs(root: &Path, path: &Path) -> anyhow::Result<()> {
    let mut current = path.parent();

    while let Some(dir) = current {
        if dir == root || !dir.starts_with(root) || !dir.is_dir() {
            break;
        }
        if dir.read_dir()?.next().is_some() {
            break;
        }

        std::fs::remove_dir(dir)
            .with_context(|| format!("failed to remove empty directory at {:?}", dir))?;
        current = dir.parent();
    }

    Ok(())
}
