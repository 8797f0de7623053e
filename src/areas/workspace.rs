use crate::artifacts::core::{normalize_working_path, prune_empty_parent_dirs};
use crate::artifacts::objects::blob::Blob;
use crate::config::REPOSITORY_DIR;
use anyhow::Context;
use bytes::Bytes;
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

const IGNORED_PATHS: [&str; 3] = [REPOSITORY_DIR, ".", ".."];

/// The files the user edits, addressed by paths relative to the repository root
pub trait WorkingTree: std::fmt::Debug {
    /// Every file, sorted, excluding the repository directory
    fn list_files(&self) -> anyhow::Result<Vec<PathBuf>>;

    /// File content, or `None` if the file does not exist
    fn read_file(&self, path: &Path) -> anyhow::Result<Option<Bytes>>;

    /// Create or overwrite a file, creating parent directories as needed
    fn write_file(&self, path: &Path, content: &Bytes) -> anyhow::Result<()>;

    /// Delete a file; returns whether it existed
    fn remove_file(&self, path: &Path) -> anyhow::Result<bool>;

    fn parse_blob(&self, path: &Path) -> anyhow::Result<Option<Blob>> {
        Ok(self.read_file(path)?.map(Blob::new))
    }
}

/// Working tree backed by a directory on disk
#[derive(Debug)]
pub struct Workspace {
    path: Box<Path>,
}

impl Workspace {
    pub fn new(path: Box<Path>) -> Self {
        Workspace { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Absolute location of `path`, refusing anything outside the working tree
    fn resolve(&self, path: &Path) -> anyhow::Result<PathBuf> {
        let relative_path = normalize_working_path(path)
            .with_context(|| format!("{:?} is not a working tree path", path))?;

        Ok(self.path.join(relative_path))
    }

    fn is_ignored(path: &Path) -> bool {
        path.file_name()
            .map(|name| IGNORED_PATHS.iter().any(|ignored| name == *ignored))
            .unwrap_or(false)
    }
}

impl WorkingTree for Workspace {
    fn list_files(&self) -> anyhow::Result<Vec<PathBuf>> {
        let mut files = Vec::new();

        let walker = WalkDir::new(&self.path)
            .min_depth(1)
            .into_iter()
            .filter_entry(|entry| !Self::is_ignored(entry.path()));

        for entry in walker {
            let entry = entry.context("Unable to walk the working tree")?;
            if entry.file_type().is_file() {
                files.push(entry.path().strip_prefix(&self.path)?.to_path_buf());
            }
        }

        files.sort();
        Ok(files)
    }

    fn read_file(&self, path: &Path) -> anyhow::Result<Option<Bytes>> {
        let file_path = self.resolve(path)?;
        if !file_path.is_file() {
            return Ok(None);
        }

        let content = std::fs::read(&file_path)
            .with_context(|| format!("Unable to read file {:?}", file_path))?;
        Ok(Some(content.into()))
    }

    fn write_file(&self, path: &Path, content: &Bytes) -> anyhow::Result<()> {
        let file_path = self.resolve(path)?;
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Unable to create directory {:?}", parent))?;
        }

        std::fs::write(&file_path, content)
            .with_context(|| format!("Unable to write file {:?}", file_path))
    }

    fn remove_file(&self, path: &Path) -> anyhow::Result<bool> {
        let file_path = self.resolve(path)?;
        if !file_path.is_file() {
            return Ok(false);
        }

        std::fs::remove_file(&file_path)
            .with_context(|| format!("Unable to remove file {:?}", file_path))?;
        prune_empty_parent_dirs(&self.path, &file_path)?;

        Ok(true)
    }
}

/// Working tree held in memory, for exercising repository logic without a disk
#[derive(Debug, Default)]
pub struct MemoryWorkspace {
    files: RefCell<BTreeMap<PathBuf, Bytes>>,
}

impl MemoryWorkspace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_files<'a>(files: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let workspace = Self::new();
        workspace.files.borrow_mut().extend(
            files
                .into_iter()
                .map(|(path, content)| (PathBuf::from(path), Bytes::copy_from_slice(content.as_bytes()))),
        );
        workspace
    }
}

impl WorkingTree for MemoryWorkspace {
    fn list_files(&self) -> anyhow::Result<Vec<PathBuf>> {
        Ok(self.files.borrow().keys().cloned().collect())
    }

    fn read_file(&self, path: &Path) -> anyhow::Result<Option<Bytes>> {
        Ok(self.files.borrow().get(path).cloned())
    }

    fn write_file(&self, path: &Path, content: &Bytes) -> anyhow::Result<()> {
        self.files
            .borrow_mut()
            .insert(path.to_path_buf(), content.clone());
        Ok(())
    }

    fn remove_file(&self, path: &Path) -> anyhow::Result<bool> {
        Ok(self.files.borrow_mut().remove(path).is_some())
    }
}
