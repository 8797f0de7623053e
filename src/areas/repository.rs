use crate::areas::database::Database;
use crate::areas::index::Index;
use crate::areas::refs::Refs;
use crate::areas::workspace::{WorkingTree, Workspace};
use crate::artifacts::checkout::conflict::find_untracked_obstruction;
use crate::artifacts::core::normalize_working_path;
use crate::artifacts::checkout::migration::Migration;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object::Object;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::status::status_info::WorkingFiles;
use crate::config::{Config, REPOSITORY_DIR};
use crate::errors::{Error, Result};
use std::cell::{RefCell, RefMut};
use std::path::{Path, PathBuf};
use tracing::debug;

pub const OBJECTS_DIR: &str = "objects";
pub const STAGING_DIR: &str = "staging";

pub struct Repository {
    path: Box<Path>,
    writer: RefCell<Box<dyn std::io::Write>>,
    index: Index,
    database: Database,
    workspace: Box<dyn WorkingTree>,
    refs: Refs,
    config: Config,
}

impl Repository {
    pub fn new(path: &str, writer: Box<dyn std::io::Write>, config: Config) -> anyhow::Result<Self> {
        let path = Path::new(path).canonicalize()?;
        let workspace = Workspace::new(path.clone().into_boxed_path());

        Ok(Self::with_workspace(&path, writer, config, Box::new(workspace)))
    }

    /// Repository whose metadata lives under `path` but whose working files
    /// are served by `workspace`
    pub fn with_workspace(
        path: &Path,
        writer: Box<dyn std::io::Write>,
        config: Config,
        workspace: Box<dyn WorkingTree>,
    ) -> Self {
        let git_path = path.join(REPOSITORY_DIR);

        Repository {
            path: path.into(),
            writer: RefCell::new(writer),
            index: Index::new(git_path.join(STAGING_DIR).into_boxed_path()),
            database: Database::new(git_path.join(OBJECTS_DIR).into_boxed_path()),
            workspace,
            refs: Refs::new(git_path.into_boxed_path()),
            config,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn git_path(&self) -> PathBuf {
        self.path.join(REPOSITORY_DIR)
    }

    pub fn is_initialized(&self) -> bool {
        self.git_path().is_dir()
    }

    pub fn require_repository(&self) -> Result<()> {
        if self.is_initialized() {
            Ok(())
        } else {
            Err(Error::NoRepository)
        }
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn index(&self) -> &Index {
        &self.index
    }

    pub fn database(&self) -> &Database {
        &self.database
    }

    pub fn workspace(&self) -> &dyn WorkingTree {
        self.workspace.as_ref()
    }

    pub fn refs(&self) -> &Refs {
        &self.refs
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Normalize a user-supplied path, refusing anything outside the working
    /// tree or inside the repository directory
    pub fn working_path(&self, path: &Path) -> Result<PathBuf> {
        normalize_working_path(path).ok_or_else(|| Error::InvalidPath(path.to_path_buf()))
    }

    /// The commit HEAD resolves to, with its id
    pub fn head_commit(&self) -> Result<(ObjectId, Commit)> {
        let head_oid = self.refs().read_head()?;
        let head = self.database().load_commit(&head_oid)?;

        Ok((head_oid, head))
    }

    /// Blob id of every file currently in the working tree
    pub fn working_files(&self) -> Result<WorkingFiles> {
        let mut working_files = WorkingFiles::new();
        for path in self.workspace().list_files()? {
            if let Some(blob) = self.workspace().parse_blob(&path)? {
                working_files.insert(path, blob.object_id()?);
            }
        }

        Ok(working_files)
    }

    /// Make the working tree match the snapshot of `target_oid` and clear staging
    ///
    /// Refuses to start if a file untracked by HEAD would be overwritten.
    /// References are left for the caller to move.
    pub(crate) fn switch_snapshot(&self, target_oid: &ObjectId) -> Result<()> {
        let (_, head) = self.head_commit()?;
        let target = self.database().load_commit(target_oid)?;

        self.check_untracked_obstruction(&head, &target)?;

        let migration = Migration::plan(self.database(), head.tracked_files(), target.tracked_files())?;
        migration.apply(self.workspace())?;
        self.index().clear()?;

        debug!(target = %target_oid.to_short_oid(), "switched working snapshot");

        Ok(())
    }

    pub(crate) fn check_untracked_obstruction(&self, head: &Commit, target: &Commit) -> Result<()> {
        let working_files = self.workspace().list_files()?;

        match find_untracked_obstruction(&working_files, head.tracked_files(), target.tracked_files()) {
            Some(path) => Err(Error::UntrackedObstruction(path)),
            None => Ok(()),
        }
    }
}
