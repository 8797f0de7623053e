use crate::areas::repository::Repository;
use crate::areas::workspace::MemoryWorkspace;
use crate::config::Config;
use assert_fs::TempDir;
use bytes::Bytes;
use rstest::fixture;
use std::cell::RefCell;
use std::path::Path;
use std::rc::Rc;

pub(crate) const COMMIT_DATE: &str = "2024-03-01 10:00:00 +0000";

/// Initialized repository with an in-memory working tree
///
/// The temp dir holds `.gitlet` and must outlive the repository.
#[fixture]
pub(crate) fn repository() -> (TempDir, Repository) {
    let (dir, repository, _) = open_repository();
    (dir, repository)
}

/// Same as [`repository`], also returning everything commands print
#[fixture]
pub(crate) fn repository_with_output() -> (TempDir, Repository, Output) {
    open_repository()
}

fn open_repository() -> (TempDir, Repository, Output) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let date = Config::parse_commit_date(COMMIT_DATE).expect("fixture date parses");
    let output = Output::default();
    let repository = Repository::with_workspace(
        dir.path(),
        Box::new(output.clone()),
        Config::default().with_commit_date(date),
        Box::new(MemoryWorkspace::new()),
    );
    repository.init().expect("init succeeds");

    (dir, repository, output)
}

/// Shared in-memory sink for the repository writer
#[derive(Debug, Clone, Default)]
pub(crate) struct Output(Rc<RefCell<Vec<u8>>>);

impl Output {
    pub(crate) fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.borrow()).into_owned()
    }
}

impl std::io::Write for Output {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

pub(crate) fn write(repository: &Repository, path: &str, content: &str) {
    repository
        .workspace()
        .write_file(Path::new(path), &Bytes::from(content.to_string()))
        .expect("write succeeds");
}

pub(crate) fn read(repository: &Repository, path: &str) -> Option<String> {
    repository
        .workspace()
        .read_file(Path::new(path))
        .expect("read succeeds")
        .map(|content| String::from_utf8_lossy(&content).into_owned())
}

/// Write, stage and commit a single file
pub(crate) fn commit_file(repository: &Repository, path: &str, content: &str, message: &str) {
    write(repository, path, content);
    repository.add(Path::new(path)).expect("add succeeds");
    repository.commit(message).expect("commit succeeds");
}
