use crate::common::COMMIT_DATE;
use crate::common::file::{FileSpec, write_file};
use assert_cmd::Command;
use assert_fs::TempDir;
use rstest::fixture;
use std::path::Path;

#[fixture]
pub fn repository_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

/// Initialized repository holding one commit with `1.txt` and `a/2.txt`
#[fixture]
pub fn init_repository_dir(repository_dir: TempDir) -> TempDir {
    run_bitlet_command(repository_dir.path(), &["init"])
        .assert()
        .success();

    write_file(FileSpec::new(
        repository_dir.path().join("1.txt"),
        "one".to_string(),
    ));
    write_file(FileSpec::new(
        repository_dir.path().join("a").join("2.txt"),
        "two".to_string(),
    ));

    bitlet_add(repository_dir.path(), &["1.txt", "a/2.txt"]);
    bitlet_commit(repository_dir.path(), "First commit")
        .assert()
        .success();

    repository_dir
}

pub fn run_bitlet_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("bitlet").expect("Failed to find bitlet binary");
    cmd.envs(vec![("NO_COLOR", "1"), ("BITLET_COMMIT_DATE", COMMIT_DATE)]);
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

pub fn bitlet_commit(dir: &Path, message: &str) -> Command {
    run_bitlet_command(dir, &["commit", message])
}

/// Stage every given path, one `add` per path
pub fn bitlet_add(dir: &Path, paths: &[&str]) {
    for path in paths {
        run_bitlet_command(dir, &["add", path])
            .assert()
            .success()
            .stdout("");
    }
}

/// Write `content` to `path`, stage it and commit it
pub fn commit_file(dir: &Path, path: &str, content: &str, message: &str) {
    write_file(FileSpec::new(dir.join(path), content.to_string()));
    bitlet_add(dir, &[path]);
    bitlet_commit(dir, message).assert().success().stdout("");
}

pub fn bitlet_merge(dir: &Path, branch: &str) -> Command {
    run_bitlet_command(dir, &["merge", branch])
}

/// Commit id the current branch points to, read straight from `.gitlet`
pub fn get_head_commit_sha(dir: &Path) -> Result<String, Box<dyn std::error::Error>> {
    let head_path = dir.join(".gitlet").join("HEAD");
    let head_content = std::fs::read_to_string(head_path)?;

    let ref_path = head_content
        .trim()
        .strip_prefix("ref: ")
        .ok_or("HEAD is not a symbolic reference")?;
    let commit_sha = std::fs::read_to_string(dir.join(".gitlet").join(ref_path))?;

    Ok(commit_sha.trim().to_string())
}

pub fn get_branch_commit_sha(dir: &Path, branch: &str) -> Result<String, Box<dyn std::error::Error>> {
    let commit_sha = std::fs::read_to_string(dir.join(".gitlet").join("branches").join(branch))?;

    Ok(commit_sha.trim().to_string())
}

/// Name of the branch HEAD points to
pub fn get_current_branch(dir: &Path) -> Result<String, Box<dyn std::error::Error>> {
    let head_content = std::fs::read_to_string(dir.join(".gitlet").join("HEAD"))?;

    Ok(head_content
        .trim()
        .trim_start_matches("ref: branches/")
        .to_string())
}
