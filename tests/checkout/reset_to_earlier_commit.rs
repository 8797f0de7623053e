use crate::common::command::{
    commit_file, get_current_branch, get_head_commit_sha, init_repository_dir, run_bitlet_command,
};
use crate::common::file::read_file;
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn reset_to_earlier_commit(init_repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    let first = get_head_commit_sha(dir)?;
    commit_file(dir, "1.txt", "uno", "Translate 1.txt");
    commit_file(dir, "3.txt", "three", "Add 3.txt");

    run_bitlet_command(dir, &["reset", &first])
        .assert()
        .success()
        .stdout("");

    assert_eq!(get_head_commit_sha(dir)?, first);
    assert_eq!(get_current_branch(dir)?, "master");
    assert_eq!(read_file(&dir.join("1.txt")).as_deref(), Some("one"));
    assert!(!dir.join("3.txt").exists());

    run_bitlet_command(dir, &["reset", "abcdef1234"])
        .assert()
        .success()
        .stdout("No commit with that id exists.\n");

    Ok(())
}
