use crate::common::command::{commit_file, get_head_commit_sha, init_repository_dir, run_bitlet_command};
use crate::common::file::read_file;
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn checkout_file_from_abbreviated_commit(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    let first = get_head_commit_sha(dir)?;
    commit_file(dir, "1.txt", "uno", "Translate 1.txt");

    run_bitlet_command(dir, &["checkout", &first[..8], "--", "1.txt"])
        .assert()
        .success()
        .stdout("");
    assert_eq!(read_file(&dir.join("1.txt")).as_deref(), Some("one"));

    run_bitlet_command(dir, &["checkout", &first, "--", "missing.txt"])
        .assert()
        .success()
        .stdout("File does not exist in that commit.\n");

    run_bitlet_command(dir, &["checkout", "0000000", "--", "1.txt"])
        .assert()
        .success()
        .stdout("No commit with that id exists.\n");

    Ok(())
}
