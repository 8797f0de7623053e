use crate::common::command::{get_head_commit_sha, init_repository_dir, run_bitlet_command};
use crate::common::file::{FileSpec, read_file, write_file};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn reset_with_untracked_conflict(init_repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    let first_commit = get_head_commit_sha(dir)?;
    run_bitlet_command(dir, &["rm", "1.txt"]).assert().success().stdout("");
    run_bitlet_command(dir, &["commit", "Drop 1.txt"])
        .assert()
        .success()
        .stdout("");
    let head = get_head_commit_sha(dir)?;
    write_file(FileSpec::new(dir.join("1.txt"), "precious".to_string()));

    run_bitlet_command(dir, &["reset", first_commit.as_str()])
        .assert()
        .success()
        .stdout(
            "There is an untracked file in the way; delete it, or add and commit it first.\n",
        );

    assert_eq!(get_head_commit_sha(dir)?, head);
    assert_eq!(read_file(&dir.join("1.txt")).as_deref(), Some("precious"));
    assert_eq!(read_file(&dir.join("a").join("2.txt")).as_deref(), Some("two"));

    Ok(())
}
