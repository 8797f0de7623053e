use crate::common::command::{commit_file, get_current_branch, init_repository_dir, run_bitlet_command};
use crate::common::file::{FileSpec, read_file, write_file};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn checkout_branch_successfully(init_repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    run_bitlet_command(dir, &["branch", "feature"]).assert().success();
    commit_file(dir, "master.txt", "m", "Master only");
    commit_file(dir, "1.txt", "one, edited", "Edit 1.txt");
    write_file(FileSpec::new(dir.join("untracked.txt"), "left alone".to_string()));

    run_bitlet_command(dir, &["checkout", "feature"])
        .assert()
        .success()
        .stdout("");

    assert_eq!(get_current_branch(dir)?, "feature");
    assert_eq!(read_file(&dir.join("1.txt")).as_deref(), Some("one"));
    assert!(!dir.join("master.txt").exists());
    assert_eq!(read_file(&dir.join("untracked.txt")).as_deref(), Some("left alone"));

    run_bitlet_command(dir, &["checkout", "feature"])
        .assert()
        .success()
        .stdout("No need to checkout the current branch.\n");
    run_bitlet_command(dir, &["checkout", "nowhere"])
        .assert()
        .success()
        .stdout("No such branch exists.\n");

    Ok(())
}
