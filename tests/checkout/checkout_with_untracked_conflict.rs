use crate::common::command::{commit_file, get_current_branch, init_repository_dir, run_bitlet_command};
use crate::common::file::{FileSpec, read_file, write_file};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn checkout_with_untracked_conflict(init_repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    run_bitlet_command(dir, &["branch", "feature"]).assert().success();
    run_bitlet_command(dir, &["checkout", "feature"]).assert().success();
    commit_file(dir, "shared.txt", "from feature", "Feature adds shared.txt");
    run_bitlet_command(dir, &["checkout", "master"]).assert().success();
    write_file(FileSpec::new(dir.join("shared.txt"), "precious".to_string()));

    run_bitlet_command(dir, &["checkout", "feature"])
        .assert()
        .success()
        .stdout(
            "There is an untracked file in the way; delete it, or add and commit it first.\n",
        );

    assert_eq!(get_current_branch(dir)?, "master");
    assert_eq!(read_file(&dir.join("shared.txt")).as_deref(), Some("precious"));
    assert_eq!(read_file(&dir.join("1.txt")).as_deref(), Some("one"));

    Ok(())
}
