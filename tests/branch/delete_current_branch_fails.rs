use crate::common::command::{init_repository_dir, run_bitlet_command};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn delete_current_branch_fails(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();

    run_bitlet_command(dir, &["rm-branch", "master"])
        .assert()
        .success()
        .stdout("Cannot remove the current branch.\n");

    assert!(dir.join(".gitlet").join("branches").join("master").is_file());
}
