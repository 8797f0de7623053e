use crate::common::command::{
    commit_file, get_head_commit_sha, init_repository_dir, run_bitlet_command,
};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn delete_branch(init_repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    run_bitlet_command(dir, &["branch", "feature"]).assert().success();
    run_bitlet_command(dir, &["checkout", "feature"]).assert().success();
    commit_file(dir, "feature.txt", "f", "Feature work");
    let feature_tip = get_head_commit_sha(dir)?;
    run_bitlet_command(dir, &["checkout", "master"]).assert().success();

    run_bitlet_command(dir, &["rm-branch", "feature"])
        .assert()
        .success()
        .stdout("");

    assert!(!dir.join(".gitlet").join("branches").join("feature").exists());
    run_bitlet_command(dir, &["find", "Feature work"])
        .assert()
        .success()
        .stdout(format!("{feature_tip}\n"));
    run_bitlet_command(dir, &["rm-branch", "feature"])
        .assert()
        .success()
        .stdout(predicate::eq("A branch with that name does not exist.\n"));

    Ok(())
}
