use crate::common::command::{
    bitlet_merge, commit_file, get_branch_commit_sha, get_head_commit_sha, init_repository_dir,
    run_bitlet_command,
};
use assert_fs::TempDir;
use predicates::prelude::*;
use rstest::rstest;

#[rstest]
fn show_merge_commit_in_log(init_repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    run_bitlet_command(dir, &["branch", "feature"]).assert().success();
    commit_file(dir, "master.txt", "m", "Master work");
    let ours = get_head_commit_sha(dir)?;

    run_bitlet_command(dir, &["checkout", "feature"]).assert().success();
    commit_file(dir, "feature.txt", "f", "Feature work");
    let theirs = get_branch_commit_sha(dir, "feature")?;
    run_bitlet_command(dir, &["checkout", "master"]).assert().success();

    bitlet_merge(dir, "feature").assert().success().stdout("");
    let merge = get_head_commit_sha(dir)?;

    let merge_entry = format!(
        "===\ncommit {merge}\nMerge: {} {}\n",
        &ours[..7],
        &theirs[..7]
    );
    run_bitlet_command(dir, &["log"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(merge_entry))
        .stdout(predicate::str::contains("Merged feature into master.\n"))
        .stdout(predicate::str::contains("Master work\n"))
        .stdout(predicate::str::contains("Feature work\n").not());

    Ok(())
}
