use crate::common::command::{
    bitlet_merge, commit_file, get_branch_commit_sha, get_current_branch, get_head_commit_sha,
    init_repository_dir, run_bitlet_command,
};
use crate::common::file::read_file;
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

/// History:
///     A (master) --- B --- C (feature)
///
/// Expected: master moves to C without a merge commit
#[rstest]
fn merge_fast_forward(init_repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    run_bitlet_command(dir, &["branch", "feature"]).assert().success();
    run_bitlet_command(dir, &["checkout", "feature"]).assert().success();
    commit_file(dir, "feature.txt", "f", "Commit B");
    commit_file(dir, "1.txt", "one, improved", "Commit C");
    run_bitlet_command(dir, &["checkout", "master"]).assert().success();

    bitlet_merge(dir, "feature")
        .assert()
        .success()
        .stdout("Current branch fast-forwarded.\n");

    assert_eq!(get_current_branch(dir)?, "master");
    assert_eq!(get_head_commit_sha(dir)?, get_branch_commit_sha(dir, "feature")?);
    assert_eq!(read_file(&dir.join("feature.txt")).as_deref(), Some("f"));
    assert_eq!(read_file(&dir.join("1.txt")).as_deref(), Some("one, improved"));

    Ok(())
}
