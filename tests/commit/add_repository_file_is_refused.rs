use crate::common::command::{get_head_commit_sha, init_repository_dir, run_bitlet_command};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
#[case(&["add", ".gitlet/HEAD"], ".gitlet/HEAD is not a file of the working tree.\n")]
#[case(&["rm", ".gitlet/HEAD"], ".gitlet/HEAD is not a file of the working tree.\n")]
#[case(&["add", "../outside.txt"], "../outside.txt is not a file of the working tree.\n")]
fn add_repository_file_is_refused(
    init_repository_dir: TempDir,
    #[case] args: &[&str],
    #[case] expected: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    let head_before = get_head_commit_sha(dir)?;

    run_bitlet_command(dir, args)
        .assert()
        .success()
        .stdout(expected.to_string());

    assert!(dir.join(".gitlet").join("HEAD").is_file());
    assert_eq!(get_head_commit_sha(dir)?, head_before);
    run_bitlet_command(dir, &["status"])
        .assert()
        .success()
        .stdout(predicates::str::contains("=== Branches ===\n*master\n"));

    Ok(())
}
