use crate::common::command::{repository_dir, run_bitlet_command};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
#[case(&[], "Please enter a command.\n")]
#[case(&["bogus"], "No command with that name exists.\n")]
#[case(&["add"], "Incorrect operands.\n")]
#[case(&["init", "extra"], "Incorrect operands.\n")]
#[case(&["checkout"], "Incorrect operands.\n")]
fn usage_errors_are_reported(
    repository_dir: TempDir,
    #[case] args: &[&str],
    #[case] expected: &str,
) {
    run_bitlet_command(repository_dir.path(), args)
        .assert()
        .success()
        .stdout(expected.to_string())
        .stderr("");

    assert!(!repository_dir.path().join(".gitlet").exists());
}
