use crate::common::command::{init_repository_dir, run_bitlet_command};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
#[case("bad..name")]
#[case("ends.lock")]
#[case("with space")]
#[case("/leading")]
fn create_branch_with_invalid_name(init_repository_dir: TempDir, #[case] name: &str) {
    run_bitlet_command(init_repository_dir.path(), &["branch", name])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Invalid branch name"));
}
