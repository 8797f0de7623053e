use crate::common::command::{repository_dir, run_bitlet_command};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn print_clean_status_after_init(repository_dir: TempDir) {
    run_bitlet_command(repository_dir.path(), &["init"])
        .assert()
        .success();

    run_bitlet_command(repository_dir.path(), &["status"])
        .assert()
        .success()
        .stdout(
            "=== Branches ===\n\
             *master\n\
             \n\
             === Staged Files ===\n\
             \n\
             === Removed Files ===\n\
             \n\
             === Modifications Not Staged For Commit ===\n\
             \n\
             === Untracked Files ===\n\
             \n",
        );
}
