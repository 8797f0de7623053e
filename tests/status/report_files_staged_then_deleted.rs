use crate::common::command::{bitlet_add, init_repository_dir, run_bitlet_command};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn report_files_staged_then_deleted(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    write_file(FileSpec::new(dir.join("fleeting.txt"), "here".to_string()));
    bitlet_add(dir, &["fleeting.txt"]);
    std::fs::remove_file(dir.join("fleeting.txt")).unwrap();

    run_bitlet_command(dir, &["status"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "=== Staged Files ===\nfleeting.txt\n",
        ))
        .stdout(predicate::str::contains(
            "=== Modifications Not Staged For Commit ===\nfleeting.txt (deleted)\n",
        ));
}
