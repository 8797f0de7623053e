use crate::common::command::{bitlet_add, commit_file, init_repository_dir, run_bitlet_command};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn report_every_section(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    commit_file(dir, "3.txt", "three", "Add 3.txt");
    commit_file(dir, "4.txt", "four", "Add 4.txt");
    run_bitlet_command(dir, &["branch", "other"]).assert().success();

    write_file(FileSpec::new(dir.join("staged.txt"), "staged".to_string()));
    bitlet_add(dir, &["staged.txt"]);
    run_bitlet_command(dir, &["rm", "1.txt"]).assert().success();
    write_file(FileSpec::new(dir.join("a").join("2.txt"), "changed".to_string()));
    std::fs::remove_file(dir.join("3.txt")).unwrap();
    write_file(FileSpec::new(dir.join("4.txt"), "changed".to_string()));
    bitlet_add(dir, &["4.txt"]);
    write_file(FileSpec::new(dir.join("4.txt"), "changed again".to_string()));
    write_file(FileSpec::new(dir.join("zebra.txt"), "z".to_string()));
    write_file(FileSpec::new(dir.join("b").join("apple.txt"), "a".to_string()));

    run_bitlet_command(dir, &["status"])
        .assert()
        .success()
        .stdout(
            "=== Branches ===\n\
             *master\n\
             other\n\
             \n\
             === Staged Files ===\n\
             4.txt\n\
             staged.txt\n\
             \n\
             === Removed Files ===\n\
             1.txt\n\
             \n\
             === Modifications Not Staged For Commit ===\n\
             3.txt (deleted)\n\
             4.txt (modified)\n\
             a/2.txt (modified)\n\
             \n\
             === Untracked Files ===\n\
             b/apple.txt\n\
             zebra.txt\n\
             \n",
        );
}
