use crate::common::command::{commit_file, get_head_commit_sha, repository_dir, run_bitlet_command};
use crate::common::{COMMIT_DATE_LINE, INITIAL_DATE_LINE};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn show_linear_history(repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let dir = repository_dir.path();
    run_bitlet_command(dir, &["init"]).assert().success();
    let root = get_head_commit_sha(dir)?;
    commit_file(dir, "file.txt", "content 1", "First commit");
    let first = get_head_commit_sha(dir)?;
    commit_file(dir, "file.txt", "content 2", "Second commit");
    let second = get_head_commit_sha(dir)?;

    let expected = format!(
        "===\ncommit {second}\n{COMMIT_DATE_LINE}\nSecond commit\n\n\
         ===\ncommit {first}\n{COMMIT_DATE_LINE}\nFirst commit\n\n\
         ===\ncommit {root}\n{INITIAL_DATE_LINE}\ninitial commit\n\n"
    );

    run_bitlet_command(dir, &["log"])
        .assert()
        .success()
        .stdout(expected);

    Ok(())
}
