use crate::common::command::{
    bitlet_add, bitlet_commit, get_head_commit_sha, repository_dir, run_bitlet_command,
};
use crate::common::file::write_generated_files;
use assert_fs::TempDir;
use pretty_assertions::assert_ne;
use rstest::rstest;

#[rstest]
fn commit_staged_files_successfully(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = repository_dir.path();
    run_bitlet_command(dir, &["init"]).assert().success();
    let root = get_head_commit_sha(dir)?;

    let files = write_generated_files(dir, 3);
    let names = files
        .iter()
        .map(|file| file.path.file_name().unwrap().to_string_lossy().into_owned())
        .collect::<Vec<_>>();
    bitlet_add(dir, &names.iter().map(String::as_str).collect::<Vec<_>>());

    bitlet_commit(dir, "Add generated files")
        .assert()
        .success()
        .stdout("");

    assert_ne!(get_head_commit_sha(dir)?, root);
    run_bitlet_command(dir, &["status"])
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

    Ok(())
}
