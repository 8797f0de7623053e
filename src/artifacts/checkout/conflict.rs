use crate::artifacts::objects::commit::TrackedFiles;
use std::path::{Path, PathBuf};

/// First working file, in path order, that is untracked by HEAD but tracked
/// by the target snapshot
///
/// Switching to the target would overwrite such a file without any record of
/// its content, so the switch must be refused.
pub fn find_untracked_obstruction<'p>(
    working_files: impl IntoIterator<Item = &'p PathBuf>,
    head_files: &TrackedFiles,
    target_files: &TrackedFiles,
) -> Option<PathBuf> {
    let mut obstructions = working_files
        .into_iter()
        .filter(|path| is_obstruction(path, head_files, target_files))
        .cloned()
        .collect::<Vec<_>>();

    obstructions.sort();
    obstructions.into_iter().next()
}

fn is_obstruction(path: &Path, head_files: &TrackedFiles, target_files: &TrackedFiles) -> bool {
    !head_files.contains_key(path) && target_files.contains_key(path)
}
