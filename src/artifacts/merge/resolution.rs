//! Three-way merge classification
//!
//! Every path tracked by the split point, `ours` or `theirs` gets exactly one
//! [`MergeAction`], decided from its blob ids in the three snapshots (`S`,
//! `O`, `T`; `-` is absent):
//!
//! | S   | O        | T            | action       |
//! |-----|----------|--------------|--------------|
//! | s   | s        | t ≠ s        | take theirs  |
//! | -   | -        | t            | take theirs  |
//! | s   | s        | -            | remove       |
//! | s   | o ≠ s    | t ∉ {s, o}   | conflict     |
//! | s   | o ≠ s    | -            | conflict     |
//! | s   | -        | t ≠ s        | conflict     |
//! | -   | o        | t ≠ o        | conflict     |
//! | any other combination       | | | keep         |

use crate::artifacts::objects::commit::TrackedFiles;
use crate::artifacts::objects::object_id::ObjectId;
use bytes::Bytes;
use std::collections::{BTreeMap, BTreeSet};
use std::path::PathBuf;

pub const CONFLICT_OURS_MARKER: &str = "<<<<<<< HEAD\n";
pub const CONFLICT_SEPARATOR: &str = "=======\n";
pub const CONFLICT_THEIRS_MARKER: &str = ">>>>>>>\n";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeAction {
    /// Leave the working file and staging area alone
    Keep,
    /// Check out theirs' version and stage it
    TakeTheirs,
    /// Delete the working file and stage its removal
    Remove,
    /// Write both versions between conflict markers and stage the result
    Conflict,
}

impl MergeAction {
    pub fn classify(
        split: Option<&ObjectId>,
        ours: Option<&ObjectId>,
        theirs: Option<&ObjectId>,
    ) -> MergeAction {
        match (split, ours, theirs) {
            (Some(s), Some(o), Some(t)) if o == s && t != s => MergeAction::TakeTheirs,
            (None, None, Some(_)) => MergeAction::TakeTheirs,
            (Some(s), Some(o), None) if o == s => MergeAction::Remove,
            (Some(s), Some(o), Some(t)) if o != s && t != s && t != o => MergeAction::Conflict,
            (Some(s), Some(o), None) if o != s => MergeAction::Conflict,
            (Some(s), None, Some(t)) if t != s => MergeAction::Conflict,
            (None, Some(o), Some(t)) if t != o => MergeAction::Conflict,
            _ => MergeAction::Keep,
        }
    }
}

/// Bytes written to a conflicted file; an absent side contributes nothing
pub fn conflict_content(ours: Option<&[u8]>, theirs: Option<&[u8]>) -> Bytes {
    let ours = ours.unwrap_or_default();
    let theirs = theirs.unwrap_or_default();

    let mut content = Vec::with_capacity(
        CONFLICT_OURS_MARKER.len()
            + ours.len()
            + CONFLICT_SEPARATOR.len()
            + theirs.len()
            + CONFLICT_THEIRS_MARKER.len(),
    );
    content.extend_from_slice(CONFLICT_OURS_MARKER.as_bytes());
    content.extend_from_slice(ours);
    content.extend_from_slice(CONFLICT_SEPARATOR.as_bytes());
    content.extend_from_slice(theirs);
    content.extend_from_slice(CONFLICT_THEIRS_MARKER.as_bytes());

    content.into()
}

/// Action for every path of a three-way merge, in path order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergePlan {
    actions: BTreeMap<PathBuf, MergeAction>,
}

impl MergePlan {
    pub fn new(split: &TrackedFiles, ours: &TrackedFiles, theirs: &TrackedFiles) -> Self {
        let paths = split
            .keys()
            .chain(ours.keys())
            .chain(theirs.keys())
            .collect::<BTreeSet<_>>();

        let actions = paths
            .into_iter()
            .map(|path| {
                let action =
                    MergeAction::classify(split.get(path), ours.get(path), theirs.get(path));
                (path.clone(), action)
            })
            .collect();

        MergePlan { actions }
    }

    pub fn actions(&self) -> impl Iterator<Item = (&PathBuf, MergeAction)> {
        self.actions.iter().map(|(path, action)| (path, *action))
    }

    pub fn action(&self, path: &std::path::Path) -> Option<MergeAction> {
        self.actions.get(path).copied()
    }

    pub fn has_conflicts(&self) -> bool {
        self.actions
            .values()
            .any(|action| *action == MergeAction::Conflict)
    }
}
