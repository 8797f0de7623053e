//! Split point search for three-way merges
//!
//! The split point of two branch tips is the common ancestor that the merge
//! uses as its base. It is found in two steps:
//!
//! 1. From each tip, walk the commit graph depth-first with an explicit stack,
//!    following both the first parent and the merged-in parent. Each commit is
//!    marked with the distance it carried when it was first popped.
//! 2. Among the commits marked from both tips, pick the one with the smallest
//!    distance from `ours`.
//!
//! ## Discovery-order distances
//!
//! A commit's distance is the one it carried when first discovered, not the
//! length of the shortest path to it. The first parent is pushed before the
//! merged-in parent, so the merged-in side is explored first and a commit
//! reachable through both can be marked with the longer distance.
//!
//! ## Ties
//!
//! When several common commits share the smallest distance, the one the
//! `ours` walk discovered first wins.
//!
//! ## Usage
//!
//! ```rust,ignore
//! let finder = SplitPointFinder::new(|oid| Ok(database.load_commit(oid)?.parents()));
//! let split_point = finder.find_split_point(&ours, &theirs)?;
//! ```

use crate::artifacts::objects::object_id::ObjectId;
use std::collections::HashMap;
use tracing::{debug, trace};

/// Distance of every commit reachable from a tip, with the order of discovery
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarkedCommits {
    order: Vec<ObjectId>,
    distances: HashMap<ObjectId, usize>,
}

impl MarkedCommits {
    pub fn distance(&self, oid: &ObjectId) -> Option<usize> {
        self.distances.get(oid).copied()
    }

    pub fn contains(&self, oid: &ObjectId) -> bool {
        self.distances.contains_key(oid)
    }

    /// Commits in the order they were first discovered
    pub fn discovery_order(&self) -> &[ObjectId] {
        &self.order
    }

    fn mark(&mut self, oid: ObjectId, distance: usize) {
        self.distances.insert(oid.clone(), distance);
        self.order.push(oid);
    }
}

/// Finds the split point between two commits
///
/// Takes a function that loads the parents of a commit as
/// `[parent, merged_in_parent]`, omitting absent ones, so the search works
/// against any commit store.
#[derive(Debug, Clone)]
pub struct SplitPointFinder<ParentsLoaderFn>
where
    ParentsLoaderFn: Fn(&ObjectId) -> anyhow::Result<Vec<ObjectId>>,
{
    parents_loader: ParentsLoaderFn,
}

impl<ParentsLoaderFn> SplitPointFinder<ParentsLoaderFn>
where
    ParentsLoaderFn: Fn(&ObjectId) -> anyhow::Result<Vec<ObjectId>>,
{
    pub fn new(parents_loader: ParentsLoaderFn) -> Self {
        Self { parents_loader }
    }

    /// Depth-first marking of every commit reachable from `tip`
    pub fn mark_commits(&self, tip: &ObjectId) -> anyhow::Result<MarkedCommits> {
        let mut marked = MarkedCommits::default();
        let mut fringe = vec![(tip.clone(), 0usize)];

        while let Some((oid, distance)) = fringe.pop() {
            if marked.contains(&oid) {
                continue;
            }

            let parents = (self.parents_loader)(&oid)?;
            trace!(oid = %oid, distance, "marked commit");
            marked.mark(oid, distance);

            let next_distance = if parents.is_empty() {
                distance
            } else {
                distance + 1
            };
            for parent in parents {
                if !marked.contains(&parent) {
                    fringe.push((parent, next_distance));
                }
            }
        }

        Ok(marked)
    }

    /// Common commit closest to `ours`, or `None` if the histories are disjoint
    pub fn find_split_point(
        &self,
        ours: &ObjectId,
        theirs: &ObjectId,
    ) -> anyhow::Result<Option<ObjectId>> {
        let ours_marked = self.mark_commits(ours)?;
        let theirs_marked = self.mark_commits(theirs)?;

        let mut split_point: Option<(&ObjectId, usize)> = None;
        for oid in ours_marked.discovery_order() {
            if !theirs_marked.contains(oid) {
                continue;
            }

            let distance = ours_marked.distance(oid).unwrap_or(usize::MAX);
            match split_point {
                Some((_, best)) if best <= distance => {}
                _ => split_point = Some((oid, distance)),
            }
        }

        let split_point = split_point.map(|(oid, _)| oid.clone());
        debug!(
            ours = %ours,
            theirs = %theirs,
            split_point = ?split_point.as_ref().map(ObjectId::to_short_oid),
            "found split point"
        );

        Ok(split_point)
    }
}
