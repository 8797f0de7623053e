use crate::areas::database::Database;
use crate::artifacts::objects::OBJECT_ID_LENGTH;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use crate::errors::{Error, Result};

/// A commit id as typed by the user, full or abbreviated
///
/// Resolution rules:
/// - a full 40-character id must name a stored commit
/// - anything shorter must be a prefix of exactly one stored commit id
///
/// Objects that are not commits never match, so a prefix shared by a blob and
/// a single commit still resolves to the commit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Revision(String);

impl Revision {
    pub fn try_parse(revision: &str) -> Result<Revision> {
        let revision = revision.trim();

        if revision.is_empty()
            || revision.len() > OBJECT_ID_LENGTH
            || !revision.chars().all(|c| c.is_ascii_hexdigit())
        {
            return Err(Error::NoSuchCommit(revision.to_string()));
        }

        Ok(Revision(revision.to_ascii_lowercase()))
    }

    pub fn resolve(&self, database: &Database) -> Result<ObjectId> {
        let candidates = if self.0.len() == OBJECT_ID_LENGTH {
            vec![ObjectId::try_parse(self.0.clone())?]
        } else {
            database.find_objects_by_prefix(&self.0)?
        };

        let mut commits = Vec::new();
        for candidate in candidates {
            if database.contains(&candidate)
                && database.get_object_type(&candidate)? == ObjectType::Commit
            {
                commits.push(candidate);
            }
        }

        match commits.len() {
            0 => Err(Error::NoSuchCommit(self.0.clone())),
            1 => Ok(commits.remove(0)),
            candidates => Err(Error::AmbiguousCommitPrefix {
                prefix: self.0.clone(),
                candidates,
            }),
        }
    }
}

impl AsRef<str> for Revision {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
