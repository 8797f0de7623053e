use crate::artifacts::branch::INVALID_BRANCH_NAME_REGEX;
use anyhow::Context;
use std::sync::OnceLock;

/// Prefix of a branch reference as written into `HEAD`
pub const BRANCH_REF_PREFIX: &str = "branches/";

/// Validated branch name, possibly hierarchical (`feature/login`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct BranchName(String);

fn invalid_branch_name_regex() -> anyhow::Result<&'static regex::Regex> {
    static REGEX: OnceLock<regex::Regex> = OnceLock::new();

    if let Some(re) = REGEX.get() {
        return Ok(re);
    }
    let re = regex::Regex::new(INVALID_BRANCH_NAME_REGEX)
        .with_context(|| format!("invalid branch name regex: {INVALID_BRANCH_NAME_REGEX}"))?;
    Ok(REGEX.get_or_init(|| re))
}

impl BranchName {
    pub fn try_parse(name: String) -> anyhow::Result<Self> {
        if name.is_empty() {
            anyhow::bail!("branch name cannot be empty");
        }

        if invalid_branch_name_regex()?.is_match(&name) {
            anyhow::bail!("invalid branch name: {}", name);
        }

        Ok(Self(name))
    }

    /// Parse the target of a `ref: branches/<name>` symbolic reference
    pub fn try_parse_ref_path(ref_path: &str) -> anyhow::Result<Self> {
        let name = ref_path.strip_prefix(BRANCH_REF_PREFIX).with_context(|| {
            format!("symbolic ref must start with '{BRANCH_REF_PREFIX}', got '{ref_path}'")
        })?;

        Self::try_parse(name.to_string())
    }

    pub fn to_ref_path(&self) -> String {
        format!("{BRANCH_REF_PREFIX}{}", self.0)
    }
}

impl AsRef<str> for BranchName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for BranchName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
