//! Runtime configuration
//!
//! Everything here is read from the environment once per process:
//!
//! - `BITLET_COMMIT_DATE`: fixed timestamp for new commits, either RFC 2822 or
//!   `%Y-%m-%d %H:%M:%S %z`. Falls back to the local clock when unset or unparsable.
//! - `BITLET_LOG`: a `tracing` filter directive (defaults to [`DEFAULT_LOG_FILTER`]).
//! - `NO_COLOR`: disables colored status output.

use chrono::{DateTime, FixedOffset};
use is_terminal::IsTerminal;

/// Name of the repository directory inside the working tree
pub const REPOSITORY_DIR: &str = ".gitlet";

/// Branch created by `init`
pub const DEFAULT_BRANCH: &str = "master";

/// Message of the root commit created by `init`
pub const INITIAL_COMMIT_MESSAGE: &str = "initial commit";

pub const COMMIT_DATE_ENV: &str = "BITLET_COMMIT_DATE";
pub const LOG_FILTER_ENV: &str = "BITLET_LOG";
pub const NO_COLOR_ENV: &str = "NO_COLOR";

pub const DEFAULT_LOG_FILTER: &str = "warn";

const COMMIT_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S %z";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    commit_date: Option<DateTime<FixedOffset>>,
    log_filter: String,
    color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            commit_date: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            color: false,
        }
    }
}

impl Config {
    pub fn load_from_env() -> Self {
        let commit_date = std::env::var(COMMIT_DATE_ENV)
            .ok()
            .and_then(|date_str| Self::parse_commit_date(&date_str));
        let log_filter =
            std::env::var(LOG_FILTER_ENV).unwrap_or_else(|_| DEFAULT_LOG_FILTER.to_string());
        let color = std::env::var_os(NO_COLOR_ENV).is_none()
            && std::io::stdout().is_terminal();

        Config {
            commit_date,
            log_filter,
            color,
        }
    }

    /// Pin every new commit to the given timestamp
    pub fn with_commit_date(mut self, commit_date: DateTime<FixedOffset>) -> Self {
        self.commit_date = Some(commit_date);
        self
    }

    pub fn parse_commit_date(date_str: &str) -> Option<DateTime<FixedOffset>> {
        DateTime::parse_from_rfc2822(date_str)
            .or_else(|_| DateTime::parse_from_str(date_str, COMMIT_DATE_FORMAT))
            .ok()
    }

    /// Timestamp for a commit created now
    pub fn commit_timestamp(&self) -> DateTime<FixedOffset> {
        self.commit_date
            .unwrap_or_else(|| chrono::Local::now().fixed_offset())
    }

    pub fn log_filter(&self) -> &str {
        &self.log_filter
    }

    pub fn color(&self) -> bool {
        self.color
    }
}
