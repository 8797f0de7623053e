//! A small content-addressed version control engine
//!
//! - `areas`: the storage areas under `.gitlet` and the working tree
//! - `artifacts`: objects, branches, status, checkout and merge logic
//! - `commands`: user-facing operations on a [`areas::repository::Repository`]
//! - `config`, `errors`, `logging`: ambient concerns shared by everything

pub mod areas;
pub mod artifacts;
pub mod commands;
pub mod config;
pub mod errors;
pub mod logging;
