//! Command implementations
//!
//! Every command is an `impl Repository` block under `porcelain`. Commands
//! return typed results; the ones that report something also print it through
//! the repository writer.

pub mod porcelain;
