//! piiscan: scan databases, files, and cloud data stores for PII
//!
//! Resolves scan configuration from CLI flags layered over an optional
//! config file layered over built-in defaults, then hands one typed
//! parameter record to the backend matching the chosen subcommand.

pub mod backend;
pub mod cli;
pub mod config;
pub mod domain;
