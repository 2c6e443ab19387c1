//! Error types for config loading and resolution

use std::path::PathBuf;
use thiserror::Error;

/// Failures reading or parsing the configuration file.
#[derive(Error, Debug)]
pub enum ConfigFileError {
    #[error("config file not found: {0}")]
    NotFound(PathBuf),

    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed config file {path} at line {line}: {reason}")]
    Malformed {
        path: PathBuf,
        line: usize,
        reason: String,
    },
}

/// A file value that cannot be converted to the type its key requires.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("cannot interpret `{value}` as {expected} for key `{key}`")]
pub struct CoercionError {
    pub key: String,
    pub value: String,
    pub expected: &'static str,
}

impl CoercionError {
    pub fn new(key: &str, value: &str, expected: &'static str) -> Self {
        Self { key: key.to_string(), value: value.to_string(), expected }
    }
}

/// Failures while merging CLI, file, and default values into a
/// parameter record.
#[derive(Error, Debug)]
pub enum ResolveError {
    #[error(transparent)]
    Coercion(#[from] CoercionError),

    #[error("missing required option `{field}` for `{command}`: pass --{field} or set it in the [{command}] config section")]
    MissingRequired {
        command: &'static str,
        field: &'static str,
    },
}
