//! Config file loading
//!
//! Parses the section-based key/value format into [`RawConfig`] without
//! interpreting a single value. Coercion happens later, once the active
//! subcommand's schema is known, so every right-hand side is preserved
//! verbatim, quotes and brackets included.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use tracing::debug;

use super::error::ConfigFileError;

/// One parsed section: key → raw value, exactly as written.
pub type Section = BTreeMap<String, String>;

/// Syntactic view of a config file: global keys appearing before the first
/// section header, plus one map per section. Section names are lowercased
/// at parse time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawConfig {
    globals: Section,
    sections: BTreeMap<String, Section>,
}

impl RawConfig {
    /// Raw value of a top-level key, if present.
    pub fn global(&self, key: &str) -> Option<&str> {
        self.globals.get(key).map(String::as_str)
    }

    /// The section with the given lowercase name, if present.
    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.get(name)
    }
}

/// Reads and parses the config file when a path was given. An absent path
/// is a valid invocation: the loader is skipped and the result is empty.
pub fn load_raw_config(path: Option<&Path>) -> Result<RawConfig, ConfigFileError> {
    let Some(path) = path else {
        return Ok(RawConfig::default());
    };

    let content = fs::read_to_string(path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            ConfigFileError::NotFound(path.to_path_buf())
        } else {
            ConfigFileError::Io { path: path.to_path_buf(), source }
        }
    })?;

    let parsed = parse(&content, path)?;
    debug!(path = %path.display(), sections = parsed.sections.len(), "loaded config file");
    Ok(parsed)
}

fn parse(content: &str, path: &Path) -> Result<RawConfig, ConfigFileError> {
    let malformed = |line: usize, reason: String| ConfigFileError::Malformed {
        path: path.to_path_buf(),
        line,
        reason,
    };

    let mut config = RawConfig::default();
    let mut current: Option<String> = None;

    for (idx, raw_line) in content.lines().enumerate() {
        let line = raw_line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
            continue;
        }

        if let Some(rest) = line.strip_prefix('[') {
            let Some(name) = rest.strip_suffix(']') else {
                return Err(malformed(idx + 1, format!("section header `{line}` must end with `]`")));
            };
            let name = name.trim();
            if name.is_empty() {
                return Err(malformed(idx + 1, "empty section name".to_string()));
            }
            // Re-opening a section appends to the one already parsed.
            let name = name.to_ascii_lowercase();
            config.sections.entry(name.clone()).or_default();
            current = Some(name);
            continue;
        }

        let Some((key, value)) = line.split_once('=') else {
            return Err(malformed(idx + 1, format!("expected `key=value`, got `{line}`")));
        };
        let key = key.trim();
        if key.is_empty() {
            return Err(malformed(idx + 1, "empty key".to_string()));
        }
        let value = value.trim().to_string();

        // Duplicate keys: the later occurrence replaces the earlier one.
        match &current {
            Some(name) => {
                config.sections.entry(name.clone()).or_default().insert(key.to_string(), value);
            }
            None => {
                config.globals.insert(key.to_string(), value);
            }
        }
    }

    Ok(config)
}
