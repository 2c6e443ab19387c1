//! Catalog record resolution
//!
//! The catalog names where scan results go (a host/port/user/password
//! destination, an output format, an optional output file). It is shared
//! by all subcommands and resolved independently of the backend schema:
//! CLI flag over top-level `catalog_<field>` file key over nothing, per
//! field, with `format` falling back to the subcommand's resolved output
//! format.

use std::path::PathBuf;

use crate::domain::CatalogRecord;

use super::loader::RawConfig;
use super::value;

/// Catalog flags as supplied on the command line. `None` means the flag
/// was not given.
#[derive(Debug, Clone, Default)]
pub struct CatalogOverrides {
    pub host: Option<String>,
    pub port: Option<String>,
    pub user: Option<String>,
    pub password: Option<String>,
    pub format: Option<String>,
    pub file: Option<PathBuf>,
}

/// Builds the catalog record for one invocation.
///
/// `output_format` is the value already resolved for the active subcommand;
/// it is the last fallback for `format` only. File-sourced values are
/// unquoted but never type-coerced, so `catalog_port` stays a string. The
/// `file` field has no config-file counterpart.
pub fn resolve_catalog(
    raw: &RawConfig,
    cli: CatalogOverrides,
    output_format: Option<&str>,
) -> CatalogRecord {
    let global = |key: &str| raw.global(key).map(|v| value::unquote(v).to_string());

    CatalogRecord {
        host: cli.host.or_else(|| global("catalog_host")),
        port: cli.port.or_else(|| global("catalog_port")),
        user: cli.user.or_else(|| global("catalog_user")),
        password: cli.password.or_else(|| global("catalog_password")),
        format: cli
            .format
            .or_else(|| global("catalog_format"))
            .or_else(|| output_format.map(str::to_string)),
        file: cli.file,
    }
}
