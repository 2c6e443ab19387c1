//! Core parameter records handed to the scan backends
//!
//! One fixed record shape per subcommand, with field types checked at
//! compile time. The merge engine in [`crate::config`] is the only
//! producer; the dispatcher in [`crate::backend`] is the only consumer.

use std::path::PathBuf;

/// Connection-type applied when neither CLI nor config file names one.
pub const DEFAULT_CONNECTION_TYPE: &str = "mysql";

/// Scan depth applied when neither CLI nor config file names one.
pub const DEFAULT_SCAN_TYPE: &str = "shallow";

/// Where scan results are catalogued: connection coordinates plus an
/// output format and an optional output file.
///
/// Every field is optional and every value is passed through as text;
/// interpreting them (including `port`) is the backend's business. `file`
/// can only be set from the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogRecord {
    pub host: Option<String>,
    pub port: Option<String>,
    pub user: Option<String>,
    pub password: Option<String>,
    pub format: Option<String>,
    pub file: Option<PathBuf>,
}

/// Resolved parameters for a relational database scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DbParams {
    pub connection_type: String,
    pub host: Option<String>,
    pub database: Option<String>,
    pub port: Option<u16>,
    pub user: Option<String>,
    pub password: Option<String>,
    pub scan_type: String,
    pub list_all: bool,
    pub include_schema: Vec<String>,
    pub exclude_schema: Vec<String>,
    pub include_table: Vec<String>,
    pub exclude_table: Vec<String>,
    pub catalog: CatalogRecord,
}

/// Resolved parameters for an embedded SQLite database scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SqliteParams {
    pub path: PathBuf,
    pub scan_type: String,
    pub list_all: bool,
    pub include_schema: Vec<String>,
    pub exclude_schema: Vec<String>,
    pub include_table: Vec<String>,
    pub exclude_table: Vec<String>,
    pub catalog: CatalogRecord,
}

/// Resolved parameters for a flat-file filesystem scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilesParams {
    pub path: PathBuf,
    pub catalog: CatalogRecord,
}

/// Resolved parameters for an Athena-style object-store scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AwsParams {
    pub access_key: Option<String>,
    pub secret_key: Option<String>,
    pub region: Option<String>,
    pub staging_dir: Option<String>,
    pub scan_type: String,
    pub list_all: bool,
    pub include_schema: Vec<String>,
    pub exclude_schema: Vec<String>,
    pub include_table: Vec<String>,
    pub exclude_table: Vec<String>,
    pub catalog: CatalogRecord,
}

/// The one record a single invocation resolves to, tagged by subcommand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedParams {
    Db(DbParams),
    Sqlite(SqliteParams),
    Files(FilesParams),
    Aws(AwsParams),
}

impl ResolvedParams {
    /// Name of the subcommand this record was resolved for.
    pub fn subcommand(&self) -> &'static str {
        match self {
            ResolvedParams::Db(_) => "db",
            ResolvedParams::Sqlite(_) => "sqlite",
            ResolvedParams::Files(_) => "files",
            ResolvedParams::Aws(_) => "aws",
        }
    }
}
