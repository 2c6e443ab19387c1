//! Argument definitions for the four scan subcommands
//!
//! Every merge-relevant flag is optional so the merge engine can tell
//! "not given" apart from a falsy value. Conversion into the override
//! records happens here; the config layer never sees clap types.

use clap::Args;
use std::path::PathBuf;

use crate::config::{
    AwsOverrides, CatalogOverrides, DbOverrides, FilesOverrides, FilterOverrides, SqliteOverrides,
};

/// Flags selecting what a scan covers, shared by `db`, `sqlite`, and `aws`.
#[derive(Args, Debug)]
pub struct ScanArgs {
    /// Scan strategy: 'shallow' matches column names only, 'deep' samples data
    #[arg(long, value_name = "TYPE")]
    pub scan_type: Option<String>,

    /// List every scanned column, not only those flagged as PII
    #[arg(long)]
    pub list_all: bool,

    /// Scan only these schemata (repeatable)
    #[arg(long, value_name = "SCHEMA")]
    pub include_schema: Vec<String>,

    /// Skip these schemata (repeatable)
    #[arg(long, value_name = "SCHEMA")]
    pub exclude_schema: Vec<String>,

    /// Scan only these tables (repeatable)
    #[arg(long, value_name = "TABLE")]
    pub include_table: Vec<String>,

    /// Skip these tables (repeatable)
    #[arg(long, value_name = "TABLE")]
    pub exclude_table: Vec<String>,
}

impl ScanArgs {
    fn into_overrides(self) -> FilterOverrides {
        FilterOverrides {
            scan_type: self.scan_type,
            list_all: if self.list_all { Some(true) } else { None },
            include_schema: non_empty(self.include_schema),
            exclude_schema: non_empty(self.exclude_schema),
            include_table: non_empty(self.include_table),
            exclude_table: non_empty(self.exclude_table),
        }
    }
}

/// Flags addressing the catalog where scan results are recorded.
#[derive(Args, Debug)]
pub struct CatalogArgs {
    /// Catalog database host
    #[arg(long, value_name = "HOST")]
    pub catalog_host: Option<String>,

    /// Catalog database port
    #[arg(long, value_name = "PORT")]
    pub catalog_port: Option<String>,

    /// Catalog database user
    #[arg(long, value_name = "USER")]
    pub catalog_user: Option<String>,

    /// Catalog database password
    #[arg(long, value_name = "PASSWORD")]
    pub catalog_password: Option<String>,

    /// Catalog format override; defaults to the resolved output format
    #[arg(long, value_name = "FORMAT")]
    pub catalog_format: Option<String>,

    /// Write the catalog to this file
    #[arg(long, value_name = "FILE")]
    pub catalog_file: Option<PathBuf>,
}

impl CatalogArgs {
    fn into_overrides(self) -> CatalogOverrides {
        CatalogOverrides {
            host: self.catalog_host,
            port: self.catalog_port,
            user: self.catalog_user,
            password: self.catalog_password,
            format: self.catalog_format,
            file: self.catalog_file,
        }
    }
}

#[derive(Args, Debug)]
pub struct DbArgs {
    /// Database flavour: 'mysql' or 'postgres'
    #[arg(long, value_name = "TYPE")]
    pub connection_type: Option<String>,

    /// Database host
    #[arg(long, value_name = "HOST")]
    pub host: Option<String>,

    /// Database name
    #[arg(long, value_name = "NAME")]
    pub database: Option<String>,

    /// Database port
    #[arg(long, value_name = "PORT")]
    pub port: Option<u16>,

    /// Database user
    #[arg(long, value_name = "USER")]
    pub user: Option<String>,

    /// Database password
    #[arg(long, value_name = "PASSWORD")]
    pub password: Option<String>,

    /// Scan report format: 'ascii_table', 'json', or 'db'
    #[arg(long, value_name = "FORMAT")]
    pub output_format: Option<String>,

    #[command(flatten)]
    pub scan: ScanArgs,

    #[command(flatten)]
    pub catalog: CatalogArgs,
}

impl DbArgs {
    pub fn into_overrides(self) -> DbOverrides {
        DbOverrides {
            connection_type: self.connection_type,
            host: self.host,
            database: self.database,
            port: self.port,
            user: self.user,
            password: self.password,
            output_format: self.output_format,
            filters: self.scan.into_overrides(),
            catalog: self.catalog.into_overrides(),
        }
    }
}

#[derive(Args, Debug)]
pub struct SqliteArgs {
    /// Path to the SQLite database file
    #[arg(long, value_name = "FILE")]
    pub path: Option<PathBuf>,

    /// Scan report format: 'ascii_table', 'json', or 'db'
    #[arg(long, value_name = "FORMAT")]
    pub output_format: Option<String>,

    #[command(flatten)]
    pub scan: ScanArgs,

    #[command(flatten)]
    pub catalog: CatalogArgs,
}

impl SqliteArgs {
    pub fn into_overrides(self) -> SqliteOverrides {
        SqliteOverrides {
            path: self.path,
            output_format: self.output_format,
            filters: self.scan.into_overrides(),
            catalog: self.catalog.into_overrides(),
        }
    }
}

#[derive(Args, Debug)]
pub struct FilesArgs {
    /// File or directory to scan
    #[arg(long, value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// Scan report format: 'ascii_table', 'json', or 'db'
    #[arg(long, value_name = "FORMAT")]
    pub output_format: Option<String>,

    #[command(flatten)]
    pub catalog: CatalogArgs,
}

impl FilesArgs {
    pub fn into_overrides(self) -> FilesOverrides {
        FilesOverrides {
            path: self.path,
            output_format: self.output_format,
            catalog: self.catalog.into_overrides(),
        }
    }
}

#[derive(Args, Debug)]
pub struct AwsArgs {
    /// AWS access key
    #[arg(long, value_name = "KEY")]
    pub access_key: Option<String>,

    /// AWS secret key
    #[arg(long, value_name = "KEY")]
    pub secret_key: Option<String>,

    /// AWS region
    #[arg(long, value_name = "REGION")]
    pub region: Option<String>,

    /// S3 staging directory for Athena query results
    #[arg(long, value_name = "URI")]
    pub staging_dir: Option<String>,

    /// Scan report format: 'ascii_table', 'json', or 'db'
    #[arg(long, value_name = "FORMAT")]
    pub output_format: Option<String>,

    #[command(flatten)]
    pub scan: ScanArgs,

    #[command(flatten)]
    pub catalog: CatalogArgs,
}

impl AwsArgs {
    pub fn into_overrides(self) -> AwsOverrides {
        AwsOverrides {
            access_key: self.access_key,
            secret_key: self.secret_key,
            region: self.region,
            staging_dir: self.staging_dir,
            output_format: self.output_format,
            filters: self.scan.into_overrides(),
            catalog: self.catalog.into_overrides(),
        }
    }
}

fn non_empty(values: Vec<String>) -> Option<Vec<String>> {
    if values.is_empty() {
        None
    } else {
        Some(values)
    }
}
