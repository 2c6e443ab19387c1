//! Configuration loading, coercion, and merging
//!
//! Turns a config file plus CLI flags into one typed parameter record with
//! proper precedence (CLI > file section > schema defaults), and the nested
//! catalog record alongside it.

pub mod catalog;
pub mod error;
pub mod loader;
pub mod merge;
pub mod value;

pub use catalog::{resolve_catalog, CatalogOverrides};
pub use error::{CoercionError, ConfigFileError, ResolveError};
pub use loader::{load_raw_config, RawConfig};
pub use merge::{
    resolve_aws, resolve_db, resolve_files, resolve_sqlite, AwsOverrides, DbOverrides,
    FilesOverrides, FilterOverrides, SqliteOverrides,
};
