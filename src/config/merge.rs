//! Merging CLI values over config-file values over schema defaults
//!
//! One resolver per subcommand. Every field is settled independently: a
//! CLI-supplied value is used as-is and the file is not consulted for that
//! key; otherwise the subcommand's own config section is read and coerced;
//! otherwise the schema default applies. Sections belonging to other
//! subcommands are never read, so their contents cannot fail an invocation.

use std::path::PathBuf;
use std::str::FromStr;

use crate::domain::{
    AwsParams, DbParams, FilesParams, SqliteParams, DEFAULT_CONNECTION_TYPE, DEFAULT_SCAN_TYPE,
};

use super::catalog::{resolve_catalog, CatalogOverrides};
use super::error::{CoercionError, ResolveError};
use super::loader::{RawConfig, Section};
use super::value;

/// Config files name the include filters `schema` and `table`; their
/// parameters are `include_schema` and `include_table`. Fixed lookup
/// table, consulted only when reading sections.
const FILE_KEY_ALIASES: [(&str, &str); 2] =
    [("include_schema", "schema"), ("include_table", "table")];

/// Scan filter flags shared by `db`, `sqlite`, and `aws`. `None` means
/// the flag was not given on the command line.
#[derive(Debug, Clone, Default)]
pub struct FilterOverrides {
    pub scan_type: Option<String>,
    pub list_all: Option<bool>,
    pub include_schema: Option<Vec<String>>,
    pub exclude_schema: Option<Vec<String>>,
    pub include_table: Option<Vec<String>>,
    pub exclude_table: Option<Vec<String>>,
}

/// CLI-supplied values for the `db` subcommand.
#[derive(Debug, Clone, Default)]
pub struct DbOverrides {
    pub connection_type: Option<String>,
    pub host: Option<String>,
    pub database: Option<String>,
    pub port: Option<u16>,
    pub user: Option<String>,
    pub password: Option<String>,
    pub output_format: Option<String>,
    pub filters: FilterOverrides,
    pub catalog: CatalogOverrides,
}

/// CLI-supplied values for the `sqlite` subcommand.
#[derive(Debug, Clone, Default)]
pub struct SqliteOverrides {
    pub path: Option<PathBuf>,
    pub output_format: Option<String>,
    pub filters: FilterOverrides,
    pub catalog: CatalogOverrides,
}

/// CLI-supplied values for the `files` subcommand.
#[derive(Debug, Clone, Default)]
pub struct FilesOverrides {
    pub path: Option<PathBuf>,
    pub output_format: Option<String>,
    pub catalog: CatalogOverrides,
}

/// CLI-supplied values for the `aws` subcommand.
#[derive(Debug, Clone, Default)]
pub struct AwsOverrides {
    pub access_key: Option<String>,
    pub secret_key: Option<String>,
    pub region: Option<String>,
    pub staging_dir: Option<String>,
    pub output_format: Option<String>,
    pub filters: FilterOverrides,
    pub catalog: CatalogOverrides,
}

/// Resolves parameters for a relational database scan.
pub fn resolve_db(raw: &RawConfig, cli: DbOverrides) -> Result<DbParams, ResolveError> {
    let section = SectionView::new(raw.section("db"));
    let output_format = resolve_output_format(cli.output_format, &section);
    let catalog = resolve_catalog(raw, cli.catalog, output_format.as_deref());
    let filters = resolve_filters(cli.filters, &section)?;

    Ok(DbParams {
        connection_type: match cli.connection_type {
            Some(v) => v,
            None => section
                .string("connection_type")
                .unwrap_or_else(|| DEFAULT_CONNECTION_TYPE.to_string()),
        },
        host: cli.host.or_else(|| section.string("host")),
        database: cli.database.or_else(|| section.string("database")),
        port: match cli.port {
            Some(v) => Some(v),
            None => section.integer("port")?,
        },
        user: cli.user.or_else(|| section.string("user")),
        password: cli.password.or_else(|| section.string("password")),
        scan_type: filters.scan_type,
        list_all: filters.list_all,
        include_schema: filters.include_schema,
        exclude_schema: filters.exclude_schema,
        include_table: filters.include_table,
        exclude_table: filters.exclude_table,
        catalog,
    })
}

/// Resolves parameters for an embedded SQLite database scan.
pub fn resolve_sqlite(raw: &RawConfig, cli: SqliteOverrides) -> Result<SqliteParams, ResolveError> {
    let section = SectionView::new(raw.section("sqlite"));
    let output_format = resolve_output_format(cli.output_format, &section);
    let catalog = resolve_catalog(raw, cli.catalog, output_format.as_deref());
    let filters = resolve_filters(cli.filters, &section)?;
    let path = required_path(cli.path, &section, "sqlite")?;

    Ok(SqliteParams {
        path,
        scan_type: filters.scan_type,
        list_all: filters.list_all,
        include_schema: filters.include_schema,
        exclude_schema: filters.exclude_schema,
        include_table: filters.include_table,
        exclude_table: filters.exclude_table,
        catalog,
    })
}

/// Resolves parameters for a flat-file filesystem scan.
pub fn resolve_files(raw: &RawConfig, cli: FilesOverrides) -> Result<FilesParams, ResolveError> {
    let section = SectionView::new(raw.section("files"));
    let output_format = resolve_output_format(cli.output_format, &section);
    let catalog = resolve_catalog(raw, cli.catalog, output_format.as_deref());
    let path = required_path(cli.path, &section, "files")?;

    Ok(FilesParams { path, catalog })
}

/// Resolves parameters for an Athena-style object-store scan.
pub fn resolve_aws(raw: &RawConfig, cli: AwsOverrides) -> Result<AwsParams, ResolveError> {
    let section = SectionView::new(raw.section("aws"));
    let output_format = resolve_output_format(cli.output_format, &section);
    let catalog = resolve_catalog(raw, cli.catalog, output_format.as_deref());
    let filters = resolve_filters(cli.filters, &section)?;

    Ok(AwsParams {
        access_key: cli.access_key.or_else(|| section.string("access_key")),
        secret_key: cli.secret_key.or_else(|| section.string("secret_key")),
        region: cli.region.or_else(|| section.string("region")),
        staging_dir: cli.staging_dir.or_else(|| section.string("staging_dir")),
        scan_type: filters.scan_type,
        list_all: filters.list_all,
        include_schema: filters.include_schema,
        exclude_schema: filters.exclude_schema,
        include_table: filters.include_table,
        exclude_table: filters.exclude_table,
        catalog,
    })
}

/// The output format is resolved like any other field, but its value feeds
/// catalog-format inheritance instead of landing in the record.
fn resolve_output_format(cli: Option<String>, section: &SectionView) -> Option<String> {
    cli.or_else(|| section.string("output_format"))
}

fn required_path(
    cli: Option<PathBuf>,
    section: &SectionView,
    command: &'static str,
) -> Result<PathBuf, ResolveError> {
    cli.or_else(|| section.string("path").map(PathBuf::from))
        .ok_or(ResolveError::MissingRequired { command, field: "path" })
}

struct Filters {
    scan_type: String,
    list_all: bool,
    include_schema: Vec<String>,
    exclude_schema: Vec<String>,
    include_table: Vec<String>,
    exclude_table: Vec<String>,
}

fn resolve_filters(cli: FilterOverrides, section: &SectionView) -> Result<Filters, ResolveError> {
    Ok(Filters {
        scan_type: match cli.scan_type {
            Some(v) => v,
            None => section.string("scan_type").unwrap_or_else(|| DEFAULT_SCAN_TYPE.to_string()),
        },
        list_all: match cli.list_all {
            Some(v) => v,
            None => section.boolean("list_all")?.unwrap_or(false),
        },
        include_schema: match cli.include_schema {
            Some(v) => v,
            None => section.list("include_schema")?.unwrap_or_default(),
        },
        exclude_schema: match cli.exclude_schema {
            Some(v) => v,
            None => section.list("exclude_schema")?.unwrap_or_default(),
        },
        include_table: match cli.include_table {
            Some(v) => v,
            None => section.list("include_table")?.unwrap_or_default(),
        },
        exclude_table: match cli.exclude_table {
            Some(v) => v,
            None => section.list("exclude_table")?.unwrap_or_default(),
        },
    })
}

/// Typed read access to the active subcommand's section. Lookups go
/// through the file-key alias table; coercion errors carry the key as
/// written in the file.
struct SectionView<'a> {
    section: Option<&'a Section>,
}

impl<'a> SectionView<'a> {
    fn new(section: Option<&'a Section>) -> Self {
        Self { section }
    }

    fn raw<'f>(&self, field: &'f str) -> Option<(&'f str, &'a str)> {
        let key = FILE_KEY_ALIASES
            .iter()
            .find(|(param, _)| *param == field)
            .map_or(field, |(_, key)| *key);
        self.section.and_then(|s| s.get(key)).map(|v| (key, v.as_str()))
    }

    fn string(&self, field: &str) -> Option<String> {
        self.raw(field).map(|(_, v)| value::unquote(v).to_string())
    }

    fn boolean(&self, field: &str) -> Result<Option<bool>, CoercionError> {
        self.raw(field).map(|(k, v)| value::coerce_bool(k, v)).transpose()
    }

    fn integer<T: FromStr>(&self, field: &str) -> Result<Option<T>, CoercionError> {
        self.raw(field).map(|(k, v)| value::coerce_int(k, v)).transpose()
    }

    fn list(&self, field: &str) -> Result<Option<Vec<String>>, CoercionError> {
        self.raw(field).map(|(k, v)| value::coerce_list(k, v)).transpose()
    }
}
