//! Command-line interface for piiscan
//!
//! A global `--config` file option plus one subcommand per scan target.
//! Values given on the command line always win over file values.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::{debug, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod args;

use crate::backend;
use crate::config::{load_raw_config, resolve_aws, resolve_db, resolve_files, resolve_sqlite};
use crate::domain::ResolvedParams;
use args::{AwsArgs, DbArgs, FilesArgs, SqliteArgs};

/// Scan databases, files, and cloud data stores for PII
#[derive(Parser)]
#[command(name = "piiscan")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to the configuration file
    #[arg(short = 'c', long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Scan a relational database (MySQL or PostgreSQL)
    Db(Box<DbArgs>),

    /// Scan an embedded SQLite database file
    Sqlite(SqliteArgs),

    /// Scan flat files on disk
    Files(FilesArgs),

    /// Scan tables through AWS Athena
    Aws(Box<AwsArgs>),
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // Wire verbose flag to the tracing log level.
    // RUST_LOG in the environment always takes precedence; --verbose falls back to DEBUG.
    let filter = if cli.verbose {
        EnvFilter::from_default_env().add_directive(Level::DEBUG.into())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    let raw = load_raw_config(cli.config.as_deref())?;

    let params = match cli.command {
        Commands::Db(cmd) => ResolvedParams::Db(resolve_db(&raw, cmd.into_overrides())?),
        Commands::Sqlite(cmd) => ResolvedParams::Sqlite(resolve_sqlite(&raw, cmd.into_overrides())?),
        Commands::Files(cmd) => ResolvedParams::Files(resolve_files(&raw, cmd.into_overrides())?),
        Commands::Aws(cmd) => ResolvedParams::Aws(resolve_aws(&raw, cmd.into_overrides())?),
    };

    debug!(subcommand = params.subcommand(), "configuration resolved");
    backend::dispatch(params)
}
