//! Scan backends and dispatch
//!
//! Each subcommand maps to exactly one backend module with a single
//! `dispatch` entry point taking that subcommand's parameter record by
//! value. The mapping is fixed; a resolution failure never reaches this
//! layer, and a successful invocation reaches exactly one backend.

use anyhow::Result;

use crate::domain::ResolvedParams;

pub mod athena;
pub mod filesystem;
pub mod relational;
pub mod sqlite;

/// Invokes the one backend matching the resolved record.
pub fn dispatch(params: ResolvedParams) -> Result<()> {
    match params {
        ResolvedParams::Db(p) => relational::dispatch(p),
        ResolvedParams::Sqlite(p) => sqlite::dispatch(p),
        ResolvedParams::Files(p) => filesystem::dispatch(p),
        ResolvedParams::Aws(p) => athena::dispatch(p),
    }
}
