//! Relational database scan backend

use anyhow::Result;
use tracing::debug;

use crate::domain::DbParams;

/// Entry point for `db` scans. The sole caller is the dispatcher;
/// connection handling and the scan itself live behind this boundary.
pub fn dispatch(params: DbParams) -> Result<()> {
    debug!(
        connection_type = %params.connection_type,
        host = ?params.host,
        database = ?params.database,
        port = ?params.port,
        scan_type = %params.scan_type,
        "dispatching relational database scan"
    );
    Ok(())
}
