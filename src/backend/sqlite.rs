//! Embedded SQLite database scan backend

use anyhow::Result;
use tracing::debug;

use crate::domain::SqliteParams;

/// Entry point for `sqlite` scans. The sole caller is the dispatcher.
pub fn dispatch(params: SqliteParams) -> Result<()> {
    debug!(
        path = %params.path.display(),
        scan_type = %params.scan_type,
        list_all = params.list_all,
        "dispatching sqlite scan"
    );
    Ok(())
}
