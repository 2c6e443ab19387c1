//! Flat-file filesystem scan backend

use anyhow::Result;
use tracing::debug;

use crate::domain::FilesParams;

/// Entry point for `files` scans. The sole caller is the dispatcher.
pub fn dispatch(params: FilesParams) -> Result<()> {
    debug!(path = %params.path.display(), "dispatching filesystem scan");
    Ok(())
}
