//! Athena-style object-store scan backend

use anyhow::Result;
use tracing::debug;

use crate::domain::AwsParams;

/// Entry point for `aws` scans. The sole caller is the dispatcher.
/// Credentials are carried in the record and never logged.
pub fn dispatch(params: AwsParams) -> Result<()> {
    debug!(
        region = ?params.region,
        staging_dir = ?params.staging_dir,
        scan_type = %params.scan_type,
        "dispatching object-store scan"
    );
    Ok(())
}
