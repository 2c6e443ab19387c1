//! piiscan binary entry point

use anyhow::Result;

fn main() -> Result<()> {
    piiscan::cli::run()
}
