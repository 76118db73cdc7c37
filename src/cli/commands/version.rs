//! `secretview version`: display version.

use crate::errors::Result;

/// Execute the `version` command.
pub fn execute() -> Result<()> {
    println!("secretview {}", env!("CARGO_PKG_VERSION"));
    Ok(())
}
