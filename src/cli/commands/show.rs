//! `secretview show`: display a projected secret detail as a table.

use crate::cli::output;
use crate::cli::source::{project, SourceShape};
use crate::cli::{read_input, Cli};
use crate::errors::Result;

/// Execute the `show` command.
pub fn execute(_cli: &Cli, file: &str, from: &str) -> Result<()> {
    let shape = SourceShape::parse(from)?;
    let input = read_input(file)?;

    let projection = project(shape, &input)?;
    let detail = projection.builder.build()?;

    output::info(&format!("{} (from {from})", detail.name()));
    output::print_detail_table(&detail);

    Ok(())
}
