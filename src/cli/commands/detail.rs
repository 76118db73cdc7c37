//! `secretview detail`: project a source record into a secret detail.

use crate::cli::source::{project, SourceShape};
use crate::cli::{load_settings, read_input, Cli};
use crate::errors::Result;

/// Execute the `detail` command.
pub fn execute(cli: &Cli, file: &str, from: &str, content: Option<&str>) -> Result<()> {
    let settings = load_settings(cli)?;
    let shape = SourceShape::parse(from)?;
    let input = read_input(file)?;

    let projection = project(shape, &input)?;

    // An explicit --content wins over the payload a full secret carries.
    let payload = content.map(str::to_string).or(projection.payload);
    let builder = match payload {
        Some(payload) if !settings.redact_content => projection.builder.content(payload),
        _ => projection.builder,
    };

    let detail = builder.build()?;
    println!("{}", settings.to_json(&detail)?);

    Ok(())
}
