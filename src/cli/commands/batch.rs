//! `secretview batch`: fold lookup outcomes into one batch response.
//!
//! Input is a JSON array, one entry per lookup, applied in order:
//!
//! ```text
//! [ {"name": "a", "content": "..."},
//!   {"name": "b", "error": "not found"},
//!   {"secret": { ...full secret... }} ]
//! ```

use crate::cli::output;
use crate::cli::source::{fold_batch, parse_batch};
use crate::cli::{load_settings, read_input, Cli};
use crate::errors::Result;

/// Execute the `batch` command.
pub fn execute(cli: &Cli, file: &str) -> Result<()> {
    let settings = load_settings(cli)?;
    let input = read_input(file)?;

    let entries = parse_batch(&input)?;
    let batch = fold_batch(entries);

    println!("{}", settings.to_json(&batch)?);

    // Failed lookups are data, not a command failure.
    if !batch.is_complete() {
        output::warning(&format!(
            "{} of {} lookup(s) failed",
            batch.error_secrets().len(),
            batch.len()
        ));
    }

    Ok(())
}
