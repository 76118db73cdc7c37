//! `secretview validate`: check a response document against the wire format.

use crate::cli::output;
use crate::cli::{read_input, Cli};
use crate::errors::Result;
use crate::response::{BatchSecretContents, SecretDetail};

/// Execute the `validate` command.
pub fn execute(_cli: &Cli, file: &str, batch: bool) -> Result<()> {
    let input = read_input(file)?;

    if batch {
        let contents = BatchSecretContents::from_json(&input)?;
        output::success(&format!(
            "valid batch response: {} succeeded, {} failed",
            contents.success_secrets().len(),
            contents.error_secrets().len()
        ));
    } else {
        let detail = SecretDetail::from_json(&input)?;
        output::success(&format!("valid secret detail: {}", detail.name()));
    }

    Ok(())
}
