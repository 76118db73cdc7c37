//! `secretview completions`: generate shell completion scripts.
//!
//! Usage:
//!   secretview completions bash > ~/.bash_completion.d/secretview
//!   secretview completions zsh

use std::io::{self, Write};

use clap::CommandFactory;
use clap_complete::{generate, Shell};

use crate::cli::Cli;
use crate::errors::Result;

/// Execute the `completions` command.
pub fn execute(shell: Shell) -> Result<()> {
    write_completions(shell, &mut io::stdout())
}

fn write_completions(shell: Shell, out: &mut dyn Write) -> Result<()> {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "secretview", out);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bash_completions_mention_subcommands() {
        let mut buf = Vec::new();
        write_completions(Shell::Bash, &mut buf).unwrap();
        let script = String::from_utf8(buf).unwrap();

        assert!(script.contains("secretview"));
        assert!(script.contains("detail"));
        assert!(script.contains("batch"));
    }

    #[test]
    fn fish_completions_are_generated() {
        let mut buf = Vec::new();
        write_completions(Shell::Fish, &mut buf).unwrap();
        assert!(!buf.is_empty());
    }
}
