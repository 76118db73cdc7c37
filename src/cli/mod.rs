//! CLI module: Clap argument parser, output helpers, and command implementations.

pub mod commands;
pub mod output;
pub mod source;

use std::path::{Path, PathBuf};

use clap::Parser;

use crate::config::Settings;
use crate::errors::{Result, SecretViewError};

/// secretview CLI: canonical response views for stored secrets.
#[derive(Parser)]
#[command(
    name = "secretview",
    about = "Project stored secrets into canonical API responses",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Directory holding .secretview.toml (default: current directory)
    #[arg(long, default_value = ".", global = true)]
    pub config_dir: String,
}

/// All available subcommands.
#[derive(clap::Subcommand)]
pub enum Commands {
    /// Project a source record into a secret detail (JSON)
    Detail {
        /// Path to the source record (JSON), or - for stdin
        file: String,

        /// Source shape: series, series-and-content, secret, or sanitized
        #[arg(short, long, default_value = "secret")]
        from: String,

        /// Payload (base64) to attach to the detail
        #[arg(long)]
        content: Option<String>,
    },

    /// Project a source record and display it as a table
    Show {
        /// Path to the source record (JSON), or - for stdin
        file: String,

        /// Source shape: series, series-and-content, secret, or sanitized
        #[arg(short, long, default_value = "secret")]
        from: String,
    },

    /// Fold a list of lookup outcomes into a batch response (JSON)
    Batch {
        /// Path to a JSON array of lookup outcomes, or - for stdin
        file: String,
    },

    /// Check that a document matches the response wire format
    Validate {
        /// Path to the document (JSON), or - for stdin
        file: String,

        /// Validate a batch response instead of a secret detail
        #[arg(long)]
        batch: bool,
    },

    /// Show version
    Version,

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

// ---------------------------------------------------------------------------
// Shared helpers used by multiple commands
// ---------------------------------------------------------------------------

/// Load settings from the `--config-dir` given on the command line.
pub fn load_settings(cli: &Cli) -> Result<Settings> {
    Settings::load(Path::new(&cli.config_dir))
}

/// Read an input document from a path, or from stdin when the path is `-`.
pub fn read_input(file: &str) -> Result<String> {
    if file == "-" {
        return std::io::read_to_string(std::io::stdin()).map_err(SecretViewError::from);
    }

    let path = PathBuf::from(file);
    if !path.exists() {
        return Err(SecretViewError::CommandFailed(format!(
            "input file not found: {}",
            path.display()
        )));
    }

    Ok(std::fs::read_to_string(&path)?)
}
