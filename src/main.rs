use clap::Parser;
use secretview::cli::{load_settings, Cli, Commands};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    init_tracing(&cli);

    let result = match cli.command {
        Commands::Detail {
            ref file,
            ref from,
            ref content,
        } => secretview::cli::commands::detail::execute(&cli, file, from, content.as_deref()),
        Commands::Show { ref file, ref from } => {
            secretview::cli::commands::show::execute(&cli, file, from)
        }
        Commands::Batch { ref file } => secretview::cli::commands::batch::execute(&cli, file),
        Commands::Validate { ref file, batch } => {
            secretview::cli::commands::validate::execute(&cli, file, batch)
        }
        Commands::Version => secretview::cli::commands::version::execute(),
        Commands::Completions { shell } => secretview::cli::commands::completions::execute(shell),
    };

    if let Err(e) = result {
        secretview::cli::output::error(&e.to_string());
        std::process::exit(1);
    }
}

/// Log to stderr; `RUST_LOG` wins over the configured level.
fn init_tracing(cli: &Cli) {
    // A broken config file is reported by the command itself.
    let level = load_settings(cli)
        .map(|settings| settings.log_level)
        .unwrap_or_else(|_| "warn".to_string());

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
