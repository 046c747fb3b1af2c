mod cli;
mod commands;
mod config;
mod error;
mod output;

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Command};
use crate::error::CliError;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    init_tracing(cli.global.verbose);

    if let Err(err) = run(cli).await {
        let code = err.exit_code();
        eprintln!("{:?}", miette::Report::new(err));
        std::process::exit(code);
    }
}

/// Log to stderr so stdout stays machine-readable.
///
/// Without `-v`, lookup failures are not logged: their upstream detail is
/// for operators, and the user already gets the diagnostic.
fn init_tracing(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn,leadsearch_core=error,leadsearch_api=error",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

async fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        // Config commands tolerate a broken or missing config file
        Command::Config(args) => commands::config_cmd::handle(args, &cli.global),

        Command::Completions(args) => {
            let mut cmd = Cli::command();
            clap_complete::generate(args.shell, &mut cmd, "leadsearch", &mut std::io::stdout());
            Ok(())
        }

        Command::Stats => {
            let cfg = config::load_config()?;
            commands::stats::handle(&cli.global, &cfg)
        }

        Command::Lookup(args) => {
            let cfg = config::load_config()?;
            tracing::debug!(query = %args.query, "dispatching lookup");
            commands::lookup::handle(args, &cli.global, &cfg).await
        }
    }
}
