mod cli;
mod commands;
mod error;
mod output;
mod store;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Command};
use crate::error::CliError;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup tracing based on verbosity
    init_tracing(cli.global.verbose);

    // Dispatch and handle errors with proper exit codes
    if let Err(err) = run(cli) {
        let code = err.exit_code();
        eprintln!("{:?}", miette::Report::new(err));
        std::process::exit(code);
    }
}

fn init_tracing(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        // Config commands don't need the lot state
        Command::Config(args) => commands::config_cmd::handle(args, &cli.global),

        // Shell completions generation
        Command::Completions(args) => {
            use clap::CommandFactory;
            use clap_complete::generate;

            let mut cmd = Cli::command();
            generate(args.shell, &mut cmd, "parkease", &mut std::io::stdout());
            Ok(())
        }

        // All other commands operate on the persisted lot
        cmd => {
            let config = parkease_config::load_config_or_default();
            let data_path = cli
                .global
                .data_file
                .clone()
                .unwrap_or_else(|| parkease_config::data_path(&config));

            let mut lot = store::load_lot(&data_path, &config)?;
            tracing::debug!(command = ?cmd, "dispatching command");
            let mutated = commands::dispatch(cmd, &mut lot, &cli.global)?;

            // A failed operation never reaches this point, so the data
            // file only ever sees complete, successful transitions.
            if mutated {
                store::save_lot(&data_path, &lot)?;
            }
            Ok(())
        }
    }
}
