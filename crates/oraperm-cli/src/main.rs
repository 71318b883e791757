//! ORAPERM CLI — Encode and decode web-service payloads from the command
//! line.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod commands;
mod config;

use commands::{Cli, Commands};

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_directive = if cli.debug { "oraperm=debug" } else { "oraperm=info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_directive.into());
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);
    if cli.log_json {
        subscriber.json().init();
    } else {
        subscriber.init();
    }

    let result = match cli.command {
        Commands::Decode(args) => commands::decode::execute(args),
        Commands::Encode(cmd) => commands::encode::execute(cmd, cli.settings.as_deref()),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %format!("{e:#}"), "command failed");
            ExitCode::FAILURE
        }
    }
}
