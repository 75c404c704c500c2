//! fabryk-auth CLI
//!
//! Inspect logout URLs and session records for the identity widget adapter.

#![warn(clippy::all)]
#![forbid(unsafe_code)]

use anyhow::Result;
use clap::Parser;
use fabryk_auth_cli::cli::Args;
use fabryk_auth_cli::commands::handle_command;

fn main() -> Result<()> {
    let args = Args::parse();

    let default_filter = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(command = ?args.command, "Running command");

    match handle_command(args.config.as_deref(), args.command) {
        Ok(output) => {
            println!("{output}");
            Ok(())
        }
        Err(e) => {
            tracing::error!("{e}");
            Err(e.into())
        }
    }
}
