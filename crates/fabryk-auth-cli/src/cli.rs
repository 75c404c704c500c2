//! Command-line argument definitions.

use clap::{Parser, Subcommand};

/// fabryk-auth - identity widget adapter helpers
#[derive(Parser, Debug)]
#[command(name = "fabryk-auth")]
#[command(about = "Inspect logout URLs and session records for the identity widget adapter", long_about = None)]
pub struct Args {
    /// Host configuration file path (TOML); falls back to $FABRYK_AUTH_CONFIG
    #[arg(short, long)]
    pub config: Option<String>,

    /// Increase log verbosity (debug)
    #[arg(short, long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Print the post-logout redirect URL
    LogoutUrl {
        /// Current origin, e.g. https://app.example.com
        #[arg(long)]
        origin: String,
    },
    /// Build a session record from widget JSON and print it
    SessionRecord {
        /// Authentication result JSON, e.g. '{"idToken":"..."}'
        #[arg(long)]
        auth: String,
        /// Profile JSON
        #[arg(long)]
        profile: Option<String>,
    },
    /// Print the resolved configuration file path
    ConfigPath,
}
