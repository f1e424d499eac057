//! CLI argument parsing with clap
//!
//! Defines the command-line interface structure, including all commands,
//! arguments, and their documentation.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::config::Environment as AppEnvironment;

/// A notification dispatch service with per-user channel preferences
#[derive(Parser, Debug)]
#[command(name = "courier-rs")]
#[command(about = "A notification dispatch service with per-user channel preferences")]
#[command(long_about = "
Courier-rs stores per-user contact preferences (email/SMS opt-in, address,
phone) and forwards messages to an external delivery service according to
those preferences, fanning out concurrently across enabled channels.

EXAMPLES:
    # Start the server with default configuration
    courier-rs serve

    # Start server on custom host and port
    courier-rs serve --host 0.0.0.0 --port 8080

    # Use a single configuration file
    courier-rs --config /etc/courier/production.toml serve

    # Check configuration without starting the server
    courier-rs serve --dry-run
")]
#[command(version)]
pub struct Cli {
    /// Subcommand to execute; defaults to `serve`
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Configuration file path
    ///
    /// Loads only this TOML file instead of the layered configuration
    /// directory.
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Override environment detection
    ///
    /// Forces a specific environment configuration instead of reading
    /// COURIER_APP_ENV.
    #[arg(short, long, value_enum)]
    pub env: Option<Environment>,

    /// Enable verbose logging (debug level)
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the web server (default)
    Serve {
        /// Host address to bind to
        #[arg(long, value_name = "ADDRESS")]
        host: Option<String>,

        /// Port number to listen on
        #[arg(long, value_name = "PORT")]
        port: Option<u16>,

        /// Validate configuration and exit without starting the server
        #[arg(long)]
        dry_run: bool,
    },
}

/// CLI-facing environment names
#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum Environment {
    #[value(alias = "dev")]
    Development,
    Test,
    #[value(alias = "stage")]
    Staging,
    #[value(alias = "prod")]
    Production,
}

impl From<Environment> for AppEnvironment {
    fn from(env: Environment) -> Self {
        match env {
            Environment::Development => AppEnvironment::Development,
            Environment::Test => AppEnvironment::Test,
            Environment::Staging => AppEnvironment::Staging,
            Environment::Production => AppEnvironment::Production,
        }
    }
}
