//! Command-line entry point: argument parsing, configuration loading, and
//! command execution.

pub mod parser;

pub use parser::{Cli, Commands};

use clap::Parser;

use crate::config::{ConfigLoader, Settings};
use crate::logger::init_logger;
use crate::server::Server;

/// Parses arguments, loads configuration, and runs the selected command.
///
/// CLI flags override file- and environment-sourced settings; validation
/// runs after all overrides are applied.
pub async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut loader = ConfigLoader::new()?;
    if let Some(path) = cli.config {
        loader = loader.with_config_file(path);
    }
    if let Some(env) = cli.env {
        loader = loader.with_environment(env.into());
    }

    let mut settings = loader.load()?;

    if cli.verbose {
        settings.logger.level = "debug".to_string();
    } else if cli.quiet {
        settings.logger.level = "error".to_string();
    }

    match cli.command {
        Some(Commands::Serve {
            host,
            port,
            dry_run,
        }) => serve(settings, host, port, dry_run).await,
        None => serve(settings, None, None, false).await,
    }
}

async fn serve(
    mut settings: Settings,
    host: Option<String>,
    port: Option<u16>,
    dry_run: bool,
) -> anyhow::Result<()> {
    if let Some(host) = host {
        settings.server.host = host;
    }
    if let Some(port) = port {
        settings.server.port = port;
    }

    settings.validate()?;

    if dry_run {
        println!("Configuration is valid");
        println!("Server would bind to: {}", settings.server.address());
        println!(
            "Channel service: {} (timeout {}s)",
            settings.channels.base_url, settings.channels.timeout_seconds
        );
        return Ok(());
    }

    init_logger(&settings.logger)?;
    Server::new(settings).run().await
}
