//! fauna - admin CLI for the hosted document database.
//!
//! Creates password-bearing user documents and logs in as them, against the
//! hosted endpoint or a local `file://` database.

mod backend;
mod cli;
mod commands;
mod config;
mod output;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use cli::{Cli, Commands};
use config::AdminConfig;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.verbose, cli.json_logs);

    let config = AdminConfig::from_cli(&cli)?;

    match cli.command {
        Commands::CreateUser(args) => commands::create_user::run(args, &config).await,
        Commands::Login(args) => commands::login::run(args, &config).await,
    }
}

fn init_logging(verbosity: u8, json: bool) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
            .init();
    }
}
