//! CLI argument definitions.

use clap::{Parser, Subcommand};

use crate::commands::create_user::CreateUserArgs;
use crate::commands::login::LoginArgs;

/// Admin tool for the hosted document database.
#[derive(Parser, Debug)]
#[command(name = "fauna")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    /// Database endpoint (https://... or file://...)
    #[arg(long, env = "FAUNA_ENDPOINT", default_value = "https://db.fauna.com", global = true)]
    pub endpoint: String,

    /// Admin secret (required for network endpoints)
    #[arg(long, env = "FAUNA_SECRET", hide_env_values = true, global = true)]
    pub secret: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a user document with a password credential
    CreateUser(CreateUserArgs),

    /// Log in as a user document and print the session token
    Login(LoginArgs),
}
