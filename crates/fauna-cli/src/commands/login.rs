//! Login command implementation.

use anyhow::{Context, Result};
use clap::Args;

use fauna_core::{CollectionName, Database, Password, RecordRef};

use crate::config::AdminConfig;
use crate::output;

#[derive(Args, Debug)]
pub struct LoginArgs {
    /// Collection the user document lives in
    #[arg(long, default_value = "login_test")]
    pub collection: String,

    /// Id of the user document
    #[arg(long, default_value = "286357188828463624")]
    pub id: String,

    /// Password to log in with
    #[arg(long, default_value = "Password")]
    pub password: String,
}

pub async fn run(args: LoginArgs, config: &AdminConfig) -> Result<()> {
    let collection = CollectionName::new(&args.collection).context("Invalid collection name")?;
    let reference = RecordRef::from_parts(collection, &args.id).context("Invalid document id")?;
    let password = Password::new(&args.password);

    let db = config.connect()?;
    output::progress(&format!("Logging in as {}...", reference));

    let token = match db.login(&reference, &password).await {
        Ok(token) => token,
        Err(err) => {
            output::login_failed();
            return Err(err).context("Failed to login");
        }
    };

    output::token(&token);

    Ok(())
}
