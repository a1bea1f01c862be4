//! Admin configuration, resolved once at startup.

use anyhow::{Context, Result};

use fauna_core::error::AuthorizationError;
use fauna_core::{DatabaseUrl, Secret};
use fauna_file::FileDatabase;
use fauna_http::HttpDatabase;

use crate::backend::AdminDatabase;
use crate::cli::Cli;

/// Where and as whom the CLI talks to the database.
#[derive(Debug, Clone)]
pub struct AdminConfig {
    pub endpoint: DatabaseUrl,
    pub secret: Option<Secret>,
}

impl AdminConfig {
    /// Build the configuration from parsed arguments and environment.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let endpoint = DatabaseUrl::new(&cli.endpoint).context("Invalid database endpoint")?;
        let secret = cli
            .secret
            .as_deref()
            .filter(|s| !s.is_empty())
            .map(Secret::new);

        Ok(Self { endpoint, secret })
    }

    /// Open the backend the endpoint selects.
    pub fn connect(&self) -> Result<AdminDatabase> {
        if self.endpoint.is_local() {
            let db = FileDatabase::from_url(self.endpoint.clone())
                .context("Failed to open file database")?;
            return Ok(AdminDatabase::File(db));
        }

        let secret = self
            .secret
            .clone()
            .ok_or_else(|| AuthorizationError::SecretRequired {
                endpoint: self.endpoint.to_string(),
            })
            .context("Set FAUNA_SECRET or pass --secret")?;

        let db = HttpDatabase::new(self.endpoint.clone(), secret)
            .context("Failed to build HTTP client")?;
        Ok(AdminDatabase::Http(db))
    }
}
