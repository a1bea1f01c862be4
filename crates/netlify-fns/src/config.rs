//! Function configuration, read once per process.

use fauna_core::Secret;

/// Environment variable holding the client-scoped database key.
pub const CLIENT_SECRET_ENV: &str = "FAUNADB_CLIENT_SECRET";

/// Settings shared by every invocation of a handler.
#[derive(Debug, Clone, Default)]
pub struct FunctionConfig {
    /// Key handed to authorized users. `None` when not configured.
    pub client_secret: Option<Secret>,
}

impl FunctionConfig {
    pub fn new(client_secret: Option<Secret>) -> Self {
        Self { client_secret }
    }

    /// Read the configuration from the process environment.
    ///
    /// An empty value counts as unset.
    pub fn from_env() -> Self {
        let client_secret = std::env::var(CLIENT_SECRET_ENV)
            .ok()
            .filter(|s| !s.is_empty())
            .map(Secret::new);
        Self { client_secret }
    }
}
