//! HTTP-backed database implementation.

use async_trait::async_trait;
use tracing::{debug, info, instrument};

use fauna_core::{
    CollectionName, Database, DatabaseUrl, NewUser, Password, RecordRef, Result, Secret,
    SessionToken, UserRecord,
};

use crate::client::QueryClient;
use crate::wire::{self, DocumentResource, TokenResource};

/// A network-backed database speaking the hosted query protocol.
#[derive(Debug, Clone)]
pub struct HttpDatabase {
    client: QueryClient,
}

impl HttpDatabase {
    /// Create a client for the database at `url`, authenticating with `secret`.
    pub fn new(url: DatabaseUrl, secret: Secret) -> Result<Self> {
        Ok(Self {
            client: QueryClient::new(url, secret)?,
        })
    }
}

#[async_trait]
impl Database for HttpDatabase {
    fn url(&self) -> &DatabaseUrl {
        self.client.endpoint()
    }

    #[instrument(skip(self, user), fields(%collection))]
    async fn create_user(
        &self,
        collection: &CollectionName,
        user: &NewUser,
    ) -> Result<UserRecord> {
        debug!("Creating user via HTTP");

        let expr = wire::create_user(collection, user);
        let resource: DocumentResource = self.client.query(&expr).await?;

        let record = UserRecord {
            reference: resource.reference.to_record_ref()?,
            ts: resource.ts,
            data: resource.user_data()?,
        };

        info!(reference = %record.reference, "Created user");
        Ok(record)
    }

    #[instrument(skip(self, password), fields(%reference))]
    async fn login(&self, reference: &RecordRef, password: &Password) -> Result<SessionToken> {
        debug!("Logging in via HTTP");

        let expr = wire::login(reference, password);
        let resource: TokenResource = self.client.query(&expr).await?;

        let token = SessionToken {
            id: resource.reference.inner.id,
            instance: resource.instance.to_record_ref()?,
            ts: resource.ts,
            secret: Secret::new(resource.secret),
        };

        info!(token = %token.id, "Logged in");
        Ok(token)
    }
}
