//! Database trait.

use async_trait::async_trait;

use crate::types::{CollectionName, DatabaseUrl, RecordRef};
use crate::{NewUser, Password, Result, SessionToken, UserRecord};

/// A document database that can create users and log them in.
#[async_trait]
pub trait Database: Send + Sync {
    /// Returns the endpoint this instance talks to.
    fn url(&self) -> &DatabaseUrl;

    /// Create a user document in a collection.
    ///
    /// Fails with a conflict if a unique field is already taken.
    async fn create_user(&self, collection: &CollectionName, user: &NewUser)
    -> Result<UserRecord>;

    /// Log in as the referenced document with its password.
    async fn login(&self, reference: &RecordRef, password: &Password) -> Result<SessionToken>;
}
