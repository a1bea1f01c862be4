//! Backend selection for the CLI.

use async_trait::async_trait;

use fauna_core::{
    CollectionName, Database, DatabaseUrl, NewUser, Password, RecordRef, Result, SessionToken,
    UserRecord,
};
use fauna_file::FileDatabase;
use fauna_http::HttpDatabase;

/// The database a command runs against, picked from the endpoint scheme.
#[derive(Debug)]
pub enum AdminDatabase {
    File(FileDatabase),
    Http(HttpDatabase),
}

#[async_trait]
impl Database for AdminDatabase {
    fn url(&self) -> &DatabaseUrl {
        match self {
            AdminDatabase::File(db) => db.url(),
            AdminDatabase::Http(db) => db.url(),
        }
    }

    async fn create_user(
        &self,
        collection: &CollectionName,
        user: &NewUser,
    ) -> Result<UserRecord> {
        match self {
            AdminDatabase::File(db) => db.create_user(collection, user).await,
            AdminDatabase::Http(db) => db.create_user(collection, user).await,
        }
    }

    async fn login(&self, reference: &RecordRef, password: &Password) -> Result<SessionToken> {
        match self {
            AdminDatabase::File(db) => db.login(reference, password).await,
            AdminDatabase::Http(db) => db.login(reference, password).await,
        }
    }
}
