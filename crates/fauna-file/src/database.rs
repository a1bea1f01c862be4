//! File-backed database implementation.

use async_trait::async_trait;
use bcrypt::{DEFAULT_COST, hash, verify};
use chrono::Utc;
use tracing::{debug, info, instrument};
use uuid::Uuid;

use fauna_core::error::{Error, ExternalCallError, InvalidInputError, ProtocolError};
use fauna_core::{
    CollectionName, Database, DatabaseUrl, NewUser, Password, RecordRef, Result, Secret,
    SessionToken, UserRecord,
};

use crate::store::FileStore;

/// Data field that must be unique per collection unless configured otherwise.
pub const DEFAULT_UNIQUE_FIELD: &str = "name";

/// Filesystem-backed database implementation.
#[derive(Debug, Clone)]
pub struct FileDatabase {
    store: FileStore,
    url: DatabaseUrl,
    unique_field: Option<String>,
    hash_cost: u32,
}

impl FileDatabase {
    /// Create a new file-backed database at the given root directory.
    pub fn new(root: impl AsRef<std::path::Path>, url: DatabaseUrl) -> Self {
        Self {
            store: FileStore::new(root),
            url,
            unique_field: Some(DEFAULT_UNIQUE_FIELD.to_string()),
            hash_cost: DEFAULT_COST,
        }
    }

    /// Open the database a `file://` URL points at.
    pub fn from_url(url: DatabaseUrl) -> Result<Self> {
        let root = url.to_file_path().ok_or_else(|| InvalidInputError::DatabaseUrl {
            value: url.to_string(),
            reason: "not a file:// URL".to_string(),
        })?;
        Ok(Self::new(root, url))
    }

    /// Enforce uniqueness on a different data field, or on none.
    pub fn with_unique_field(mut self, field: Option<&str>) -> Self {
        self.unique_field = field.map(str::to_string);
        self
    }

    /// Use a different bcrypt cost for new passwords.
    pub fn with_hash_cost(mut self, cost: u32) -> Self {
        self.hash_cost = cost;
        self
    }
}

fn hash_error(err: bcrypt::BcryptError) -> Error {
    ExternalCallError::Storage {
        message: format!("password hashing failed: {}", err),
    }
    .into()
}

#[async_trait]
impl Database for FileDatabase {
    fn url(&self) -> &DatabaseUrl {
        &self.url
    }

    #[instrument(skip(self, user), fields(%collection))]
    async fn create_user(
        &self,
        collection: &CollectionName,
        user: &NewUser,
    ) -> Result<UserRecord> {
        debug!("Creating user in file database");

        let password_hash = hash(user.password.expose(), self.hash_cost).map_err(hash_error)?;

        let document = self.store.insert_document(
            collection,
            &user.data,
            Some(&password_hash),
            self.unique_field.as_deref(),
        )?;

        let record = UserRecord {
            reference: RecordRef::from_parts(collection.clone(), document.id)?,
            ts: document.ts,
            data: document.data,
        };

        info!(reference = %record.reference, "Created user");
        Ok(record)
    }

    #[instrument(skip(self, password), fields(%reference))]
    async fn login(&self, reference: &RecordRef, password: &Password) -> Result<SessionToken> {
        debug!("Logging in against file database");

        // Unknown documents and wrong passwords are indistinguishable to the caller.
        let Some(password_hash) = self
            .store
            .get_document(reference)?
            .and_then(|doc| doc.password_hash)
        else {
            return Err(ProtocolError::authentication_failed().into());
        };

        if !verify(password.expose(), &password_hash).map_err(hash_error)? {
            return Err(ProtocolError::authentication_failed().into());
        }

        let token = SessionToken {
            id: self.store.generate_id(),
            instance: reference.clone(),
            ts: Utc::now().timestamp_micros(),
            secret: Secret::new(format!("fnl{}", Uuid::new_v4().simple())),
        };

        info!(token = %token.id, "Logged in");
        Ok(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fauna_core::UserData;
    use serde_json::json;
    use tempfile::TempDir;

    fn database(dir: &TempDir) -> FileDatabase {
        let url = DatabaseUrl::new("file:///unused").unwrap();
        FileDatabase::new(dir.path(), url).with_hash_cost(4)
    }

    fn login_test() -> CollectionName {
        CollectionName::new("login_test").unwrap()
    }

    fn player(name: &str, password: &str) -> NewUser {
        NewUser::new(UserData::with_name(name), Password::new(password))
    }

    #[tokio::test]
    async fn create_then_login_round_trip() {
        let dir = TempDir::new().unwrap();
        let db = database(&dir);

        let record = db
            .create_user(&login_test(), &player("player 1", "Password"))
            .await
            .unwrap();
        assert_eq!(record.data.get("name"), Some(&json!("player 1")));
        assert_eq!(record.reference.collection(), &login_test());

        let token = db
            .login(&record.reference, &Password::new("Password"))
            .await
            .unwrap();
        assert_eq!(token.instance, record.reference);
        assert!(token.secret.expose().starts_with("fnl"));
    }

    #[tokio::test]
    async fn login_with_other_password_fails() {
        let dir = TempDir::new().unwrap();
        let db = database(&dir);

        let record = db
            .create_user(&login_test(), &player("player 1", "Password"))
            .await
            .unwrap();

        for wrong in ["password", "", "Password "] {
            let err = db
                .login(&record.reference, &Password::new(wrong))
                .await
                .unwrap_err();
            assert!(err.is_authentication_failure(), "{wrong:?} accepted");
        }
    }

    #[tokio::test]
    async fn login_unknown_reference_fails() {
        let dir = TempDir::new().unwrap();
        let db = database(&dir);
        let reference = RecordRef::new("login_test/286357188828463624").unwrap();

        let err = db
            .login(&reference, &Password::new("Password"))
            .await
            .unwrap_err();
        assert!(err.is_authentication_failure());
    }

    #[tokio::test]
    async fn duplicate_name_conflicts() {
        let dir = TempDir::new().unwrap();
        let db = database(&dir);

        db.create_user(&login_test(), &player("player 1", "Password"))
            .await
            .unwrap();
        let err = db
            .create_user(&login_test(), &player("player 1", "Other"))
            .await
            .unwrap_err();
        assert!(err.is_conflict());

        // Other names and other collections are unaffected.
        db.create_user(&login_test(), &player("player 2", "Password"))
            .await
            .unwrap();
        let other = CollectionName::new("other").unwrap();
        db.create_user(&other, &player("player 1", "Password"))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn uniqueness_can_be_disabled() {
        let dir = TempDir::new().unwrap();
        let db = database(&dir).with_unique_field(None);

        db.create_user(&login_test(), &player("player 1", "a"))
            .await
            .unwrap();
        db.create_user(&login_test(), &player("player 1", "b"))
            .await
            .unwrap();
    }

    #[test]
    fn from_url_requires_file_scheme() {
        let url = DatabaseUrl::new("https://db.fauna.com").unwrap();
        assert!(FileDatabase::from_url(url).is_err());
    }
}
