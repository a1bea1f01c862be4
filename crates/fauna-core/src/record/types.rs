//! Document operation types.

use serde::Serialize;

use crate::types::RecordRef;
use crate::{Password, Secret};

use super::UserData;

/// A user to be created: attributes plus the password credential.
///
/// The password is hashed by the database and never returned.
#[derive(Debug, Clone)]
pub struct NewUser {
    /// Attributes stored in the document's `data` field.
    pub data: UserData,

    /// Password credential attached at creation time.
    pub password: Password,
}

impl NewUser {
    /// Create a new user payload.
    pub fn new(data: UserData, password: Password) -> Self {
        Self { data, password }
    }
}

/// A user document as stored by the database.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserRecord {
    /// Reference generated by the database.
    #[serde(rename = "ref")]
    pub reference: RecordRef,

    /// Write timestamp in microseconds since the epoch.
    pub ts: i64,

    /// The document's attributes.
    pub data: UserData,
}

/// The result of a successful login.
#[derive(Debug, Clone)]
pub struct SessionToken {
    /// Id of the token document.
    pub id: String,

    /// The document the token was issued for.
    pub instance: RecordRef,

    /// Issue timestamp in microseconds since the epoch.
    pub ts: i64,

    /// Secret to use for subsequent calls on behalf of the instance.
    pub secret: Secret,
}
