//! fauna-core - Core types and traits for the hosted document database.

pub mod credentials;
pub mod error;
pub mod record;
pub mod tokens;
pub mod traits;
pub mod types;

pub use credentials::Password;
pub use error::{AuthorizationError, Error, ExternalCallError, ProtocolError};
pub use record::{NewUser, SessionToken, UserData, UserRecord};
pub use tokens::Secret;
pub use traits::Database;
pub use types::{CollectionName, DatabaseUrl, RecordRef};

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
