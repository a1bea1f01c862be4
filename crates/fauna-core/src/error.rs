//! Error types for the fauna-fns toolkit.
//!
//! Every failure falls into one of three kinds: a call to the external
//! database failed, an identity claim did not authorize the caller, or the
//! caller passed input that cannot be represented on the wire.

use std::fmt;
use thiserror::Error;

/// The unified error type for database and handler operations.
#[derive(Debug, Error)]
pub enum Error {
    /// The external database could not be reached or rejected the request.
    #[error("external call failed: {0}")]
    ExternalCall(#[from] ExternalCallError),

    /// The caller's identity claim is missing or no longer valid.
    #[error("authorization failed: {0}")]
    Authorization(#[from] AuthorizationError),

    /// Input validation errors (collection name, reference, URL format).
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),
}

impl Error {
    /// Returns the protocol error if the database rejected the request.
    pub fn as_protocol(&self) -> Option<&ProtocolError> {
        match self {
            Error::ExternalCall(ExternalCallError::Rejected(err)) => Some(err),
            _ => None,
        }
    }

    /// Check if the database refused a write because a unique field collided.
    pub fn is_conflict(&self) -> bool {
        self.as_protocol().is_some_and(ProtocolError::is_conflict)
    }

    /// Check if the database refused a login.
    pub fn is_authentication_failure(&self) -> bool {
        self.as_protocol()
            .is_some_and(ProtocolError::is_authentication_failure)
    }
}

impl From<ProtocolError> for Error {
    fn from(err: ProtocolError) -> Self {
        Error::ExternalCall(ExternalCallError::Rejected(err))
    }
}

/// Failures of a call to the external database.
#[derive(Debug, Error)]
pub enum ExternalCallError {
    /// Network connection failed.
    #[error("connection failed: {message}")]
    Connection { message: String },

    /// Request timed out.
    #[error("request timed out")]
    Timeout,

    /// Generic HTTP error.
    #[error("HTTP error: {message}")]
    Http { message: String },

    /// The response body could not be decoded.
    #[error("unexpected response: {message}")]
    Decode { message: String },

    /// Local storage failed (file-backed database).
    #[error("storage error: {message}")]
    Storage { message: String },

    /// The database answered with an error document.
    #[error("rejected: {0}")]
    Rejected(ProtocolError),
}

/// Reasons an identity claim does not authorize the caller.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AuthorizationError {
    /// No user claim was supplied by the hosting platform.
    #[error("no user claim present")]
    MissingClaim,

    /// The claim carries no expiration timestamp.
    #[error("user claim has no expiration")]
    MissingExpiry,

    /// The claim expired at or before the current time.
    #[error("user claim expired at {exp} (now {now})")]
    Expired { exp: f64, now: f64 },

    /// A network database was selected without an admin secret.
    #[error("a secret is required for {endpoint}")]
    SecretRequired { endpoint: String },
}

/// Error code the database returns when a unique constraint is violated.
pub const CODE_INSTANCE_NOT_UNIQUE: &str = "instance not unique";

/// Error code the database returns when a login is refused.
pub const CODE_AUTHENTICATION_FAILED: &str = "authentication failed";

/// Error code the database returns for a bad or missing secret.
pub const CODE_UNAUTHORIZED: &str = "unauthorized";

/// An error document returned by the database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProtocolError {
    /// HTTP status code.
    pub status: u16,
    /// Database error code (if present).
    pub code: Option<String>,
    /// Human-readable description from the server.
    pub description: Option<String>,
}

impl fmt::Display for ProtocolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HTTP {}", self.status)?;
        if let Some(ref code) = self.code {
            write!(f, " [{}]", code)?;
        }
        if let Some(ref description) = self.description {
            write!(f, ": {}", description)?;
        }
        Ok(())
    }
}

impl std::error::Error for ProtocolError {}

impl ProtocolError {
    /// Create a new protocol error.
    pub fn new(status: u16, code: Option<String>, description: Option<String>) -> Self {
        Self {
            status,
            code,
            description,
        }
    }

    /// A unique-constraint violation, as returned by the database.
    pub fn conflict(description: impl Into<String>) -> Self {
        Self::new(
            400,
            Some(CODE_INSTANCE_NOT_UNIQUE.to_string()),
            Some(description.into()),
        )
    }

    /// A refused login, as returned by the database.
    pub fn authentication_failed() -> Self {
        Self::new(
            400,
            Some(CODE_AUTHENTICATION_FAILED.to_string()),
            Some("The document was not found or provided password was incorrect.".to_string()),
        )
    }

    /// Check if this is a unique-constraint violation.
    pub fn is_conflict(&self) -> bool {
        self.code.as_deref() == Some(CODE_INSTANCE_NOT_UNIQUE)
    }

    /// Check if this is a refused login.
    pub fn is_authentication_failure(&self) -> bool {
        self.code.as_deref() == Some(CODE_AUTHENTICATION_FAILED)
    }

    /// Check if the secret used for the request was rejected.
    pub fn is_unauthorized(&self) -> bool {
        self.status == 401 || self.code.as_deref() == Some(CODE_UNAUTHORIZED)
    }
}

/// Input validation errors.
#[derive(Debug, Error)]
pub enum InvalidInputError {
    /// Invalid collection name.
    #[error("invalid collection '{value}': {reason}")]
    Collection { value: String, reason: String },

    /// Invalid record reference.
    #[error("invalid reference '{value}': {reason}")]
    RecordRef { value: String, reason: String },

    /// Invalid database URL.
    #[error("invalid database URL '{value}': {reason}")]
    DatabaseUrl { value: String, reason: String },

    /// Invalid user data payload.
    #[error("invalid user data: {reason}")]
    UserData { reason: String },

    /// Undecodable client context from the hosting platform.
    #[error("invalid client context: {reason}")]
    ClientContext { reason: String },

    /// Generic invalid input.
    #[error("invalid input: {message}")]
    Other { message: String },
}
