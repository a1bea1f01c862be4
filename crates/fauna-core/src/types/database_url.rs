//! Database URL type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use url::Url;

use crate::error::{Error, InvalidInputError};

/// A validated database endpoint URL.
///
/// This type supports both network endpoints (HTTPS/HTTP) and local
/// filesystem databases (`file://`).
///
/// # Network URLs
///
/// Network URLs must use HTTPS (or HTTP for localhost) and point at the
/// hosted query endpoint.
///
/// # File URLs
///
/// File URLs (`file:///path/to/db`) enable local-only development and
/// testing without a hosted database. Documents are stored on the filesystem.
///
/// # Example
///
/// ```
/// use fauna_core::DatabaseUrl;
///
/// let db = DatabaseUrl::new("https://db.fauna.com").unwrap();
/// assert_eq!(db.query_url(), "https://db.fauna.com/");
///
/// let local = DatabaseUrl::new("file:///tmp/test-db").unwrap();
/// assert!(local.is_local());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct DatabaseUrl(Url);

impl DatabaseUrl {
    /// The hosted database's default endpoint.
    pub const DEFAULT: &'static str = "https://db.fauna.com";

    /// Create a new database URL from a string, validating the format.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is not valid or doesn't meet requirements.
    pub fn new(s: impl AsRef<str>) -> Result<Self, Error> {
        let s = s.as_ref();
        let url = Url::parse(s).map_err(|e| InvalidInputError::DatabaseUrl {
            value: s.to_string(),
            reason: e.to_string(),
        })?;

        Self::validate(&url, s)?;

        Ok(Self(url))
    }

    /// Returns the URL queries are posted to.
    pub fn query_url(&self) -> String {
        let base = self.0.as_str().trim_end_matches('/');
        format!("{}/", base)
    }

    /// Returns the base URL as a string.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Returns the host string.
    pub fn host(&self) -> Option<&str> {
        self.0.host_str()
    }

    /// Returns true if this is a local filesystem database (file:// URL).
    pub fn is_local(&self) -> bool {
        self.0.scheme() == "file"
    }

    /// Returns the filesystem path for file:// URLs.
    ///
    /// Returns `None` for non-file URLs.
    pub fn to_file_path(&self) -> Option<PathBuf> {
        if self.is_local() {
            self.0.to_file_path().ok()
        } else {
            None
        }
    }

    fn validate(url: &Url, original: &str) -> Result<(), Error> {
        let invalid = |reason: &str| -> Error {
            InvalidInputError::DatabaseUrl {
                value: original.to_string(),
                reason: reason.to_string(),
            }
            .into()
        };

        if url.cannot_be_a_base() {
            return Err(invalid("must be an absolute URL"));
        }

        let scheme = url.scheme();

        if scheme == "file" {
            if url.path().is_empty() {
                return Err(invalid("file:// URL must have a path"));
            }
            return Ok(());
        }

        let is_localhost = url
            .host_str()
            .is_some_and(|h| h == "localhost" || h == "127.0.0.1" || h == "[::1]");

        if scheme != "https" && !(scheme == "http" && is_localhost) {
            return Err(invalid("must use HTTPS (HTTP allowed only for localhost)"));
        }

        if url.host_str().is_none() {
            return Err(invalid("must have a host"));
        }

        Ok(())
    }
}

impl fmt::Display for DatabaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for DatabaseUrl {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Serialize for DatabaseUrl {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.0.as_str())
    }
}

impl<'de> Deserialize<'de> for DatabaseUrl {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        DatabaseUrl::new(&s).map_err(serde::de::Error::custom)
    }
}
