//! Collection name type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, InvalidInputError};

/// Names the database reserves for itself.
const RESERVED: &[&str] = &["events", "sets", "self", "documents", "_"];

/// A validated collection name.
///
/// # Example
///
/// ```
/// use fauna_core::CollectionName;
///
/// let collection = CollectionName::new("login_test").unwrap();
/// assert_eq!(collection.as_str(), "login_test");
/// assert!(CollectionName::new("events").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CollectionName(String);

impl CollectionName {
    /// Create a new collection name, validating the format.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is empty, too long, reserved, starts
    /// with `.`, or contains `/`, `%` or whitespace.
    pub fn new(s: impl Into<String>) -> Result<Self, Error> {
        let s = s.into();
        Self::validate(&s)?;
        Ok(Self(s))
    }

    /// Returns the collection name.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn validate(s: &str) -> Result<(), Error> {
        let reason = if s.is_empty() {
            Some("cannot be empty".to_string())
        } else if s.len() > 256 {
            Some("exceeds maximum length of 256 characters".to_string())
        } else if RESERVED.contains(&s) {
            Some("is a reserved name".to_string())
        } else if s.starts_with('.') {
            Some("cannot start with '.'".to_string())
        } else {
            s.chars()
                .find(|c| *c == '/' || *c == '%' || c.is_whitespace())
                .map(|c| format!("contains invalid character '{}'", c))
        };

        match reason {
            Some(reason) => Err(InvalidInputError::Collection {
                value: s.to_string(),
                reason,
            }
            .into()),
            None => Ok(()),
        }
    }
}

impl fmt::Display for CollectionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for CollectionName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for CollectionName {
    type Error = Error;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<CollectionName> for String {
    fn from(name: CollectionName) -> Self {
        name.0
    }
}

impl AsRef<str> for CollectionName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_names() {
        assert!(CollectionName::new("login_test").is_ok());
        assert!(CollectionName::new("users-2024").is_ok());
    }

    #[test]
    fn reserved_names_rejected() {
        for name in RESERVED {
            assert!(CollectionName::new(*name).is_err(), "{name} accepted");
        }
    }

    #[test]
    fn invalid_characters_rejected() {
        assert!(CollectionName::new("").is_err());
        assert!(CollectionName::new("a/b").is_err());
        assert!(CollectionName::new("100%").is_err());
        assert!(CollectionName::new("two words").is_err());
        assert!(CollectionName::new(".").is_err());
        assert!(CollectionName::new("..").is_err());
        assert!(CollectionName::new(".hidden").is_err());
        assert!(CollectionName::new("login.test").is_ok());
    }

    #[test]
    fn serde_validates() {
        let ok: CollectionName = serde_json::from_str("\"login_test\"").unwrap();
        assert_eq!(ok.as_str(), "login_test");
        assert!(serde_json::from_str::<CollectionName>("\"self\"").is_err());
    }
}
