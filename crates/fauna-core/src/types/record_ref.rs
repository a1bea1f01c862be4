//! Record reference type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::CollectionName;
use crate::error::{Error, InvalidInputError};

/// A validated reference to a document in a collection.
///
/// Document ids are decimal integer strings assigned by the database.
/// Format: `<collection>/<id>`
///
/// # Example
///
/// ```
/// use fauna_core::RecordRef;
///
/// let reference = RecordRef::new("login_test/286357188828463624").unwrap();
/// assert_eq!(reference.collection().as_str(), "login_test");
/// assert_eq!(reference.id(), "286357188828463624");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct RecordRef {
    collection: CollectionName,
    id: String,
}

impl RecordRef {
    /// Parse a reference from its `collection/id` form.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a valid reference.
    pub fn new(s: impl AsRef<str>) -> Result<Self, Error> {
        let s = s.as_ref();
        Self::parse(s)
    }

    /// Create a reference from its components, validating the id.
    pub fn from_parts(collection: CollectionName, id: impl Into<String>) -> Result<Self, Error> {
        let id = id.into();
        Self::validate_id(&id).map_err(|reason| InvalidInputError::RecordRef {
            value: format!("{}/{}", collection, id),
            reason,
        })?;
        Ok(Self { collection, id })
    }

    /// Returns the collection.
    pub fn collection(&self) -> &CollectionName {
        &self.collection
    }

    /// Returns the document id.
    pub fn id(&self) -> &str {
        &self.id
    }

    fn validate_id(id: &str) -> Result<(), String> {
        if id.is_empty() {
            return Err("id cannot be empty".to_string());
        }
        if !id.bytes().all(|b| b.is_ascii_digit()) {
            return Err(format!("id '{}' must be a decimal integer", id));
        }
        id.parse::<u64>()
            .map(|_| ())
            .map_err(|_| format!("id '{}' is out of range", id))
    }

    fn parse(s: &str) -> Result<Self, Error> {
        let (collection, id) = s.rsplit_once('/').ok_or_else(|| InvalidInputError::RecordRef {
            value: s.to_string(),
            reason: "must have format '<collection>/<id>'".to_string(),
        })?;

        let collection = CollectionName::new(collection).map_err(|_| InvalidInputError::RecordRef {
            value: s.to_string(),
            reason: format!("invalid collection: {}", collection),
        })?;

        Self::from_parts(collection, id)
    }
}

impl fmt::Display for RecordRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.collection, self.id)
    }
}

impl FromStr for RecordRef {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Serialize for RecordRef {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for RecordRef {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        RecordRef::new(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_reference() {
        let reference = RecordRef::new("login_test/286357188828463624").unwrap();
        assert_eq!(reference.collection().as_str(), "login_test");
        assert_eq!(reference.id(), "286357188828463624");
        assert_eq!(reference.to_string(), "login_test/286357188828463624");
    }

    #[test]
    fn from_parts() {
        let collection = CollectionName::new("login_test").unwrap();
        let reference = RecordRef::from_parts(collection, "42").unwrap();
        assert_eq!(reference.to_string(), "login_test/42");
    }

    #[test]
    fn rejects_non_numeric_id() {
        assert!(RecordRef::new("login_test/abc").is_err());
        assert!(RecordRef::new("login_test/").is_err());
        assert!(RecordRef::new("login_test/99999999999999999999999").is_err());
    }

    #[test]
    fn rejects_missing_separator() {
        assert!(RecordRef::new("286357188828463624").is_err());
    }

    #[test]
    fn rejects_reserved_collection() {
        assert!(RecordRef::new("self/1").is_err());
    }
}
