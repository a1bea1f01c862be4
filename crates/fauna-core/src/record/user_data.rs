//! Validated user attribute payload.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::error::{Error, InvalidInputError};

/// Application-chosen attributes stored in a user document's `data` field.
///
/// This type guarantees the value is a JSON object. Beyond that it is
/// schema-agnostic; interpretation is left to the application.
///
/// # Example
///
/// ```
/// use fauna_core::UserData;
/// use serde_json::json;
///
/// let data = UserData::new(json!({ "name": "player 1" })).unwrap();
/// assert_eq!(data.get("name"), Some(&json!("player 1")));
/// assert!(UserData::new(json!("player 1")).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UserData(Map<String, Value>);

impl UserData {
    /// Create user data from a JSON value.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is not a JSON object.
    pub fn new(value: Value) -> Result<Self, Error> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            other => Err(InvalidInputError::UserData {
                reason: format!("expected a JSON object, got {}", kind(&other)),
            }
            .into()),
        }
    }

    /// Create user data holding only a display name.
    pub fn with_name(name: impl Into<String>) -> Self {
        let mut map = Map::new();
        map.insert("name".to_string(), Value::String(name.into()));
        Self(map)
    }

    /// Get a field from the data.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Get a reference to the underlying object.
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Consume and return the data as a JSON value.
    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

impl Serialize for UserData {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for UserData {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        UserData::new(value).map_err(serde::de::Error::custom)
    }
}
