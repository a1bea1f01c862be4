//! Query expressions and response documents of the database's JSON protocol.

use serde::Deserialize;
use serde_json::{Map, Value, json};

use fauna_core::error::ExternalCallError;
use fauna_core::{CollectionName, NewUser, Password, RecordRef, Result, UserData};

// ============================================================================
// Headers
// ============================================================================

/// Header selecting the protocol version the expressions below are written for.
pub const API_VERSION_HEADER: &str = "x-faunadb-api-version";

/// Protocol version spoken by this crate.
pub const API_VERSION: &str = "4";

// ============================================================================
// Query Expressions
// ============================================================================

/// `Create(Collection(c), { data, credentials: { password } })`
pub fn create_user(collection: &CollectionName, user: &NewUser) -> Value {
    json!({
        "create": { "collection": collection.as_str() },
        "params": {
            "object": {
                "data": object_literal(user.data.as_map()),
                "credentials": { "object": { "password": user.password.expose() } }
            }
        }
    })
}

/// `Login(Ref(Collection(c), id), { password })`
pub fn login(reference: &RecordRef, password: &Password) -> Value {
    json!({
        "login": {
            "ref": { "collection": reference.collection().as_str() },
            "id": reference.id()
        },
        "params": { "object": { "password": password.expose() } }
    })
}

/// Encode a JSON object as an object literal.
///
/// Bare objects are read as function calls, so every nested object is
/// wrapped in `{"object": ...}`.
fn object_literal(map: &Map<String, Value>) -> Value {
    let fields = map
        .iter()
        .map(|(key, value)| (key.clone(), literal(value)))
        .collect::<Map<_, _>>();
    json!({ "object": fields })
}

fn literal(value: &Value) -> Value {
    match value {
        Value::Object(map) => object_literal(map),
        Value::Array(items) => Value::Array(items.iter().map(literal).collect()),
        other => other.clone(),
    }
}

// ============================================================================
// Response Documents
// ============================================================================

/// Successful query response envelope.
#[derive(Debug, Deserialize)]
pub struct QueryResponse<T> {
    pub resource: T,
}

/// A tagged reference: `{"@ref": {"id": ..., "collection": {"@ref": ...}}}`.
#[derive(Debug, Deserialize)]
pub struct TaggedRef {
    #[serde(rename = "@ref")]
    pub inner: RefBody,
}

#[derive(Debug, Deserialize)]
pub struct RefBody {
    pub id: String,
    #[serde(default)]
    pub collection: Option<Box<TaggedRef>>,
}

impl TaggedRef {
    /// Convert a document reference into a [`RecordRef`].
    pub fn to_record_ref(&self) -> Result<RecordRef> {
        let collection = self
            .inner
            .collection
            .as_ref()
            .ok_or_else(|| decode_error(format!("reference {} has no collection", self.inner.id)))?;

        let collection = CollectionName::new(&collection.inner.id)
            .map_err(|e| decode_error(e.to_string()))?;

        RecordRef::from_parts(collection, &self.inner.id)
            .map_err(|e| decode_error(e.to_string()).into())
    }
}

/// A document returned by `Create`.
#[derive(Debug, Deserialize)]
pub struct DocumentResource {
    #[serde(rename = "ref")]
    pub reference: TaggedRef,
    pub ts: i64,
    #[serde(default)]
    pub data: Option<Value>,
}

impl DocumentResource {
    /// Returns the document's data with value tags removed.
    pub fn user_data(&self) -> Result<UserData> {
        match &self.data {
            Some(data) => {
                UserData::new(untag(data.clone())).map_err(|e| decode_error(e.to_string()).into())
            }
            None => Ok(UserData::default()),
        }
    }
}

/// A token returned by `Login`.
#[derive(Debug, Deserialize)]
pub struct TokenResource {
    #[serde(rename = "ref")]
    pub reference: TaggedRef,
    pub ts: i64,
    pub instance: TaggedRef,
    pub secret: String,
}

/// Error response body.
#[derive(Debug, Default, Deserialize)]
pub struct ErrorResponse {
    #[serde(default)]
    pub errors: Vec<ErrorEntry>,
}

/// A single entry of an error response.
#[derive(Debug, Deserialize)]
pub struct ErrorEntry {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Strip `@obj` escapes the server adds around objects whose keys start with `@`.
fn untag(value: Value) -> Value {
    match value {
        Value::Object(mut map) => {
            if map.len() == 1
                && map.get("@obj").is_some_and(Value::is_object)
                && let Some(inner) = map.remove("@obj")
            {
                return untag(inner);
            }
            Value::Object(map.into_iter().map(|(k, v)| (k, untag(v))).collect())
        }
        Value::Array(items) => Value::Array(items.into_iter().map(untag).collect()),
        other => other,
    }
}

fn decode_error(message: impl Into<String>) -> ExternalCallError {
    ExternalCallError::Decode {
        message: message.into(),
    }
}
