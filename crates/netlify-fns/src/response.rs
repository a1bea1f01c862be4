//! Response shape expected by the hosting platform.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// An HTTP response returned from a handler.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,

    /// JSON-encoded response body.
    pub body: String,
}

impl FunctionResponse {
    /// Respond with `body` encoded as JSON.
    pub fn json(status_code: u16, body: &Value) -> Self {
        Self {
            status_code,
            body: body.to_string(),
        }
    }

    /// Respond with `{"message": ...}`.
    pub fn message(status_code: u16, message: &str) -> Self {
        Self::json(status_code, &json!({ "message": message }))
    }

    /// Parse the body back into JSON.
    pub fn body_json(&self) -> serde_json::Result<Value> {
        serde_json::from_str(&self.body)
    }
}
