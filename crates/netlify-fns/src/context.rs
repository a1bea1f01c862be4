//! Client context forwarded by the hosting platform.

use std::collections::HashMap;

use base64ct::{Base64, Encoding};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::warn;

use fauna_core::error::InvalidInputError;

use crate::claims::UserClaim;

/// Key of the platform payload inside the Lambda client context's `custom` map.
pub const NETLIFY_CUSTOM_KEY: &str = "netlify";

/// Identity information attached to an invocation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientContext {
    /// Identity service details (endpoint and a service token).
    #[serde(default)]
    pub identity: Option<Value>,

    /// Claims of the signed-in user, if any.
    ///
    /// A user entry that is not a claim object decodes to `None` without
    /// affecting `identity`.
    #[serde(default, deserialize_with = "claim_or_none")]
    pub user: Option<UserClaim>,
}

fn claim_or_none<'de, D>(deserializer: D) -> Result<Option<UserClaim>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(value) = Option::<Value>::deserialize(deserializer)? else {
        return Ok(None);
    };
    match serde_json::from_value(value) {
        Ok(user) => Ok(Some(user)),
        Err(err) => {
            warn!(%err, "ignoring malformed user claim");
            Ok(None)
        }
    }
}

impl ClientContext {
    /// Decode the base64-encoded JSON payload the platform forwards.
    pub fn decode(encoded: &str) -> Result<Self, InvalidInputError> {
        let bytes = Base64::decode_vec(encoded.trim()).map_err(|e| {
            InvalidInputError::ClientContext {
                reason: format!("bad base64: {}", e),
            }
        })?;
        serde_json::from_slice(&bytes).map_err(|e| InvalidInputError::ClientContext {
            reason: e.to_string(),
        })
    }

    /// Extract the context from the Lambda client context's `custom` map.
    ///
    /// An absent entry yields an empty context.
    pub fn from_custom(custom: &HashMap<String, String>) -> Result<Self, InvalidInputError> {
        match custom.get(NETLIFY_CUSTOM_KEY) {
            Some(encoded) => Self::decode(encoded),
            None => Ok(Self::default()),
        }
    }

    /// Like [`ClientContext::from_custom`], but a malformed payload is logged
    /// and treated as an empty context.
    pub fn from_platform(custom: Option<&HashMap<String, String>>) -> Self {
        let Some(custom) = custom else {
            return Self::default();
        };
        Self::from_custom(custom).unwrap_or_else(|err| {
            warn!(%err, "ignoring malformed client context");
            Self::default()
        })
    }
}
