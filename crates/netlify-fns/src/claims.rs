//! Identity claims supplied by the hosting platform.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Number, Value};

use fauna_core::error::AuthorizationError;

/// The signed-in user as decoded by the identity provider.
///
/// The platform has already verified the token; the claim is trusted as is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserClaim {
    /// Expiration in seconds since the epoch, possibly fractional.
    ///
    /// A value that is not a number is dropped, leaving the claim without
    /// an expiry.
    #[serde(
        default,
        deserialize_with = "numeric_or_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub exp: Option<Number>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Every other claim, kept verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl UserClaim {
    /// Expiration as fractional seconds since the epoch.
    pub fn expires_at(&self) -> Option<f64> {
        self.exp.as_ref().and_then(Number::as_f64)
    }
}

fn numeric_or_none<'de, D>(deserializer: D) -> Result<Option<Number>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Number(n)) => Ok(Some(n)),
        _ => Ok(None),
    }
}

/// Outcome of checking a claim, computed once per request.
#[derive(Debug, Clone, PartialEq)]
pub enum Validity<'a> {
    Valid(&'a UserClaim),
    Invalid(AuthorizationError),
}

impl<'a> Validity<'a> {
    /// Check an optional claim against `now` (seconds since the epoch).
    ///
    /// A claim is valid only when it carries `exp` and `exp` is strictly
    /// later than `now`.
    pub fn check(user: Option<&'a UserClaim>, now: f64) -> Self {
        let Some(user) = user else {
            return Validity::Invalid(AuthorizationError::MissingClaim);
        };

        match user.expires_at() {
            None => Validity::Invalid(AuthorizationError::MissingExpiry),
            Some(exp) if exp > now => Validity::Valid(user),
            Some(exp) => Validity::Invalid(AuthorizationError::Expired { exp, now }),
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Validity::Valid(_))
    }
}
