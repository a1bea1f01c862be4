//! Secret types for database authentication.

use std::fmt;

/// A database secret.
///
/// Used for the administrative key that authorizes create and login calls,
/// for the client-scoped key handed to authorized callers, and for the
/// session secret a successful login returns.
///
/// # Security
///
/// - Never logged or displayed in Debug output
/// - Treat as opaque; do not parse or inspect
#[derive(Clone, PartialEq, Eq)]
pub struct Secret(String);

impl Secret {
    /// Create a new secret.
    pub fn new(secret: impl Into<String>) -> Self {
        Self(secret.into())
    }

    /// Returns the secret value.
    ///
    /// # Security
    ///
    /// Use only when building authorization headers or a response body
    /// that is meant to carry the secret.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

// Hide secret value in Debug output
impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Secret").field(&"[REDACTED]").finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn secret_hides_value_in_debug() {
        let secret = Secret::new("fnAEjKnUBmACAFwzLR3QSTsyJk4_9dZPE14xHCO2");
        let debug = format!("{:?}", secret);
        assert!(!debug.contains("fnAE"));
        assert!(debug.contains("[REDACTED]"));
    }
}
