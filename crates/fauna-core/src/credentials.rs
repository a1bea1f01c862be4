//! Password credential type.

use std::fmt;

/// A password supplied at user creation or login.
///
/// The database stores only a hash of it; this type exists so the plaintext
/// is never printed by accident.
///
/// # Security
///
/// The password is never exposed in Debug output to prevent accidental logging.
///
/// # Example
///
/// ```
/// use fauna_core::Password;
///
/// let password = Password::new("Password");
/// assert_eq!(format!("{:?}", password), "Password(\"[REDACTED]\")");
/// ```
#[derive(Clone)]
pub struct Password(String);

impl Password {
    /// Create a new password credential.
    pub fn new(password: impl Into<String>) -> Self {
        Self(password.into())
    }

    /// Returns the plaintext password.
    ///
    /// # Security
    ///
    /// Use this only when constructing create or login requests.
    /// Never log or display this value.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

// Intentionally hide password in Debug output
impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Password").field(&"[REDACTED]").finish()
    }
}
