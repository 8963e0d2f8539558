//! Bearer token handling.

use secrecy::{ExposeSecret, SecretString};

/// Length of a lexoffice API key.
pub const TOKEN_LENGTH: usize = 48;

/// A lexoffice API key.
///
/// The secret is never printed by `Debug`. Use [`expose`](Self::expose)
/// when the raw value is genuinely needed.
#[derive(Clone)]
pub struct AccessToken {
    secret: SecretString,
}

impl AccessToken {
    /// Wrap a raw API key.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            secret: SecretString::from(token.into()),
        }
    }

    /// Check the key against the published format.
    ///
    /// This is a purely syntactic check: exactly [`TOKEN_LENGTH`]
    /// characters from `[A-Za-z0-9_-]`. It says nothing about whether
    /// lexoffice will accept the key.
    pub fn is_well_formed(&self) -> bool {
        let raw = self.secret.expose_secret();
        raw.len() == TOKEN_LENGTH
            && raw
                .bytes()
                .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
    }

    /// The raw token value.
    pub fn expose(&self) -> &str {
        self.secret.expose_secret()
    }

    /// Value for the `Authorization` header.
    pub(crate) fn bearer(&self) -> String {
        format!("Bearer {}", self.secret.expose_secret())
    }
}

impl std::fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("AccessToken").field(&"[REDACTED]").finish()
    }
}

impl From<String> for AccessToken {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for AccessToken {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}
