//! In-memory protection for the API password
//!
//! The only secret this tool handles is the Basic Auth password from the
//! `[api]` section. It is held as a `Secret<SecretValue>` so the memory is
//! zeroed on drop and `Debug` output is redacted; the value is only exposed
//! at the one place that formats the `Authorization` header.
//!
//! # Example
//!
//! ```rust
//! use loadsend::config::secret_string;
//! use secrecy::ExposeSecret;
//!
//! let password = secret_string("my-password".to_string());
//!
//! // Debug output is redacted
//! assert!(!format!("{password:?}").contains("my-password"));
//!
//! // Explicit access only
//! let pair = format!("user:{}", password.expose_secret());
//! assert_eq!(pair, "user:my-password");
//! ```

use secrecy::{CloneableSecret, DebugSecret, Secret, SerializableSecret};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use zeroize::Zeroize;

/// String newtype carrying the trait impls `Secret` requires
#[derive(Clone, Debug, Zeroize)]
#[zeroize(drop)]
pub struct SecretValue(String);

impl CloneableSecret for SecretValue {}
impl DebugSecret for SecretValue {}
impl SerializableSecret for SecretValue {}

impl From<String> for SecretValue {
    fn from(s: String) -> Self {
        SecretValue(s)
    }
}

impl PartialEq<str> for SecretValue {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

// Display is what the Basic Auth header formatting goes through
impl std::fmt::Display for SecretValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for SecretValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for SecretValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        String::deserialize(deserializer).map(SecretValue)
    }
}

/// The password type used throughout the configuration
pub type SecretString = Secret<SecretValue>;

/// Wrap a plain string as a `SecretString`
///
/// # Example
///
/// ```rust
/// use loadsend::config::secret_string;
///
/// let password = secret_string("my-password".to_string());
/// ```
#[inline]
pub fn secret_string(value: String) -> SecretString {
    Secret::new(SecretValue::from(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[test]
    fn test_secret_string_creation() {
        let secret = secret_string("test-password".to_string());
        assert_eq!(secret.expose_secret(), "test-password");
    }

    #[test]
    fn test_secret_debug_redacted() {
        let secret = secret_string("sensitive-data".to_string());
        let debug_output = format!("{secret:?}");

        assert!(!debug_output.contains("sensitive-data"));
        assert!(debug_output.contains("REDACTED") || debug_output.contains("Secret"));
    }

    #[test]
    fn test_secret_display_formats_credential_pair() {
        let secret = secret_string("api_pass".to_string());
        let pair = format!("api_user:{}", secret.expose_secret());
        assert_eq!(pair, "api_user:api_pass");
    }

    #[test]
    fn test_secret_serde() {
        #[derive(Serialize, Deserialize)]
        struct ApiSection {
            password: SecretString,
        }

        let section: ApiSection = toml::from_str("password = \"test123\"").unwrap();
        assert_eq!(section.password.expose_secret(), "test123");

        let rendered = toml::to_string(&section).unwrap();
        assert!(rendered.contains("test123"));
    }
}
