//! Credentials definitions.
//!
//! The API key is handed to [`crate::translate::Client`] once, when the client is built,
//! and is sent with every request as the `key` query parameter. It is never logged and
//! its `Debug` output is redacted.
//!
//! # Example
//! ```no_run
//! use g_translate::credentials::Credentials;
//! use g_translate::translate::Client;
//!
//! fn get_client() -> Client {
//!     let creds = Credentials::from_env().unwrap();
//!     Client::builder().credentials(creds).build().unwrap()
//! }
//! ```

use std::fmt;

/// Environment variable read by [`Credentials::from_env`].
pub const API_KEY_ENV: &str = "GOOGLE_TRANSLATE_API_KEY";

#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    api_key: String,
}

impl Credentials {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
        }
    }

    pub fn from_env() -> Result<Self, CredentialsError> {
        let api_key =
            std::env::var(API_KEY_ENV).map_err(|_| CredentialsError::MissingEnv(API_KEY_ENV))?;
        Ok(Self::new(api_key))
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.api_key.trim().is_empty()
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &"<redacted>")
            .finish()
    }
}

impl From<String> for Credentials {
    fn from(api_key: String) -> Self {
        Self::new(api_key)
    }
}

impl From<&str> for Credentials {
    fn from(api_key: &str) -> Self {
        Self::new(api_key)
    }
}

#[derive(thiserror::Error, Debug)]
pub enum CredentialsError {
    #[error("environment variable {0} is not set")]
    MissingEnv(&'static str),
}

#[test]
fn debug_does_not_leak_key() {
    let creds = Credentials::new("super-secret");
    let s = format!("{:?}", creds);
    assert!(!s.contains("super-secret"));
    assert!(s.contains("redacted"));
}
