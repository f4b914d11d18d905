//! User account schemas
//!
//! Request payloads (`UserBase`, `UserCreate`, `UserLogin`) are
//! deserialized with serde and then checked with [`validator::Validate`].
//! Response payloads (`UserResponse`, `Token`) never carry a password.

mod base;
mod user;

pub use base::{UserBase, UserCreate, UserLogin};
pub use user::{Token, UserResponse};

use secrecy::SecretString;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use thiserror::Error;
use validator::{Validate, ValidationErrors};

#[derive(Error, Debug)]
pub enum SchemaError {
    #[error("Malformed payload: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Validation failed: {0}")]
    Invalid(#[from] ValidationErrors),
}

/// Deserializes a JSON payload and validates it.
///
/// # Example
///
/// ```rust
/// use userkit::schemas::{from_json, UserLogin};
///
/// let login: UserLogin = from_json(r#"{"username": "ada", "password": "abcdef"}"#).unwrap();
/// assert_eq!(login.username, "ada");
/// ```
pub fn from_json<T>(json: &str) -> Result<T, SchemaError>
where
    T: DeserializeOwned + Validate,
{
    let payload: T = serde_json::from_str(json)?;
    if let Err(errors) = payload.validate() {
        #[cfg(feature = "tracing")]
        tracing::debug!("payload rejected: {}", errors);
        return Err(errors.into());
    }
    Ok(payload)
}

pub(crate) fn deserialize_secret<'de, D>(deserializer: D) -> Result<SecretString, D::Error>
where
    D: Deserializer<'de>,
{
    String::deserialize(deserializer).map(|s| SecretString::new(s.into_boxed_str()))
}
