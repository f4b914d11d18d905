//! Request schemas for account creation and login.

use std::str::FromStr;

use email_address::EmailAddress;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::deserialize_secret;
use crate::rules::MIN_LENGTH;
use crate::password::check_password;

/// Fields shared by every user payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct UserBase {
    #[validate(length(min = 1, max = 50))]
    pub first_name: String,
    #[validate(length(min = 1, max = 50))]
    pub last_name: String,
    #[validate(custom(function = "check_email"))]
    pub email: String,
    #[validate(length(min = 3, max = 50))]
    pub username: String,
}

/// Payload for creating a new user.
///
/// The password must pass every password rule.
#[derive(Debug, Deserialize, Validate)]
pub struct UserCreate {
    #[serde(flatten)]
    #[validate(nested)]
    pub base: UserBase,
    #[serde(deserialize_with = "deserialize_secret")]
    #[validate(custom(function = "validate_password_strength"))]
    pub password: SecretString,
}

/// Payload for logging in. Only lengths are checked here.
#[derive(Debug, Deserialize, Validate)]
pub struct UserLogin {
    #[validate(length(min = 3))]
    pub username: String,
    #[serde(deserialize_with = "deserialize_secret")]
    #[validate(custom(function = "validate_password_length"))]
    pub password: SecretString,
}

/// Syntactically valid address whose domain has at least one dot.
fn check_email(email: &str) -> Result<(), validator::ValidationError> {
    let address = EmailAddress::from_str(email).map_err(|e| {
        validator::ValidationError::new("email")
            .with_message(format!("value is not a valid email address: {}", e).into())
    })?;
    if !address.domain().contains('.') {
        return Err(validator::ValidationError::new("email").with_message(
            "value is not a valid email address: domain must contain a dot".into(),
        ));
    }
    Ok(())
}

fn validate_password_strength(password: &SecretString) -> Result<(), validator::ValidationError> {
    check_password(password).map_err(|reason| {
        validator::ValidationError::new("password_strength").with_message(reason.to_string().into())
    })
}

fn validate_password_length(password: &SecretString) -> Result<(), validator::ValidationError> {
    if password.expose_secret().chars().count() < MIN_LENGTH {
        return Err(validator::ValidationError::new("length").with_message(
            format!("Password must be at least {} characters long", MIN_LENGTH).into(),
        ));
    }
    Ok(())
}
