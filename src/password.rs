//! Password validation - runs the password rules in order.

use secrecy::SecretString;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::rules::{ValidationError, password_rules};

/// Validates a password against every rule and returns it unchanged.
///
/// Rules are checked in order (length, uppercase, lowercase, digit) and the
/// first one that fails is returned as the error.
///
/// # Example
///
/// ```rust
/// use secrecy::{ExposeSecret, SecretString};
/// use userkit::{validate_password, ValidationError};
///
/// let ok = validate_password(SecretString::new("Abc123".to_string().into())).unwrap();
/// assert_eq!(ok.expose_secret(), "Abc123");
///
/// let err = validate_password(SecretString::new("abc123".to_string().into())).unwrap_err();
/// assert_eq!(err, ValidationError::MissingUppercase);
/// ```
pub fn validate_password(password: SecretString) -> Result<SecretString, ValidationError> {
    check_password(&password)?;
    Ok(password)
}

/// Runs the password rules without taking ownership of the password.
#[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
pub fn check_password(password: &SecretString) -> Result<(), ValidationError> {
    for (rule_name, rule_fn) in password_rules() {
        if let Err(reason) = rule_fn(password) {
            #[cfg(feature = "tracing")]
            tracing::debug!(rule = rule_name, "password rejected: {}", reason);
            return Err(reason);
        }
    }
    Ok(())
}

/// Validates a password, checking the token before each rule.
///
/// Returns [`ValidationError::Cancelled`] as soon as the token is observed
/// cancelled.
#[cfg(feature = "async")]
#[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
pub fn validate_password_cancellable(
    password: &SecretString,
    token: Option<CancellationToken>,
) -> Result<(), ValidationError> {
    for (rule_name, rule_fn) in password_rules() {
        if let Some(ref t) = token {
            if t.is_cancelled() {
                #[cfg(feature = "tracing")]
                tracing::info!(rule = rule_name, "password validation cancelled");
                return Err(ValidationError::Cancelled);
            }
        }

        if let Err(reason) = rule_fn(password) {
            #[cfg(feature = "tracing")]
            tracing::debug!(rule = rule_name, "password rejected: {}", reason);
            return Err(reason);
        }
    }
    Ok(())
}

/// Async version that sends the validation outcome via channel.
///
/// On success the password is handed back through the channel.
#[cfg(feature = "async")]
#[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
pub async fn validate_password_tx(
    password: SecretString,
    token: CancellationToken,
    tx: mpsc::Sender<Result<SecretString, ValidationError>>,
) {
    #[cfg(feature = "tracing")]
    tracing::info!("password validation is about to start...");

    let outcome = validate_password_cancellable(&password, Some(token)).map(|()| password);

    if let Err(e) = tx.send(outcome).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password validation result: {}", e);
    }
}
