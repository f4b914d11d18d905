//! Length rule - checks password minimum length.

use secrecy::{ExposeSecret, SecretString};
use super::{RuleResult, ValidationError};

/// Minimum password length, in characters.
pub const MIN_LENGTH: usize = 6;

/// Checks if the password meets the minimum length.
///
/// Length is counted in characters, so multi-byte letters count once.
pub fn length_rule(password: &SecretString) -> RuleResult {
    if password.expose_secret().chars().count() < MIN_LENGTH {
        return Err(ValidationError::TooShort { min: MIN_LENGTH });
    }
    Ok(())
}
