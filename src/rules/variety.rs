//! Character variety rules - uppercase, lowercase and digit checks.

use secrecy::{ExposeSecret, SecretString};
use super::{RuleResult, ValidationError};

fn require(password: &SecretString, class: fn(char) -> bool, err: ValidationError) -> RuleResult {
    if password.expose_secret().chars().any(class) {
        Ok(())
    } else {
        Err(err)
    }
}

/// Requires at least one uppercase letter.
pub fn uppercase_rule(password: &SecretString) -> RuleResult {
    require(password, char::is_uppercase, ValidationError::MissingUppercase)
}

/// Requires at least one lowercase letter.
pub fn lowercase_rule(password: &SecretString) -> RuleResult {
    require(password, char::is_lowercase, ValidationError::MissingLowercase)
}

/// Requires at least one decimal digit (`0`-`9`).
pub fn digit_rule(password: &SecretString) -> RuleResult {
    require(password, |c| c.is_ascii_digit(), ValidationError::MissingDigit)
}
