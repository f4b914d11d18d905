//! Password validation rules
//!
//! Each rule checks one property of the candidate password. Rules are
//! evaluated in the order returned by [`password_rules`] and the first
//! failure is reported.

mod length;
mod variety;

pub use length::{MIN_LENGTH, length_rule};
pub use variety::{digit_rule, lowercase_rule, uppercase_rule};

use secrecy::SecretString;
use thiserror::Error;

/// Why a password was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Password must be at least {min} characters long")]
    TooShort { min: usize },
    #[error("Password must contain at least one uppercase letter")]
    MissingUppercase,
    #[error("Password must contain at least one lowercase letter")]
    MissingLowercase,
    #[error("Password must contain at least one digit")]
    MissingDigit,
    #[cfg(feature = "async")]
    #[error("Password validation cancelled")]
    Cancelled,
}

/// Result type for rule functions.
/// - `Ok(())` - Rule satisfied
/// - `Err(reason)` - Rule violated
pub type RuleResult = Result<(), ValidationError>;

/// A single validation rule.
pub type Rule = fn(&SecretString) -> RuleResult;

static PASSWORD_RULES: [(&str, Rule); 4] = [
    ("length", length_rule),
    ("uppercase", uppercase_rule),
    ("lowercase", lowercase_rule),
    ("digit", digit_rule),
];

/// Returns the password rules, named, in evaluation order.
pub fn password_rules() -> &'static [(&'static str, Rule)] {
    &PASSWORD_RULES
}
