//! Request-shape validation
//!
//! These checks run at the HTTP boundary before the session manager is
//! called. The manager trusts that shapes are valid and only enforces
//! business rules.

use std::sync::LazyLock;

use regex::Regex;

use crate::shared::error::SharedError;

/// bcrypt only consumes the first 72 bytes of its input.
pub const MAX_PASSWORD_BYTES: usize = 72;

static EMAIL_RE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").ok());

pub fn valid_email(email: &str) -> bool {
    EMAIL_RE
        .as_ref()
        .is_some_and(|re| re.is_match(email.trim()))
}

/// Validate a signup/signin payload.
pub fn validate_credentials(email: &str, password: &str) -> Result<(), SharedError> {
    if !valid_email(email) {
        return Err(SharedError::validation("email", "Invalid email format"));
    }

    if password.is_empty() {
        return Err(SharedError::validation("password", "Password must not be empty"));
    }

    if password.len() > MAX_PASSWORD_BYTES {
        return Err(SharedError::validation(
            "password",
            format!("Password must be at most {MAX_PASSWORD_BYTES} bytes"),
        ));
    }

    Ok(())
}
