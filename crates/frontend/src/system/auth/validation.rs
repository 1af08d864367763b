//! Local form checks run before any request leaves the browser.

use super::flow::AuthError;

/// Symbols accepted by the password strength rule.
pub const PASSWORD_SYMBOLS: &str = "@$!%*#?&";
pub const PASSWORD_MIN_LEN: usize = 8;

pub fn validate_login(email: &str, password: &str) -> Result<(), AuthError> {
    if email.trim().is_empty() || password.is_empty() {
        return Err(AuthError::MissingCredentials);
    }
    Ok(())
}

pub fn validate_registration(email: &str, password: &str, confirm: &str) -> Result<(), AuthError> {
    if email.trim().is_empty() || password.is_empty() || confirm.is_empty() {
        return Err(AuthError::MissingFields);
    }
    if password != confirm {
        return Err(AuthError::PasswordMismatch);
    }
    if !password_is_strong(password) {
        return Err(AuthError::WeakPassword);
    }
    Ok(())
}

/// At least 8 characters with a lowercase letter, an uppercase letter, a
/// digit and one of [`PASSWORD_SYMBOLS`].
pub fn password_is_strong(password: &str) -> bool {
    password.chars().count() >= PASSWORD_MIN_LEN
        && password.chars().any(|c| c.is_ascii_lowercase())
        && password.chars().any(|c| c.is_ascii_uppercase())
        && password.chars().any(|c| c.is_ascii_digit())
        && password.chars().any(|c| PASSWORD_SYMBOLS.contains(c))
}
