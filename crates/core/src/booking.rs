//! Input validation for booking requests.
//!
//! All checks run before any database work: a request that fails here
//! must leave no trace in the store.

use validator::ValidateEmail;

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Limits
// ---------------------------------------------------------------------------

/// Maximum accepted length for a user name.
pub const MAX_USER_NAME_LEN: usize = 200;

/// Maximum accepted length for a user email address.
pub const MAX_USER_EMAIL_LEN: usize = 254;

/// Maximum accepted length for a client-supplied idempotency key.
pub const MAX_IDEMPOTENCY_KEY_LEN: usize = 64;

// ---------------------------------------------------------------------------
// Validation functions
// ---------------------------------------------------------------------------

/// Validate the booking user name: non-empty after trimming, bounded length.
pub fn validate_user_name(name: &str) -> Result<(), CoreError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation(
            "user name must not be empty".to_string(),
        ));
    }
    if trimmed.len() > MAX_USER_NAME_LEN {
        return Err(CoreError::Validation(format!(
            "user name exceeds {MAX_USER_NAME_LEN} characters"
        )));
    }
    Ok(())
}

/// Validate the booking email address: non-empty, bounded, RFC-style format.
pub fn validate_user_email(email: &str) -> Result<(), CoreError> {
    let trimmed = email.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation(
            "user email must not be empty".to_string(),
        ));
    }
    if trimmed.len() > MAX_USER_EMAIL_LEN {
        return Err(CoreError::Validation(format!(
            "user email exceeds {MAX_USER_EMAIL_LEN} characters"
        )));
    }
    if !trimmed.validate_email() {
        return Err(CoreError::Validation(format!(
            "'{trimmed}' is not a valid email address"
        )));
    }
    Ok(())
}

/// Validate an optional client-supplied idempotency key.
///
/// The key is opaque to the server; only emptiness and length are checked.
pub fn validate_idempotency_key(key: &str) -> Result<(), CoreError> {
    if key.trim().is_empty() {
        return Err(CoreError::Validation(
            "idempotency key must not be empty when supplied".to_string(),
        ));
    }
    if key.len() > MAX_IDEMPOTENCY_KEY_LEN {
        return Err(CoreError::Validation(format!(
            "idempotency key exceeds {MAX_IDEMPOTENCY_KEY_LEN} characters"
        )));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
