//! Promo code evaluation and checkout arithmetic.
//!
//! Codes map to flat amounts off the subtotal. The table is static: promo
//! campaigns ship with a release rather than living in the database.
//! Percentage-based rules are a possible extension, not implemented.

use serde::Serialize;

use crate::error::CoreError;
use crate::types::Cents;

// ---------------------------------------------------------------------------
// Static code table
// ---------------------------------------------------------------------------

/// Valid promo codes and their flat discounts in cents.
///
/// Keys are stored normalized (uppercase); lookup goes through
/// [`normalize_code`] so user input is matched case-insensitively.
const PROMO_CODES: &[(&str, Cents)] = &[("SAVE10", 1_000), ("FLAT100", 10_000)];

/// Maximum accepted length for a raw promo code, pre-normalization.
pub const MAX_PROMO_CODE_LEN: usize = 32;

// ---------------------------------------------------------------------------
// Evaluation
// ---------------------------------------------------------------------------

/// A successfully evaluated promo code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PromoDiscount {
    /// The normalized (uppercased) code, as recorded on the booking.
    pub code: String,
    /// Flat discount off the subtotal, in cents.
    pub discount_cents: Cents,
}

/// Normalize a user-supplied code: trim surrounding whitespace, uppercase.
pub fn normalize_code(code: &str) -> String {
    code.trim().to_uppercase()
}

/// Evaluate a user-supplied promo code against the static table.
///
/// Matching is case-insensitive. Pure function: same input, same result,
/// no side effects.
pub fn evaluate(code: &str) -> Result<PromoDiscount, CoreError> {
    let normalized = normalize_code(code);
    if normalized.is_empty() {
        return Err(CoreError::Validation(
            "promo code must not be empty".to_string(),
        ));
    }
    if normalized.len() > MAX_PROMO_CODE_LEN {
        return Err(CoreError::Validation(format!(
            "promo code exceeds {MAX_PROMO_CODE_LEN} characters"
        )));
    }

    PROMO_CODES
        .iter()
        .find(|(valid, _)| *valid == normalized)
        .map(|(valid, discount_cents)| PromoDiscount {
            code: (*valid).to_string(),
            discount_cents: *discount_cents,
        })
        .ok_or(CoreError::InvalidPromoCode { code: normalized })
}

// ---------------------------------------------------------------------------
// Checkout arithmetic
// ---------------------------------------------------------------------------

/// Compute the final total after applying a flat discount.
///
/// Clamped at zero: a discount larger than the subtotal yields a free
/// checkout, never a negative total.
pub fn checkout_total(subtotal_cents: Cents, discount_cents: Cents) -> Cents {
    (subtotal_cents - discount_cents).max(0)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
