//! Handler for standalone promo code validation.
//!
//! The checkout flow calls this before reserving so the client can show
//! the discounted total; the booking endpoint re-evaluates the code
//! server-side regardless of what this returned.

use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use daytrip_core::promo;

use crate::error::{AppError, AppResult};
use crate::response::PromoValidateResponse;

/// Request body for `POST /promo/validate`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromoValidateRequest {
    pub promo_code: Option<String>,
}

// ---------------------------------------------------------------------------
// POST /promo/validate
// ---------------------------------------------------------------------------

/// Evaluate a promo code. Pure lookup; touches no state.
pub async fn validate_promo(
    Json(input): Json<PromoValidateRequest>,
) -> AppResult<impl IntoResponse> {
    let code = input
        .promo_code
        .as_deref()
        .map(str::trim)
        .filter(|code| !code.is_empty())
        .ok_or_else(|| AppError::BadRequest("promoCode is required".to_string()))?;

    // An unknown code surfaces as 404 INVALID_PROMO_CODE.
    let evaluated = promo::evaluate(code)?;

    tracing::debug!(code = %evaluated.code, "Promo code validated");
    Ok(Json(PromoValidateResponse {
        message: format!("Code {} applied", evaluated.code),
        code: evaluated.code,
        discount: evaluated.discount_cents,
    }))
}
