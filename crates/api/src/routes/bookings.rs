//! Handler for booking creation, the checkout step.
//!
//! Validation and promo evaluation run before any database work; the
//! capacity decision itself happens inside the reservation transaction in
//! `daytrip_db`.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use daytrip_core::error::CoreError;
use daytrip_core::types::DbId;
use daytrip_core::{booking, promo};
use daytrip_db::models::booking::CreateBooking;
use daytrip_db::repositories::BookingRepo;

use crate::error::{AppError, AppResult};
use crate::response::BookingResponse;
use crate::state::AppState;

/// Request body for `POST /bookings`.
///
/// Fields are optional at the serde level so a missing field produces the
/// endpoint's own 400 rather than a generic deserialization rejection.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    pub slot_id: Option<DbId>,
    pub user_name: Option<String>,
    pub user_email: Option<String>,
    pub promo_code: Option<String>,
    pub idempotency_key: Option<String>,
}

// ---------------------------------------------------------------------------
// POST /bookings
// ---------------------------------------------------------------------------

/// Reserve a seat on a slot and record the booking.
pub async fn create_booking(
    State(state): State<AppState>,
    Json(input): Json<BookingRequest>,
) -> AppResult<impl IntoResponse> {
    let (Some(slot_id), Some(user_name), Some(user_email)) =
        (input.slot_id, input.user_name, input.user_email)
    else {
        return Err(AppError::BadRequest("Missing required fields".to_string()));
    };

    booking::validate_user_name(&user_name)?;
    booking::validate_user_email(&user_email)?;
    if let Some(key) = input.idempotency_key.as_deref() {
        booking::validate_idempotency_key(key)?;
    }

    // The promo is re-evaluated here no matter what the client computed;
    // an unknown code is a validation failure on this endpoint (the
    // dedicated /promo/validate endpoint 404s instead).
    let applied_promo = match input.promo_code.as_deref() {
        Some(code) => Some(promo::evaluate(code).map_err(|err| match err {
            CoreError::InvalidPromoCode { code } => {
                CoreError::Validation(format!("'{code}' is not a valid promo code"))
            }
            other => other,
        })?),
        None => None,
    };
    let discount_cents = applied_promo.as_ref().map_or(0, |p| p.discount_cents);

    let create = CreateBooking {
        slot_id,
        user_name: user_name.trim().to_string(),
        user_email: user_email.trim().to_string(),
        promo_code: applied_promo.map(|p| p.code),
        idempotency_key: input.idempotency_key,
    };

    let confirmed = BookingRepo::reserve(&state.pool, &create, discount_cents)
        .await?
        .ok_or(AppError::Core(CoreError::SlotUnavailable { slot_id }))?;

    tracing::info!(
        booking_id = confirmed.id,
        slot_id = confirmed.slot_id,
        "Booking confirmed"
    );
    Ok((
        StatusCode::CREATED,
        Json(BookingResponse {
            message: "Booking confirmed!",
            booking: confirmed,
        }),
    ))
}
