//! Typed response payloads for API handlers.
//!
//! Ad-hoc `serde_json::json!` bodies drift; these structs keep each
//! endpoint's success shape in one place with compile-time field checking.

use daytrip_core::types::Cents;
use daytrip_db::models::booking::Booking;
use daytrip_db::models::experience::Experience;
use daytrip_db::models::slot::Slot;
use serde::Serialize;

/// Response body for `GET /experiences/{id}`.
#[derive(Debug, Serialize)]
pub struct ExperienceDetailResponse {
    pub experience: Experience,
    pub slots: Vec<Slot>,
}

/// Response body for `POST /bookings`.
#[derive(Debug, Serialize)]
pub struct BookingResponse {
    pub message: &'static str,
    pub booking: Booking,
}

/// Response body for `POST /promo/validate`.
#[derive(Debug, Serialize)]
pub struct PromoValidateResponse {
    /// The normalized code, echoed back for display.
    pub code: String,
    /// Flat discount off the subtotal, in cents.
    pub discount: Cents,
    pub message: String,
}
