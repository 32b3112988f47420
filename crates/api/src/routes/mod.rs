//! Route modules and the application route tree.

pub mod bookings;
pub mod experiences;
pub mod health;
pub mod promo;

use axum::routing::{get, post};
use axum::Router;

use crate::state::AppState;

/// Build the booking-flow route tree.
///
/// Route hierarchy:
///
/// ```text
/// /experiences            list the catalog
/// /experiences/{id}       one experience with its slots
/// /bookings               reserve a seat (POST)
/// /promo/validate         evaluate a promo code (POST)
/// ```
///
/// The health check is mounted separately at the root by the router builder.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/experiences", get(experiences::list_experiences))
        .route("/experiences/{id}", get(experiences::get_experience))
        .route("/bookings", post(bookings::create_booking))
        .route("/promo/validate", post(promo::validate_promo))
}
