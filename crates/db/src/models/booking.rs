//! Booking entity model and DTOs.

use daytrip_core::types::{Cents, DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `bookings` table.
///
/// Bookings are append-only: every row corresponds to exactly one
/// successful capacity increment on its slot, and no code path mutates or
/// deletes a booking after insertion.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Booking {
    pub id: DbId,
    pub slot_id: DbId,
    pub user_name: String,
    pub user_email: String,
    /// Normalized (uppercase) promo code, recorded for audit.
    pub promo_code: Option<String>,
    /// Final price recomputed server-side at reservation time.
    pub final_price_cents: Option<Cents>,
    /// Client-supplied retry token, unique across non-null values.
    pub idempotency_key: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a booking. Fields arrive pre-validated and
/// pre-normalized from the API layer.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateBooking {
    pub slot_id: DbId,
    pub user_name: String,
    pub user_email: String,
    pub promo_code: Option<String>,
    pub idempotency_key: Option<String>,
}
