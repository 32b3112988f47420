//! Slot entity model and DTOs.

use chrono::NaiveDate;
use daytrip_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `slots` table.
///
/// `start_time`/`end_time` are display strings ("07:00 AM"), never parsed
/// into time types. `booked_count` is mutated only through
/// [`crate::repositories::SlotRepo::try_reserve`].
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Slot {
    pub id: DbId,
    pub experience_id: DbId,
    pub slot_date: NaiveDate,
    pub start_time: String,
    pub end_time: String,
    pub capacity: i32,
    pub booked_count: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Slot {
    /// Remaining capacity. Zero for a sold-out slot.
    pub fn seats_left(&self) -> i32 {
        self.capacity - self.booked_count
    }
}

/// DTO for creating a new slot (seeding/administration only).
#[derive(Debug, Clone, Deserialize)]
pub struct CreateSlot {
    pub experience_id: DbId,
    pub slot_date: NaiveDate,
    pub start_time: String,
    pub end_time: String,
    pub capacity: i32,
    /// Seed data may pre-fill this to model an already sold-out slot.
    pub booked_count: Option<i32>,
}
