//! Repository for the `slots` table.
//!
//! `booked_count` is mutated exclusively through [`SlotRepo::try_reserve`];
//! nothing else in the codebase writes that column.

use daytrip_core::types::DbId;
use sqlx::{PgExecutor, PgPool};

use crate::models::slot::{CreateSlot, Slot};

/// Column list for `slots` queries.
const COLUMNS: &str = "\
    id, experience_id, slot_date, start_time, end_time, \
    capacity, booked_count, created_at, updated_at";

/// Read operations for slots, inserts for seeding, and the atomic
/// capacity reservation.
pub struct SlotRepo;

impl SlotRepo {
    /// Insert a new slot (seeding/administration only).
    pub async fn create(pool: &PgPool, input: &CreateSlot) -> Result<Slot, sqlx::Error> {
        let query = format!(
            "INSERT INTO slots (experience_id, slot_date, start_time, end_time, capacity, booked_count) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Slot>(&query)
            .bind(input.experience_id)
            .bind(input.slot_date)
            .bind(&input.start_time)
            .bind(&input.end_time)
            .bind(input.capacity)
            .bind(input.booked_count.unwrap_or(0))
            .fetch_one(pool)
            .await
    }

    /// Find a slot by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Slot>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM slots WHERE id = $1");
        sqlx::query_as::<_, Slot>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all slots for an experience, earliest date first.
    ///
    /// `start_time` is a display string, so within a date slots come back
    /// in insertion order rather than lexical time order.
    pub async fn list_for_experience(
        pool: &PgPool,
        experience_id: DbId,
    ) -> Result<Vec<Slot>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM slots WHERE experience_id = $1 ORDER BY slot_date, id"
        );
        sqlx::query_as::<_, Slot>(&query)
            .bind(experience_id)
            .fetch_all(pool)
            .await
    }

    /// Atomically claim one seat on a slot.
    ///
    /// A single conditional update is the whole admission decision: the
    /// increment applies only while `booked_count < capacity`, and zero
    /// affected rows means the slot is full or absent. Competing calls are
    /// total-ordered by the database, so exactly as many succeed as there
    /// is remaining capacity. Never split this into a read followed by a
    /// write: two readers would both observe spare capacity.
    ///
    /// Accepts any executor so it can run inside the reservation
    /// transaction as well as standalone.
    pub async fn try_reserve(
        executor: impl PgExecutor<'_>,
        slot_id: DbId,
    ) -> Result<Option<Slot>, sqlx::Error> {
        let query = format!(
            "UPDATE slots \
             SET booked_count = booked_count + 1, updated_at = NOW() \
             WHERE id = $1 AND booked_count < capacity \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Slot>(&query)
            .bind(slot_id)
            .fetch_optional(executor)
            .await
    }
}
