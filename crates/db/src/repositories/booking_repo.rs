//! Repository for the `bookings` table, including the reservation
//! transaction that pairs the capacity increment with the booking insert.

use daytrip_core::promo;
use daytrip_core::types::{Cents, DbId};
use sqlx::{PgExecutor, PgPool};

use crate::models::booking::{Booking, CreateBooking};
use crate::repositories::SlotRepo;

/// Column list for `bookings` queries.
const COLUMNS: &str = "\
    id, slot_id, user_name, user_email, promo_code, \
    final_price_cents, idempotency_key, created_at, updated_at";

/// Reservation and read operations for bookings.
pub struct BookingRepo;

impl BookingRepo {
    /// Reserve a seat and record the booking, in one transaction.
    ///
    /// Steps, all on the same transaction:
    ///
    /// 1. If the request carries an idempotency key that already exists,
    ///    return the original booking: a retried request never consumes
    ///    additional capacity.
    /// 2. [`SlotRepo::try_reserve`]: the atomic conditional increment.
    ///    `None` means the slot is full or absent; the transaction is
    ///    dropped and nothing was written.
    /// 3. Recompute the final price from the experience's stored
    ///    `price_cents` and the server-evaluated discount, then insert the
    ///    booking row and commit.
    ///
    /// Two concurrent requests with the same idempotency key can both pass
    /// step 1; the loser then hits `uq_bookings_idempotency_key` on insert
    /// and its rollback also undoes the increment.
    ///
    /// Returns `Ok(None)` when the slot is full or absent. Never retries.
    pub async fn reserve(
        pool: &PgPool,
        input: &CreateBooking,
        discount_cents: Cents,
    ) -> Result<Option<Booking>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        if let Some(key) = input.idempotency_key.as_deref() {
            if let Some(existing) = Self::find_by_idempotency_key(&mut *tx, key).await? {
                tracing::debug!(booking_id = existing.id, key, "Idempotent replay");
                return Ok(Some(existing));
            }
        }

        let Some(slot) = SlotRepo::try_reserve(&mut *tx, input.slot_id).await? else {
            return Ok(None);
        };

        let subtotal_cents: Cents =
            sqlx::query_scalar("SELECT price_cents FROM experiences WHERE id = $1")
                .bind(slot.experience_id)
                .fetch_one(&mut *tx)
                .await?;
        let final_price_cents = promo::checkout_total(subtotal_cents, discount_cents);

        let query = format!(
            "INSERT INTO bookings (slot_id, user_name, user_email, promo_code, final_price_cents, idempotency_key) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING {COLUMNS}"
        );
        let booking = sqlx::query_as::<_, Booking>(&query)
            .bind(input.slot_id)
            .bind(&input.user_name)
            .bind(&input.user_email)
            .bind(input.promo_code.as_deref())
            .bind(final_price_cents)
            .bind(input.idempotency_key.as_deref())
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(Some(booking))
    }

    /// Find a booking by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Booking>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM bookings WHERE id = $1");
        sqlx::query_as::<_, Booking>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a booking by its idempotency key.
    pub async fn find_by_idempotency_key(
        executor: impl PgExecutor<'_>,
        key: &str,
    ) -> Result<Option<Booking>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM bookings WHERE idempotency_key = $1");
        sqlx::query_as::<_, Booking>(&query)
            .bind(key)
            .fetch_optional(executor)
            .await
    }

    /// List all bookings for a slot, oldest first.
    pub async fn list_for_slot(pool: &PgPool, slot_id: DbId) -> Result<Vec<Booking>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM bookings WHERE slot_id = $1 ORDER BY id");
        sqlx::query_as::<_, Booking>(&query)
            .bind(slot_id)
            .fetch_all(pool)
            .await
    }

    /// Number of bookings recorded against a slot.
    ///
    /// Always bounded by the slot's capacity: each row exists only because
    /// one conditional increment succeeded.
    pub async fn count_for_slot(pool: &PgPool, slot_id: DbId) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM bookings WHERE slot_id = $1")
            .bind(slot_id)
            .fetch_one(pool)
            .await
    }
}
