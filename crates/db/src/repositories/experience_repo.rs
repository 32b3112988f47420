//! Repository for the `experiences` table.

use daytrip_core::types::DbId;
use sqlx::PgPool;

use crate::models::experience::{CreateExperience, Experience};

/// Column list for `experiences` queries.
const COLUMNS: &str = "\
    id, name, description, location, price_cents, image_url, rating, \
    created_at, updated_at";

/// Read operations for the catalog, plus inserts for seeding.
pub struct ExperienceRepo;

impl ExperienceRepo {
    /// Insert a new experience (seeding/administration only).
    pub async fn create(
        pool: &PgPool,
        input: &CreateExperience,
    ) -> Result<Experience, sqlx::Error> {
        let query = format!(
            "INSERT INTO experiences (name, description, location, price_cents, image_url, rating) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Experience>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.location)
            .bind(input.price_cents)
            .bind(&input.image_url)
            .bind(input.rating)
            .fetch_one(pool)
            .await
    }

    /// Find an experience by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Experience>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM experiences WHERE id = $1");
        sqlx::query_as::<_, Experience>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List the full catalog, oldest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Experience>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM experiences ORDER BY id");
        sqlx::query_as::<_, Experience>(&query).fetch_all(pool).await
    }

    /// Number of experiences in the catalog. Used as the seeding guard.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM experiences")
            .fetch_one(pool)
            .await
    }
}
