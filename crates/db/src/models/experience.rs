//! Experience entity model and DTOs.
//!
//! Experiences are the catalog: read-only to the booking flow, written
//! only by seeding/administration.

use daytrip_core::types::{Cents, DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `experiences` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Experience {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub location: String,
    pub price_cents: Cents,
    pub image_url: String,
    /// Aggregate rating on a 0.0-5.0 scale; absent until first reviewed.
    pub rating: Option<f64>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new experience (seeding/administration only).
#[derive(Debug, Clone, Deserialize)]
pub struct CreateExperience {
    pub name: String,
    pub description: String,
    pub location: String,
    pub price_cents: Cents,
    pub image_url: String,
    pub rating: Option<f64>,
}
