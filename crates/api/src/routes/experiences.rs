//! Handlers for the experience catalog.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;

use daytrip_core::error::CoreError;
use daytrip_core::types::DbId;
use daytrip_db::repositories::{ExperienceRepo, SlotRepo};

use crate::error::{AppError, AppResult};
use crate::response::ExperienceDetailResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// GET /experiences
// ---------------------------------------------------------------------------

/// List the full catalog.
pub async fn list_experiences(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let experiences = ExperienceRepo::list(&state.pool).await?;
    tracing::debug!(count = experiences.len(), "Listed experiences");
    Ok(Json(experiences))
}

// ---------------------------------------------------------------------------
// GET /experiences/{id}
// ---------------------------------------------------------------------------

/// Get one experience together with all of its slots.
pub async fn get_experience(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let experience = ExperienceRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Experience",
            id,
        }))?;

    let slots = SlotRepo::list_for_experience(&state.pool, id).await?;
    Ok(Json(ExperienceDetailResponse { experience, slots }))
}
