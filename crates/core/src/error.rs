use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    /// Capacity exhausted or unknown slot id. The two cases are deliberately
    /// collapsed: both present the same remedy to the caller, and keeping
    /// them apart would leak slot existence.
    #[error("Slot {slot_id} is full or no longer available")]
    SlotUnavailable { slot_id: DbId },

    #[error("Invalid promo code: {code}")]
    InvalidPromoCode { code: String },

    #[error("Internal error: {0}")]
    Internal(String),
}
