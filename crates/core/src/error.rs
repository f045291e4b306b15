//! Domain error type shared by the `db` and `api` crates.
//!
//! The outfit generator never produces one of these: an inventory that
//! cannot form an outfit yields an empty candidate list instead.

use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    /// Shorthand for a closet item the caller does not own or that does not exist.
    pub fn clothing_item_not_found(id: DbId) -> Self {
        Self::NotFound {
            entity: "ClothingItem",
            id,
        }
    }

    /// Shorthand for a saved outfit the caller does not own or that does not exist.
    pub fn saved_outfit_not_found(id: DbId) -> Self {
        Self::NotFound {
            entity: "SavedOutfit",
            id,
        }
    }
}
