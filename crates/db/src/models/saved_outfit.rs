//! Saved outfit model and DTOs.
//!
//! A saved outfit references closet items by id, one per slot. Deleting a
//! referenced item removes the outfit (`ON DELETE CASCADE`).

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use wardrobe_core::outfit::{OutfitSlotIds, OutfitSlots};
use wardrobe_core::types::{DbId, Timestamp};

/// A row from the `saved_outfits` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SavedOutfit {
    pub id: DbId,
    pub user_id: DbId,
    pub top_id: DbId,
    pub bottom_id: DbId,
    pub shoes_id: DbId,
    pub accessory_id: Option<DbId>,
    pub outerwear_id: Option<DbId>,
    pub hat_id: Option<DbId>,
    pub occasion: String,
    pub weather: String,
    pub created_at: Timestamp,
}

impl OutfitSlots for SavedOutfit {
    fn slot_ids(&self) -> OutfitSlotIds {
        OutfitSlotIds {
            top_id: self.top_id,
            bottom_id: self.bottom_id,
            shoes_id: self.shoes_id,
            accessory_id: self.accessory_id,
            outerwear_id: self.outerwear_id,
            hat_id: self.hat_id,
        }
    }
}

/// DTO for persisting a chosen outfit.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateSavedOutfit {
    pub top_id: DbId,
    pub bottom_id: DbId,
    pub shoes_id: DbId,
    pub accessory_id: Option<DbId>,
    pub outerwear_id: Option<DbId>,
    pub hat_id: Option<DbId>,
    pub occasion: String,
    pub weather: String,
}

impl OutfitSlots for CreateSavedOutfit {
    fn slot_ids(&self) -> OutfitSlotIds {
        OutfitSlotIds {
            top_id: self.top_id,
            bottom_id: self.bottom_id,
            shoes_id: self.shoes_id,
            accessory_id: self.accessory_id,
            outerwear_id: self.outerwear_id,
            hat_id: self.hat_id,
        }
    }
}
