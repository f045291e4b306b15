//! Generated outfit candidates and the slot-id view shared with saved outfits.

use serde::{Deserialize, Serialize};

use crate::compatibility::Weather;
use crate::types::DbId;
use crate::wardrobe::ClothingItem;

/// Maximum length of an occasion label.
pub const MAX_OCCASION_LENGTH: usize = 100;

/// One generated combination of closet items. Not persisted.
///
/// `id` is a sequence number unique within a single generation run only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutfitCandidate {
    pub id: usize,
    pub top: ClothingItem,
    pub bottom: ClothingItem,
    pub shoes: ClothingItem,
    pub accessory: Option<ClothingItem>,
    pub outerwear: Option<ClothingItem>,
    pub hat: Option<ClothingItem>,
    pub occasion: String,
    pub weather: Weather,
    /// Set by the caller when the user acts on the candidate.
    pub liked: bool,
}

/// Item ids occupying each outfit slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutfitSlotIds {
    pub top_id: DbId,
    pub bottom_id: DbId,
    pub shoes_id: DbId,
    pub accessory_id: Option<DbId>,
    pub outerwear_id: Option<DbId>,
    pub hat_id: Option<DbId>,
}

/// Anything that fills the six outfit slots with item ids.
pub trait OutfitSlots {
    fn slot_ids(&self) -> OutfitSlotIds;
}

impl OutfitSlots for OutfitSlotIds {
    fn slot_ids(&self) -> OutfitSlotIds {
        *self
    }
}

impl OutfitSlots for OutfitCandidate {
    fn slot_ids(&self) -> OutfitSlotIds {
        OutfitSlotIds {
            top_id: self.top.id,
            bottom_id: self.bottom.id,
            shoes_id: self.shoes.id,
            accessory_id: self.accessory.as_ref().map(|i| i.id),
            outerwear_id: self.outerwear.as_ref().map(|i| i.id),
            hat_id: self.hat.as_ref().map(|i| i.id),
        }
    }
}

/// Validate an occasion label: non-blank and at most [`MAX_OCCASION_LENGTH`].
pub fn validate_occasion(occasion: &str) -> Result<(), String> {
    if occasion.trim().is_empty() {
        return Err("Occasion must not be empty".to_string());
    }
    if occasion.chars().count() > MAX_OCCASION_LENGTH {
        return Err(format!(
            "Occasion must be at most {MAX_OCCASION_LENGTH} characters"
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wardrobe::Category;

    fn item(id: DbId, category: Category) -> ClothingItem {
        ClothingItem {
            id,
            name: format!("item {id}"),
            category,
            color: None,
            style: None,
            season: None,
            image_url: None,
        }
    }

    #[test]
    fn candidate_slot_ids_follow_items() {
        let candidate = OutfitCandidate {
            id: 1,
            top: item(10, Category::Tops),
            bottom: item(20, Category::Bottoms),
            shoes: item(30, Category::Shoes),
            accessory: None,
            outerwear: Some(item(50, Category::Outerwear)),
            hat: None,
            occasion: "Work".to_string(),
            weather: Weather::Cold,
            liked: false,
        };

        let ids = candidate.slot_ids();
        assert_eq!((ids.top_id, ids.bottom_id, ids.shoes_id), (10, 20, 30));
        assert_eq!(ids.accessory_id, None);
        assert_eq!(ids.outerwear_id, Some(50));
        assert_eq!(ids.hat_id, None);
    }

    #[test]
    fn candidate_serializes_weather_label() {
        let candidate = OutfitCandidate {
            id: 3,
            top: item(1, Category::Tops),
            bottom: item(2, Category::Bottoms),
            shoes: item(3, Category::Shoes),
            accessory: None,
            outerwear: None,
            hat: None,
            occasion: "Gym".to_string(),
            weather: Weather::Sunny,
            liked: false,
        };
        let json = serde_json::to_value(&candidate).unwrap();
        assert_eq!(json["weather"], "Sunny");
        assert_eq!(json["top"]["category"], "Tops");
        assert!(json["hat"].is_null());
    }

    #[test]
    fn occasion_validation() {
        assert!(validate_occasion("Date night").is_ok());
        assert!(validate_occasion("  ").is_err());
        assert!(validate_occasion(&"o".repeat(MAX_OCCASION_LENGTH + 1)).is_err());
    }
}
