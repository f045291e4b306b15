//! Closet item model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use wardrobe_core::error::CoreError;
use wardrobe_core::types::{DbId, Timestamp};
use wardrobe_core::wardrobe::{self, Category};

/// A row from the `clothing_items` table.
///
/// `category` is stored as text and constrained by the schema to the
/// values in [`wardrobe::VALID_CATEGORIES`].
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ClothingItem {
    pub id: DbId,
    pub user_id: DbId,
    pub name: String,
    pub category: String,
    pub color: Option<String>,
    pub style: Option<String>,
    pub season: Option<String>,
    pub image_url: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl ClothingItem {
    /// Convert the row into the generator's item type.
    pub fn to_domain(&self) -> Result<wardrobe::ClothingItem, CoreError> {
        let category = Category::from_str_value(&self.category).map_err(CoreError::Internal)?;
        Ok(wardrobe::ClothingItem {
            id: self.id,
            name: self.name.clone(),
            category,
            color: self.color.clone(),
            style: self.style.clone(),
            season: self.season.clone(),
            image_url: self.image_url.clone(),
        })
    }
}

/// DTO for adding an item to the closet.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateClothingItem {
    pub name: String,
    pub category: String,
    pub color: Option<String>,
    pub style: Option<String>,
    pub season: Option<String>,
    pub image_url: Option<String>,
}

/// DTO for updating a closet item. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateClothingItem {
    pub name: Option<String>,
    pub category: Option<String>,
    /// `""` clears the tag so the item fits any color.
    pub color: Option<String>,
    /// `""` clears the tag so the item fits any style.
    pub style: Option<String>,
    /// `""` clears the tag so the item fits any weather.
    pub season: Option<String>,
    /// `""` removes the image URL.
    pub image_url: Option<String>,
}
