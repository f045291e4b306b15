//! Closet inventory model: clothing categories, items, and field validation.

use serde::{Deserialize, Serialize};

use crate::types::DbId;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

pub const CATEGORY_TOPS: &str = "Tops";
pub const CATEGORY_BOTTOMS: &str = "Bottoms";
pub const CATEGORY_SHOES: &str = "Shoes";
pub const CATEGORY_ACCESSORIES: &str = "Accessories";
pub const CATEGORY_OUTERWEAR: &str = "Outerwear";
pub const CATEGORY_HATS: &str = "Hats";
pub const CATEGORY_DRESSES: &str = "Dresses";

/// All valid category strings, in display order.
pub const VALID_CATEGORIES: &[&str] = &[
    CATEGORY_TOPS,
    CATEGORY_BOTTOMS,
    CATEGORY_SHOES,
    CATEGORY_ACCESSORIES,
    CATEGORY_OUTERWEAR,
    CATEGORY_HATS,
    CATEGORY_DRESSES,
];

/// Maximum length of an item's display name.
pub const MAX_ITEM_NAME_LENGTH: usize = 200;

/// Maximum length of the free-text color, style, and season tags.
pub const MAX_TAG_LENGTH: usize = 100;

// ---------------------------------------------------------------------------
// Category
// ---------------------------------------------------------------------------

/// The closet section an item belongs to. Every item has exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Tops,
    Bottoms,
    Shoes,
    Accessories,
    Outerwear,
    Hats,
    /// Accepted in the closet but never placed into a generated outfit.
    Dresses,
}

impl Category {
    /// Convert from the stored string value.
    pub fn from_str_value(s: &str) -> Result<Self, String> {
        match s {
            CATEGORY_TOPS => Ok(Self::Tops),
            CATEGORY_BOTTOMS => Ok(Self::Bottoms),
            CATEGORY_SHOES => Ok(Self::Shoes),
            CATEGORY_ACCESSORIES => Ok(Self::Accessories),
            CATEGORY_OUTERWEAR => Ok(Self::Outerwear),
            CATEGORY_HATS => Ok(Self::Hats),
            CATEGORY_DRESSES => Ok(Self::Dresses),
            _ => Err(format!(
                "Invalid category '{s}'. Must be one of: {}",
                VALID_CATEGORIES.join(", ")
            )),
        }
    }

    /// Convert to the stored string value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Tops => CATEGORY_TOPS,
            Self::Bottoms => CATEGORY_BOTTOMS,
            Self::Shoes => CATEGORY_SHOES,
            Self::Accessories => CATEGORY_ACCESSORIES,
            Self::Outerwear => CATEGORY_OUTERWEAR,
            Self::Hats => CATEGORY_HATS,
            Self::Dresses => CATEGORY_DRESSES,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ClothingItem
// ---------------------------------------------------------------------------

/// One piece of clothing in a user's closet.
///
/// Color, style, and season are free text. An absent or empty tag places no
/// constraint on compatibility checks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClothingItem {
    pub id: DbId,
    pub name: String,
    pub category: Category,
    pub color: Option<String>,
    pub style: Option<String>,
    pub season: Option<String>,
    pub image_url: Option<String>,
}

impl ClothingItem {
    /// The color tag, or `None` when unset or empty.
    pub fn color_tag(&self) -> Option<&str> {
        non_empty(&self.color)
    }

    /// The style tag, or `None` when unset or empty.
    pub fn style_tag(&self) -> Option<&str> {
        non_empty(&self.style)
    }

    /// The season tag, or `None` when unset or empty.
    pub fn season_tag(&self) -> Option<&str> {
        non_empty(&self.season)
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validate an item display name: non-blank and at most [`MAX_ITEM_NAME_LENGTH`].
pub fn validate_item_name(name: &str) -> Result<(), String> {
    if name.trim().is_empty() {
        return Err("Item name must not be empty".to_string());
    }
    if name.chars().count() > MAX_ITEM_NAME_LENGTH {
        return Err(format!(
            "Item name must be at most {MAX_ITEM_NAME_LENGTH} characters"
        ));
    }
    Ok(())
}

/// Validate an optional free-text tag (color, style, or season).
pub fn validate_tag(field: &str, value: Option<&str>) -> Result<(), String> {
    match value {
        Some(v) if v.chars().count() > MAX_TAG_LENGTH => Err(format!(
            "{field} must be at most {MAX_TAG_LENGTH} characters"
        )),
        _ => Ok(()),
    }
}
