//! Query parameter types shared by handler modules.

use serde::Deserialize;

/// `?category=` filter for closet listings.
#[derive(Debug, Default, Deserialize)]
pub struct CategoryFilter {
    pub category: Option<String>,
}
