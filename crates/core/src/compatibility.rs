//! Color, style, and season compatibility rules.
//!
//! The rules are static lookup tables consulted by small predicate
//! functions. All matching is case-insensitive substring containment, so a
//! color such as `"Navy Blue"` counts as both neutral (`navy`) and `blue`.

use serde::{Deserialize, Serialize};

use crate::wardrobe::ClothingItem;

// ---------------------------------------------------------------------------
// Tables
// ---------------------------------------------------------------------------

/// Colors that coordinate with anything.
pub const NEUTRAL_COLORS: &[&str] = &[
    "black", "white", "gray", "grey", "beige", "navy", "brown", "cream",
];

/// Known-good color pairings. Checked in both directions.
pub const COLOR_PAIRS: &[(&str, &str)] = &[
    ("blue", "white"),
    ("blue", "brown"),
    ("blue", "gray"),
    ("red", "black"),
    ("red", "white"),
    ("red", "navy"),
    ("green", "brown"),
    ("green", "beige"),
    ("green", "white"),
    ("yellow", "gray"),
    ("yellow", "navy"),
    ("yellow", "white"),
    ("pink", "gray"),
    ("pink", "white"),
    ("pink", "navy"),
    ("purple", "gray"),
    ("purple", "white"),
    ("orange", "blue"),
    ("orange", "brown"),
];

/// Styles that may be worn together. Checked in both directions.
pub const STYLE_PAIRS: &[(&str, &str)] = &[
    ("casual", "sporty"),
    ("casual", "streetwear"),
    ("formal", "business"),
    ("formal", "elegant"),
    ("bohemian", "casual"),
    ("vintage", "retro"),
    ("minimalist", "modern"),
];

/// Seasons suitable for each weather label (lower-case keys).
pub const WEATHER_SEASONS: &[(&str, &[&str])] = &[
    ("cold", &["winter", "fall", "autumn"]),
    ("rainy", &["spring", "fall", "autumn"]),
    ("sunny", &["summer", "spring"]),
];

// ---------------------------------------------------------------------------
// Weather
// ---------------------------------------------------------------------------

pub const WEATHER_COLD: &str = "Cold";
pub const WEATHER_SUNNY: &str = "Sunny";
pub const WEATHER_RAINY: &str = "Rainy";
pub const WEATHER_ANY: &str = "Any";

/// All valid weather labels.
pub const VALID_WEATHER: &[&str] = &[WEATHER_COLD, WEATHER_SUNNY, WEATHER_RAINY, WEATHER_ANY];

/// Weather label derived from an outfit's top and bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Weather {
    Cold,
    Sunny,
    Rainy,
    Any,
}

impl Weather {
    /// Convert from the stored string value.
    pub fn from_str_value(s: &str) -> Result<Self, String> {
        match s {
            WEATHER_COLD => Ok(Self::Cold),
            WEATHER_SUNNY => Ok(Self::Sunny),
            WEATHER_RAINY => Ok(Self::Rainy),
            WEATHER_ANY => Ok(Self::Any),
            _ => Err(format!(
                "Invalid weather '{s}'. Must be one of: {}",
                VALID_WEATHER.join(", ")
            )),
        }
    }

    /// Convert to the stored string value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cold => WEATHER_COLD,
            Self::Sunny => WEATHER_SUNNY,
            Self::Rainy => WEATHER_RAINY,
            Self::Any => WEATHER_ANY,
        }
    }

    /// Whether outerwear is worth adding for this weather.
    pub fn wants_outerwear(&self) -> bool {
        matches!(self, Self::Cold | Self::Rainy)
    }
}

// ---------------------------------------------------------------------------
// Predicates
// ---------------------------------------------------------------------------

fn pair_listed(table: &[(&str, &str)], a: &str, b: &str) -> bool {
    table
        .iter()
        .any(|(x, y)| (a.contains(x) && b.contains(y)) || (a.contains(y) && b.contains(x)))
}

/// Whether two color tags coordinate. A missing color coordinates with anything.
pub fn colors_coordinate(c1: Option<&str>, c2: Option<&str>) -> bool {
    let (Some(c1), Some(c2)) = (c1, c2) else {
        return true;
    };
    let c1 = c1.to_lowercase();
    let c2 = c2.to_lowercase();

    if NEUTRAL_COLORS
        .iter()
        .any(|n| c1.contains(n) || c2.contains(n))
    {
        return true;
    }
    if c1 == c2 {
        return true;
    }
    pair_listed(COLOR_PAIRS, &c1, &c2)
}

/// Whether two items' styles can be worn together. Unknown style never conflicts.
pub fn styles_match(a: &ClothingItem, b: &ClothingItem) -> bool {
    let (Some(s1), Some(s2)) = (a.style_tag(), b.style_tag()) else {
        return true;
    };
    let s1 = s1.to_lowercase();
    let s2 = s2.to_lowercase();

    s1 == s2 || pair_listed(STYLE_PAIRS, &s1, &s2)
}

/// Whether an item suits the given weather label.
///
/// Items without a season suit everything, as does `"any"`. A weather label
/// missing from [`WEATHER_SEASONS`] is permissive.
pub fn weather_appropriate(item: &ClothingItem, weather: &str) -> bool {
    let Some(season) = item.season_tag() else {
        return true;
    };
    let weather = weather.to_lowercase();
    if weather == "any" {
        return true;
    }

    let season = season.to_lowercase();
    match WEATHER_SEASONS.iter().find(|(w, _)| *w == weather) {
        Some((_, seasons)) => seasons.iter().any(|s| season.contains(s)),
        None => true,
    }
}

/// Derive an outfit's weather from its top and bottom seasons.
///
/// Winter wins over summer, summer over spring.
pub fn determine_weather(top: &ClothingItem, bottom: &ClothingItem) -> Weather {
    let seasons = [top.season_tag(), bottom.season_tag()].map(|s| s.map(str::to_lowercase));
    let either_contains = |needle: &str| {
        seasons
            .iter()
            .flatten()
            .any(|season| season.contains(needle))
    };

    if either_contains("winter") {
        Weather::Cold
    } else if either_contains("summer") {
        Weather::Sunny
    } else if either_contains("spring") {
        Weather::Rainy
    } else {
        Weather::Any
    }
}

/// Color coordination between two items.
pub fn items_coordinate(a: &ClothingItem, b: &ClothingItem) -> bool {
    colors_coordinate(a.color_tag(), b.color_tag())
}
