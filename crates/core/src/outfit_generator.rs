//! Outfit generation from a closet inventory.
//!
//! Generation walks the cartesian product of tops x bottoms x shoes (each
//! shuffled once per run) and turns every accepted triple into an
//! [`OutfitCandidate`], decorating it with optional accessory, outerwear,
//! and hat slots chosen against the top.
//!
//! Two passes share the same walk:
//!
//! 1. **Strict** -- only triples passing [`strict_validity`] are accepted.
//! 2. **Relaxed** -- if the strict pass found fewer than
//!    [`MIN_STRICT_OUTFITS`], the strict results are discarded and every
//!    triple is accepted.
//!
//! Both passes stop at `max_outfits`. Candidates come out in discovery
//! order; there is no scoring.

use crate::compatibility::{
    determine_weather, items_coordinate, styles_match, weather_appropriate, Weather,
};
use crate::outfit::OutfitCandidate;
use crate::random::{pick_index, shuffle, RandomSource};
use crate::wardrobe::{Category, ClothingItem};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Default cap on candidates per run.
pub const DEFAULT_MAX_OUTFITS: usize = 100;

/// Largest `max_outfits` a caller may request.
pub const MAX_OUTFITS_LIMIT: usize = 500;

/// Strict results below this count trigger the relaxed pass.
pub const MIN_STRICT_OUTFITS: usize = 5;

/// Chance that a candidate gets a hat at all.
pub const HAT_PROBABILITY: f64 = 0.2;

/// Predicate deciding whether a top/bottom/shoes triple is acceptable
/// under the derived weather.
pub type TripleCheck = fn(&ClothingItem, &ClothingItem, &ClothingItem, Weather) -> bool;

// ---------------------------------------------------------------------------
// Closet partition
// ---------------------------------------------------------------------------

/// The inventory split by outfit slot. Dresses have no slot and are dropped.
#[derive(Debug, Default)]
struct Closet<'a> {
    tops: Vec<&'a ClothingItem>,
    bottoms: Vec<&'a ClothingItem>,
    shoes: Vec<&'a ClothingItem>,
    accessories: Vec<&'a ClothingItem>,
    outerwear: Vec<&'a ClothingItem>,
    hats: Vec<&'a ClothingItem>,
}

impl<'a> Closet<'a> {
    fn partition(items: &'a [ClothingItem]) -> Self {
        let mut closet = Self::default();
        for item in items {
            let bucket = match item.category {
                Category::Tops => &mut closet.tops,
                Category::Bottoms => &mut closet.bottoms,
                Category::Shoes => &mut closet.shoes,
                Category::Accessories => &mut closet.accessories,
                Category::Outerwear => &mut closet.outerwear,
                Category::Hats => &mut closet.hats,
                Category::Dresses => continue,
            };
            bucket.push(item);
        }
        closet
    }

    fn has_required(&self) -> bool {
        !self.tops.is_empty() && !self.bottoms.is_empty() && !self.shoes.is_empty()
    }
}

/// Whether `items` holds at least one top, one bottom, and one pair of shoes.
///
/// When this is false, [`generate`] always returns an empty list.
pub fn has_required_categories(items: &[ClothingItem]) -> bool {
    Closet::partition(items).has_required()
}

/// Validate a requested candidate cap against `1..=MAX_OUTFITS_LIMIT`.
pub fn validate_max_outfits(max_outfits: usize) -> Result<(), String> {
    if max_outfits == 0 || max_outfits > MAX_OUTFITS_LIMIT {
        return Err(format!(
            "max_outfits must be between 1 and {MAX_OUTFITS_LIMIT}, got {max_outfits}"
        ));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Generation
// ---------------------------------------------------------------------------

/// The strict-pass predicate: colors coordinate and styles match along
/// top/bottom and bottom/shoes, and top and bottom suit the weather.
pub fn strict_validity(
    top: &ClothingItem,
    bottom: &ClothingItem,
    shoes: &ClothingItem,
    weather: Weather,
) -> bool {
    items_coordinate(top, bottom)
        && items_coordinate(bottom, shoes)
        && styles_match(top, bottom)
        && styles_match(bottom, shoes)
        && weather_appropriate(top, weather.as_str())
        && weather_appropriate(bottom, weather.as_str())
}

/// Propose up to `max_outfits` outfits from `items` for `occasion`.
///
/// Returns an empty list when tops, bottoms, or shoes are missing.
pub fn generate(
    items: &[ClothingItem],
    occasion: &str,
    max_outfits: usize,
    rng: &mut dyn RandomSource,
) -> Vec<OutfitCandidate> {
    let mut closet = Closet::partition(items);
    if !closet.has_required() {
        return Vec::new();
    }

    shuffle(rng, &mut closet.tops);
    shuffle(rng, &mut closet.bottoms);
    shuffle(rng, &mut closet.shoes);

    let strict_check: TripleCheck = strict_validity;
    let strict = collect(&closet, occasion, max_outfits, Some(strict_check), rng);
    if strict.len() >= MIN_STRICT_OUTFITS {
        return strict;
    }

    collect(&closet, occasion, max_outfits, None, rng)
}

/// Walk the triple product, accepting triples that pass `check` (all of
/// them when `check` is `None`).
fn collect(
    closet: &Closet<'_>,
    occasion: &str,
    max_outfits: usize,
    check: Option<TripleCheck>,
    rng: &mut dyn RandomSource,
) -> Vec<OutfitCandidate> {
    let mut outfits = Vec::new();
    if max_outfits == 0 {
        return outfits;
    }

    for top in &closet.tops {
        for bottom in &closet.bottoms {
            for shoes in &closet.shoes {
                let weather = determine_weather(top, bottom);
                if let Some(check) = check {
                    if !check(top, bottom, shoes, weather) {
                        continue;
                    }
                }

                let id = outfits.len() + 1;
                outfits.push(assemble(closet, id, top, bottom, shoes, weather, occasion, rng));
                if outfits.len() >= max_outfits {
                    return outfits;
                }
            }
        }
    }

    outfits
}

#[allow(clippy::too_many_arguments)]
fn assemble(
    closet: &Closet<'_>,
    id: usize,
    top: &ClothingItem,
    bottom: &ClothingItem,
    shoes: &ClothingItem,
    weather: Weather,
    occasion: &str,
    rng: &mut dyn RandomSource,
) -> OutfitCandidate {
    let suits_top = |item: &ClothingItem| styles_match(item, top) && items_coordinate(item, top);

    let accessory = pick_matching(&closet.accessories, |i| suits_top(i), rng);

    let outerwear = if weather.wants_outerwear() {
        pick_matching(
            &closet.outerwear,
            |i| suits_top(i) && weather_appropriate(i, weather.as_str()),
            rng,
        )
    } else {
        None
    };

    let hat = if !closet.hats.is_empty() && rng.next_f64() < HAT_PROBABILITY {
        pick_matching(&closet.hats, |i| suits_top(i), rng)
    } else {
        None
    };

    OutfitCandidate {
        id,
        top: top.clone(),
        bottom: bottom.clone(),
        shoes: shoes.clone(),
        accessory,
        outerwear,
        hat,
        occasion: occasion.to_string(),
        weather,
        liked: false,
    }
}

/// Draw one item uniformly from those passing `accept`; `None` if none do.
fn pick_matching(
    pool: &[&ClothingItem],
    accept: impl Fn(&ClothingItem) -> bool,
    rng: &mut dyn RandomSource,
) -> Option<ClothingItem> {
    let matches: Vec<&ClothingItem> = pool.iter().copied().filter(|i| accept(i)).collect();
    if matches.is_empty() {
        return None;
    }
    Some(matches[pick_index(rng, matches.len())].clone())
}
