//! Wardrobe domain core.
//!
//! Pure logic with no database or network dependencies: the closet data
//! model, colour/style/season compatibility rules, the outfit generator and
//! the saved-outfit duplicate check. The `db` and `api` crates load data and
//! hand it in.

pub mod compatibility;
pub mod error;
pub mod outfit;
pub mod outfit_generator;
pub mod random;
pub mod saved_outfit;
pub mod types;
pub mod wardrobe;
