pub mod auth;
pub mod clothing;
pub mod favorites;
pub mod outfits;
