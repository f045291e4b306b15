//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. Everything except
//! [`UserRepo`] is scoped by the owning `user_id`, so another user's rows
//! read as absent.

pub mod clothing_item_repo;
pub mod favorite_repo;
pub mod saved_outfit_repo;
pub mod user_repo;

pub use clothing_item_repo::ClothingItemRepo;
pub use favorite_repo::FavoriteRepo;
pub use saved_outfit_repo::SavedOutfitRepo;
pub use user_repo::UserRepo;
