//! Repository for the `favorites` table.
//!
//! Favorites are a per-user set of closet item ids.

use sqlx::PgPool;
use wardrobe_core::types::DbId;

use crate::models::clothing_item::ClothingItem;

/// Item columns qualified for the favorites join.
const ITEM_COLUMNS: &str = "ci.id, ci.user_id, ci.name, ci.category, ci.color, ci.style, \
                            ci.season, ci.image_url, ci.created_at, ci.updated_at";

/// Provides favorite marking for closet items.
pub struct FavoriteRepo;

impl FavoriteRepo {
    /// Mark an item as favorite. Marking twice is a no-op.
    pub async fn add(pool: &PgPool, user_id: DbId, item_id: DbId) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO favorites (user_id, clothing_item_id)
             VALUES ($1, $2)
             ON CONFLICT (user_id, clothing_item_id) DO NOTHING",
        )
        .bind(user_id)
        .bind(item_id)
        .execute(pool)
        .await?;
        Ok(())
    }

    /// Unmark an item. Returns `true` if it was a favorite.
    pub async fn remove(pool: &PgPool, user_id: DbId, item_id: DbId) -> Result<bool, sqlx::Error> {
        let result =
            sqlx::query("DELETE FROM favorites WHERE user_id = $1 AND clothing_item_id = $2")
                .bind(user_id)
                .bind(item_id)
                .execute(pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }

    /// List the user's favorite items, most recently favorited first.
    pub async fn list_items(pool: &PgPool, user_id: DbId) -> Result<Vec<ClothingItem>, sqlx::Error> {
        let query = format!(
            "SELECT {ITEM_COLUMNS}
             FROM favorites f
             JOIN clothing_items ci ON ci.id = f.clothing_item_id
             WHERE f.user_id = $1
             ORDER BY f.created_at DESC, f.id DESC"
        );
        sqlx::query_as::<_, ClothingItem>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }
}
