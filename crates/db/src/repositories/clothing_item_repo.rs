//! Repository for the `clothing_items` table.

use sqlx::PgPool;
use wardrobe_core::types::DbId;

use crate::models::clothing_item::{ClothingItem, CreateClothingItem, UpdateClothingItem};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, name, category, color, style, season, image_url, \
                       created_at, updated_at";

/// Provides CRUD operations for a user's closet.
pub struct ClothingItemRepo;

impl ClothingItemRepo {
    /// Insert a new item for `user_id`, returning the created row.
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        input: &CreateClothingItem,
    ) -> Result<ClothingItem, sqlx::Error> {
        let query = format!(
            "INSERT INTO clothing_items
                (user_id, name, category, color, style, season, image_url)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ClothingItem>(&query)
            .bind(user_id)
            .bind(&input.name)
            .bind(&input.category)
            .bind(&input.color)
            .bind(&input.style)
            .bind(&input.season)
            .bind(&input.image_url)
            .fetch_one(pool)
            .await
    }

    /// Find one of the user's items by ID.
    pub async fn find_by_id(
        pool: &PgPool,
        user_id: DbId,
        id: DbId,
    ) -> Result<Option<ClothingItem>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM clothing_items WHERE id = $1 AND user_id = $2");
        sqlx::query_as::<_, ClothingItem>(&query)
            .bind(id)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Fetch the subset of `ids` that belong to the user.
    pub async fn find_many(
        pool: &PgPool,
        user_id: DbId,
        ids: &[DbId],
    ) -> Result<Vec<ClothingItem>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM clothing_items WHERE user_id = $1 AND id = ANY($2)"
        );
        sqlx::query_as::<_, ClothingItem>(&query)
            .bind(user_id)
            .bind(ids)
            .fetch_all(pool)
            .await
    }

    /// List the user's items, newest first, optionally limited to one category.
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: DbId,
        category: Option<&str>,
    ) -> Result<Vec<ClothingItem>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM clothing_items
             WHERE user_id = $1 AND ($2::TEXT IS NULL OR category = $2)
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, ClothingItem>(&query)
            .bind(user_id)
            .bind(category)
            .fetch_all(pool)
            .await
    }

    /// Update one of the user's items. Only non-`None` fields are applied.
    ///
    /// An empty string clears an optional tag or the image URL back to
    /// `NULL`. Returns `None` if the item does not exist or belongs to
    /// someone else.
    pub async fn update(
        pool: &PgPool,
        user_id: DbId,
        id: DbId,
        input: &UpdateClothingItem,
    ) -> Result<Option<ClothingItem>, sqlx::Error> {
        let query = format!(
            "UPDATE clothing_items SET
                name = COALESCE($3, name),
                category = COALESCE($4, category),
                color = CASE WHEN $5::TEXT IS NULL THEN color ELSE NULLIF($5, '') END,
                style = CASE WHEN $6::TEXT IS NULL THEN style ELSE NULLIF($6, '') END,
                season = CASE WHEN $7::TEXT IS NULL THEN season ELSE NULLIF($7, '') END,
                image_url = CASE WHEN $8::TEXT IS NULL THEN image_url ELSE NULLIF($8, '') END
             WHERE id = $1 AND user_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ClothingItem>(&query)
            .bind(id)
            .bind(user_id)
            .bind(&input.name)
            .bind(&input.category)
            .bind(&input.color)
            .bind(&input.style)
            .bind(&input.season)
            .bind(&input.image_url)
            .fetch_optional(pool)
            .await
    }

    /// Delete one of the user's items. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, user_id: DbId, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM clothing_items WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
