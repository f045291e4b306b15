//! Repository for the `saved_outfits` table.

use sqlx::{PgExecutor, PgPool};
use wardrobe_core::saved_outfit::is_already_saved;
use wardrobe_core::types::DbId;

use crate::models::saved_outfit::{CreateSavedOutfit, SavedOutfit};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, top_id, bottom_id, shoes_id, accessory_id, outerwear_id, \
                       hat_id, occasion, weather, created_at";

/// Provides persistence for outfits the user chose to keep.
///
/// The table itself allows identical rows; [`SavedOutfitRepo::create_unless_saved`]
/// is the duplicate-aware insert.
pub struct SavedOutfitRepo;

impl SavedOutfitRepo {
    /// Insert a saved outfit for `user_id` unconditionally.
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        input: &CreateSavedOutfit,
    ) -> Result<SavedOutfit, sqlx::Error> {
        Self::insert(pool, user_id, input).await
    }

    /// Insert a saved outfit unless `is_already_saved` matches one of the
    /// user's existing outfits, in which case `None` is returned.
    ///
    /// The check and the insert run in one transaction holding a
    /// per-user advisory lock, so concurrent saves of the same outfit
    /// produce exactly one row.
    pub async fn create_unless_saved(
        pool: &PgPool,
        user_id: DbId,
        input: &CreateSavedOutfit,
    ) -> Result<Option<SavedOutfit>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        sqlx::query("SELECT pg_advisory_xact_lock($1)")
            .bind(user_id)
            .execute(&mut *tx)
            .await?;

        let query = format!("SELECT {COLUMNS} FROM saved_outfits WHERE user_id = $1");
        let existing = sqlx::query_as::<_, SavedOutfit>(&query)
            .bind(user_id)
            .fetch_all(&mut *tx)
            .await?;
        if is_already_saved(input, &existing) {
            return Ok(None);
        }

        let outfit = Self::insert(&mut *tx, user_id, input).await?;
        tx.commit().await?;
        Ok(Some(outfit))
    }

    /// Number of the user's saved outfits that reference `item_id` in any slot.
    pub async fn count_using_item(
        pool: &PgPool,
        user_id: DbId,
        item_id: DbId,
    ) -> Result<i64, sqlx::Error> {
        let count: (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM saved_outfits
             WHERE user_id = $1
               AND $2 IN (top_id, bottom_id, shoes_id, accessory_id, outerwear_id, hat_id)",
        )
        .bind(user_id)
        .bind(item_id)
        .fetch_one(pool)
        .await?;
        Ok(count.0)
    }

    async fn insert<'e>(
        executor: impl PgExecutor<'e>,
        user_id: DbId,
        input: &CreateSavedOutfit,
    ) -> Result<SavedOutfit, sqlx::Error> {
        let query = format!(
            "INSERT INTO saved_outfits
                (user_id, top_id, bottom_id, shoes_id, accessory_id, outerwear_id, hat_id,
                 occasion, weather)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SavedOutfit>(&query)
            .bind(user_id)
            .bind(input.top_id)
            .bind(input.bottom_id)
            .bind(input.shoes_id)
            .bind(input.accessory_id)
            .bind(input.outerwear_id)
            .bind(input.hat_id)
            .bind(&input.occasion)
            .bind(&input.weather)
            .fetch_one(executor)
            .await
    }

    /// Find one of the user's saved outfits by ID.
    pub async fn find_by_id(
        pool: &PgPool,
        user_id: DbId,
        id: DbId,
    ) -> Result<Option<SavedOutfit>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM saved_outfits WHERE id = $1 AND user_id = $2");
        sqlx::query_as::<_, SavedOutfit>(&query)
            .bind(id)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// List the user's saved outfits, newest first.
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<SavedOutfit>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM saved_outfits
             WHERE user_id = $1
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, SavedOutfit>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Delete one of the user's saved outfits. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, user_id: DbId, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM saved_outfits WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
