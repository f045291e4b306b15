//! Handlers for the `/clothing` resource (the user's closet).

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use wardrobe_core::error::CoreError;
use wardrobe_core::types::DbId;
use wardrobe_core::wardrobe::{validate_item_name, validate_tag, Category};
use wardrobe_db::models::clothing_item::{ClothingItem, CreateClothingItem, UpdateClothingItem};
use wardrobe_db::repositories::{ClothingItemRepo, SavedOutfitRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::query::CategoryFilter;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/clothing
pub async fn list(
    user: AuthUser,
    State(state): State<AppState>,
    Query(filter): Query<CategoryFilter>,
) -> AppResult<Json<DataResponse<Vec<ClothingItem>>>> {
    if let Some(category) = &filter.category {
        parse_category(category)?;
    }
    let items =
        ClothingItemRepo::list_for_user(&state.pool, user.user_id, filter.category.as_deref())
            .await?;
    Ok(Json(DataResponse { data: items }))
}

/// POST /api/v1/clothing
pub async fn create(
    user: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateClothingItem>,
) -> AppResult<(StatusCode, Json<DataResponse<ClothingItem>>)> {
    validate_item_name(&input.name).map_err(validation)?;
    parse_category(&input.category)?;
    validate_tags(
        input.color.as_deref(),
        input.style.as_deref(),
        input.season.as_deref(),
    )?;

    let item = ClothingItemRepo::create(&state.pool, user.user_id, &input).await?;

    tracing::info!(
        user_id = user.user_id,
        item_id = item.id,
        category = %item.category,
        "Clothing item added",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: item })))
}

/// GET /api/v1/clothing/{id}
pub async fn get_by_id(
    user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<ClothingItem>>> {
    let item = ClothingItemRepo::find_by_id(&state.pool, user.user_id, id)
        .await?
        .ok_or(AppError::Core(CoreError::clothing_item_not_found(id)))?;
    Ok(Json(DataResponse { data: item }))
}

/// PUT /api/v1/clothing/{id}
pub async fn update(
    user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateClothingItem>,
) -> AppResult<Json<DataResponse<ClothingItem>>> {
    if let Some(name) = &input.name {
        validate_item_name(name).map_err(validation)?;
    }
    validate_tags(
        input.color.as_deref(),
        input.style.as_deref(),
        input.season.as_deref(),
    )?;
    if let Some(category) = &input.category {
        let category = parse_category(category)?;
        ensure_recategorizable(&state, user.user_id, id, category).await?;
    }

    let item = ClothingItemRepo::update(&state.pool, user.user_id, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::clothing_item_not_found(id)))?;
    Ok(Json(DataResponse { data: item }))
}

/// DELETE /api/v1/clothing/{id}
///
/// Saved outfits that use the item are removed with it.
pub async fn delete(
    user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if ClothingItemRepo::delete(&state.pool, user.user_id, id).await? {
        tracing::info!(user_id = user.user_id, item_id = id, "Clothing item deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::clothing_item_not_found(id)))
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn validation(msg: String) -> AppError {
    AppError::Core(CoreError::Validation(msg))
}

fn parse_category(category: &str) -> AppResult<Category> {
    Category::from_str_value(category).map_err(validation)
}

/// Refuse to move an item out of its category while a saved outfit holds
/// it, since that outfit's slot would then carry the wrong kind of item.
async fn ensure_recategorizable(
    state: &AppState,
    user_id: DbId,
    id: DbId,
    category: Category,
) -> AppResult<()> {
    let current = ClothingItemRepo::find_by_id(&state.pool, user_id, id)
        .await?
        .ok_or(AppError::Core(CoreError::clothing_item_not_found(id)))?;
    if current.category == category.as_str() {
        return Ok(());
    }

    let in_use = SavedOutfitRepo::count_using_item(&state.pool, user_id, id).await?;
    if in_use > 0 {
        return Err(AppError::Core(CoreError::Conflict(format!(
            "Item {id} is used by {in_use} saved outfit(s); delete them before \
             moving it from {} to {category}",
            current.category
        ))));
    }
    Ok(())
}

fn validate_tags(color: Option<&str>, style: Option<&str>, season: Option<&str>) -> AppResult<()> {
    validate_tag("color", color).map_err(validation)?;
    validate_tag("style", style).map_err(validation)?;
    validate_tag("season", season).map_err(validation)?;
    Ok(())
}
