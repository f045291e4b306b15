//! Handlers for the `/favorites` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use wardrobe_core::error::CoreError;
use wardrobe_core::types::DbId;
use wardrobe_db::models::clothing_item::ClothingItem;
use wardrobe_db::repositories::{ClothingItemRepo, FavoriteRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/favorites
pub async fn list(
    user: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<ClothingItem>>>> {
    let items = FavoriteRepo::list_items(&state.pool, user.user_id).await?;
    Ok(Json(DataResponse { data: items }))
}

/// PUT /api/v1/favorites/{item_id}
///
/// Idempotent; only the owner's items can be favorited.
pub async fn add(
    user: AuthUser,
    State(state): State<AppState>,
    Path(item_id): Path<DbId>,
) -> AppResult<StatusCode> {
    ClothingItemRepo::find_by_id(&state.pool, user.user_id, item_id)
        .await?
        .ok_or(AppError::Core(CoreError::clothing_item_not_found(item_id)))?;

    FavoriteRepo::add(&state.pool, user.user_id, item_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/v1/favorites/{item_id}
pub async fn remove(
    user: AuthUser,
    State(state): State<AppState>,
    Path(item_id): Path<DbId>,
) -> AppResult<StatusCode> {
    if FavoriteRepo::remove(&state.pool, user.user_id, item_id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Favorite",
            id: item_id,
        }))
    }
}
