//! Handlers for outfit generation and saved outfits.
//!
//! Generation is pure CPU work over the user's closet and runs on the
//! blocking pool. Saving re-checks ownership and slot categories on the
//! server and refuses combinations the user has already saved.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use wardrobe_core::compatibility::Weather;
use wardrobe_core::error::CoreError;
use wardrobe_core::outfit::{validate_occasion, OutfitCandidate};
use wardrobe_core::outfit_generator::{generate, has_required_categories, validate_max_outfits};
use wardrobe_core::random::RngSource;
use wardrobe_core::saved_outfit::is_already_saved;
use wardrobe_core::types::DbId;
use wardrobe_core::wardrobe::Category;
use wardrobe_db::models::clothing_item::ClothingItem;
use wardrobe_db::models::saved_outfit::{CreateSavedOutfit, SavedOutfit};
use wardrobe_db::repositories::{ClothingItemRepo, SavedOutfitRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /outfits/generate`.
#[derive(Debug, Deserialize)]
pub struct GenerateOutfitsRequest {
    pub occasion: String,
    /// Defaults to the server's configured cap.
    pub max_outfits: Option<usize>,
}

/// A generated candidate annotated with whether it matches a saved outfit.
#[derive(Debug, Serialize)]
pub struct GeneratedOutfit {
    #[serde(flatten)]
    pub outfit: OutfitCandidate,
    pub already_saved: bool,
}

/// Response payload for `POST /outfits/generate`.
#[derive(Debug, Serialize)]
pub struct GenerateOutfitsResponse {
    pub outfits: Vec<GeneratedOutfit>,
    /// True when the closet lacks tops, bottoms, or shoes entirely.
    pub insufficient_inventory: bool,
}

// ---------------------------------------------------------------------------
// Generation
// ---------------------------------------------------------------------------

/// POST /api/v1/outfits/generate
pub async fn generate_outfits(
    user: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<GenerateOutfitsRequest>,
) -> AppResult<Json<DataResponse<GenerateOutfitsResponse>>> {
    validate_occasion(&input.occasion).map_err(validation)?;
    let max_outfits = input.max_outfits.unwrap_or(state.config.default_max_outfits);
    validate_max_outfits(max_outfits).map_err(validation)?;

    let rows = ClothingItemRepo::list_for_user(&state.pool, user.user_id, None).await?;
    let items = rows
        .iter()
        .map(ClothingItem::to_domain)
        .collect::<Result<Vec<_>, _>>()?;
    let saved = SavedOutfitRepo::list_for_user(&state.pool, user.user_id).await?;

    let insufficient_inventory = !has_required_categories(&items);
    let occasion = input.occasion;

    let candidates = tokio::task::spawn_blocking(move || {
        let mut rng = RngSource::thread();
        generate(&items, &occasion, max_outfits, &mut rng)
    })
    .await
    .map_err(|e| AppError::InternalError(format!("Outfit generation task failed: {e}")))?;

    tracing::info!(
        user_id = user.user_id,
        username = %user.username,
        closet_size = rows.len(),
        generated = candidates.len(),
        insufficient_inventory,
        "Outfits generated",
    );

    let outfits = candidates
        .into_iter()
        .map(|outfit| GeneratedOutfit {
            already_saved: is_already_saved(&outfit, &saved),
            outfit,
        })
        .collect();

    Ok(Json(DataResponse {
        data: GenerateOutfitsResponse {
            outfits,
            insufficient_inventory,
        },
    }))
}

// ---------------------------------------------------------------------------
// Saved outfits
// ---------------------------------------------------------------------------

/// GET /api/v1/outfits/saved
pub async fn list_saved(
    user: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<SavedOutfit>>>> {
    let outfits = SavedOutfitRepo::list_for_user(&state.pool, user.user_id).await?;
    Ok(Json(DataResponse { data: outfits }))
}

/// POST /api/v1/outfits/saved
///
/// Persist a chosen outfit. Every referenced item must belong to the user
/// and sit in the slot matching its category. The duplicate check and the
/// insert are atomic per user, so a repeated save always answers 409.
pub async fn save(
    user: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateSavedOutfit>,
) -> AppResult<(StatusCode, Json<DataResponse<SavedOutfit>>)> {
    validate_occasion(&input.occasion).map_err(validation)?;
    Weather::from_str_value(&input.weather).map_err(validation)?;

    let slots = slot_requirements(&input);
    let ids: Vec<DbId> = slots.iter().map(|(_, id, _)| *id).collect();
    let owned = ClothingItemRepo::find_many(&state.pool, user.user_id, &ids).await?;

    for (slot, id, expected) in &slots {
        let item = owned
            .iter()
            .find(|i| i.id == *id)
            .ok_or(AppError::Core(CoreError::clothing_item_not_found(*id)))?;
        if item.category != expected.as_str() {
            return Err(validation(format!(
                "Item {id} is in {}, which cannot fill the {slot} slot",
                item.category
            )));
        }
    }

    let outfit = SavedOutfitRepo::create_unless_saved(&state.pool, user.user_id, &input)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Conflict("This outfit is already saved".into()))
        })?;

    tracing::info!(
        user_id = user.user_id,
        outfit_id = outfit.id,
        occasion = %outfit.occasion,
        "Outfit saved",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: outfit })))
}

/// GET /api/v1/outfits/saved/{id}
pub async fn get_saved(
    user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<SavedOutfit>>> {
    let outfit = SavedOutfitRepo::find_by_id(&state.pool, user.user_id, id)
        .await?
        .ok_or(AppError::Core(CoreError::saved_outfit_not_found(id)))?;
    Ok(Json(DataResponse { data: outfit }))
}

/// DELETE /api/v1/outfits/saved/{id}
pub async fn delete_saved(
    user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if SavedOutfitRepo::delete(&state.pool, user.user_id, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::saved_outfit_not_found(id)))
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn validation(msg: String) -> AppError {
    AppError::Core(CoreError::Validation(msg))
}

/// `(slot name, item id, required category)` for every filled slot.
fn slot_requirements(input: &CreateSavedOutfit) -> Vec<(&'static str, DbId, Category)> {
    let required = [
        ("top", Some(input.top_id), Category::Tops),
        ("bottom", Some(input.bottom_id), Category::Bottoms),
        ("shoes", Some(input.shoes_id), Category::Shoes),
        ("accessory", input.accessory_id, Category::Accessories),
        ("outerwear", input.outerwear_id, Category::Outerwear),
        ("hat", input.hat_id, Category::Hats),
    ];
    required
        .into_iter()
        .filter_map(|(slot, id, category)| id.map(|id| (slot, id, category)))
        .collect()
}
