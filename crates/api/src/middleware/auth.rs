//! Bearer-token extractor that identifies the closet owner of a request.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use axum::http::HeaderMap;
use wardrobe_core::error::CoreError;
use wardrobe_core::types::DbId;

use crate::auth::jwt::validate_token;
use crate::error::AppError;
use crate::state::AppState;

/// The owner of the closet a request operates on.
///
/// Every closet, favorites and outfit handler takes this as its first
/// argument and passes `user_id` to the repositories, which filter on it.
/// Another user's item id therefore looks exactly like a missing one:
///
/// ```ignore
/// async fn show(user: AuthUser, State(state): State<AppState>, Path(id): Path<DbId>)
///     -> AppResult<Json<DataResponse<ClothingItem>>>
/// {
///     let item = ClothingItemRepo::find_by_id(&state.pool, user.user_id, id)
///         .await?
///         .ok_or(AppError::Core(CoreError::clothing_item_not_found(id)))?;
///     Ok(Json(DataResponse { data: item }))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// Owner id taken from `claims.sub`.
    pub user_id: DbId,
    /// Username at token issue time; used in log fields only.
    pub username: String,
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(&parts.headers)?;

        let claims = validate_token(token, &state.config.jwt).map_err(|e| {
            tracing::debug!(error = %e, "Rejected access token");
            unauthorized("Invalid or expired token")
        })?;

        Ok(AuthUser {
            user_id: claims.sub,
            username: claims.username,
        })
    }
}

/// Pull the token out of `Authorization: Bearer <token>`.
///
/// The scheme name is matched case-insensitively; an empty token is rejected.
fn bearer_token(headers: &HeaderMap) -> Result<&str, AppError> {
    let value = headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| unauthorized("Missing Authorization header"))?;

    let token = value
        .split_once(' ')
        .filter(|(scheme, _)| scheme.eq_ignore_ascii_case("bearer"))
        .map(|(_, token)| token.trim())
        .unwrap_or_default();
    if token.is_empty() {
        return Err(unauthorized(
            "Invalid Authorization format. Expected: Bearer <token>",
        ));
    }
    Ok(token)
}

fn unauthorized(msg: &str) -> AppError {
    AppError::Core(CoreError::Unauthorized(msg.to_string()))
}
