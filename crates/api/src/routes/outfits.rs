//! Route definitions for outfit generation and saved outfits.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::outfits;
use crate::state::AppState;

/// Routes mounted at `/outfits`.
///
/// ```text
/// POST   /generate      -> generate_outfits
/// GET    /saved         -> list_saved
/// POST   /saved         -> save
/// GET    /saved/{id}    -> get_saved
/// DELETE /saved/{id}    -> delete_saved
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/generate", post(outfits::generate_outfits))
        .route("/saved", get(outfits::list_saved).post(outfits::save))
        .route(
            "/saved/{id}",
            get(outfits::get_saved).delete(outfits::delete_saved),
        )
}
