use axum::routing::{get, put};
use axum::Router;

use crate::handlers::favorites;
use crate::state::AppState;

/// Routes mounted at `/favorites`.
///
/// ```text
/// GET    /            -> list
/// PUT    /{item_id}   -> add
/// DELETE /{item_id}   -> remove
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(favorites::list))
        .route("/{item_id}", put(favorites::add).delete(favorites::remove))
}
