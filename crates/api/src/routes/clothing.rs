//! Route definitions for the `/clothing` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::clothing;
use crate::state::AppState;

/// Routes mounted at `/clothing`.
///
/// ```text
/// GET    /       -> list (?category=Tops)
/// POST   /       -> create
/// GET    /{id}   -> get_by_id
/// PUT    /{id}   -> update
/// DELETE /{id}   -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(clothing::list).post(clothing::create))
        .route(
            "/{id}",
            get(clothing::get_by_id)
                .put(clothing::update)
                .delete(clothing::delete),
        )
}
