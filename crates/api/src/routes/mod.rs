pub mod auth;
pub mod clothing;
pub mod favorites;
pub mod health;
pub mod outfits;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/register                                   register (public)
/// /auth/login                                      login (public)
/// /auth/me                                         current user (requires auth)
///
/// /clothing                                        list (?category=), create
/// /clothing/{id}                                   get, update, delete
///
/// /favorites                                       list favorite items
/// /favorites/{item_id}                             add (PUT), remove (DELETE)
///
/// /outfits/generate                                generate candidates (POST)
/// /outfits/saved                                   list, save
/// /outfits/saved/{id}                              get, delete
/// ```
///
/// Everything except register and login requires a Bearer token; queries are
/// scoped to the token's user.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Account routes.
        .nest("/auth", auth::router())
        // The user's closet.
        .nest("/clothing", clothing::router())
        .nest("/favorites", favorites::router())
        // Outfit generation and saved outfits.
        .nest("/outfits", outfits::router())
}
