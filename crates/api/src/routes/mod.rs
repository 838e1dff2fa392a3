pub mod auth;
pub mod health;
pub mod movies;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /movies                 list (public), create (admin)
/// /movies/sorted          sorted list (public)
/// /movies/search          substring search (public)
/// /movies/{id}            get (public), update, delete (admin)
///
/// /auth/register          register (public)
/// /auth/login             login (public)
/// /auth/me                current account (requires auth)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/movies", movies::router())
        .nest("/auth", auth::router())
}
