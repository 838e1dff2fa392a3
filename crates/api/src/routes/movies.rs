//! Route definitions for the `/movies` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::movies;
use crate::state::AppState;

/// Routes mounted at `/movies`.
///
/// The static segments are registered alongside `/{id}`; axum's router
/// prefers them over the capture.
///
/// ```text
/// GET    /          -> list
/// POST   /          -> create (admin)
/// GET    /sorted    -> list_sorted
/// GET    /search    -> search
/// GET    /{id}      -> get_by_id
/// PUT    /{id}      -> update (admin)
/// DELETE /{id}      -> delete (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(movies::list).post(movies::create))
        .route("/sorted", get(movies::list_sorted))
        .route("/search", get(movies::search))
        .route(
            "/{id}",
            get(movies::get_by_id)
                .put(movies::update)
                .delete(movies::delete),
        )
}
