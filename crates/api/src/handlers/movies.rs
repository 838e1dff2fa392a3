//! Handlers for the `/movies` resource.
//!
//! Reads are public. Writes take [`RequireAdmin`] ahead of the body so the
//! role check happens before any payload is parsed or persisted.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use catalog_core::error::CoreError;
use catalog_core::movie::{validate_movie_changes, validate_new_movie};
use catalog_core::pagination::Pagination;
use catalog_core::search::{like_pattern, normalize_query};
use catalog_core::sort::MovieSort;
use catalog_core::types::DbId;
use catalog_db::repositories::MovieRepo;
use serde_json::Value;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::query::{or_default, PaginationParams, SearchParams, SortParams};
use crate::response::{MessageResponse, MovieListResponse, MovieResponse};
use crate::state::AppState;

const ENTITY: &str = "Movie";

/// Path ids that do not parse as a database id cannot name a movie.
fn parse_id(raw: &str) -> AppResult<DbId> {
    raw.trim()
        .parse::<DbId>()
        .map_err(|_| AppError::Core(CoreError::not_found(ENTITY, raw)))
}

async fn list_page(
    state: &AppState,
    sort: MovieSort,
    params: &PaginationParams,
) -> AppResult<MovieListResponse> {
    let page = params.resolve(state.config.max_page_limit);
    let movies = MovieRepo::list(&state.pool, sort, page.limit, page.offset()).await?;
    let total = MovieRepo::count(&state.pool).await?;
    Ok(MovieListResponse::new(movies, Pagination::new(page, total)))
}

/// GET /api/movies
pub async fn list(
    State(state): State<AppState>,
    params: Result<Query<PaginationParams>, QueryRejection>,
) -> AppResult<Json<MovieListResponse>> {
    let params = or_default(params);
    let body = list_page(&state, MovieSort::Newest, &params).await?;
    Ok(Json(body))
}

/// GET /api/movies/sorted
pub async fn list_sorted(
    State(state): State<AppState>,
    params: Result<Query<SortParams>, QueryRejection>,
) -> AppResult<Json<MovieListResponse>> {
    let params = or_default(params);
    let body = list_page(&state, params.sort(), &params.pagination).await?;
    Ok(Json(body))
}

/// GET /api/movies/search
///
/// A blank query short-circuits to an empty page without touching the database.
pub async fn search(
    State(state): State<AppState>,
    params: Result<Query<SearchParams>, QueryRejection>,
) -> AppResult<Json<MovieListResponse>> {
    let params = or_default(params);
    let page = params.pagination.resolve(state.config.max_page_limit);

    let Some(term) = normalize_query(params.q.as_deref()) else {
        return Ok(Json(MovieListResponse::new(
            Vec::new(),
            Pagination::empty(page),
        )));
    };

    let pattern = like_pattern(term);
    let movies = MovieRepo::search(&state.pool, &pattern, page.limit, page.offset()).await?;
    let total = MovieRepo::count_search(&state.pool, &pattern).await?;
    tracing::debug!(term, total, "Movie search");

    Ok(Json(MovieListResponse::new(
        movies,
        Pagination::new(page, total),
    )))
}

/// GET /api/movies/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Json<MovieResponse>> {
    let id = parse_id(&raw_id)?;
    let movie = MovieRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found(ENTITY, id)))?;
    Ok(Json(MovieResponse::new(movie)))
}

/// POST /api/movies
pub async fn create(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> AppResult<(StatusCode, Json<MovieResponse>)> {
    let Json(payload) = payload?;
    let input = validate_new_movie(&payload)?;
    let movie = MovieRepo::create(&state.pool, &input).await?;

    tracing::info!(movie_id = movie.id, user_id = admin.user_id, "Movie created");

    Ok((
        StatusCode::CREATED,
        Json(MovieResponse::with_message(movie, "Movie added successfully")),
    ))
}

/// PUT /api/movies/{id}
pub async fn update(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    payload: Result<Json<Value>, JsonRejection>,
) -> AppResult<Json<MovieResponse>> {
    let id = parse_id(&raw_id)?;
    let Json(payload) = payload?;
    let changes = validate_movie_changes(&payload)?;

    let movie = if changes.is_empty() {
        MovieRepo::find_by_id(&state.pool, id).await?
    } else {
        MovieRepo::update(&state.pool, id, &changes).await?
    }
    .ok_or_else(|| AppError::Core(CoreError::not_found(ENTITY, id)))?;

    tracing::info!(movie_id = id, user_id = admin.user_id, "Movie updated");

    Ok(Json(MovieResponse::with_message(movie, "Movie updated successfully")))
}

/// DELETE /api/movies/{id}
pub async fn delete(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    let id = parse_id(&raw_id)?;
    if !MovieRepo::exists(&state.pool, id).await? {
        return Err(AppError::Core(CoreError::not_found(ENTITY, id)));
    }
    // A concurrent delete between the check and here still reports "not found".
    if !MovieRepo::delete(&state.pool, id).await? {
        return Err(AppError::Core(CoreError::not_found(ENTITY, id)));
    }

    tracing::info!(movie_id = id, user_id = admin.user_id, "Movie deleted");

    Ok(Json(MessageResponse::new("Movie deleted successfully")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn numeric_ids_parse() {
        assert_eq!(parse_id("42").unwrap(), 42);
    }

    #[test]
    fn malformed_ids_are_not_found() {
        assert_matches!(
            parse_id("64b7f0c2e4b0a1a2b3c4d5e6"),
            Err(AppError::Core(CoreError::NotFound { entity: "Movie", .. }))
        );
    }
}
