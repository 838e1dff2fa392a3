//! Response envelopes shared by the movie and auth handlers.
//!
//! Every successful body carries `success: true`; errors are produced by
//! [`AppError`](crate::error::AppError) with `success: false`.

use catalog_core::pagination::Pagination;
use catalog_db::models::movie::Movie;
use catalog_db::models::user::UserResponse;
use serde::Serialize;

/// `{success, movies, pagination}`
#[derive(Debug, Serialize)]
pub struct MovieListResponse {
    pub success: bool,
    pub movies: Vec<Movie>,
    pub pagination: Pagination,
}

impl MovieListResponse {
    pub fn new(movies: Vec<Movie>, pagination: Pagination) -> Self {
        Self {
            success: true,
            movies,
            pagination,
        }
    }
}

/// `{success, message?, movie}`
#[derive(Debug, Serialize)]
pub struct MovieResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
    pub movie: Movie,
}

impl MovieResponse {
    pub fn new(movie: Movie) -> Self {
        Self {
            success: true,
            message: None,
            movie,
        }
    }

    pub fn with_message(movie: Movie, message: &'static str) -> Self {
        Self {
            success: true,
            message: Some(message),
            movie,
        }
    }
}

/// `{success, message}`
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub success: bool,
    pub message: &'static str,
}

impl MessageResponse {
    pub fn new(message: &'static str) -> Self {
        Self {
            success: true,
            message,
        }
    }
}

/// `{success, token, user}` returned by register and login.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub success: bool,
    pub token: String,
    pub user: UserResponse,
}

/// `{success, user}` returned by `/me`.
#[derive(Debug, Serialize)]
pub struct MeResponse {
    pub success: bool,
    pub user: UserResponse,
}
