//! Repository for the `movies` table.

use catalog_core::sort::{MovieSort, SortField, SortOrder};
use catalog_core::types::DbId;
use sqlx::PgPool;

use crate::models::movie::{Movie, MovieChanges, NewMovie};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, description, rating, release_date, duration, genre, \
                       director, cast_members, poster, imdb_id, created_at, updated_at";

/// Substring match on title or description. `$1` is an escaped ILIKE pattern.
const SEARCH_FILTER: &str = "title ILIKE $1 OR description ILIKE $1";

/// `ORDER BY` clause for a listing. The id tiebreak keeps pages stable when
/// sort keys collide.
fn order_by(sort: MovieSort) -> &'static str {
    match sort {
        MovieSort::Newest => "created_at DESC, id DESC",
        MovieSort::By(field, order) => match (field, order) {
            (SortField::Title, SortOrder::Asc) => "title ASC, id ASC",
            (SortField::Title, SortOrder::Desc) => "title DESC, id DESC",
            (SortField::Rating, SortOrder::Asc) => "rating ASC, id ASC",
            (SortField::Rating, SortOrder::Desc) => "rating DESC, id DESC",
            (SortField::ReleaseDate, SortOrder::Asc) => "release_date ASC, id ASC",
            (SortField::ReleaseDate, SortOrder::Desc) => "release_date DESC, id DESC",
            (SortField::Duration, SortOrder::Asc) => "duration ASC, id ASC",
            (SortField::Duration, SortOrder::Desc) => "duration DESC, id DESC",
        },
    }
}

/// Provides CRUD and listing operations for movies.
pub struct MovieRepo;

impl MovieRepo {
    /// Insert a new movie, returning the created row.
    pub async fn create(pool: &PgPool, input: &NewMovie) -> Result<Movie, sqlx::Error> {
        let query = format!(
            "INSERT INTO movies
                (title, description, rating, release_date, duration,
                 genre, director, cast_members, poster, imdb_id)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Movie>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.rating)
            .bind(input.release_date)
            .bind(input.duration)
            .bind(&input.genre)
            .bind(&input.director)
            .bind(&input.cast)
            .bind(&input.poster)
            .bind(&input.imdb_id)
            .fetch_one(pool)
            .await
    }

    /// Find a movie by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Movie>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM movies WHERE id = $1");
        sqlx::query_as::<_, Movie>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Whether a movie with the given ID exists.
    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM movies WHERE id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await
    }

    /// List one page of movies in the requested order.
    pub async fn list(
        pool: &PgPool,
        sort: MovieSort,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Movie>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM movies
             ORDER BY {}
             LIMIT $1 OFFSET $2",
            order_by(sort)
        );
        sqlx::query_as::<_, Movie>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Total number of movies.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM movies")
            .fetch_one(pool)
            .await
    }

    /// One page of movies whose title or description matches `pattern`,
    /// newest first.
    ///
    /// `pattern` must already be an escaped ILIKE pattern
    /// (see `catalog_core::search::like_pattern`).
    pub async fn search(
        pool: &PgPool,
        pattern: &str,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Movie>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM movies
             WHERE {SEARCH_FILTER}
             ORDER BY {}
             LIMIT $2 OFFSET $3",
            order_by(MovieSort::Newest)
        );
        sqlx::query_as::<_, Movie>(&query)
            .bind(pattern)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Number of movies matching `pattern`.
    pub async fn count_search(pool: &PgPool, pattern: &str) -> Result<i64, sqlx::Error> {
        let query = format!("SELECT COUNT(*) FROM movies WHERE {SEARCH_FILTER}");
        sqlx::query_scalar::<_, i64>(&query)
            .bind(pattern)
            .fetch_one(pool)
            .await
    }

    /// Apply a partial update. Only fields present in `input` change.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &MovieChanges,
    ) -> Result<Option<Movie>, sqlx::Error> {
        let query = format!(
            "UPDATE movies SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                rating = COALESCE($4, rating),
                release_date = COALESCE($5, release_date),
                duration = COALESCE($6, duration),
                genre = COALESCE($7, genre),
                cast_members = COALESCE($8, cast_members),
                director = CASE WHEN $9 THEN $10 ELSE director END,
                poster = CASE WHEN $11 THEN $12 ELSE poster END,
                imdb_id = CASE WHEN $13 THEN $14 ELSE imdb_id END
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Movie>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.rating)
            .bind(input.release_date)
            .bind(input.duration)
            .bind(&input.genre)
            .bind(&input.cast)
            .bind(input.director.is_some())
            .bind(input.director.clone().flatten())
            .bind(input.poster.is_some())
            .bind(input.poster.clone().flatten())
            .bind(input.imdb_id.is_some())
            .bind(input.imdb_id.clone().flatten())
            .fetch_optional(pool)
            .await
    }

    /// Delete a movie. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM movies WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Remove every movie. Used by the seeder before a fresh import.
    pub async fn delete_all(pool: &PgPool) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM movies").execute(pool).await?;
        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_sort_uses_the_default_clause() {
        let fallback = catalog_core::sort::MovieSort::from_params(Some("budget"), Some("asc"));
        assert_eq!(order_by(fallback), order_by(MovieSort::Newest));
    }

    #[test]
    fn name_sorts_by_title() {
        let sort = MovieSort::By(SortField::Title, SortOrder::Asc);
        assert_eq!(order_by(sort), "title ASC, id ASC");
    }
}
