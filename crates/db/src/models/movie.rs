//! Movie entity model.

use catalog_core::types::{DbId, Timestamp};
use chrono::NaiveDate;
use serde::Serialize;
use sqlx::FromRow;

pub use catalog_core::movie::{MovieChanges, NewMovie};

/// A movie row from the `movies` table, serialized with camelCase keys.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub rating: f64,
    pub release_date: NaiveDate,
    /// Minutes.
    pub duration: i32,
    pub genre: Vec<String>,
    pub director: Option<String>,
    /// `cast` is a reserved word in SQL, hence the column name.
    #[serde(rename = "cast")]
    pub cast_members: Vec<String>,
    pub poster: Option<String>,
    pub imdb_id: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
