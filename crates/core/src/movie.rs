//! Movie payload validation.
//!
//! Payloads arrive as raw JSON so that a wrong type is reported with the same
//! field message as a missing or out-of-range value. Required fields are
//! checked first, in a fixed order, and the first failure is returned.

use chrono::{DateTime, NaiveDate, Utc};
use serde_json::{Map, Value};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Field constraints
// ---------------------------------------------------------------------------

pub const MIN_RATING: f64 = 0.0;
pub const MAX_RATING: f64 = 10.0;

/// Minimum duration in minutes.
pub const MIN_DURATION: i32 = 1;

pub const MSG_BODY: &str = "Request body must be a JSON object";
pub const MSG_TITLE: &str = "Title is required";
pub const MSG_DESCRIPTION: &str = "Description is required";
pub const MSG_RATING: &str = "Rating must be between 0 and 10";
pub const MSG_RELEASE_DATE: &str = "Valid release date is required";
pub const MSG_DURATION: &str = "Duration must be positive";
pub const MSG_GENRE: &str = "Genre must be a list of strings";
pub const MSG_DIRECTOR: &str = "Director must be a string";
pub const MSG_CAST: &str = "Cast must be a list of strings";
pub const MSG_POSTER: &str = "Poster must be a string";
pub const MSG_IMDB_ID: &str = "IMDb id must be a string";

// ---------------------------------------------------------------------------
// Validated shapes
// ---------------------------------------------------------------------------

/// A fully validated movie ready to be inserted.
#[derive(Debug, Clone, PartialEq)]
pub struct NewMovie {
    pub title: String,
    pub description: String,
    pub rating: f64,
    pub release_date: NaiveDate,
    pub duration: i32,
    pub genre: Vec<String>,
    pub director: Option<String>,
    pub cast: Vec<String>,
    pub poster: Option<String>,
    pub imdb_id: Option<String>,
}

/// A validated partial update.
///
/// `None` leaves a column untouched. For the nullable columns the inner
/// `Option` is the new value, so `Some(None)` clears it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MovieChanges {
    pub title: Option<String>,
    pub description: Option<String>,
    pub rating: Option<f64>,
    pub release_date: Option<NaiveDate>,
    pub duration: Option<i32>,
    pub genre: Option<Vec<String>>,
    pub director: Option<Option<String>>,
    pub cast: Option<Vec<String>>,
    pub poster: Option<Option<String>>,
    pub imdb_id: Option<Option<String>>,
}

impl MovieChanges {
    pub fn is_empty(&self) -> bool {
        *self == MovieChanges::default()
    }
}

// ---------------------------------------------------------------------------
// Entry points
// ---------------------------------------------------------------------------

/// Validate a create payload.
///
/// Unknown keys and system-managed keys (`id`, `createdAt`, ...) are ignored.
pub fn validate_new_movie(payload: &Value) -> Result<NewMovie, CoreError> {
    let fields = as_object(payload)?;

    let title = parse_required_text(present(fields, "title"), MSG_TITLE)?;
    let description = parse_required_text(present(fields, "description"), MSG_DESCRIPTION)?;
    let rating = parse_rating(present(fields, "rating"))?;
    let release_date = parse_release_date(present(fields, "releaseDate"))?;
    let duration = parse_duration(present(fields, "duration"))?;

    let genre = parse_text_list(present(fields, "genre"), MSG_GENRE)?;
    let director = parse_optional_text(present(fields, "director"), MSG_DIRECTOR)?;
    let cast = parse_text_list(present(fields, "cast"), MSG_CAST)?;
    let poster = parse_optional_text(present(fields, "poster"), MSG_POSTER)?;
    let imdb_id = parse_optional_text(present(fields, "imdbId"), MSG_IMDB_ID)?;

    Ok(NewMovie {
        title,
        description,
        rating,
        release_date,
        duration,
        genre,
        director,
        cast,
        poster,
        imdb_id,
    })
}

/// Validate a partial update payload.
///
/// Only keys present in the payload are validated and applied. `null` clears
/// an optional field and is rejected for a required one.
pub fn validate_movie_changes(payload: &Value) -> Result<MovieChanges, CoreError> {
    let fields = as_object(payload)?;
    let mut changes = MovieChanges::default();

    if let Some(v) = fields.get("title") {
        changes.title = Some(parse_required_text(Some(v), MSG_TITLE)?);
    }
    if let Some(v) = fields.get("description") {
        changes.description = Some(parse_required_text(Some(v), MSG_DESCRIPTION)?);
    }
    if let Some(v) = fields.get("rating") {
        changes.rating = Some(parse_rating(Some(v))?);
    }
    if let Some(v) = fields.get("releaseDate") {
        changes.release_date = Some(parse_release_date(Some(v))?);
    }
    if let Some(v) = fields.get("duration") {
        changes.duration = Some(parse_duration(Some(v))?);
    }
    if let Some(v) = fields.get("genre") {
        changes.genre = Some(parse_text_list(Some(v), MSG_GENRE)?);
    }
    if let Some(v) = fields.get("director") {
        changes.director = Some(parse_optional_text(Some(v), MSG_DIRECTOR)?);
    }
    if let Some(v) = fields.get("cast") {
        changes.cast = Some(parse_text_list(Some(v), MSG_CAST)?);
    }
    if let Some(v) = fields.get("poster") {
        changes.poster = Some(parse_optional_text(Some(v), MSG_POSTER)?);
    }
    if let Some(v) = fields.get("imdbId") {
        changes.imdb_id = Some(parse_optional_text(Some(v), MSG_IMDB_ID)?);
    }

    Ok(changes)
}

// ---------------------------------------------------------------------------
// Field parsers
// ---------------------------------------------------------------------------

fn as_object(payload: &Value) -> Result<&Map<String, Value>, CoreError> {
    payload
        .as_object()
        .ok_or_else(|| CoreError::Validation(MSG_BODY.to_string()))
}

/// A key that is absent or explicitly `null` counts as missing.
fn present<'a>(fields: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
    fields.get(key).filter(|v| !v.is_null())
}

fn invalid(message: &str) -> CoreError {
    CoreError::Validation(message.to_string())
}

fn parse_required_text(value: Option<&Value>, message: &str) -> Result<String, CoreError> {
    value
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .ok_or_else(|| invalid(message))
}

/// Numbers may arrive as JSON numbers or numeric strings.
fn as_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
    .filter(|f| f.is_finite())
}

fn parse_rating(value: Option<&Value>) -> Result<f64, CoreError> {
    value
        .and_then(as_number)
        .filter(|r| (MIN_RATING..=MAX_RATING).contains(r))
        .ok_or_else(|| invalid(MSG_RATING))
}

fn parse_duration(value: Option<&Value>) -> Result<i32, CoreError> {
    value
        .and_then(as_number)
        .filter(|d| d.fract() == 0.0)
        .filter(|d| *d >= f64::from(MIN_DURATION) && *d <= f64::from(i32::MAX))
        .map(|d| d as i32)
        .ok_or_else(|| invalid(MSG_DURATION))
}

fn parse_release_date(value: Option<&Value>) -> Result<NaiveDate, CoreError> {
    value
        .and_then(Value::as_str)
        .and_then(parse_date)
        .ok_or_else(|| invalid(MSG_RELEASE_DATE))
}

/// Accepts `YYYY-MM-DD` or an RFC 3339 timestamp (its UTC date is kept).
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok().or_else(|| {
        DateTime::parse_from_rfc3339(raw)
            .ok()
            .map(|dt| dt.with_timezone(&Utc).date_naive())
    })
}

/// Optional text: `null` or blank means "no value".
fn parse_optional_text(value: Option<&Value>, message: &str) -> Result<Option<String>, CoreError> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => {
            let trimmed = s.trim();
            Ok((!trimmed.is_empty()).then(|| trimmed.to_string()))
        }
        Some(_) => Err(invalid(message)),
    }
}

/// Text lists default to empty; every element must be a string.
fn parse_text_list(value: Option<&Value>, message: &str) -> Result<Vec<String>, CoreError> {
    match value {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| {
                item.as_str()
                    .map(|s| s.trim().to_string())
                    .ok_or_else(|| invalid(message))
            })
            .collect(),
        Some(_) => Err(invalid(message)),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
