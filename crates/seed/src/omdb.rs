//! OMDb HTTP client and conversion of OMDb records into movie payloads.
//!
//! The API key is passed on every call instead of being baked into the
//! client, so one client can serve several keys.

use catalog_core::error::CoreError;
use catalog_core::movie::{validate_new_movie, NewMovie};
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::SeedError;

/// OMDb's marker for a missing field.
const NOT_AVAILABLE: &str = "N/A";

/// HTTP client for the OMDb API.
pub struct OmdbClient {
    client: reqwest::Client,
    base_url: String,
}

/// The subset of an OMDb title record the catalog uses.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OmdbMovie {
    #[serde(rename = "Title")]
    pub title: Option<String>,
    #[serde(rename = "Plot")]
    pub plot: Option<String>,
    #[serde(rename = "imdbRating")]
    pub imdb_rating: Option<String>,
    #[serde(rename = "Released")]
    pub released: Option<String>,
    #[serde(rename = "Runtime")]
    pub runtime: Option<String>,
    #[serde(rename = "Genre")]
    pub genre: Option<String>,
    #[serde(rename = "Director")]
    pub director: Option<String>,
    #[serde(rename = "Actors")]
    pub actors: Option<String>,
    #[serde(rename = "Poster")]
    pub poster: Option<String>,
    #[serde(rename = "imdbID")]
    pub imdb_id: Option<String>,
}

impl OmdbClient {
    /// * `base_url` - e.g. `https://www.omdbapi.com`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Look a title up by exact name.
    ///
    /// Returns `Ok(None)` when OMDb answers `"Response": "False"`.
    pub async fn fetch_by_title(
        &self,
        title: &str,
        api_key: &str,
    ) -> Result<Option<OmdbMovie>, SeedError> {
        let response = self
            .client
            .get(format!("{}/", self.base_url))
            .query(&[("t", title), ("apikey", api_key)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SeedError::OmdbStatus {
                status: status.as_u16(),
            });
        }

        let body: Value = response.json().await?;
        parse_lookup(body)
    }
}

/// Split an OMDb lookup body into "unknown title" or a record.
fn parse_lookup(body: Value) -> Result<Option<OmdbMovie>, SeedError> {
    if body.get("Response").and_then(Value::as_str) == Some("False") {
        if let Some(reason) = body.get("Error").and_then(Value::as_str) {
            tracing::debug!(reason, "OMDb lookup missed");
        }
        return Ok(None);
    }
    let movie = serde_json::from_value(body)
        .map_err(|e| CoreError::Internal(format!("Unexpected OMDb payload: {e}")))?;
    Ok(Some(movie))
}

impl OmdbMovie {
    /// Build a create payload in the API's JSON shape. Fields OMDb reports as
    /// `N/A` (or that cannot be parsed) are left out.
    pub fn to_payload(&self) -> Value {
        let mut fields = Map::new();

        if let Some(title) = available(&self.title) {
            fields.insert("title".into(), title.into());
        }
        if let Some(plot) = available(&self.plot) {
            fields.insert("description".into(), plot.into());
        }
        if let Some(rating) = available(&self.imdb_rating).and_then(|r| r.parse::<f64>().ok()) {
            fields.insert("rating".into(), rating.into());
        }
        if let Some(date) = available(&self.released).and_then(parse_released) {
            fields.insert("releaseDate".into(), date.format("%Y-%m-%d").to_string().into());
        }
        if let Some(minutes) = available(&self.runtime).and_then(leading_integer) {
            fields.insert("duration".into(), minutes.into());
        }
        fields.insert("genre".into(), split_list(&self.genre).into());
        if let Some(director) = available(&self.director) {
            fields.insert("director".into(), director.into());
        }
        fields.insert("cast".into(), split_list(&self.actors).into());
        if let Some(poster) = available(&self.poster) {
            fields.insert("poster".into(), poster.into());
        }
        if let Some(imdb_id) = available(&self.imdb_id) {
            fields.insert("imdbId".into(), imdb_id.into());
        }

        Value::Object(fields)
    }

    /// Convert through the same validation the API applies to a create.
    pub fn to_new_movie(&self) -> Result<NewMovie, CoreError> {
        validate_new_movie(&self.to_payload())
    }
}

fn available(field: &Option<String>) -> Option<&str> {
    field
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty() && *v != NOT_AVAILABLE)
}

/// OMDb dates look like `16 Jul 2010`.
fn parse_released(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%d %b %Y").ok()
}

/// `"148 min"` -> `148`.
fn leading_integer(raw: &str) -> Option<i64> {
    let digits: String = raw.chars().take_while(char::is_ascii_digit).collect();
    digits.parse().ok()
}

fn split_list(field: &Option<String>) -> Vec<String> {
    available(field)
        .map(|list| {
            list.split(',')
                .map(str::trim)
                .filter(|item| !item.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use serde_json::json;

    fn inception() -> Value {
        json!({
            "Title": "Inception",
            "Year": "2010",
            "Released": "16 Jul 2010",
            "Runtime": "148 min",
            "Genre": "Action, Adventure, Sci-Fi",
            "Director": "Christopher Nolan",
            "Actors": "Leonardo DiCaprio, Joseph Gordon-Levitt, Elliot Page",
            "Plot": "A thief who steals corporate secrets through dream-sharing technology.",
            "Poster": "https://m.media-amazon.com/images/inception.jpg",
            "imdbRating": "8.8",
            "imdbID": "tt1375666",
            "Response": "True"
        })
    }

    #[test]
    fn converts_a_full_record() {
        let movie = parse_lookup(inception()).unwrap().unwrap();
        let new_movie = movie.to_new_movie().unwrap();

        assert_eq!(new_movie.title, "Inception");
        assert_eq!(new_movie.rating, 8.8);
        assert_eq!(
            new_movie.release_date,
            NaiveDate::from_ymd_opt(2010, 7, 16).unwrap()
        );
        assert_eq!(new_movie.duration, 148);
        assert_eq!(new_movie.genre, vec!["Action", "Adventure", "Sci-Fi"]);
        assert_eq!(new_movie.cast.len(), 3);
        assert_eq!(new_movie.director.as_deref(), Some("Christopher Nolan"));
        assert_eq!(new_movie.imdb_id.as_deref(), Some("tt1375666"));
    }

    #[test]
    fn unknown_title_is_none() {
        let body = json!({ "Response": "False", "Error": "Movie not found!" });
        assert_matches!(parse_lookup(body), Ok(None));
    }

    #[test]
    fn not_available_fields_are_dropped() {
        let mut body = inception();
        body["Poster"] = json!("N/A");
        body["Director"] = json!("N/A");
        body["Genre"] = json!("N/A");
        let movie = parse_lookup(body).unwrap().unwrap().to_new_movie().unwrap();

        assert_eq!(movie.poster, None);
        assert_eq!(movie.director, None);
        assert!(movie.genre.is_empty());
    }

    #[test]
    fn missing_rating_fails_validation() {
        let mut body = inception();
        body["imdbRating"] = json!("N/A");
        let movie = parse_lookup(body).unwrap().unwrap();

        assert_matches!(
            movie.to_new_movie(),
            Err(CoreError::Validation(msg)) if msg == "Rating must be between 0 and 10"
        );
    }

    #[test]
    fn unparseable_release_date_fails_validation() {
        let mut body = inception();
        body["Released"] = json!("sometime in 2010");
        let movie = parse_lookup(body).unwrap().unwrap();

        assert_matches!(
            movie.to_new_movie(),
            Err(CoreError::Validation(msg)) if msg == "Valid release date is required"
        );
    }

    #[test]
    fn runtime_takes_the_leading_number() {
        assert_eq!(leading_integer("148 min"), Some(148));
        assert_eq!(leading_integer("min"), None);
    }
}
