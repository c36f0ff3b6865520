use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::deserialize_nullable_string;

/// A movie record as returned by the TMDB API.
///
/// Treated as immutable once received. Fields the UI does not need are not
/// modeled; unknown fields in the payload are ignored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Movie {
    /// TMDB movie identifier
    pub id: i64,
    /// Display title
    #[serde(default)]
    pub title: String,
    /// Synopsis text
    #[serde(default)]
    pub overview: String,
    /// Release date as `YYYY-MM-DD`. TMDB sends null or omits it for
    /// unscheduled titles; both decode to an empty string.
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub release_date: String,
    /// Poster image path (relative to the TMDB image base)
    #[serde(default)]
    pub poster_path: Option<String>,
    /// Backdrop image path (relative to the TMDB image base)
    #[serde(default)]
    pub backdrop_path: Option<String>,
    /// Average vote, 0.0 - 10.0
    #[serde(default)]
    pub vote_average: f64,
}

impl Movie {
    /// Parse `release_date` into a calendar date.
    ///
    /// Returns `None` for empty or malformed date strings.
    pub fn release_day(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.release_date, "%Y-%m-%d").ok()
    }
}
