//! Wire models for the TMDB API.

mod movie;
mod page;

pub use movie::Movie;
pub use page::{ReleaseWindow, UpcomingMoviesPage};

use serde::{Deserialize, Deserializer};

/// Helper to deserialize nullable strings as empty string.
/// Handles both missing fields and explicit null values.
pub(crate) fn deserialize_nullable_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(|opt| opt.unwrap_or_default())
}
