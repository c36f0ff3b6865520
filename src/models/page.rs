use serde::{Deserialize, Serialize};

use super::Movie;

/// One page of the TMDB `/movie/upcoming` response.
#[derive(Debug, Clone, Deserialize)]
pub struct UpcomingMoviesPage {
    /// 1-based page number this envelope carries
    pub page: u32,
    /// Movies on this page, in API order
    #[serde(default)]
    pub results: Vec<Movie>,
    /// Total number of pages available
    #[serde(default)]
    pub total_pages: u32,
    /// Total number of movies across all pages
    #[serde(default)]
    pub total_results: u32,
    /// Release window covered by the upcoming list
    #[serde(default, rename = "dates")]
    pub window: Option<ReleaseWindow>,
}

/// The min/max release-date window TMDB attaches to upcoming listings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReleaseWindow {
    pub minimum: String,
    pub maximum: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_page_envelope() {
        let json = r#"{
            "dates": {"maximum": "2019-06-08", "minimum": "2019-05-21"},
            "page": 1,
            "results": [
                {"id": 1, "title": "A", "release_date": "2019-05-22"},
                {"id": 2, "title": "B", "release_date": "2019-05-30"}
            ],
            "total_pages": 19,
            "total_results": 370
        }"#;
        let page: UpcomingMoviesPage = serde_json::from_str(json).unwrap();
        assert_eq!(page.page, 1);
        assert_eq!(page.results.len(), 2);
        assert_eq!(page.total_pages, 19);
        assert_eq!(page.window.unwrap().minimum, "2019-05-21");
    }

    #[test]
    fn test_decode_page_without_results() {
        let page: UpcomingMoviesPage = serde_json::from_str(r#"{"page": 3}"#).unwrap();
        assert!(page.results.is_empty());
        assert_eq!(page.total_pages, 0);
    }
}
