//! Common test utilities for integration tests.
//!
//! Fixtures and a small harness wiring a [`MovieListState`] to recording
//! mocks and drainable channels.

#![allow(dead_code)]

use std::sync::Arc;

use marquee::adapters::{MockMovieProvider, MockNavigator};
use marquee::models::Movie;
use marquee::state::{output_channel, MovieListOutput, MovieListState, OutputReceiver};
use marquee::traits::{provider_event_channel, ProviderEventReceiver};

/// A movie list screen wired to mocks.
pub struct TestScreen {
    pub state: MovieListState,
    pub provider: Arc<MockMovieProvider>,
    pub navigator: Arc<MockNavigator>,
    pub outputs: OutputReceiver,
    pub provider_events: ProviderEventReceiver,
}

/// Build a screen against a recording provider and navigator.
pub fn test_screen() -> TestScreen {
    let (events_tx, provider_events) = provider_event_channel();
    let provider = Arc::new(MockMovieProvider::with_events(events_tx));
    let navigator = Arc::new(MockNavigator::new());
    let (output_tx, outputs) = output_channel();
    let state = MovieListState::new(provider.clone(), navigator.clone(), output_tx);

    TestScreen {
        state,
        provider,
        navigator,
        outputs,
        provider_events,
    }
}

impl TestScreen {
    /// Forward every pending provider event into the state.
    pub fn pump_provider_events(&mut self) {
        while let Ok(event) = self.provider_events.try_recv() {
            self.state.handle_provider_event(event);
        }
    }

    /// Collect every pending output notification.
    pub fn drain_outputs(&mut self) -> Vec<MovieListOutput> {
        let mut collected = Vec::new();
        while let Ok(output) = self.outputs.try_recv() {
            collected.push(output);
        }
        collected
    }
}

/// A movie with the given id and release date.
pub fn make_movie(id: i64, release_date: &str) -> Movie {
    Movie {
        id,
        title: format!("Movie {}", id),
        overview: format!("Synopsis of movie {}", id),
        release_date: release_date.to_string(),
        poster_path: Some(format!("/poster-{}.jpg", id)),
        backdrop_path: None,
        vote_average: 6.5,
    }
}

/// TMDB-shaped JSON body for one upcoming-movies page.
pub fn page_body(page: u32, total_pages: u32, movies: &[Movie]) -> serde_json::Value {
    serde_json::json!({
        "dates": {"minimum": "2019-05-21", "maximum": "2019-06-08"},
        "page": page,
        "results": movies,
        "total_pages": total_pages,
        "total_results": total_pages * movies.len() as u32,
    })
}
