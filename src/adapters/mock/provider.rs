//! Mock movie provider for testing.

use std::sync::{Arc, Mutex};

use crate::models::Movie;
use crate::traits::{MovieProvider, ProviderError, ProviderEvent, ProviderEventSender};

/// A [`MovieProvider`] that records calls instead of fetching.
///
/// Optionally wired to a [`ProviderEvent`] channel so tests can script the
/// asynchronous reply themselves via [`deliver_page`](Self::deliver_page) and
/// [`deliver_failure`](Self::deliver_failure).
///
/// # Example
///
/// ```ignore
/// let provider = Arc::new(MockMovieProvider::new());
/// state.on_screen_load();
/// assert_eq!(provider.request_count(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockMovieProvider {
    requests: Arc<Mutex<usize>>,
    events: Option<ProviderEventSender>,
}

impl MockMovieProvider {
    /// Create a mock that only records.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock that can also deliver scripted events.
    pub fn with_events(events: ProviderEventSender) -> Self {
        Self {
            requests: Arc::new(Mutex::new(0)),
            events: Some(events),
        }
    }

    /// Number of `request_next_page` calls seen so far.
    pub fn request_count(&self) -> usize {
        *self.requests.lock().unwrap()
    }

    /// Reset the recorded call count.
    pub fn clear_requests(&self) {
        *self.requests.lock().unwrap() = 0;
    }

    /// Script a successful page delivery, with loader wrapping.
    pub fn deliver_page(&self, movies: Vec<Movie>) {
        if let Some(events) = &self.events {
            let _ = events.send(ProviderEvent::Loading(true));
            let _ = events.send(ProviderEvent::Loading(false));
            let _ = events.send(ProviderEvent::PageLoaded(movies));
        }
    }

    /// Script a failed fetch, with loader wrapping.
    pub fn deliver_failure(&self, error: ProviderError) {
        if let Some(events) = &self.events {
            let _ = events.send(ProviderEvent::Loading(true));
            let _ = events.send(ProviderEvent::Loading(false));
            let _ = events.send(ProviderEvent::FetchFailed(error));
        }
    }
}

impl MovieProvider for MockMovieProvider {
    fn request_next_page(&self) {
        *self.requests.lock().unwrap() += 1;
    }
}
