//! Mock navigation coordinator for testing.

use std::sync::{Arc, Mutex};

use crate::models::Movie;
use crate::traits::MovieNavigator;

/// A [`MovieNavigator`] that records every movie it was asked to open.
#[derive(Debug, Clone, Default)]
pub struct MockNavigator {
    navigated: Arc<Mutex<Vec<Movie>>>,
}

impl MockNavigator {
    /// Create a new recording navigator.
    pub fn new() -> Self {
        Self::default()
    }

    /// All movies navigated to, in call order.
    pub fn navigated(&self) -> Vec<Movie> {
        self.navigated.lock().unwrap().clone()
    }

    /// The most recently navigated movie, if any.
    pub fn last_navigated(&self) -> Option<Movie> {
        self.navigated.lock().unwrap().last().cloned()
    }

    /// Clear the recorded navigations.
    pub fn clear(&self) {
        self.navigated.lock().unwrap().clear();
    }
}

impl MovieNavigator for MockNavigator {
    fn navigate_to_detail(&self, movie: &Movie) {
        self.navigated.lock().unwrap().push(movie.clone());
    }
}
