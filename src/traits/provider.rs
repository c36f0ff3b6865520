//! Data-provider seam for the movie list screen.
//!
//! The screen asks for pages; the provider owns the paging cursor and answers
//! asynchronously through [`ProviderEvent`]s on a channel it was given at
//! construction.

use thiserror::Error;
use tokio::sync::mpsc;

use crate::models::Movie;

/// Sender half of the provider-to-screen event channel.
pub type ProviderEventSender = mpsc::UnboundedSender<ProviderEvent>;

/// Receiver half of the provider-to-screen event channel.
pub type ProviderEventReceiver = mpsc::UnboundedReceiver<ProviderEvent>;

/// Create a new provider event channel.
pub fn provider_event_channel() -> (ProviderEventSender, ProviderEventReceiver) {
    mpsc::unbounded_channel()
}

/// Source of paginated upcoming-movie data.
///
/// `request_next_page` is fire-and-forget: the provider decides whether an
/// actual fetch happens (it debounces duplicate requests and stops once its
/// paging is exhausted) and reports back via [`ProviderEvent`]s. The screen
/// never passes a page number; the cursor belongs to the provider.
pub trait MovieProvider: Send + Sync {
    /// Request the next page of upcoming movies.
    fn request_next_page(&self);
}

/// Callback contract from a [`MovieProvider`] back to the screen.
#[derive(Debug, Clone)]
pub enum ProviderEvent {
    /// A fetch started (`true`) or finished (`false`)
    Loading(bool),
    /// A page arrived; movies are in API order
    PageLoaded(Vec<Movie>),
    /// A fetch failed; the screen surfaces the error unmodified
    FetchFailed(ProviderError),
}

/// Errors a provider can report.
///
/// `Clone` so the error can ride the screen's output channel to the UI
/// without rewrapping.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProviderError {
    /// Connection to the server failed
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// Request timed out
    #[error("request timed out: {0}")]
    Timeout(String),

    /// Server returned a non-2xx status
    #[error("server returned {status}: {message}")]
    HttpStatus { status: u16, message: String },

    /// Response body could not be decoded
    #[error("invalid response: {0}")]
    InvalidResponse(String),

    /// Anything else
    #[error("provider error: {0}")]
    Other(String),
}
