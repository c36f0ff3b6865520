//! Reqwest-based TMDB upcoming-movies provider.
//!
//! Production [`MovieProvider`] implementation. Owns the paging cursor,
//! debounces duplicate requests, and stops once TMDB's `total_pages` is
//! reached; results travel back to the screen as [`ProviderEvent`]s.

use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::sync::Arc;

use tracing::{debug, warn};

use crate::config::TmdbConfig;
use crate::models::UpcomingMoviesPage;
use crate::traits::{MovieProvider, ProviderError, ProviderEvent, ProviderEventSender};

/// Paginated `/movie/upcoming` fetcher backed by a `reqwest::Client`.
///
/// `request_next_page` is safe to call repeatedly from scroll handlers: at
/// most one fetch is in flight, and exhausted pagination turns further
/// requests into no-ops.
#[derive(Debug, Clone)]
pub struct TmdbProvider {
    client: reqwest::Client,
    config: TmdbConfig,
    events: ProviderEventSender,
    /// 1-based page to fetch next
    next_page: Arc<AtomicU32>,
    /// Last total_pages reported by TMDB; 0 until the first page arrives
    total_pages: Arc<AtomicU32>,
    in_flight: Arc<AtomicBool>,
}

impl TmdbProvider {
    /// Create a provider reporting to `events`.
    pub fn new(config: TmdbConfig, events: ProviderEventSender) -> Self {
        Self::with_client(reqwest::Client::new(), config, events)
    }

    /// Create a provider with a custom `reqwest::Client`.
    ///
    /// Allows configuring timeouts or connection pools upstream.
    pub fn with_client(
        client: reqwest::Client,
        config: TmdbConfig,
        events: ProviderEventSender,
    ) -> Self {
        Self {
            client,
            config,
            events,
            next_page: Arc::new(AtomicU32::new(1)),
            total_pages: Arc::new(AtomicU32::new(0)),
            in_flight: Arc::new(AtomicBool::new(false)),
        }
    }

    /// The page the next request will fetch.
    pub fn next_page(&self) -> u32 {
        self.next_page.load(Ordering::SeqCst)
    }

    /// Whether the known page range has been fully fetched.
    pub fn is_exhausted(&self) -> bool {
        let total = self.total_pages.load(Ordering::SeqCst);
        total != 0 && self.next_page.load(Ordering::SeqCst) > total
    }

    async fn fetch_page(
        client: &reqwest::Client,
        config: &TmdbConfig,
        page: u32,
    ) -> Result<UpcomingMoviesPage, ProviderError> {
        let url = format!("{}/movie/upcoming", config.base_url);
        let page_param = page.to_string();
        let response = client
            .get(&url)
            .query(&[
                ("api_key", config.api_key.as_str()),
                ("language", config.language.as_str()),
                ("page", page_param.as_str()),
            ])
            .send()
            .await
            .map_err(Self::convert_error)?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ProviderError::HttpStatus {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json::<UpcomingMoviesPage>()
            .await
            .map_err(|e| ProviderError::InvalidResponse(e.to_string()))
    }

    fn convert_error(err: reqwest::Error) -> ProviderError {
        if err.is_timeout() {
            ProviderError::Timeout(err.to_string())
        } else if err.is_connect() {
            ProviderError::ConnectionFailed(err.to_string())
        } else if err.is_decode() {
            ProviderError::InvalidResponse(err.to_string())
        } else {
            ProviderError::Other(err.to_string())
        }
    }
}

impl MovieProvider for TmdbProvider {
    fn request_next_page(&self) {
        if self.in_flight.swap(true, Ordering::SeqCst) {
            debug!("fetch already in flight, ignoring request");
            return;
        }

        let page = self.next_page.load(Ordering::SeqCst);
        let total = self.total_pages.load(Ordering::SeqCst);
        if total != 0 && page > total {
            debug!(page, total, "pagination exhausted, ignoring request");
            self.in_flight.store(false, Ordering::SeqCst);
            return;
        }

        let client = self.client.clone();
        let config = self.config.clone();
        let events = self.events.clone();
        let next_page = self.next_page.clone();
        let total_pages = self.total_pages.clone();
        let in_flight = self.in_flight.clone();

        tokio::spawn(async move {
            let _ = events.send(ProviderEvent::Loading(true));

            match Self::fetch_page(&client, &config, page).await {
                Ok(envelope) => {
                    debug!(
                        page,
                        total_pages = envelope.total_pages,
                        count = envelope.results.len(),
                        "fetched upcoming movies page"
                    );
                    total_pages.store(envelope.total_pages, Ordering::SeqCst);
                    next_page.store(page + 1, Ordering::SeqCst);
                    let _ = events.send(ProviderEvent::Loading(false));
                    let _ = events.send(ProviderEvent::PageLoaded(envelope.results));
                }
                Err(error) => {
                    warn!(page, %error, "upcoming movies fetch failed");
                    let _ = events.send(ProviderEvent::Loading(false));
                    let _ = events.send(ProviderEvent::FetchFailed(error));
                }
            }

            in_flight.store(false, Ordering::SeqCst);
        });
    }
}
