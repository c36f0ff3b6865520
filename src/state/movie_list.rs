//! State container for the upcoming-movies list screen.
//!
//! [`MovieListState`] owns the unfiltered row list, the date-filter flag, and
//! the derived filtered list. It mutates only in response to UI events and
//! provider callbacks, and every mutation synchronously emits one
//! [`MovieListOutput`] for the UI layer to render.

use std::sync::Arc;

use chrono::NaiveDate;
use thiserror::Error;
use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::models::Movie;
use crate::traits::{MovieNavigator, MovieProvider, ProviderError, ProviderEvent};

/// Pure function from a picked date to the string key movies are matched on.
///
/// Filtering compares this key against `Movie::release_date` with exact string
/// equality, so the function must produce the same encoding the wire uses.
pub type DateKeyFn = fn(NaiveDate) -> String;

/// Default date key: the TMDB `release_date` encoding.
pub fn release_day_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Sender half of the screen's output channel.
pub type OutputSender = mpsc::UnboundedSender<MovieListOutput>;

/// Receiver half of the screen's output channel.
pub type OutputReceiver = mpsc::UnboundedReceiver<MovieListOutput>;

/// Create a new output channel for a screen.
pub fn output_channel() -> (OutputSender, OutputReceiver) {
    mpsc::unbounded_channel()
}

/// Notifications the screen emits for the UI layer.
///
/// Delivered synchronously at the point of state change, one per mutation,
/// with no queuing or coalescing on the emitting side.
#[derive(Debug, Clone)]
pub enum MovieListOutput {
    /// The visible row set changed; re-render the list
    ReloadList,
    /// Show or hide the loading indicator
    ShowLoader(bool),
    /// Present or dismiss the date picker
    ShowDatePicker(bool),
    /// Show or hide the active-filter indicator
    ShowFilterIndicator(bool),
    /// A fetch failed; surface the error to the user
    ShowError(ProviderError),
}

/// Display wrapper around one [`Movie`], exposed to the UI by position.
#[derive(Debug, Clone, PartialEq)]
pub struct MovieRow {
    movie: Movie,
}

impl MovieRow {
    fn new(movie: Movie) -> Self {
        Self { movie }
    }

    /// The wrapped movie.
    pub fn movie(&self) -> &Movie {
        &self.movie
    }

    /// Display title.
    pub fn title(&self) -> &str {
        &self.movie.title
    }

    /// Raw release-date key (`YYYY-MM-DD`, possibly empty).
    pub fn release_date(&self) -> &str {
        &self.movie.release_date
    }
}

/// Errors from row lookups.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MovieListError {
    /// A row index outside `[0, row_count())` was requested. This is a
    /// UI/core desynchronization bug, not a runtime condition to recover from.
    #[error("row index {index} out of range ({count} rows visible)")]
    IndexOutOfRange { index: usize, count: usize },
}

/// View-model for the upcoming-movies screen.
///
/// Single-threaded and synchronous: it owns no tasks and no locks, and assumes
/// the UI dispatches events to it on one logical thread. Asynchrony lives
/// behind the [`MovieProvider`] seam.
pub struct MovieListState {
    provider: Arc<dyn MovieProvider>,
    navigator: Arc<dyn MovieNavigator>,
    output: OutputSender,
    date_key: DateKeyFn,

    /// Every row ever received, in arrival order. Append-only for the
    /// screen's lifetime; never reordered or deduplicated here.
    all_rows: Vec<MovieRow>,
    /// Subset of `all_rows` matching the active filter key. Rebuilt wholesale
    /// on filter-apply, emptied wholesale on filter-clear.
    filtered_rows: Vec<MovieRow>,
    /// When true the visible row set is `filtered_rows`, else `all_rows`.
    filtering: bool,
}

impl MovieListState {
    /// Create a screen state wired to its collaborators and output channel.
    ///
    /// Uses [`release_day_key`] as the date key.
    pub fn new(
        provider: Arc<dyn MovieProvider>,
        navigator: Arc<dyn MovieNavigator>,
        output: OutputSender,
    ) -> Self {
        Self::with_date_key(provider, navigator, output, release_day_key)
    }

    /// Create a screen state with a custom date-key function.
    pub fn with_date_key(
        provider: Arc<dyn MovieProvider>,
        navigator: Arc<dyn MovieNavigator>,
        output: OutputSender,
        date_key: DateKeyFn,
    ) -> Self {
        Self {
            provider,
            navigator,
            output,
            date_key,
            all_rows: Vec::new(),
            filtered_rows: Vec::new(),
            filtering: false,
        }
    }

    // ========================================================================
    // Read-only accessors
    // ========================================================================

    /// Number of currently visible rows (filtered or all, per the flag).
    pub fn row_count(&self) -> usize {
        self.visible_rows().len()
    }

    /// The visible row at `index`.
    ///
    /// Indices are `usize`, so the negative case is unrepresentable; anything
    /// at or past [`row_count`](Self::row_count) is `IndexOutOfRange`.
    pub fn row_at(&self, index: usize) -> Result<&MovieRow, MovieListError> {
        let rows = self.visible_rows();
        rows.get(index).ok_or(MovieListError::IndexOutOfRange {
            index,
            count: rows.len(),
        })
    }

    /// Whether a date filter is active.
    pub fn is_filtering(&self) -> bool {
        self.filtering
    }

    fn visible_rows(&self) -> &[MovieRow] {
        if self.filtering {
            &self.filtered_rows
        } else {
            &self.all_rows
        }
    }

    // ========================================================================
    // UI events
    // ========================================================================

    /// The screen became visible; kick off the initial page fetch.
    pub fn on_screen_load(&mut self) {
        self.request_upcoming_page();
    }

    /// The user scrolled to the end of the list; fetch the next page.
    pub fn on_list_end_reached(&mut self) {
        self.request_upcoming_page();
    }

    /// A date was picked: activate filtering against the full unfiltered list.
    ///
    /// Always recomputes from `all_rows`, never from a previous filter result,
    /// so filters replace rather than narrow each other.
    pub fn on_filter_date_selected(&mut self, date: NaiveDate) {
        let key = (self.date_key)(date);
        debug!(key = %key, "applying release-date filter");
        self.set_filtering(true);
        self.emit(MovieListOutput::ShowDatePicker(false));
        let rows = self
            .all_rows
            .iter()
            .filter(|row| row.release_date() == key)
            .cloned()
            .collect();
        self.set_filtered_rows(rows);
    }

    /// The date picker was dismissed without picking. No state change.
    pub fn on_filter_cancelled(&mut self) {
        self.emit(MovieListOutput::ShowDatePicker(false));
    }

    /// The filter button: clears an active filter, otherwise asks the UI to
    /// present the date picker. The picker request is not deduplicated.
    pub fn on_filter_button_tapped(&mut self) {
        if self.filtering {
            self.clear_filter();
        } else {
            self.emit(MovieListOutput::ShowDatePicker(true));
        }
    }

    /// A row was tapped: hand its movie to the navigation coordinator.
    pub fn on_row_selected(&mut self, index: usize) -> Result<(), MovieListError> {
        let row = self.row_at(index)?;
        debug!(movie_id = row.movie().id, "row selected, delegating to navigator");
        self.navigator.navigate_to_detail(row.movie());
        Ok(())
    }

    // ========================================================================
    // Provider callbacks
    // ========================================================================

    /// Dispatch a [`ProviderEvent`] to the matching handler.
    ///
    /// Glue for event loops that drain the provider channel.
    pub fn handle_provider_event(&mut self, event: ProviderEvent) {
        match event {
            ProviderEvent::Loading(is_loading) => self.on_loading_state_changed(is_loading),
            ProviderEvent::PageLoaded(movies) => self.on_page_fetch_succeeded(movies),
            ProviderEvent::FetchFailed(error) => self.on_page_fetch_failed(error),
        }
    }

    /// A page arrived: append its rows in received order.
    pub fn on_page_fetch_succeeded(&mut self, movies: Vec<Movie>) {
        debug!(count = movies.len(), "page fetch succeeded");
        self.all_rows.extend(movies.into_iter().map(MovieRow::new));
        self.emit(MovieListOutput::ReloadList);
    }

    /// A fetch failed: surface the error, leave list state untouched.
    pub fn on_page_fetch_failed(&mut self, error: ProviderError) {
        warn!(%error, "page fetch failed");
        self.emit(MovieListOutput::ShowError(error));
    }

    /// The provider's loading state changed: forward to the UI.
    pub fn on_loading_state_changed(&mut self, is_loading: bool) {
        self.emit(MovieListOutput::ShowLoader(is_loading));
    }

    // ========================================================================
    // Private helpers
    // ========================================================================

    /// Pagination trigger shared by screen-load and end-of-list. Suppressed
    /// while filtering: the filtered view is a static snapshot of data already
    /// fetched, and growing the unfiltered list underneath it would not match
    /// what is on screen.
    fn request_upcoming_page(&mut self) {
        if self.filtering {
            debug!("pagination request suppressed while filtering");
            return;
        }
        self.provider.request_next_page();
    }

    fn clear_filter(&mut self) {
        self.set_filtering(false);
        self.set_filtered_rows(Vec::new());
    }

    /// Setter with emission: flag changes always notify the filter indicator.
    fn set_filtering(&mut self, filtering: bool) {
        self.filtering = filtering;
        self.emit(MovieListOutput::ShowFilterIndicator(filtering));
    }

    /// Setter with emission: replacing the filtered set reloads the list.
    fn set_filtered_rows(&mut self, rows: Vec<MovieRow>) {
        self.filtered_rows = rows;
        self.emit(MovieListOutput::ReloadList);
    }

    fn emit(&self, output: MovieListOutput) {
        // The receiver disappears during screen teardown; nothing to do then.
        let _ = self.output.send(output);
    }
}
