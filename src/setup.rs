//! Screen wiring helpers.
//!
//! Assembles a ready-to-drive movie list screen: config, provider, channels,
//! and state. A consuming event loop drains `provider_events` into
//! [`MovieListState::handle_provider_event`] and renders from `outputs`.

use std::sync::Arc;

use crate::adapters::TmdbProvider;
use crate::config::TmdbConfig;
use crate::error::MarqueeResult;
use crate::state::{output_channel, MovieListState, OutputReceiver};
use crate::traits::{provider_event_channel, MovieNavigator, ProviderEventReceiver};

/// A fully wired movie list screen.
pub struct MovieListScreen {
    /// The view-model driving the screen
    pub state: MovieListState,
    /// UI notifications emitted by the state
    pub outputs: OutputReceiver,
    /// Provider callbacks to feed back into the state
    pub provider_events: ProviderEventReceiver,
    /// The provider, exposed for paging introspection
    pub provider: Arc<TmdbProvider>,
}

/// Build a movie list screen from the ambient configuration.
///
/// Loads [`TmdbConfig`] (environment, then config file) and wires the
/// production provider.
pub fn movie_list_screen(navigator: Arc<dyn MovieNavigator>) -> MarqueeResult<MovieListScreen> {
    let config = TmdbConfig::load()?;
    Ok(movie_list_screen_with_config(config, navigator))
}

/// Build a movie list screen against an explicit configuration.
pub fn movie_list_screen_with_config(
    config: TmdbConfig,
    navigator: Arc<dyn MovieNavigator>,
) -> MovieListScreen {
    let (events_tx, provider_events) = provider_event_channel();
    let provider = Arc::new(TmdbProvider::new(config, events_tx));
    let (output_tx, outputs) = output_channel();
    let state = MovieListState::new(provider.clone(), navigator, output_tx);

    MovieListScreen {
        state,
        outputs,
        provider_events,
        provider,
    }
}
