//! Marquee - presentation core for a TMDB upcoming-movies browser
//!
//! The screen logic lives in [`state::MovieListState`]: a view-model that
//! owns the row lists and the date-filter flag, reacts to UI events and
//! provider callbacks, and emits [`state::MovieListOutput`] notifications
//! for a UI layer to render. Collaborators sit behind the seams in
//! [`traits`], with production and mock implementations in [`adapters`].

pub mod adapters;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod setup;
pub mod state;
pub mod traits;

pub use error::{MarqueeError, MarqueeResult};
pub use models::Movie;
pub use state::{MovieListOutput, MovieListState};
