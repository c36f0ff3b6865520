//! Concrete implementations of trait abstractions.
//!
//! Production adapters implementing the seams in `crate::traits`, enabling
//! dependency injection and testability.
//!
//! # Adapters
//!
//! - [`TmdbProvider`] - paginated upcoming-movies fetching over HTTP
//!
//! # Mock Implementations
//!
//! The [`mock`] submodule provides test doubles:
//! - [`mock::MockMovieProvider`] - records pagination requests
//! - [`mock::MockNavigator`] - records navigated movies

pub mod mock;
pub mod tmdb;

pub use mock::{MockMovieProvider, MockNavigator};
pub use tmdb::TmdbProvider;
