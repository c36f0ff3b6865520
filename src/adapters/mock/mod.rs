//! Mock implementations for testing.
//!
//! Recording fakes for the screen's two collaborator seams, shareable into
//! the state under test and inspectable afterwards.
//!
//! # Available Mocks
//!
//! - [`MockMovieProvider`] - records pagination requests
//! - [`MockNavigator`] - records navigated movies

mod navigator;
mod provider;

pub use navigator::MockNavigator;
pub use provider::MockMovieProvider;
