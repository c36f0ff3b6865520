//! Trait abstractions for dependency injection and testability.
//!
//! # Traits
//!
//! - [`MovieProvider`] - paginated upcoming-movie fetching
//! - [`MovieNavigator`] - screen transitions out of the list

pub mod navigator;
pub mod provider;

pub use navigator::MovieNavigator;
pub use provider::{
    provider_event_channel, MovieProvider, ProviderError, ProviderEvent, ProviderEventReceiver,
    ProviderEventSender,
};
