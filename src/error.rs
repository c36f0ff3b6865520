//! Unified error type for the marquee crate.
//!
//! Each domain keeps its own error enum ([`ProviderError`], [`ConfigError`],
//! [`MovieListError`]); this module unifies them for callers that wire the
//! pieces together.

use thiserror::Error;

use crate::config::ConfigError;
use crate::state::MovieListError;
use crate::traits::ProviderError;

/// Result alias for fallible marquee operations.
pub type MarqueeResult<T> = Result<T, MarqueeError>;

/// Unified error type.
#[derive(Debug, Error)]
pub enum MarqueeError {
    /// Data-provider errors (network, decoding)
    #[error(transparent)]
    Provider(#[from] ProviderError),

    /// Configuration loading errors
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Screen-state contract violations
    #[error(transparent)]
    List(#[from] MovieListError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unification_preserves_messages() {
        let err: MarqueeError = ProviderError::Timeout("30s".to_string()).into();
        assert_eq!(err.to_string(), "request timed out: 30s");

        let err: MarqueeError = MovieListError::IndexOutOfRange { index: 5, count: 2 }.into();
        assert!(err.to_string().contains("index 5"));
    }
}
