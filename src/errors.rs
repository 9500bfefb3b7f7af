//! Error types for the twentyone game server
//!
//! One root error wrapping per-concern enums, so callers can match on
//! the concern without losing the detail.

use thiserror::Error;

/// Root error type for all game-server operations
#[derive(Debug, Error)]
pub enum TwentyOneError {
    /// Card-deck provider errors
    #[error("provider error: {0}")]
    Provider(#[from] ProviderError),

    /// Game lifecycle errors
    #[error("game error: {0}")]
    Game(#[from] GameError),

    /// Configuration errors
    #[error("configuration error: {0}")]
    Configuration(#[from] ConfigurationError),
}

/// Failures talking to the card-deck provider
#[derive(Debug, Error)]
pub enum ProviderError {
    /// Transport or HTTP-level failure; transient, eligible for retry
    #[error("card provider unavailable: {0}")]
    Unavailable(String),

    /// The provider answered but returned no (or too few) cards;
    /// treated exactly like `Unavailable` for retry purposes
    #[error("provider returned an empty draw")]
    EmptyDraw,

    /// The bounded retry for a single-card draw was exhausted
    #[error("failed to draw a card after {attempts} attempts")]
    AcquisitionFailed { attempts: u32 },
}

impl ProviderError {
    /// Whether another attempt could plausibly succeed.
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Unavailable(_) | Self::EmptyDraw)
    }
}

/// Game lifecycle errors
#[derive(Debug, Error)]
pub enum GameError {
    /// Unknown or already-finished game id; terminal, not retryable
    #[error("no live game with id {0}")]
    NotFound(String),

    /// Deck creation failed, no game was created or stored
    #[error("failed to start a game: {0}")]
    StartFailed(String),
}

/// Configuration and validation errors
#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("invalid configuration value: {0}")]
    InvalidValue(String),

    #[error("failed to load configuration: {0}")]
    LoadFailed(String),
}

/// Convenience type alias for Results
pub type TwentyOneResult<T> = Result<T, TwentyOneError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TwentyOneError::from(GameError::NotFound("abc123".to_string()));
        assert!(err.to_string().contains("game error"));
        assert!(err.to_string().contains("abc123"));
    }

    #[test]
    fn test_provider_error_transience() {
        assert!(ProviderError::Unavailable("timeout".to_string()).is_transient());
        assert!(ProviderError::EmptyDraw.is_transient());
        assert!(!ProviderError::AcquisitionFailed { attempts: 3 }.is_transient());
    }

    #[test]
    fn test_error_conversion() {
        let err: TwentyOneError = ProviderError::EmptyDraw.into();
        match err {
            TwentyOneError::Provider(ProviderError::EmptyDraw) => {}
            other => panic!("unexpected variant: {other:?}"),
        }
    }
}
