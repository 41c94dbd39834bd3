//! TUI-specific error types.

use thiserror::Error;

/// Errors that can occur in the TUI.
///
/// Service and document failures never surface here: they are carried
/// as events and handled by the application state. This type covers the
/// terminal plumbing only.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TuiError {
    /// Terminal initialization or operation failed.
    #[error("terminal error: {0}")]
    Terminal(#[from] std::io::Error),

    /// Event channel was closed unexpectedly.
    #[error("event channel closed unexpectedly")]
    ChannelClosed,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TuiError::ChannelClosed;
        assert_eq!(err.to_string(), "event channel closed unexpectedly");
    }

    #[test]
    fn test_terminal_error_from_io() {
        let io = std::io::Error::other("boom");
        let err = TuiError::from(io);
        assert!(matches!(err, TuiError::Terminal(_)));
    }
}
