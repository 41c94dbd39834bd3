//! Error types for the forge-core crate.
//!
//! This module provides [`ConfigError`] for configuration failures and
//! [`DocumentError`] for specification-document acquisition failures.

use camino::Utf8PathBuf;

/// Errors that can occur during configuration loading and validation.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A configuration option has an invalid value.
    #[error("invalid configuration option '{option}': {reason}")]
    InvalidOption {
        /// The name of the invalid option.
        option: String,
        /// Explanation of why the option is invalid.
        reason: String,
    },

    /// An I/O error occurred while reading configuration.
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to parse the configuration file.
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Errors that can occur while acquiring a specification document.
///
/// These are recovered locally: a rejected file never replaces a
/// previously accepted document.
///
/// # Examples
///
/// ```
/// use forge_core::DocumentError;
/// use camino::Utf8PathBuf;
///
/// let error = DocumentError::UnsupportedExtension(Utf8PathBuf::from("spec.txt"));
/// assert!(error.to_string().contains("spec.txt"));
/// ```
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    /// The file extension is not one of `.json`, `.yaml`, `.yml`.
    #[error("unsupported file type '{0}': expected .json, .yaml or .yml")]
    UnsupportedExtension(Utf8PathBuf),

    /// The file could not be read.
    #[error("failed to read '{path}': {source}")]
    Read {
        /// The path that failed to read.
        path: Utf8PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_extension_display() {
        let error = DocumentError::UnsupportedExtension(Utf8PathBuf::from("api.txt"));
        let msg = error.to_string();
        assert!(msg.contains("api.txt"));
        assert!(msg.contains(".yaml"));
    }

    #[test]
    fn test_read_error_display() {
        let error = DocumentError::Read {
            path: Utf8PathBuf::from("missing.yaml"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert!(error.to_string().contains("missing.yaml"));
    }

    #[test]
    fn test_invalid_option_display() {
        let error = ConfigError::InvalidOption {
            option: "tick_rate_ms".to_owned(),
            reason: "must be positive".to_owned(),
        };
        let msg = error.to_string();
        assert!(msg.contains("tick_rate_ms"));
        assert!(msg.contains("must be positive"));
    }
}
