//! Configuration structures for apiforge.
//!
//! This module provides configuration types for all components of the
//! application:
//!
//! - [`ServiceConfig`] - Generation-service endpoint settings
//! - [`TuiConfig`] - Terminal UI settings (tick rate, colors)
//! - [`Config`] - Root configuration combining all settings
//!
//! All configuration types implement [`Default`] with values matching a
//! locally running generation service.

use serde::{Deserialize, Serialize};

/// Default base URL of a locally running generation service.
pub const DEFAULT_SERVICE_URL: &str = "http://127.0.0.1:8000/api/v1";

/// Color scheme for the TUI.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum ColorScheme {
    /// Automatically detect based on terminal settings.
    #[default]
    Auto,
    /// Light color scheme (dark text on light background).
    Light,
    /// Dark color scheme (light text on dark background).
    Dark,
}

/// Configuration for the remote generation service.
///
/// The base URL covers both the `generate` and the `settings` endpoints;
/// overrides for the LLM connection itself live in
/// [`Connection`](crate::Connection) and are forwarded per request.
///
/// # Examples
///
/// ```
/// use forge_core::ServiceConfig;
///
/// let config = ServiceConfig::default();
/// assert_eq!(config.base_url, "http://127.0.0.1:8000/api/v1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Base URL of the generation service API.
    pub base_url: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_SERVICE_URL.to_owned(),
        }
    }
}

/// Configuration for the terminal user interface.
///
/// # Examples
///
/// ```
/// use forge_core::{ColorScheme, TuiConfig};
///
/// let config = TuiConfig::default();
/// assert_eq!(config.tick_rate_ms, 250);
/// assert_eq!(config.color_scheme, ColorScheme::Auto);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct TuiConfig {
    /// UI tick rate in milliseconds.
    ///
    /// Lower values provide smoother updates but use more CPU.
    pub tick_rate_ms: u64,

    /// Render frame rate in frames per second.
    pub frame_rate: u64,

    /// Color scheme for the interface.
    pub color_scheme: ColorScheme,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: 250,
            frame_rate: 30,
            color_scheme: ColorScheme::Auto,
        }
    }
}

/// Root configuration for apiforge.
///
/// Built once in the binary and passed explicitly to the client and the
/// TUI; there is no ambient global configuration.
///
/// # Examples
///
/// ```
/// use forge_core::Config;
///
/// let config = Config::default();
/// let json = serde_json::to_string_pretty(&config).unwrap();
/// assert!(json.contains("base_url"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Generation-service endpoint configuration.
    pub service: ServiceConfig,

    /// Terminal UI configuration.
    pub tui: TuiConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_config_defaults() {
        let config = ServiceConfig::default();
        assert_eq!(config.base_url, DEFAULT_SERVICE_URL);
    }

    #[test]
    fn test_tui_config_defaults() {
        let config = TuiConfig::default();
        assert_eq!(config.tick_rate_ms, 250);
        assert_eq!(config.frame_rate, 30);
        assert_eq!(config.color_scheme, ColorScheme::Auto);
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let json = serde_json::to_string(&config).unwrap();
        let parsed: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(config, parsed);
    }

    #[test]
    fn test_config_deserialize_with_missing_fields() {
        let json = r#"{"service": {"base_url": "http://example.test/api"}}"#;
        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.service.base_url, "http://example.test/api");
        // Other fields should have defaults
        assert_eq!(config.tui.tick_rate_ms, 250);
    }

    #[test]
    fn test_color_scheme_serialization() {
        assert_eq!(
            serde_json::to_string(&ColorScheme::Auto).unwrap(),
            r#""auto""#
        );
        assert_eq!(
            serde_json::to_string(&ColorScheme::Dark).unwrap(),
            r#""dark""#
        );
    }
}
