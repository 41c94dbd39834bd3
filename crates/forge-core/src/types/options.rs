//! User-adjustable generation options.
//!
//! This module provides [`GenerationOptions`] and its closed-set enums
//! [`TargetLanguage`] and [`Tier`]. Options are mutated only by direct
//! user edits or by a successful settings load; the orchestrator takes a
//! read-only snapshot at submission time.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Target language for generated test code.
///
/// # Examples
///
/// ```
/// use forge_core::TargetLanguage;
///
/// assert_eq!(TargetLanguage::default(), TargetLanguage::Curl);
/// assert_eq!("go".parse::<TargetLanguage>(), Ok(TargetLanguage::Go));
/// assert!("python".parse::<TargetLanguage>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetLanguage {
    /// cURL shell snippets.
    #[default]
    Curl,
    /// Go test code.
    Go,
    /// Java test code.
    Java,
}

impl TargetLanguage {
    /// Returns a human-readable label for display.
    #[inline]
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Curl => "cURL (Shell)",
            Self::Go => "Go",
            Self::Java => "Java",
        }
    }

    /// Returns the wire value sent to the service.
    #[inline]
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Curl => "curl",
            Self::Go => "go",
            Self::Java => "java",
        }
    }

    /// Returns the next language in cycle order (for key-driven editing).
    #[must_use]
    pub const fn cycle(self) -> Self {
        match self {
            Self::Curl => Self::Go,
            Self::Go => Self::Java,
            Self::Java => Self::Curl,
        }
    }
}

impl FromStr for TargetLanguage {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "curl" => Ok(Self::Curl),
            "go" => Ok(Self::Go),
            "java" => Ok(Self::Java),
            _ => Err(UnknownLanguage),
        }
    }
}

/// Marker error for an unrecognized language value.
///
/// Settings loads treat this as "leave the current value untouched"
/// rather than as a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized target language")]
pub struct UnknownLanguage;

/// Processing-strategy hint forwarded to the remote service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    /// Full reasoning; suited to complex logic ("deep").
    #[default]
    High,
    /// Structured output, speed first ("fast").
    Low,
}

impl Tier {
    /// Returns a human-readable label for display.
    #[inline]
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::High => "Deep",
            Self::Low => "Fast",
        }
    }

    /// Toggles between the two tiers.
    #[must_use]
    pub const fn toggle(self) -> Self {
        match self {
            Self::High => Self::Low,
            Self::Low => Self::High,
        }
    }
}

/// Connection settings for the LLM behind the generation service.
///
/// Empty strings mean "unset"; request building omits unset fields so
/// the service can fall back to its own defaults. The model name is an
/// opaque pass-through, never interpreted by this client.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Connection {
    /// API base URL override.
    pub base_url: String,

    /// Opaque credential forwarded to the service.
    pub api_key: String,

    /// Model identifier forwarded to the service.
    pub model_name: String,
}

/// The full set of user-adjustable options controlling a generation
/// request.
///
/// # Examples
///
/// ```
/// use forge_core::{GenerationOptions, TargetLanguage, Tier};
///
/// let options = GenerationOptions::default();
/// assert_eq!(options.target_language, TargetLanguage::Curl);
/// assert_eq!(options.tier, Tier::High);
/// assert!(options.include_negative);
/// assert!(!options.include_boundary);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationOptions {
    /// Target language for generated code.
    pub target_language: TargetLanguage,

    /// Processing-strategy hint.
    pub tier: Tier,

    /// LLM connection overrides.
    pub connection: Connection,

    /// Whether to include boundary test cases.
    pub include_boundary: bool,

    /// Whether to include negative (400 Bad Request) test cases.
    pub include_negative: bool,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            target_language: TargetLanguage::default(),
            tier: Tier::default(),
            connection: Connection::default(),
            include_boundary: false,
            include_negative: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_defaults_to_curl() {
        assert_eq!(TargetLanguage::default(), TargetLanguage::Curl);
    }

    #[test]
    fn test_language_parse() {
        assert_eq!("curl".parse(), Ok(TargetLanguage::Curl));
        assert_eq!("go".parse(), Ok(TargetLanguage::Go));
        assert_eq!("java".parse(), Ok(TargetLanguage::Java));
        assert_eq!("python".parse::<TargetLanguage>(), Err(UnknownLanguage));
        assert_eq!("".parse::<TargetLanguage>(), Err(UnknownLanguage));
    }

    #[test]
    fn test_language_cycle_covers_all() {
        let mut lang = TargetLanguage::Curl;
        lang = lang.cycle();
        assert_eq!(lang, TargetLanguage::Go);
        lang = lang.cycle();
        assert_eq!(lang, TargetLanguage::Java);
        lang = lang.cycle();
        assert_eq!(lang, TargetLanguage::Curl);
    }

    #[test]
    fn test_language_serialization() {
        assert_eq!(
            serde_json::to_string(&TargetLanguage::Curl).unwrap(),
            r#""curl""#
        );
        assert_eq!(
            serde_json::to_string(&TargetLanguage::Java).unwrap(),
            r#""java""#
        );
    }

    #[test]
    fn test_tier_toggle() {
        assert_eq!(Tier::High.toggle(), Tier::Low);
        assert_eq!(Tier::Low.toggle(), Tier::High);
    }

    #[test]
    fn test_tier_serialization() {
        assert_eq!(serde_json::to_string(&Tier::High).unwrap(), r#""high""#);
        assert_eq!(serde_json::to_string(&Tier::Low).unwrap(), r#""low""#);
    }

    #[test]
    fn test_options_defaults() {
        let options = GenerationOptions::default();
        assert_eq!(options.target_language, TargetLanguage::Curl);
        assert_eq!(options.tier, Tier::High);
        assert!(options.include_negative);
        assert!(!options.include_boundary);
        assert!(options.connection.base_url.is_empty());
    }
}
