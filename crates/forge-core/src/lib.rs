//! Core types, errors, and configuration for apiforge.
//!
//! This crate provides the foundational types used across the workspace:
//!
//! - Domain types (`Document`, `GenerationOptions`, `TestCase`,
//!   `GenerationResult`)
//! - Configuration structures for the service endpoint and the TUI
//! - Error types for consistent error handling

#![deny(clippy::all)]
#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod types;

pub use config::{ColorScheme, Config, ServiceConfig, TuiConfig, DEFAULT_SERVICE_URL};
pub use error::{ConfigError, DocumentError};
pub use types::{
    CaseKind, Connection, Document, GenerationOptions, GenerationResult, TargetLanguage, TestCase,
    Tier, UnknownLanguage,
};
