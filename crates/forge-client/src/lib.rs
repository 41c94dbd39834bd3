//! HTTP adapter for the apiforge generation and settings service.
//!
//! This crate owns the wire contract of the remote service and maps its
//! responses into `forge-core` domain types:
//!
//! - [`Client`] - the service client (`generate`, `fetch_settings`,
//!   `save_settings`)
//! - [`wire`] - request/response payload types
//! - [`ClientError`] - transport and service-reported failures
//!
//! The client is intentionally thin: one call per user action, no retry,
//! no timeout, no request queuing. Serializing submissions is the
//! orchestrator's job, not the transport's.

#![deny(clippy::all)]
#![warn(missing_docs)]

pub mod client;
pub mod error;
pub mod wire;

pub use client::Client;
pub use error::ClientError;
pub use wire::{
    GenerateRequest, GenerateResponse, GenerateStatus, LlmConfig, RemoteSettings, SettingsSnapshot,
};
