//! Domain types for apiforge.
//!
//! This module contains the core domain types used throughout the
//! application for representing specification documents, generation
//! options, and generation results.
//!
//! # Module Organization
//!
//! - [`document`] - The user-provided specification document
//! - [`options`] - User-adjustable generation options
//! - [`plan`] - Test plan, test cases, and generated code
//!
//! # Re-exports
//!
//! All public types are re-exported at this module level and at the
//! crate root:
//!
//! ```
//! use forge_core::{Document, GenerationOptions, GenerationResult, TestCase};
//! ```

mod document;
mod options;
mod plan;

// Re-export all public types
pub use document::{Document, SUPPORTED_EXTENSIONS};
pub use options::{Connection, GenerationOptions, TargetLanguage, Tier, UnknownLanguage};
pub use plan::{CaseKind, GenerationResult, TestCase};
