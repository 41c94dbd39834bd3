//! The user-provided specification document.
//!
//! A [`Document`] is the raw OpenAPI specification text plus the name it
//! is displayed under. The content is treated as opaque: this client
//! never parses or validates the specification itself.

use camino::{Utf8Path, Utf8PathBuf};
use serde::{Deserialize, Serialize};

use crate::error::DocumentError;

/// File extensions accepted for specification documents.
pub const SUPPORTED_EXTENSIONS: &[&str] = &["json", "yaml", "yml"];

/// A specification document selected by the user.
///
/// Invariant: a held document always has a non-empty display name. An
/// absent document is represented as `Option<Document>` by callers, so
/// "cleared" and "never loaded" look the same to consumers.
///
/// # Examples
///
/// ```
/// use forge_core::Document;
///
/// let doc = Document::new("openapi: 3.0.0", "api.yaml");
/// assert!(doc.has_content());
/// assert_eq!(doc.name, "api.yaml");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// The raw specification text, passed through to the service verbatim.
    pub content: String,

    /// Display name, typically the selected file's name.
    pub name: String,
}

impl Document {
    /// Creates a new document from raw content and a display name.
    #[must_use]
    pub fn new(content: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            name: name.into(),
        }
    }

    /// Returns `true` if the document has any content.
    ///
    /// Generation is gated on this: an empty document never produces a
    /// request.
    #[inline]
    #[must_use]
    pub fn has_content(&self) -> bool {
        !self.content.is_empty()
    }

    /// Validates that a path carries a supported specification extension.
    ///
    /// The check happens before any I/O so a rejected path cannot
    /// disturb a previously accepted document.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::UnsupportedExtension`] for any extension
    /// outside [`SUPPORTED_EXTENSIONS`] (including none at all).
    ///
    /// # Examples
    ///
    /// ```
    /// use forge_core::Document;
    /// use camino::Utf8Path;
    ///
    /// assert!(Document::check_path(Utf8Path::new("api.yaml")).is_ok());
    /// assert!(Document::check_path(Utf8Path::new("api.txt")).is_err());
    /// ```
    pub fn check_path(path: &Utf8Path) -> Result<(), DocumentError> {
        let supported = path
            .extension()
            .is_some_and(|ext| SUPPORTED_EXTENSIONS.contains(&ext.to_lowercase().as_str()));
        if supported {
            Ok(())
        } else {
            Err(DocumentError::UnsupportedExtension(Utf8PathBuf::from(path)))
        }
    }

    /// Derives the display name for a path (file name, or the full path
    /// when it has no file name component).
    #[must_use]
    pub fn display_name(path: &Utf8Path) -> String {
        path.file_name().unwrap_or(path.as_str()).to_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_has_content() {
        let doc = Document::new("openapi: 3.0.0", "api.yaml");
        assert!(doc.has_content());

        let empty = Document::new("", "api.yaml");
        assert!(!empty.has_content());
    }

    #[test]
    fn test_check_path_accepts_supported_extensions() {
        for name in ["api.json", "api.yaml", "api.yml", "nested/dir/spec.yaml"] {
            assert!(Document::check_path(Utf8Path::new(name)).is_ok(), "{name}");
        }
    }

    #[test]
    fn test_check_path_is_case_insensitive() {
        assert!(Document::check_path(Utf8Path::new("API.YAML")).is_ok());
        assert!(Document::check_path(Utf8Path::new("spec.Json")).is_ok());
    }

    #[test]
    fn test_check_path_rejects_other_extensions() {
        for name in ["api.txt", "api.xml", "api", "api.yaml.bak"] {
            let result = Document::check_path(Utf8Path::new(name));
            assert!(
                matches!(result, Err(DocumentError::UnsupportedExtension(_))),
                "{name}"
            );
        }
    }

    #[test]
    fn test_display_name() {
        assert_eq!(
            Document::display_name(Utf8Path::new("specs/api.yaml")),
            "api.yaml"
        );
        assert_eq!(Document::display_name(Utf8Path::new("api.json")), "api.json");
    }
}
