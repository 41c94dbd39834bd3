//! Wire types for the generation and settings endpoints.
//!
//! Request payloads are built once at submission time from a document
//! plus an options snapshot and are never persisted. Response types stay
//! tolerant (`#[serde(default)]`, catch-all status) so a slightly newer
//! service does not break this client.

use forge_core::{Document, GenerationOptions, GenerationResult, TargetLanguage, Tier};
use serde::{Deserialize, Serialize};

use crate::error::ClientError;

/// LLM connection overrides forwarded inside a generation request.
///
/// Unset fields are omitted from the payload entirely, which lets the
/// service distinguish "use your default" from "explicitly empty".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LlmConfig {
    /// API base URL override.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    /// Opaque credential.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Model identifier, passed through uninterpreted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_name: Option<String>,

    /// Processing-strategy hint.
    pub tier: Tier,
}

/// Body of `POST /generate`.
///
/// An immutable snapshot of document + options, assembled at the moment
/// the orchestrator enters the in-flight state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerateRequest {
    /// Raw specification text, passed through verbatim.
    pub openapi_content: String,

    /// Target language for generated code.
    pub target_language: TargetLanguage,

    /// LLM connection overrides and tier.
    pub llm_config: LlmConfig,

    /// Whether to include boundary test cases.
    pub include_boundary: bool,

    /// Whether to include negative test cases.
    pub include_negative: bool,
}

impl GenerateRequest {
    /// Builds a request snapshot from the current document and options.
    #[must_use]
    pub fn new(document: &Document, options: &GenerationOptions) -> Self {
        Self {
            openapi_content: document.content.clone(),
            target_language: options.target_language,
            llm_config: LlmConfig {
                base_url: none_if_empty(&options.connection.base_url),
                api_key: none_if_empty(&options.connection.api_key),
                model_name: none_if_empty(&options.connection.model_name),
                tier: options.tier,
            },
            include_boundary: options.include_boundary,
            include_negative: options.include_negative,
        }
    }
}

fn none_if_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_owned())
    }
}

/// Task status reported by the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum GenerateStatus {
    /// The task is still running (not expected from the synchronous
    /// endpoint, but part of the wire contract).
    Processing,
    /// The task finished and `result` is populated.
    Completed,
    /// The task failed and `error` describes why.
    Failed,
    /// Any status this client does not recognize.
    #[serde(other)]
    Unknown,
}

/// Body of the `POST /generate` response.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateResponse {
    /// Server-assigned task id, useful for correlating service logs.
    #[serde(default)]
    pub task_id: String,

    /// Task outcome.
    pub status: GenerateStatus,

    /// Result payload, present when `status` is `completed`.
    #[serde(default)]
    pub result: Option<GenerationResult>,

    /// Failure reason, present when `status` is `failed`.
    #[serde(default)]
    pub error: Option<String>,
}

impl GenerateResponse {
    /// Maps the wire response to a domain result.
    ///
    /// Anything but a completed status with a result payload is an
    /// error: the caller treats the request as failed and stores
    /// nothing.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Rejected`] for a non-completed status and
    /// [`ClientError::Malformed`] for a completed status without a
    /// payload.
    pub fn into_result(self) -> Result<GenerationResult, ClientError> {
        match self.status {
            GenerateStatus::Completed => self.result.ok_or_else(|| {
                ClientError::Malformed("status 'completed' without a result payload".to_owned())
            }),
            _ => Err(ClientError::rejected(self.error)),
        }
    }
}

/// Partial settings overlay returned by `GET /settings`.
///
/// Absent fields leave the corresponding local values untouched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RemoteSettings {
    /// API base URL, if persisted.
    #[serde(default)]
    pub base_url: Option<String>,

    /// Credential, if persisted.
    #[serde(default)]
    pub api_key: Option<String>,

    /// Model identifier, if persisted.
    #[serde(default)]
    pub model_name: Option<String>,

    /// Target language, if persisted. Applied only when it names one of
    /// the recognized languages; anything else is silently ignored.
    #[serde(default)]
    pub language: Option<String>,
}

/// Full settings snapshot sent by `POST /settings`.
///
/// Saving always writes the complete record, never a partial overlay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SettingsSnapshot {
    /// API base URL (may be empty).
    pub base_url: String,
    /// Credential (may be empty).
    pub api_key: String,
    /// Model identifier (may be empty).
    pub model_name: String,
    /// Current target language.
    pub language: TargetLanguage,
}

impl SettingsSnapshot {
    /// Builds a snapshot from the current options.
    #[must_use]
    pub fn from_options(options: &GenerationOptions) -> Self {
        Self {
            base_url: options.connection.base_url.clone(),
            api_key: options.connection.api_key.clone(),
            model_name: options.connection.model_name.clone(),
            language: options.target_language,
        }
    }
}

#[cfg(test)]
mod tests {
    use forge_core::Connection;
    use insta::assert_snapshot;

    use super::*;

    #[test]
    fn test_generate_request_omits_unset_connection_fields() {
        let document = Document::new("openapi: 3.0.0", "api.yaml");
        let options = GenerationOptions::default();

        let request = GenerateRequest::new(&document, &options);
        let json = serde_json::to_string(&request).unwrap();

        assert_snapshot!(
            json,
            @r#"{"openapi_content":"openapi: 3.0.0","target_language":"curl","llm_config":{"tier":"high"},"include_boundary":false,"include_negative":true}"#
        );
    }

    #[test]
    fn test_generate_request_carries_set_connection_fields() {
        let document = Document::new("{}", "api.json");
        let options = GenerationOptions {
            connection: Connection {
                base_url: "https://api.example.test/v1".to_owned(),
                api_key: "sk-test".to_owned(),
                model_name: "gpt-test".to_owned(),
            },
            ..GenerationOptions::default()
        };

        let request = GenerateRequest::new(&document, &options);
        let json = serde_json::to_string(&request).unwrap();

        assert!(json.contains(r#""base_url":"https://api.example.test/v1""#));
        assert!(json.contains(r#""api_key":"sk-test""#));
        assert!(json.contains(r#""model_name":"gpt-test""#));
    }

    #[test]
    fn test_completed_response_yields_result() {
        let json = r#"{
            "task_id": "abc",
            "status": "completed",
            "result": {
                "test_plan": [{"id": "t1", "name": "a", "type": "positive"}],
                "generated_code": {"t1": "curl ..."}
            }
        }"#;
        let response: GenerateResponse = serde_json::from_str(json).unwrap();
        let result = response.into_result().unwrap();
        assert_eq!(result.first_case_id(), Some("t1"));
    }

    #[test]
    fn test_failed_response_carries_server_message() {
        let json = r#"{"task_id": "abc", "status": "failed", "error": "invalid spec"}"#;
        let response: GenerateResponse = serde_json::from_str(json).unwrap();
        let err = response.into_result().unwrap_err();
        assert!(matches!(
            err,
            ClientError::Rejected { ref message } if message == "invalid spec"
        ));
    }

    #[test]
    fn test_failed_response_without_message() {
        let json = r#"{"status": "failed"}"#;
        let response: GenerateResponse = serde_json::from_str(json).unwrap();
        let err = response.into_result().unwrap_err();
        assert!(err.to_string().contains("unknown error"));
    }

    #[test]
    fn test_completed_without_payload_is_malformed() {
        let json = r#"{"status": "completed"}"#;
        let response: GenerateResponse = serde_json::from_str(json).unwrap();
        assert!(matches!(
            response.into_result(),
            Err(ClientError::Malformed(_))
        ));
    }

    #[test]
    fn test_unrecognized_status_is_a_failure() {
        let json = r#"{"status": "queued"}"#;
        let response: GenerateResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.status, GenerateStatus::Unknown);
        assert!(response.into_result().is_err());
    }

    #[test]
    fn test_remote_settings_partial_overlay() {
        let json = r#"{"language": "python"}"#;
        let settings: RemoteSettings = serde_json::from_str(json).unwrap();
        assert_eq!(settings.language.as_deref(), Some("python"));
        assert!(settings.base_url.is_none());
        assert!(settings.api_key.is_none());
    }

    #[test]
    fn test_settings_snapshot_is_full_record() {
        let options = GenerationOptions::default();
        let snapshot = SettingsSnapshot::from_options(&options);
        let json = serde_json::to_string(&snapshot).unwrap();

        assert_snapshot!(
            json,
            @r#"{"base_url":"","api_key":"","model_name":"","language":"curl"}"#
        );
    }
}
