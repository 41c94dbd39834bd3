//! The generation-service client.
//!
//! One method per user action: [`Client::generate`],
//! [`Client::fetch_settings`], [`Client::save_settings`]. All three are
//! single-shot calls with no retry and no timeout; the caller decides
//! what a failure means.

use forge_core::{GenerationResult, ServiceConfig};
use tracing::{debug, instrument};

use crate::error::ClientError;
use crate::wire::{GenerateRequest, GenerateResponse, RemoteSettings, SettingsSnapshot};

/// Client for the generation and settings endpoints.
///
/// Cheap to clone; the underlying connection pool is shared.
///
/// # Examples
///
/// ```no_run
/// use forge_client::Client;
/// use forge_core::ServiceConfig;
///
/// let client = Client::new(&ServiceConfig::default());
/// ```
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    base_url: String,
}

impl Client {
    /// Creates a client for the given service endpoint.
    #[must_use]
    pub fn new(service: &ServiceConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: service.base_url.trim_end_matches('/').to_owned(),
        }
    }

    /// Submits a generation request and waits for its outcome.
    ///
    /// A response with any status other than `completed` is mapped to
    /// [`ClientError::Rejected`] carrying the server-provided message.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport failure, a non-success HTTP
    /// status, or a service-reported failure.
    #[instrument(skip_all, fields(language = %request.target_language.as_str()))]
    pub async fn generate(
        &self,
        request: &GenerateRequest,
    ) -> Result<GenerationResult, ClientError> {
        let response = self
            .http
            .post(self.url("generate"))
            .json(request)
            .send()
            .await?;

        let response = Self::check_status(response).await?;
        let payload: GenerateResponse = response.json().await?;

        debug!(task_id = %payload.task_id, status = ?payload.status, "Generation response received");
        payload.into_result()
    }

    /// Fetches the persisted settings overlay.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] when the settings service is unreachable
    /// or answers with a non-success status.
    pub async fn fetch_settings(&self) -> Result<RemoteSettings, ClientError> {
        let response = self.http.get(self.url("settings")).send().await?;
        let response = Self::check_status(response).await?;
        Ok(response.json().await?)
    }

    /// Persists the full settings snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] when the settings service is unreachable
    /// or answers with a non-success status.
    pub async fn save_settings(&self, snapshot: &SettingsSnapshot) -> Result<(), ClientError> {
        let response = self
            .http
            .post(self.url("settings"))
            .json(snapshot)
            .send()
            .await?;

        Self::check_status(response).await?;
        Ok(())
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{path}", self.base_url)
    }

    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, ClientError> {
        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(ClientError::Http { status, body })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joining_strips_trailing_slash() {
        let service = ServiceConfig {
            base_url: "http://127.0.0.1:8000/api/v1/".to_owned(),
        };
        let client = Client::new(&service);
        assert_eq!(client.url("generate"), "http://127.0.0.1:8000/api/v1/generate");
        assert_eq!(client.url("settings"), "http://127.0.0.1:8000/api/v1/settings");
    }

    #[test]
    fn test_url_joining_without_trailing_slash() {
        let client = Client::new(&ServiceConfig::default());
        assert_eq!(client.url("generate"), "http://127.0.0.1:8000/api/v1/generate");
    }
}
