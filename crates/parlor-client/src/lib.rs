//! HTTP implementation of the assistant backend.
//!
//! Talks to the REST backend:
//! - `GET  /api/health`          - 2xx means healthy, body ignored
//! - `POST /api/chat`            - `{ "message": ..., "user_id": ... }` in,
//!   `{ "message": ... }` out
//! - `POST /api/clear/{user_id}` - 2xx means success, body ignored
//!
//! Failures are classified from the transport outcome into the
//! [`BackendError`] taxonomy, never from error message text.

use async_trait::async_trait;
use parlor_core::backend::{AssistantBackend, BackendError};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Backend implementation that talks to the assistant service over HTTP.
#[derive(Clone)]
pub struct HttpAssistantBackend {
    client: Client,
    base_url: String,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    message: &'a str,
    user_id: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    message: String,
}

impl HttpAssistantBackend {
    /// Creates a backend client for the service at `base_url`.
    ///
    /// A trailing slash on the URL is tolerated.
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            client: Client::new(),
            base_url,
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Maps a reqwest transport failure onto the error taxonomy.
    fn classify(err: reqwest::Error) -> BackendError {
        if err.is_connect() || err.is_timeout() {
            BackendError::connectivity(err.to_string())
        } else if err.is_decode() {
            BackendError::unexpected(format!("failed to parse response: {}", err))
        } else {
            BackendError::unexpected(err.to_string())
        }
    }

    /// Converts a non-success response into a Service error carrying the
    /// raw body text.
    async fn service_error(response: reqwest::Response) -> BackendError {
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        BackendError::service(status, body)
    }
}

#[async_trait]
impl AssistantBackend for HttpAssistantBackend {
    async fn health_check(&self) -> Result<(), BackendError> {
        let response = self
            .client
            .get(self.endpoint("/api/health"))
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await
            .map_err(Self::classify)?;

        if !response.status().is_success() {
            return Err(Self::service_error(response).await);
        }
        Ok(())
    }

    async fn send_message(&self, text: &str, session_id: &str) -> Result<String, BackendError> {
        let request_body = ChatRequest {
            message: text,
            user_id: session_id,
        };

        tracing::debug!(session_id, "posting chat message");
        let response = self
            .client
            .post(self.endpoint("/api/chat"))
            .json(&request_body)
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await
            .map_err(Self::classify)?;

        if !response.status().is_success() {
            return Err(Self::service_error(response).await);
        }

        let chat_response: ChatResponse = response.json().await.map_err(Self::classify)?;
        Ok(chat_response.message)
    }

    async fn clear_session(&self, session_id: &str) -> Result<(), BackendError> {
        tracing::debug!(session_id, "clearing server-side history");
        let response = self
            .client
            .post(self.endpoint(&format!("/api/clear/{}", session_id)))
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await
            .map_err(Self::classify)?;

        if !response.status().is_success() {
            return Err(Self::service_error(response).await);
        }
        Ok(())
    }
}
