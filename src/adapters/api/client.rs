//! HTTP submission client
//!
//! One authenticated POST per payload against the load-creation endpoint.
//! The client does not retry, does not inspect the status beyond recording
//! it, and relies on the configured request timeout.

use crate::adapters::api::models::ApiResponse;
use crate::config::ApiConfig;
use crate::domain::{ApiError, LoadPayload, LoadsendError, Result};
use async_trait::async_trait;
use base64::{engine::general_purpose, Engine as _};
use reqwest::{Client, ClientBuilder};
use secrecy::ExposeSecret;
use std::time::Duration;

/// Submission seam for the batch runner
///
/// The production implementation is [`HttpLoadApi`]; tests substitute a
/// stub to exercise the batch loop without a network.
#[async_trait]
pub trait LoadApi {
    /// Serializes the payload and performs one submission attempt
    async fn submit_load(&self, payload: &LoadPayload) -> Result<ApiResponse>;

    /// Endpoint this client submits to
    fn endpoint(&self) -> &str;
}

/// reqwest-backed load API client
pub struct HttpLoadApi {
    client: Client,
    config: ApiConfig,
}

impl HttpLoadApi {
    /// Creates a client from configuration
    ///
    /// Missing credentials are a warning, not an error: the request is
    /// still attempted without an Authorization header and will likely be
    /// rejected with 401.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(config: ApiConfig) -> Result<Self> {
        if !config.has_credentials() {
            tracing::warn!(
                endpoint = %config.endpoint,
                "API credentials not set; requests will be sent unauthenticated and will likely fail with 401"
            );
        }

        let client = ClientBuilder::new()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .connect_timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| LoadsendError::Configuration(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self { client, config })
    }

    /// Basic Authorization header value, when credentials are configured
    fn auth_header_value(&self) -> Option<String> {
        let (username, password) = (
            self.config.username.as_ref()?,
            self.config.password.as_ref()?,
        );
        let credentials = format!("{username}:{}", password.expose_secret());
        let encoded = general_purpose::STANDARD.encode(credentials.as_bytes());
        Some(format!("Basic {encoded}"))
    }
}

#[async_trait]
impl LoadApi for HttpLoadApi {
    async fn submit_load(&self, payload: &LoadPayload) -> Result<ApiResponse> {
        let mut request = self
            .client
            .post(&self.config.endpoint)
            .header("organization-id", &self.config.organization_id)
            .json(payload);

        if let Some(auth) = self.auth_header_value() {
            request = request.header("Authorization", auth);
        }

        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                LoadsendError::Api(ApiError::Timeout(e.to_string()))
            } else {
                LoadsendError::Api(ApiError::ConnectionFailed(e.to_string()))
            }
        })?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| LoadsendError::Api(ApiError::InvalidResponse(e.to_string())))?;

        tracing::debug!(status = status, bytes = body.len(), "Load API responded");

        Ok(ApiResponse::new(status, body))
    }

    fn endpoint(&self) -> &str {
        &self.config.endpoint
    }
}
