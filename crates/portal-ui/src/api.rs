//! Thin JSON client for the portal backend.
//!
//! Requests carry the browser's session cookie (`credentials: include`) on
//! `wasm32`. Native builds get a request timeout instead.

use portal_core::{ApiConfig, ThemeLoadError};
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

/// Errors from a backend request
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("Request failed: {0}")]
    Network(String),

    #[error("Server answered with status {status}")]
    Status { status: u16 },

    #[error("Response body is not valid JSON: {0}")]
    Decode(String),
}

impl ApiError {
    /// The session is missing or expired
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Status { status: 401 | 403 })
    }
}

impl From<ApiError> for ThemeLoadError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Network(msg) => ThemeLoadError::Network(msg),
            ApiError::Status { status } => ThemeLoadError::Status { status },
            ApiError::Decode(msg) => ThemeLoadError::Malformed(msg),
        }
    }
}

/// Shared HTTP client, provided to the tree as context
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        Ok(Self {
            http: build_http_client(config)?,
            config: config.clone(),
        })
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    pub fn url(&self, path: &str) -> String {
        self.config.url(path)
    }

    /// `GET path`, decoding a JSON body
    pub async fn get_json(&self, path: &str) -> Result<Value, ApiError> {
        let request = self
            .http
            .get(self.url(path))
            .header(reqwest::header::ACCEPT, "application/json");
        self.send_json(request).await
    }

    /// `POST path` with a JSON body, decoding a JSON reply
    pub async fn post_json<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Value, ApiError> {
        let request = self
            .http
            .post(self.url(path))
            .header(reqwest::header::ACCEPT, "application/json")
            .json(body);
        self.send_json(request).await
    }

    /// `DELETE path`, ignoring any body
    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let response = send(self.http.delete(self.url(path))).await?;
        check_status(&response)?;
        Ok(())
    }

    async fn send_json(&self, request: reqwest::RequestBuilder) -> Result<Value, ApiError> {
        let response = send(request).await?;
        check_status(&response)?;
        let body = response
            .bytes()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        serde_json::from_slice(&body).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

async fn send(request: reqwest::RequestBuilder) -> Result<reqwest::Response, ApiError> {
    #[cfg(target_arch = "wasm32")]
    let request = request.fetch_credentials_include();

    request
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))
}

fn check_status(response: &reqwest::Response) -> Result<(), ApiError> {
    let status = response.status();
    if status.is_success() {
        Ok(())
    } else {
        Err(ApiError::Status {
            status: status.as_u16(),
        })
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn build_http_client(config: &ApiConfig) -> Result<reqwest::Client, ApiError> {
    reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(config.request_timeout_secs))
        .build()
        .map_err(|e| ApiError::Network(e.to_string()))
}

#[cfg(target_arch = "wasm32")]
fn build_http_client(_config: &ApiConfig) -> Result<reqwest::Client, ApiError> {
    reqwest::Client::builder()
        .build()
        .map_err(|e| ApiError::Network(e.to_string()))
}
