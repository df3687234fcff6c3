//! HTTP client for the prediction service.
//!
//! Talks to a service exposing `POST /predict` (classification) and
//! `GET /` (banner, used as a health check).

use std::time::Instant;

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde_json::Value;
use tracing::{debug, warn};

use super::Classifier;
use crate::config::{DEFAULT_BASE_URL, ServiceConfig};
use crate::telemetry;
use crate::types::{ClassificationRequest, ClassificationResponse, label_text};
use crate::{Result, VerdictError};

/// Client for the prediction service.
#[derive(Clone)]
pub struct PredictClient {
    http: Client,
    base_url: String,
}

impl PredictClient {
    /// Create a client for the service at [`DEFAULT_BASE_URL`].
    pub fn new() -> Result<Self> {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Create a client with a custom base URL (for testing with wiremock).
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        Self::build(base_url.into(), Client::builder())
    }

    /// Create a client from the `[service]` config section.
    pub fn from_config(config: &ServiceConfig) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        Self::build(config.base_url.clone(), builder)
    }

    fn build(base_url: String, builder: reqwest::ClientBuilder) -> Result<Self> {
        let http = builder.build().map_err(|e| {
            VerdictError::Configuration(format!("failed to build HTTP client: {e}"))
        })?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Classify text.
    ///
    /// Sends `{"text": ..., "type": "text"}` as JSON and decodes whatever
    /// payload comes back into a [`ClassificationResponse`].
    pub async fn predict(&self, request: &ClassificationRequest) -> Result<ClassificationResponse> {
        let start = Instant::now();
        let result = self.send_predict(request).await;
        record_request("predict", start, &result);
        result
    }

    async fn send_predict(&self, request: &ClassificationRequest) -> Result<ClassificationResponse> {
        let url = format!("{}/predict", self.base_url);
        debug!(%url, chars = request.content().len(), "sending classification request");

        let response = self
            .http
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| VerdictError::Network(e.to_string()))?;

        let response = error_for_status(response).await?;

        let body = response
            .bytes()
            .await
            .map_err(|e| VerdictError::Network(e.to_string()))?;
        let value: Value =
            serde_json::from_slice(&body).map_err(|e| VerdictError::Parse(e.to_string()))?;

        Ok(ClassificationResponse::from_value(&value))
    }

    /// Fetch the service banner from `GET /`.
    ///
    /// Returns the `Message` (or `message`) field of a JSON body, or the raw
    /// body text otherwise.
    pub async fn health(&self) -> Result<String> {
        let start = Instant::now();
        let result = self.send_health().await;
        record_request("health", start, &result);
        result
    }

    async fn send_health(&self) -> Result<String> {
        let url = format!("{}/", self.base_url);
        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| VerdictError::Network(e.to_string()))?;

        let response = error_for_status(response).await?;
        let body = response
            .text()
            .await
            .map_err(|e| VerdictError::Network(e.to_string()))?;

        let banner = serde_json::from_str::<Value>(&body).ok().and_then(|value| {
            ["Message", "message"]
                .iter()
                .find_map(|key| value.get(key)?.as_str().map(str::to_string))
        });
        Ok(banner.unwrap_or_else(|| body.trim().to_string()))
    }
}

/// Check response status and map to the error taxonomy.
///
/// 404 and 5xx carry fixed messages whatever the body says. Other non-2xx
/// statuses use the body's `message` field when it holds a non-empty string,
/// a non-zero number or `true`.
async fn error_for_status(response: Response) -> Result<Response> {
    let status = response.status();

    if status.is_success() {
        return Ok(response);
    }

    match status {
        StatusCode::NOT_FOUND => Err(VerdictError::NotFound),
        s if s.is_server_error() => Err(VerdictError::Server { status: s.as_u16() }),
        s => {
            let message = response
                .json::<Value>()
                .await
                .ok()
                .and_then(|body| body.get("message").and_then(label_text));
            Err(VerdictError::Request {
                status: s.as_u16(),
                message,
            })
        }
    }
}

/// Record request outcome metrics (counter + histogram).
fn record_request<T>(operation: &'static str, start: Instant, result: &Result<T>) {
    let elapsed = start.elapsed().as_secs_f64();
    let (status, kind) = match result {
        Ok(_) => ("ok", "none"),
        Err(e) => {
            warn!(operation, error = %e, "prediction service request failed");
            ("error", e.kind().as_str())
        }
    };
    metrics::counter!(telemetry::REQUESTS_TOTAL,
        "operation" => operation,
        "status" => status,
        "kind" => kind,
    )
    .increment(1);
    metrics::histogram!(telemetry::REQUEST_DURATION_SECONDS,
        "operation" => operation,
    )
    .record(elapsed);
}

#[async_trait]
impl Classifier for PredictClient {
    fn name(&self) -> &str {
        "http"
    }

    async fn classify(&self, request: &ClassificationRequest) -> Result<ClassificationResponse> {
        PredictClient::predict(self, request).await
    }
}
