//! Clients for the prediction service.
//!
//! [`Classifier`] is the seam the [`Orchestrator`](crate::Orchestrator)
//! talks to; [`PredictClient`] implements it over HTTP.

mod http;

use async_trait::async_trait;

pub use http::PredictClient;

use crate::Result;
use crate::types::{ClassificationRequest, ClassificationResponse};

/// Something that can classify a piece of text.
///
/// Implementations map every failure onto the [`VerdictError`](crate::VerdictError)
/// taxonomy; the orchestrator does not inspect transport details.
#[async_trait]
pub trait Classifier: Send + Sync {
    /// Classifier name for logging/debugging.
    fn name(&self) -> &str;

    /// Send one request and decode the payload. No retries.
    async fn classify(&self, request: &ClassificationRequest) -> Result<ClassificationResponse>;
}
