//! Verdict - client for a real/fake news classification service
//!
//! This crate submits pasted text to a prediction service, normalizes
//! whatever payload comes back into a REAL / FAKE / unknown verdict, and
//! tracks the request lifecycle of the form that drives it.
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use verdict::{Orchestrator, PredictClient, UiState};
//!
//! #[tokio::main]
//! async fn main() -> verdict::Result<()> {
//!     let client = PredictClient::with_base_url("http://localhost:8000")?;
//!     let form = Orchestrator::new(Arc::new(client));
//!
//!     form.submit("Scientists discover water on Mars.").await?;
//!
//!     match form.state() {
//!         UiState::Success(result) => println!("{}", verdict::render::result_panel(&result)),
//!         UiState::Failure(message) => eprintln!("{message}"),
//!         _ => {}
//!     }
//!     Ok(())
//! }
//! ```
//!
//! # Normalizing a payload
//!
//! ```rust
//! use verdict::normalize_value;
//!
//! let result = normalize_value(&serde_json::json!({"prediction": "fake", "confidence": 0.87}));
//! assert!(result.is_fake);
//! assert_eq!(result.confidence_percent(), Some(87));
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod normalize;
pub mod orchestrator;
pub mod render;
pub mod telemetry;
pub mod types;
mod version;

// Re-export main types at crate root
pub use client::{Classifier, PredictClient};
pub use config::Config;
pub use error::{ErrorKind, Result, VerdictError};
pub use normalize::{normalize, normalize_value};
pub use orchestrator::{Orchestrator, Session, Submission, UiState};
pub use version::{BuildInfo, PKG_VERSION, long_version, version_string};

pub use types::{
    CanonicalResult, ClassificationRequest, ClassificationResponse, ContentKind, LabelClass,
    Verdict,
};
