//! Telemetry metric name constants.
//!
//! Centralised metric names for verdict operations. Consumers install
//! their own `metrics` recorder (e.g. prometheus, statsd); without a
//! recorder installed, all metric calls are no-ops.
//!
//! # Metric naming conventions
//!
//! All metrics are prefixed with `verdict_`. Counters end in `_total`,
//! histograms use meaningful units (e.g. `_seconds`).
//!
//! # Common labels
//!
//! - `operation` — endpoint invoked ("predict" or "health")
//! - `status` — outcome: "ok" or "error"
//! - `kind` — error kind on failure (see [`ErrorKind::as_str`](crate::error::ErrorKind::as_str))

/// Total requests sent to the prediction service.
///
/// Labels: `operation`, `status` ("ok" | "error"), `kind`.
pub const REQUESTS_TOTAL: &str = "verdict_requests_total";

/// Request duration in seconds, measured until the body is decoded.
///
/// Labels: `operation`.
pub const REQUEST_DURATION_SECONDS: &str = "verdict_request_duration_seconds";

/// Responses that arrived after the user moved on and were discarded.
pub const STALE_RESPONSES_TOTAL: &str = "verdict_stale_responses_total";
