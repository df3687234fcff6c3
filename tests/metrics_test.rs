//! Tests for metrics integration.
//!
//! Uses `metrics_util::debugging::DebuggingRecorder` to capture and assert
//! on emitted metrics without needing a real exporter.

use std::sync::Arc;

use async_trait::async_trait;
use metrics_util::MetricKind;
use metrics_util::debugging::{DebugValue, DebuggingRecorder};
use tokio::sync::Notify;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use verdict::telemetry;
use verdict::{
    Classifier, ClassificationRequest, ClassificationResponse, Orchestrator, PredictClient,
    Result,
};

// ============================================================================
// Snapshot type alias for readability
// ============================================================================

type SnapshotVec = Vec<(
    metrics_util::CompositeKey,
    Option<metrics::Unit>,
    Option<metrics::SharedString>,
    DebugValue,
)>;

// ============================================================================
// Helpers
// ============================================================================

/// Sum all counter values matching a given metric name.
fn counter_total(snapshot: &SnapshotVec, name: &str) -> u64 {
    snapshot
        .iter()
        .filter(|(key, _, _, _)| key.kind() == MetricKind::Counter && key.key().name() == name)
        .map(|(_, _, _, value)| match value {
            DebugValue::Counter(v) => *v,
            _ => 0,
        })
        .sum()
}

/// Check if any counter for `name` carries the label `key=value`.
fn has_counter_label(snapshot: &SnapshotVec, name: &str, key: &str, value: &str) -> bool {
    snapshot.iter().any(|(composite, _, _, _)| {
        composite.kind() == MetricKind::Counter
            && composite.key().name() == name
            && composite
                .key()
                .labels()
                .any(|label| label.key() == key && label.value() == value)
    })
}

/// Check if any histogram entries exist for a given metric name.
fn has_histogram(snapshot: &SnapshotVec, name: &str) -> bool {
    snapshot
        .iter()
        .any(|(key, _, _, _)| key.kind() == MetricKind::Histogram && key.key().name() == name)
}

struct GatedClassifier {
    gate: Arc<Notify>,
}

#[async_trait]
impl Classifier for GatedClassifier {
    fn name(&self) -> &str {
        "gated"
    }

    async fn classify(&self, _request: &ClassificationRequest) -> Result<ClassificationResponse> {
        self.gate.notified().await;
        Ok("FAKE".into())
    }
}

// ============================================================================
// Tests
// ============================================================================

/// Runs async code within a local recorder scope on the multi-thread runtime.
///
/// `block_in_place` ensures the sync `with_local_recorder` closure stays
/// on the current thread while `block_on` drives the inner async work.
#[tokio::test(flavor = "multi_thread", worker_threads = 1)]
async fn successful_request_records_metrics() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/predict"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!("REAL")))
        .mount(&mock_server)
        .await;
    let client = PredictClient::with_base_url(mock_server.uri()).unwrap();

    let recorder = DebuggingRecorder::new();
    let snapshotter = recorder.snapshotter();

    let result = metrics::with_local_recorder(&recorder, || {
        tokio::task::block_in_place(|| {
            tokio::runtime::Handle::current().block_on(async {
                client
                    .predict(&ClassificationRequest::text("article").unwrap())
                    .await
            })
        })
    });
    assert!(result.is_ok());

    let snapshot = snapshotter.snapshot().into_vec();

    let count = counter_total(&snapshot, telemetry::REQUESTS_TOTAL);
    assert_eq!(count, 1, "expected 1 request counter");
    assert!(has_counter_label(
        &snapshot,
        telemetry::REQUESTS_TOTAL,
        "status",
        "ok"
    ));

    assert!(
        has_histogram(&snapshot, telemetry::REQUEST_DURATION_SECONDS),
        "expected a duration histogram entry"
    );
}

#[tokio::test(flavor = "multi_thread", worker_threads = 1)]
async fn failed_request_records_error_kind() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/predict"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;
    let client = PredictClient::with_base_url(mock_server.uri()).unwrap();

    let recorder = DebuggingRecorder::new();
    let snapshotter = recorder.snapshotter();

    let _result = metrics::with_local_recorder(&recorder, || {
        tokio::task::block_in_place(|| {
            tokio::runtime::Handle::current().block_on(async {
                client
                    .predict(&ClassificationRequest::text("article").unwrap())
                    .await
            })
        })
    });

    let snapshot = snapshotter.snapshot().into_vec();

    assert_eq!(counter_total(&snapshot, telemetry::REQUESTS_TOTAL), 1);
    assert!(has_counter_label(
        &snapshot,
        telemetry::REQUESTS_TOTAL,
        "kind",
        "server"
    ));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 1)]
async fn discarded_response_is_counted() {
    let recorder = DebuggingRecorder::new();
    let snapshotter = recorder.snapshotter();

    let submission = metrics::with_local_recorder(&recorder, || {
        tokio::task::block_in_place(|| {
            tokio::runtime::Handle::current().block_on(async {
                let gate = Arc::new(Notify::new());
                let form = Orchestrator::new(Arc::new(GatedClassifier { gate: gate.clone() }));
                let edit = async {
                    form.input_changed("changed my mind");
                    gate.notify_one();
                };
                let (submission, ()) = tokio::join!(form.submit("article"), edit);
                submission
            })
        })
    });
    assert!(submission.is_ok());

    let snapshot = snapshotter.snapshot().into_vec();
    assert_eq!(counter_total(&snapshot, telemetry::STALE_RESPONSES_TOTAL), 1);
}

#[tokio::test]
async fn metrics_are_noop_without_recorder() {
    // Verify no panics when no recorder is installed.
    let mock_server = MockServer::start().await;
    let client = PredictClient::with_base_url(mock_server.uri()).unwrap();
    let _ = client.health().await;
}
