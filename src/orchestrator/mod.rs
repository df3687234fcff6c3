//! Request lifecycle for the classification form.
//!
//! The [`Orchestrator`] owns the form [`Session`], sends one request per
//! submit through a [`Classifier`], and folds the outcome back into the
//! session. Front ends observe changes through [`Orchestrator::subscribe`].
//!
//! Each submit is tagged with a generation number. Editing the input while a
//! request is in flight abandons it; when its response eventually arrives it
//! is discarded instead of overwriting what the user is looking at.
//! Dropping a `submit` future before it settles returns the form to idle.

mod state;

use std::sync::Arc;

use tokio::sync::watch;
use tracing::debug;

pub use state::{Event, Outcome, Session, Transition, UiState};

use crate::client::Classifier;
use crate::normalize::normalize;
use crate::telemetry;
use crate::types::ClassificationRequest;
use crate::{Result, VerdictError};

/// How a submitted request ended.
#[derive(Debug, Clone, PartialEq)]
pub enum Submission {
    /// The outcome is now the visible state.
    Settled(UiState),
    /// The user moved on before the response arrived.
    Discarded,
}

/// Drives the form: validation, the in-flight request and state updates.
pub struct Orchestrator {
    classifier: Arc<dyn Classifier>,
    session: watch::Sender<Session>,
}

impl Orchestrator {
    pub fn new(classifier: Arc<dyn Classifier>) -> Self {
        let (session, _) = watch::channel(Session::default());
        Self {
            classifier,
            session,
        }
    }

    /// Receive a notification on every state change.
    pub fn subscribe(&self) -> watch::Receiver<Session> {
        self.session.subscribe()
    }

    /// Snapshot of the current session.
    pub fn session(&self) -> Session {
        self.session.borrow().clone()
    }

    pub fn state(&self) -> UiState {
        self.session.borrow().state().clone()
    }

    pub fn can_submit(&self) -> bool {
        self.session.borrow().can_submit()
    }

    /// Record an edit. Any shown result or error is cleared so stale output
    /// never sits next to new input.
    pub fn input_changed(&self, text: impl Into<String>) {
        let _ = self.dispatch(Event::InputChanged(text.into()));
    }

    pub fn clear_error(&self) {
        let _ = self.dispatch(Event::ClearError);
    }

    pub fn clear_result(&self) {
        let _ = self.dispatch(Event::ClearResult);
    }

    /// Classify `text`.
    ///
    /// Blank text fails with [`VerdictError::EmptyInput`] and a submit while
    /// another request is in flight fails with [`VerdictError::Busy`]; in both cases
    /// nothing is sent and the session is unchanged.
    ///
    /// Otherwise the session moves to [`UiState::Loading`] and this resolves
    /// once the request settles. Service and transport failures are not
    /// returned as errors; they become [`UiState::Failure`].
    pub async fn submit(&self, text: &str) -> Result<Submission> {
        let request = ClassificationRequest::text(text)?;

        let Transition::Started { generation } = self.dispatch(Event::Submit)? else {
            return Err(VerdictError::Busy);
        };
        debug!(
            generation,
            classifier = self.classifier.name(),
            "classification submitted"
        );
        let pending = InFlight {
            orchestrator: self,
            generation,
        };

        let outcome = match self.classifier.classify(&request).await {
            Ok(response) => Outcome::Success(normalize(&response)),
            Err(e) => Outcome::Failure(e.to_string()),
        };

        pending.settle(outcome)
    }

    fn dispatch(&self, event: Event) -> Result<Transition> {
        let mut applied = Ok(Transition::Unchanged);
        self.session.send_if_modified(|session| {
            applied = session.apply(event);
            matches!(
                applied,
                Ok(Transition::Started { .. } | Transition::Changed)
            )
        });
        applied
    }
}

/// A started request. Dropped without [`InFlight::settle`] (the `submit`
/// future was cancelled) it abandons its generation so the form is not left
/// loading.
struct InFlight<'a> {
    orchestrator: &'a Orchestrator,
    generation: u64,
}

impl InFlight<'_> {
    fn settle(self, outcome: Outcome) -> Result<Submission> {
        let orchestrator = self.orchestrator;
        let generation = self.generation;
        std::mem::forget(self);

        match orchestrator.dispatch(Event::Settled {
            generation,
            outcome,
        })? {
            Transition::Stale => {
                debug!(generation, "discarding response for abandoned request");
                metrics::counter!(telemetry::STALE_RESPONSES_TOTAL).increment(1);
                Ok(Submission::Discarded)
            }
            _ => Ok(Submission::Settled(orchestrator.state())),
        }
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        debug!(generation = self.generation, "request cancelled before it settled");
        let _ = self.orchestrator.dispatch(Event::Abandoned {
            generation: self.generation,
        });
    }
}
