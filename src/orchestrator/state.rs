//! Form state machine.
//!
//! [`Session`] holds the input text and exactly one [`UiState`]. All
//! changes go through [`Session::apply`].

use crate::types::CanonicalResult;
use crate::{Result, VerdictError};

/// What the form is showing.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum UiState {
    #[default]
    Idle,
    Loading,
    Success(CanonicalResult),
    Failure(String),
}

impl UiState {
    pub fn is_loading(&self) -> bool {
        matches!(self, UiState::Loading)
    }

    pub fn result(&self) -> Option<&CanonicalResult> {
        match self {
            UiState::Success(result) => Some(result),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            UiState::Failure(message) => Some(message),
            _ => None,
        }
    }
}

/// Terminal outcome of one request.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Success(CanonicalResult),
    Failure(String),
}

/// Inputs to [`Session::apply`].
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// The user edited the input. Clears shown output and abandons an
    /// in-flight request.
    InputChanged(String),
    /// A validated request is about to be sent.
    Submit,
    /// The request tagged `generation` finished.
    Settled { generation: u64, outcome: Outcome },
    /// The request tagged `generation` will never settle, e.g. its caller
    /// was cancelled.
    Abandoned { generation: u64 },
    ClearError,
    ClearResult,
}

/// Effect of applying an [`Event`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// A request was started; its response must carry this generation.
    Started { generation: u64 },
    Changed,
    Unchanged,
    /// A response for an abandoned request was dropped.
    Stale,
}

/// Input text, current state and the generation of the newest request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    input: String,
    state: UiState,
    generation: u64,
}

impl Session {
    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn state(&self) -> &UiState {
        &self.state
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether the submit control is enabled: non-blank input and nothing
    /// in flight.
    pub fn can_submit(&self) -> bool {
        !self.input.trim().is_empty() && !self.state.is_loading()
    }

    /// The reducer.
    ///
    /// `Submit` while loading is refused with [`VerdictError::Busy`] and
    /// leaves the session untouched.
    pub fn apply(&mut self, event: Event) -> Result<Transition> {
        match event {
            Event::InputChanged(text) => {
                let changed = text != self.input;
                self.input = text;
                match self.state {
                    UiState::Idle => {}
                    UiState::Loading => {
                        // fence off the pending response
                        self.generation += 1;
                        self.state = UiState::Idle;
                        return Ok(Transition::Changed);
                    }
                    UiState::Success(_) | UiState::Failure(_) => {
                        self.state = UiState::Idle;
                        return Ok(Transition::Changed);
                    }
                }
                Ok(if changed {
                    Transition::Changed
                } else {
                    Transition::Unchanged
                })
            }
            Event::Submit => {
                if self.state.is_loading() {
                    return Err(VerdictError::Busy);
                }
                self.generation += 1;
                self.state = UiState::Loading;
                Ok(Transition::Started {
                    generation: self.generation,
                })
            }
            Event::Settled {
                generation,
                outcome,
            } => {
                if !self.state.is_loading() || generation != self.generation {
                    return Ok(Transition::Stale);
                }
                self.state = match outcome {
                    Outcome::Success(result) => UiState::Success(result),
                    Outcome::Failure(message) => UiState::Failure(message),
                };
                Ok(Transition::Changed)
            }
            Event::Abandoned { generation } => {
                if !self.state.is_loading() || generation != self.generation {
                    return Ok(Transition::Unchanged);
                }
                self.state = UiState::Idle;
                Ok(Transition::Changed)
            }
            Event::ClearError => Ok(self.reset_if(|state| state.error().is_some())),
            Event::ClearResult => Ok(self.reset_if(|state| state.result().is_some())),
        }
    }

    fn reset_if(&mut self, pred: impl Fn(&UiState) -> bool) -> Transition {
        if pred(&self.state) {
            self.state = UiState::Idle;
            Transition::Changed
        } else {
            Transition::Unchanged
        }
    }
}
