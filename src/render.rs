//! Plain-text panels for terminal front ends.

use crate::orchestrator::UiState;
use crate::types::CanonicalResult;

pub const LOADING_TEXT: &str = "Analyzing...";

/// The result panel: the label line, then the confidence line if the
/// service sent one.
pub fn result_panel(result: &CanonicalResult) -> String {
    match result.confidence_percent() {
        Some(percent) => format!("{}\nConfidence: {percent}%", result.display_label),
        None => result.display_label.clone(),
    }
}

pub fn error_panel(message: &str) -> String {
    format!("⚠️  {message}")
}

/// Text for the current state; empty when idle.
pub fn render_state(state: &UiState) -> String {
    match state {
        UiState::Idle => String::new(),
        UiState::Loading => LOADING_TEXT.to_string(),
        UiState::Success(result) => result_panel(result),
        UiState::Failure(message) => error_panel(message),
    }
}
