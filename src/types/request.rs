//! Outbound classification request.

use serde::{Deserialize, Serialize};

use crate::{Result, VerdictError};

/// Kind of content submitted for classification.
///
/// The service only understands pasted text today.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum ContentKind {
    #[default]
    Text,
}

/// Body of `POST /predict`.
///
/// Serializes as `{"text": "...", "type": "text"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationRequest {
    text: String,
    #[serde(rename = "type")]
    kind: ContentKind,
}

impl ClassificationRequest {
    /// Build a text request. The text is trimmed; whitespace-only input is
    /// rejected with [`VerdictError::EmptyInput`].
    pub fn text(text: &str) -> Result<Self> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(VerdictError::EmptyInput);
        }
        Ok(Self {
            text: trimmed.to_string(),
            kind: ContentKind::Text,
        })
    }

    pub fn content(&self) -> &str {
        &self.text
    }

    pub fn kind(&self) -> ContentKind {
        self.kind
    }
}
