//! Canonical classification result.

use serde::{Deserialize, Serialize};

/// Three-way classification outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "verdict", content = "label", rename_all = "lowercase")]
pub enum Verdict {
    Real,
    Fake,
    /// The service returned a label that is neither; kept lower-cased.
    Unknown(String),
}

/// Styling class for the result panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelClass {
    Real,
    Fake,
    #[serde(rename = "")]
    None,
}

impl LabelClass {
    pub fn as_str(self) -> &'static str {
        match self {
            LabelClass::Real => "real",
            LabelClass::Fake => "fake",
            LabelClass::None => "",
        }
    }
}

/// What the result panel shows.
///
/// `is_real` and `is_fake` are never both true.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanonicalResult {
    /// Lower-cased label the classification was derived from.
    pub label: String,
    pub is_real: bool,
    pub is_fake: bool,
    pub display_label: String,
    /// Fraction in `[0, 1]` as sent by the service; not range-checked.
    pub confidence: Option<f64>,
    pub label_class: LabelClass,
}

impl CanonicalResult {
    pub fn verdict(&self) -> Verdict {
        if self.is_real {
            Verdict::Real
        } else if self.is_fake {
            Verdict::Fake
        } else {
            Verdict::Unknown(self.label.clone())
        }
    }

    /// Confidence as a whole percentage, rounded half up.
    pub fn confidence_percent(&self) -> Option<i64> {
        self.confidence.map(|c| (c * 100.0 + 0.5).floor() as i64)
    }
}
