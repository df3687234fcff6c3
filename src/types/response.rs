//! Inbound classification payload.
//!
//! The prediction service does not commit to a schema, so the payload is
//! decoded into an explicit set of shapes with a catch-all last variant.
//! Decoding never fails.

use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

/// Label used when the payload carries none.
pub const UNKNOWN_LABEL: &str = "Unknown";

/// A classification payload, decoded by shape.
///
/// Shapes are tried in declaration order and the first one that matches wins.
/// A field only "matches" when it holds a usable label: a non-empty string,
/// a non-zero number, or `true`.
#[derive(Debug, Clone, PartialEq)]
pub enum ClassificationResponse {
    /// A bare JSON string, e.g. `"REAL"`.
    Bare(String),
    /// `{"prediction": "real", "confidence": 0.98}`
    Prediction {
        prediction: String,
        confidence: Option<f64>,
    },
    /// `{"label": "FAKE", "confidence": 0.87}` or with `probability` instead.
    Labelled {
        label: String,
        confidence: Option<f64>,
    },
    /// Anything else. `result` holds a generic label when present.
    Other {
        result: Option<String>,
        confidence: Option<f64>,
    },
}

impl ClassificationResponse {
    /// Decode a JSON value into its shape.
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::String(label) => Self::Bare(label.clone()),
            Value::Object(map) => Self::from_object(map),
            _ => Self::Other {
                result: None,
                confidence: None,
            },
        }
    }

    fn from_object(map: &Map<String, Value>) -> Self {
        let confidence = map.get("confidence").and_then(confidence_value);

        if let Some(prediction) = map.get("prediction").and_then(label_text) {
            return Self::Prediction {
                prediction,
                confidence,
            };
        }

        if let Some(label) = map.get("label").and_then(label_text) {
            // a zero confidence defers to probability
            let probability = map.get("probability").and_then(confidence_value);
            return Self::Labelled {
                label,
                confidence: confidence.filter(|c| *c != 0.0).or(probability),
            };
        }

        Self::Other {
            result: map.get("result").and_then(label_text),
            confidence,
        }
    }

    /// The raw label, or [`UNKNOWN_LABEL`] when the payload has none.
    pub fn label(&self) -> &str {
        match self {
            Self::Bare(label) => label,
            Self::Prediction { prediction, .. } => prediction,
            Self::Labelled { label, .. } => label,
            Self::Other { result, .. } => result.as_deref().unwrap_or(UNKNOWN_LABEL),
        }
    }

    pub fn confidence(&self) -> Option<f64> {
        match self {
            Self::Bare(_) => None,
            Self::Prediction { confidence, .. }
            | Self::Labelled { confidence, .. }
            | Self::Other { confidence, .. } => *confidence,
        }
    }
}

impl From<Value> for ClassificationResponse {
    fn from(value: Value) -> Self {
        Self::from_value(&value)
    }
}

impl From<&str> for ClassificationResponse {
    fn from(label: &str) -> Self {
        Self::Bare(label.to_string())
    }
}

impl<'de> Deserialize<'de> for ClassificationResponse {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Value::deserialize(deserializer).map(|value| Self::from_value(&value))
    }
}

/// Render a scalar as label text. Empty strings, zero, `false`, `null` and
/// containers carry no label.
pub(crate) fn label_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => {
            let f = n.as_f64()?;
            if f == 0.0 {
                None
            } else if f.fract() == 0.0 && f.abs() < 1e15 {
                Some(format!("{}", f as i64))
            } else {
                Some(n.to_string())
            }
        }
        Value::Bool(true) => Some("true".to_string()),
        _ => None,
    }
}

/// Numbers pass through; numeric strings are parsed. Everything else,
/// including `null` and non-finite strings like `"NaN"`, counts as absent.
fn confidence_value(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok().filter(|c: &f64| c.is_finite()),
        _ => None,
    }
}
