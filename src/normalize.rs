//! Map a classification payload to what the result panel shows.
//!
//! [`normalize`] is total: every payload, however malformed, produces a
//! displayable [`CanonicalResult`].

use serde_json::Value;

use crate::types::{CanonicalResult, ClassificationResponse, LabelClass};

pub const REAL_MARKER: &str = "✅";
pub const FAKE_MARKER: &str = "❌";
pub const NEUTRAL_MARKER: &str = "📊";

/// Normalize a decoded payload.
///
/// The label is lower-cased, then matched against the real markers
/// (`real`, `true`, or exactly `1`) before the fake markers (`fake`,
/// `false`, or exactly `0`). A label matching both is REAL. Anything else is
/// shown upper-cased behind the neutral marker.
pub fn normalize(response: &ClassificationResponse) -> CanonicalResult {
    let label = response.label().to_lowercase();

    let is_real = label.contains("real") || label.contains("true") || label == "1";
    let is_fake =
        !is_real && (label.contains("fake") || label.contains("false") || label == "0");

    let (display_label, label_class) = if is_real {
        (format!("{REAL_MARKER} REAL"), LabelClass::Real)
    } else if is_fake {
        (format!("{FAKE_MARKER} FAKE"), LabelClass::Fake)
    } else {
        (
            format!("{NEUTRAL_MARKER} {}", label.to_uppercase()),
            LabelClass::None,
        )
    };

    CanonicalResult {
        label,
        is_real,
        is_fake,
        display_label,
        confidence: response.confidence(),
        label_class,
    }
}

/// Normalize a raw JSON payload.
pub fn normalize_value(value: &Value) -> CanonicalResult {
    normalize(&ClassificationResponse::from_value(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn real_checked_before_fake() {
        let result = normalize(&"not fake, real".into());
        assert!(result.is_real);
        assert!(!result.is_fake);
        assert_eq!(result.label_class, LabelClass::Real);
    }

    #[test]
    fn boolean_words_classify() {
        assert!(normalize(&"True".into()).is_real);
        assert!(normalize(&"FALSE".into()).is_fake);
    }

    #[test]
    fn digit_markers_match_exactly() {
        assert!(normalize(&"1".into()).is_real);
        assert!(normalize(&"0".into()).is_fake);

        let result = normalize(&"10".into());
        assert!(!result.is_real && !result.is_fake);
        assert_eq!(result.display_label, "📊 10");
    }

    #[test]
    fn unknown_label_is_upper_cased() {
        let result = normalize(&"Satire".into());
        assert_eq!(result.display_label, "📊 SATIRE");
        assert_eq!(result.label, "satire");
        assert_eq!(result.label_class, LabelClass::None);
    }
}
