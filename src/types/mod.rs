//! Public types for the Verdict API.

mod request;
mod response;
mod result;

pub use request::{ClassificationRequest, ContentKind};
pub use response::{ClassificationResponse, UNKNOWN_LABEL};
pub(crate) use response::label_text;
pub use result::{CanonicalResult, LabelClass, Verdict};
