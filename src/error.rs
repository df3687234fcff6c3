//! Verdict error types

/// Fixed message shown when the prediction service answers 404.
pub const NOT_FOUND_MESSAGE: &str =
    "backend unavailable: make sure the prediction service is running";

/// Fixed message shown when the prediction service answers 5xx.
pub const SERVER_ERROR_MESSAGE: &str = "server error, retry later";

/// Verdict error types.
///
/// Every variant is terminal for the request that produced it; the user
/// retries by submitting again.
#[derive(Debug, thiserror::Error)]
pub enum VerdictError {
    // Client-side validation
    #[error("Please enter some text to analyze.")]
    EmptyInput,

    #[error("a classification request is already in flight")]
    Busy,

    // Service responses
    #[error("{}", NOT_FOUND_MESSAGE)]
    NotFound,

    #[error("{}", SERVER_ERROR_MESSAGE)]
    Server { status: u16 },

    /// Non-2xx outside 404 and 5xx. `message` is taken from the body's
    /// `message` field when present.
    #[error("{}", request_message(.status, .message))]
    Request { status: u16, message: Option<String> },

    #[error("could not parse service response: {0}")]
    Parse(String),

    #[error("an error occurred while analyzing the article: {0}")]
    Network(String),

    // Data errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // Configuration errors
    #[error("configuration error: {0}")]
    Configuration(String),
}

fn request_message(status: &u16, message: &Option<String>) -> String {
    match message {
        Some(message) => message.clone(),
        None => format!("request failed with status {status}"),
    }
}

/// Coarse classification of [`VerdictError`], used for metric labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Validation,
    NotFound,
    Server,
    Request,
    Parse,
    Network,
    Configuration,
}

impl ErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::Validation => "validation",
            ErrorKind::NotFound => "not_found",
            ErrorKind::Server => "server",
            ErrorKind::Request => "request",
            ErrorKind::Parse => "parse",
            ErrorKind::Network => "network",
            ErrorKind::Configuration => "configuration",
        }
    }
}

impl VerdictError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            VerdictError::EmptyInput | VerdictError::Busy => ErrorKind::Validation,
            VerdictError::NotFound => ErrorKind::NotFound,
            VerdictError::Server { .. } => ErrorKind::Server,
            VerdictError::Request { .. } => ErrorKind::Request,
            VerdictError::Parse(_) | VerdictError::Json(_) => ErrorKind::Parse,
            VerdictError::Network(_) => ErrorKind::Network,
            VerdictError::Configuration(_) => ErrorKind::Configuration,
        }
    }

    /// HTTP status carried by the error, if the service responded at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            VerdictError::NotFound => Some(404),
            VerdictError::Server { status } | VerdictError::Request { status, .. } => {
                Some(*status)
            }
            _ => None,
        }
    }
}

/// Result type alias for Verdict operations
pub type Result<T> = std::result::Result<T, VerdictError>;
