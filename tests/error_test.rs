use verdict::error::{ErrorKind, NOT_FOUND_MESSAGE, SERVER_ERROR_MESSAGE};
use verdict::{Result, VerdictError};

#[test]
fn test_error_display() {
    assert_eq!(VerdictError::NotFound.to_string(), NOT_FOUND_MESSAGE);
    assert_eq!(
        VerdictError::Server { status: 502 }.to_string(),
        SERVER_ERROR_MESSAGE
    );
    assert!(
        VerdictError::EmptyInput
            .to_string()
            .contains("enter some text")
    );
}

#[test]
fn test_request_error_message() {
    let with_message = VerdictError::Request {
        status: 422,
        message: Some("bad text".into()),
    };
    assert_eq!(with_message.to_string(), "bad text");

    let without = VerdictError::Request {
        status: 418,
        message: None,
    };
    assert_eq!(without.to_string(), "request failed with status 418");
}

#[test]
fn test_result_alias() {
    fn returns_error() -> Result<()> {
        Err(VerdictError::EmptyInput)
    }
    assert!(returns_error().is_err());
}

#[test]
fn test_json_error_conversion() {
    let err: VerdictError = serde_json::from_str::<serde_json::Value>("{")
        .unwrap_err()
        .into();
    assert_eq!(err.kind(), ErrorKind::Parse);
}

// ============================================================================
// Error kinds
// ============================================================================

#[test]
fn error_kinds() {
    assert_eq!(VerdictError::EmptyInput.kind(), ErrorKind::Validation);
    assert_eq!(VerdictError::Busy.kind(), ErrorKind::Validation);
    assert_eq!(VerdictError::NotFound.kind(), ErrorKind::NotFound);
    assert_eq!(
        VerdictError::Server { status: 500 }.kind(),
        ErrorKind::Server
    );
    assert_eq!(
        VerdictError::Request {
            status: 400,
            message: None
        }
        .kind(),
        ErrorKind::Request
    );
    assert_eq!(VerdictError::Parse("x".into()).kind(), ErrorKind::Parse);
    assert_eq!(VerdictError::Network("x".into()).kind(), ErrorKind::Network);
    assert_eq!(
        VerdictError::Configuration("x".into()).kind(),
        ErrorKind::Configuration
    );
}

#[test]
fn status_only_for_service_responses() {
    assert_eq!(VerdictError::NotFound.status(), Some(404));
    assert_eq!(VerdictError::Server { status: 504 }.status(), Some(504));
    assert_eq!(VerdictError::Network("refused".into()).status(), None);
    assert_eq!(VerdictError::EmptyInput.status(), None);
}
