use super::*;

#[test]
fn status_reports_http_codes() {
    assert_eq!(ApiError::Unauthorized.status(), Some(401));
    assert_eq!(ApiError::Status { status: 404, body: String::new() }.status(), Some(404));
    assert_eq!(ApiError::Network("offline".to_owned()).status(), None);
}

#[test]
fn server_message_reads_message_field() {
    let err = ApiError::Status { status: 400, body: r#"{"message":"Invalid request parameters"}"#.to_owned() };
    assert_eq!(err.server_message().as_deref(), Some("Invalid request parameters"));
    assert_eq!(err.user_message(), "Invalid request parameters");
}

#[test]
fn server_message_falls_back_to_error_field() {
    let err = ApiError::Status { status: 500, body: r#"{"error":"boom"}"#.to_owned() };
    assert_eq!(err.server_message().as_deref(), Some("boom"));
}

#[test]
fn user_message_uses_display_for_unstructured_body() {
    let err = ApiError::Status { status: 502, body: "<html>bad gateway</html>".to_owned() };
    assert_eq!(err.server_message(), None);
    assert_eq!(err.user_message(), "request failed with status 502");
}

#[test]
fn unauthorized_is_flagged() {
    assert!(ApiError::Unauthorized.is_unauthorized());
    assert!(!ApiError::Unavailable.is_unauthorized());
}
