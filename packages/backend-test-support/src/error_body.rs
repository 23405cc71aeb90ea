//! Error body test helpers
//!
//! Assertions over the JSON error body returned by the backend, without
//! depending on backend types.

use actix_web::http::StatusCode;
use serde::Deserialize;

/// Local mirror of the backend's error body.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBodyLike {
    pub status_code: u16,
    pub error: String,
    pub code: String,
    pub message: String,
}

/// Assert that response parts conform to the error contract
///
/// Validates:
/// - HTTP status matches expected, and equals `statusCode` in the body
/// - `code` matches expected
/// - `message` equals the expected message exactly, when given
pub fn assert_error_body_from_parts(
    status: StatusCode,
    body_bytes: &[u8],
    expected_code: &str,
    expected_status: StatusCode,
    expected_message: Option<&str>,
) -> ErrorBodyLike {
    assert_eq!(status, expected_status);

    let body: ErrorBodyLike = serde_json::from_slice(body_bytes)
        .unwrap_or_else(|e| panic!("Response body should be an error body ({e}): {body_bytes:?}"));

    assert_eq!(body.status_code, expected_status.as_u16());
    assert_eq!(body.code, expected_code);

    if let Some(expected) = expected_message {
        assert_eq!(body.message, expected);
    }

    body
}

/// Assert that a ServiceResponse conforms to the error contract
pub async fn assert_error_body_from_service_response(
    resp: actix_web::dev::ServiceResponse<actix_web::body::BoxBody>,
    expected_code: &str,
    expected_status: StatusCode,
    expected_message: Option<&str>,
) -> ErrorBodyLike {
    let status = resp.status();
    let body = actix_web::test::read_body(resp).await;

    assert_error_body_from_parts(
        status,
        &body,
        expected_code,
        expected_status,
        expected_message,
    )
}
