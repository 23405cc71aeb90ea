#![allow(dead_code)]

// tests/common/mod.rs
use actix_web::dev::ServiceResponse;
use actix_web::http::header::CONTENT_TYPE;
use uuid::Uuid;

// Logging is auto-installed for every test binary
#[ctor::ctor]
fn init_logging() {
    backend_test_support::logging::init();
}

/// Assert the response carries a UUID `x-request-id` header and return it.
pub fn assert_request_id<B>(resp: &ServiceResponse<B>) -> String {
    let id = resp
        .headers()
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .expect("x-request-id header should be present")
        .to_string();
    assert!(Uuid::parse_str(&id).is_ok(), "x-request-id should be a UUID: {id}");
    id
}

/// Assert the response declares a JSON body.
pub fn assert_json_content_type<B>(resp: &ServiceResponse<B>) {
    let content_type = resp
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert!(
        content_type.starts_with("application/json"),
        "expected JSON content type, got {content_type:?}"
    );
}
