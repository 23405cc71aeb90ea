use std::future::Future;
use std::ops::{Deref, DerefMut};
use std::pin::Pin;

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpMessage, HttpRequest};
use bytes::BytesMut;
use futures_util::StreamExt;
use serde::de::DeserializeOwned;
use serde_json::Error as JsonError;
use tracing::{debug, warn};

use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::middleware::request_trace::RequestId;

/// Validated JSON extractor that provides standardized error handling for JSON parse failures
///
/// Deserializes the request body and converts any parse failure into an
/// `AppError` with HTTP 400 and the `BAD_REQUEST` code, instead of actix's
/// plain-text JSON error.
#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

impl<T> ValidatedJson<T> {
    /// Extract the inner value from the ValidatedJson wrapper
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> Deref for ValidatedJson<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> DerefMut for ValidatedJson<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

/// Like `ValidatedJson`, but an empty (or whitespace-only) body yields `None`.
#[derive(Debug)]
pub struct OptionalJson<T>(pub Option<T>);

impl<T> OptionalJson<T> {
    pub fn into_inner(self) -> Option<T> {
        self.0
    }
}

type BodyFuture<T> = Pin<Box<dyn Future<Output = Result<T, AppError>>>>;

/// Collect the request body and parse it, `None` for an empty body.
fn read_json<T>(req: &HttpRequest, payload: &mut Payload) -> BodyFuture<Option<T>>
where
    T: DeserializeOwned + 'static,
{
    let mut payload = payload.take();

    // Extract request metadata before creating the async future to avoid borrow-across-await
    let request_id = req
        .extensions()
        .get::<RequestId>()
        .map(|id| id.0.clone())
        .unwrap_or_else(|| "unknown".to_string());
    let content_type = req
        .headers()
        .get("content-type")
        .and_then(|ct| ct.to_str().ok())
        .unwrap_or("")
        .to_string();

    Box::pin(async move {
        let mut body = BytesMut::new();
        while let Some(chunk) = payload.next().await {
            let chunk = chunk.map_err(|e| {
                warn!(
                    request_id = %request_id,
                    error = %e,
                    "Failed to read request body chunk"
                );
                AppError::bad_request(ErrorCode::BadRequest, "Failed to read request body")
            })?;
            body.extend_from_slice(&chunk);
        }

        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(None);
        }

        let parsed = serde_json::from_slice::<T>(&body).map_err(|e| {
            let detail = classify_json_error(&e);

            debug!(
                request_id = %request_id,
                error = %e,
                content_type = %content_type,
                body_size = body.len(),
                "JSON parsing failed"
            );

            AppError::bad_request(ErrorCode::BadRequest, detail)
        })?;

        Ok(Some(parsed))
    })
}

impl<T> FromRequest for ValidatedJson<T>
where
    T: DeserializeOwned + 'static,
{
    type Error = AppError;
    type Future = BodyFuture<Self>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let body = read_json::<T>(req, payload);
        Box::pin(async move {
            body.await?.map(ValidatedJson).ok_or_else(|| {
                AppError::bad_request(ErrorCode::BadRequest, "Request body is required")
            })
        })
    }
}

impl<T> FromRequest for OptionalJson<T>
where
    T: DeserializeOwned + 'static,
{
    type Error = AppError;
    type Future = BodyFuture<Self>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let body = read_json::<T>(req, payload);
        Box::pin(async move { body.await.map(OptionalJson) })
    }
}

/// Classify serde_json::Error and return a sanitized error message
fn classify_json_error(error: &JsonError) -> String {
    match error.classify() {
        serde_json::error::Category::Syntax => {
            let line = error.line();
            format!("Invalid JSON at line {line}")
        }
        serde_json::error::Category::Eof => "Invalid JSON: unexpected end of input".to_string(),
        serde_json::error::Category::Data => {
            "Invalid JSON: wrong types for one or more fields".to_string()
        }
        serde_json::error::Category::Io => "Invalid JSON: I/O error while reading body".to_string(),
    }
}
