use std::future::{ready, Ready};
use std::time::Instant;

use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::StatusCode;
use actix_web::{Error as ActixError, HttpMessage};
use futures_util::future::LocalBoxFuture;
use tracing::{error, info, warn};

use super::request_trace::RequestId;

/// One `request_completed` event per request, levelled by response status.
/// Requests under `/api/v1/games/{id}` also carry the `game_id` they addressed.
///
/// Must be registered inside `RequestTrace` so the request id is already present.
pub struct StructuredLogger;

impl<S, B> Transform<S, ServiceRequest> for StructuredLogger
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = ActixError>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = ActixError;
    type InitError = ();
    type Transform = StructuredLoggerMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(StructuredLoggerMiddleware { service }))
    }
}

pub struct StructuredLoggerMiddleware<S> {
    service: S,
}

/// What gets logged once a request has been answered.
struct Completed {
    method: String,
    path: String,
    request_id: String,
    game_id: Option<String>,
    status: StatusCode,
    duration_us: u64,
}

impl Completed {
    fn emit(&self) {
        let status = self.status.as_u16();
        let game_id = self.game_id.as_deref();
        if self.status.is_server_error() {
            error!(http.method = %self.method, url.path = %self.path, http.status_code = status, duration_us = self.duration_us, request_id = %self.request_id, game_id, "request_completed");
        } else if self.status.is_client_error() {
            warn!(http.method = %self.method, url.path = %self.path, http.status_code = status, duration_us = self.duration_us, request_id = %self.request_id, game_id, "request_completed");
        } else {
            info!(http.method = %self.method, url.path = %self.path, http.status_code = status, duration_us = self.duration_us, request_id = %self.request_id, game_id, "request_completed");
        }
    }
}

// Path parameters are only resolved once routing has run, so read them off the response.
fn game_id_of<B>(res: &ServiceResponse<B>) -> Option<String> {
    res.request().match_info().get("id").map(str::to_string)
}

impl<S, B> Service<ServiceRequest> for StructuredLoggerMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = ActixError>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = ActixError;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let start = Instant::now();
        let method = req.method().to_string();
        let path = req.path().to_string();
        let request_id = req
            .extensions()
            .get::<RequestId>()
            .map(|id| id.0.clone())
            .unwrap_or_else(|| "unknown".to_string());

        let fut = self.service.call(req);

        Box::pin(async move {
            let result = fut.await;

            let (status, game_id) = match &result {
                Ok(res) => (res.status(), game_id_of(res)),
                Err(err) => (err.as_response_error().status_code(), None),
            };

            Completed {
                method,
                path,
                request_id,
                game_id,
                status,
                duration_us: u64::try_from(start.elapsed().as_micros()).unwrap_or(u64::MAX),
            }
            .emit();

            result
        })
    }
}
