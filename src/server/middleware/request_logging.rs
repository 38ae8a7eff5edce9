//! Request logging middleware
//!
//! One line per request with method, path, status and latency. Every request
//! gets an `x-request-id` (kept when the client sent one), echoed on the
//! response. Error responses are logged with the id the client received.

use crate::utils::error::ERROR_ID_HEADER;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready};
use actix_web::http::header::{HeaderName, HeaderValue};
use futures::future::{Ready, ready};
use std::future::Future;
use std::pin::Pin;
use std::time::Instant;
use tracing::{error, info, warn};
use uuid::Uuid;

/// Header carrying the per-request id
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Request logging middleware for Actix-web
pub struct RequestLoggingMiddleware;

impl<S, B> Transform<S, ServiceRequest> for RequestLoggingMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = actix_web::Error;
    type InitError = ();
    type Transform = RequestLoggingMiddlewareService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequestLoggingMiddlewareService { service }))
    }
}

/// Service implementation for request logging middleware
pub struct RequestLoggingMiddlewareService<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for RequestLoggingMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = actix_web::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>>>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let start_time = Instant::now();
        let method = req.method().to_string();
        let path = req.path().to_string();
        let request_id = req
            .headers()
            .get(REQUEST_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .filter(|v| !v.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| Uuid::new_v4().to_string());

        let fut = self.service.call(req);

        Box::pin(async move {
            let mut res = match fut.await {
                Ok(res) => res,
                Err(e) => {
                    error!(
                        request_id = %request_id,
                        method = %method,
                        path = %path,
                        elapsed_ms = start_time.elapsed().as_millis() as u64,
                        error = %e,
                        "Request failed"
                    );
                    return Err(e);
                }
            };

            if let Ok(value) = HeaderValue::from_str(&request_id) {
                res.headers_mut()
                    .insert(HeaderName::from_static(REQUEST_ID_HEADER), value);
            }

            let status_code = res.status().as_u16();
            let elapsed_ms = start_time.elapsed().as_millis() as u64;
            let error_id = res
                .headers()
                .get(ERROR_ID_HEADER)
                .and_then(|v| v.to_str().ok())
                .map(str::to_string);

            match error_id {
                Some(error_id) => warn!(
                    request_id = %request_id,
                    method = %method,
                    path = %path,
                    status = status_code,
                    elapsed_ms,
                    error_id = %error_id,
                    "{} {} -> {} in {}ms (error id {})",
                    method,
                    path,
                    status_code,
                    elapsed_ms,
                    error_id
                ),
                None => info!(
                    request_id = %request_id,
                    method = %method,
                    path = %path,
                    status = status_code,
                    elapsed_ms,
                    "{} {} -> {} in {}ms",
                    method,
                    path,
                    status_code,
                    elapsed_ms
                ),
            }

            Ok(res)
        })
    }
}
