//! Error envelope for responses not produced by a [`ServiceError`]
//!
//! Actix itself answers some requests with a bare error status (405 from a
//! route guard, CORS rejections, extractor panics turned into 500). These are
//! rewritten into the standard envelope. Responses that already carry an
//! error id pass through untouched.

use crate::utils::error::{ERROR_ID_HEADER, ErrorResponse, ServiceError};
use actix_web::HttpResponse;
use actix_web::dev::ServiceResponse;
use actix_web::http::StatusCode;
use actix_web::http::header::{HeaderName, HeaderValue};
use actix_web::middleware::{ErrorHandlerResponse, ErrorHandlers};
use tracing::warn;

/// Middleware rendering every bare error status as an envelope
pub fn error_envelope<B: 'static>() -> ErrorHandlers<B> {
    ErrorHandlers::new().default_handler(render_envelope)
}

/// Classified error standing in for a bare status
pub fn classify_status(status: StatusCode, path: &str) -> ServiceError {
    let reason = status.canonical_reason().unwrap_or("Unknown error");
    let err = match status {
        StatusCode::NOT_FOUND => return ServiceError::resource_not_found("route", path),
        s if s.is_server_error() => ServiceError::service(reason),
        _ => ServiceError::validation(reason),
    };
    err.with_detail("status", status.as_u16())
}

fn render_envelope<B>(res: ServiceResponse<B>) -> actix_web::Result<ErrorHandlerResponse<B>> {
    if res.headers().contains_key(ERROR_ID_HEADER) {
        return Ok(ErrorHandlerResponse::Response(res.map_into_left_body()));
    }

    let status = res.status();
    let (req, _) = res.into_parts();
    let err = classify_status(status, req.path());

    let mut body = ErrorResponse::from_service_error(&err);
    body.error.code = status.as_u16();

    warn!(
        error_id = body.error.id,
        status = status.as_u16(),
        kind = %err.kind(),
        method = %req.method(),
        path = %req.path(),
        "Bare {} response rendered as {}",
        status.as_u16(),
        err.kind()
    );

    let response = HttpResponse::build(status)
        .insert_header((
            HeaderName::from_static(ERROR_ID_HEADER),
            HeaderValue::from(body.error.id),
        ))
        .json(body);

    Ok(ErrorHandlerResponse::Response(
        ServiceResponse::new(req, response).map_into_right_body(),
    ))
}
