//! HTTP response handling for errors

use super::types::ServiceError;
use actix_web::http::StatusCode;
use actix_web::http::header::{HeaderName, HeaderValue};
use actix_web::{HttpResponse, ResponseError};
use serde_json::{Map, Value};
use tracing::error;

/// Response header carrying the error id, read back by the request logger
pub const ERROR_ID_HEADER: &str = "x-error-id";

impl ResponseError for ServiceError {
    fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.http_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    fn error_response(&self) -> HttpResponse {
        let body = ErrorResponse::from_service_error(self);

        error!(
            error_id = body.error.id,
            error_code = body.error.code,
            error_type = %body.error.error_type,
            error_details = %serde_json::Value::Object(self.details.clone()),
            "Error ID: {} - {}: {}",
            body.error.id,
            body.error.error_type,
            self.message
        );

        HttpResponse::build(self.status_code())
            .insert_header((
                HeaderName::from_static(ERROR_ID_HEADER),
                HeaderValue::from(body.error.id),
            ))
            .json(body)
    }
}

/// Standard error response format
#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

/// Error detail structure
#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct ErrorDetail {
    /// Unix timestamp used to correlate the response with server logs
    pub id: i64,
    pub code: u16,
    #[serde(rename = "type")]
    pub error_type: String,
    pub message: String,
    pub details: Map<String, Value>,
}

impl ErrorResponse {
    /// Envelope for a classified error
    pub fn from_service_error(err: &ServiceError) -> Self {
        Self {
            error: ErrorDetail {
                id: chrono::Utc::now().timestamp(),
                code: err.http_code(),
                error_type: err.kind().type_name().to_string(),
                message: err.message().to_string(),
                details: err.details().clone(),
            },
        }
    }
}
