//! Type conversions into ServiceError

use super::types::ServiceError;
use actix_web::error::JsonPayloadError;
use serde_json::json;

// Body deserialization failures are reported like any other validation error.
impl From<&JsonPayloadError> for ServiceError {
    fn from(err: &JsonPayloadError) -> Self {
        let error_type = match err {
            JsonPayloadError::ContentType => "content_type",
            JsonPayloadError::Overflow { .. } | JsonPayloadError::OverflowKnownLength { .. } => {
                "payload_too_large"
            }
            JsonPayloadError::Deserialize(_) => "deserialize",
            _ => "payload",
        };

        ServiceError::validation("Request validation failed").with_detail(
            "errors",
            json!([{ "loc": ["body"], "msg": err.to_string(), "type": error_type }]),
        )
    }
}
