//! HTTP middleware implementations

mod error_envelope;
mod request_logging;

pub use error_envelope::{classify_status, error_envelope};
pub use request_logging::{
    REQUEST_ID_HEADER, RequestLoggingMiddleware, RequestLoggingMiddlewareService,
};
