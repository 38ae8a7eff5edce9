//! Error handling for the gateway
//!
//! Two families of errors live here:
//!
//! - [`ServiceError`]: classified failures raised while serving a request. Each
//!   carries an [`ErrorKind`] with a fixed HTTP code and a flat details map, and
//!   renders itself as the uniform JSON error envelope.
//! - [`GatewayError`]: start-up and plumbing failures (configuration, IO, bind).

mod conversions;
mod helpers;
mod kind;
mod response;
mod types;

pub use kind::ErrorKind;
pub use response::{ERROR_ID_HEADER, ErrorDetail, ErrorResponse};
pub use types::{GatewayError, Result, ServiceError};
