//! HTTP route modules

pub mod answer;

use crate::utils::error::ServiceError;
use actix_web::web;
use tracing::debug;

/// Configure the versioned API routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/v1").route("/generate_answer", web::post().to(answer::generate_answer)),
    );
}

/// JSON extractor configuration
///
/// Undecodable bodies are reported through the standard error envelope as a
/// validation error.
pub fn json_config(limit: usize) -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(limit)
        .error_handler(|err, req| {
            debug!(path = %req.path(), error = %err, "Rejected request body");
            ServiceError::from(&err).into()
        })
}
