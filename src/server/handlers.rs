//! HTTP route handlers shared by every scope

use crate::core::Mode;
use crate::server::state::AppState;
use crate::utils::error::ServiceError;
use actix_web::{HttpRequest, HttpResponse, web};
use serde_json::json;

/// Health check endpoint handler
///
/// Reports the provider and the deployment serving each mode.
pub async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    let router = state.gateway.router();
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": crate::VERSION,
        "git_hash": crate::build_info().git_hash,
        "llm": {
            "provider": router.provider(),
            "models": {
                "chat": router.model_for(Mode::Chat),
                "reasoning": router.model_for(Mode::Reasoning)
            }
        }
    }))
}

/// Fallback for unmatched routes
pub async fn not_found(req: HttpRequest) -> Result<HttpResponse, ServiceError> {
    Err(ServiceError::resource_not_found("route", req.path()))
}
