//! Transcript extraction endpoint

use crate::server::state::AppState;
use crate::utils::error::ServiceError;
use crate::utils::logging::preview;
use actix_web::web;
use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::{error, info};

/// First element of every successful result
pub const SUMMARY_LABEL: &str = "要約結果";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerRequest {
    /// Full conversation transcript
    pub query: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerData {
    pub extract_query: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerResponse {
    pub data: AnswerData,
}

impl AnswerResponse {
    /// Label followed by the extracted items in source order
    pub fn labelled(items: Vec<String>) -> Self {
        let mut extract_query = Vec::with_capacity(items.len() + 1);
        extract_query.push(SUMMARY_LABEL.to_string());
        extract_query.extend(items);
        Self {
            data: AnswerData { extract_query },
        }
    }
}

/// `POST /v1/generate_answer`
pub async fn generate_answer(
    state: web::Data<AppState>,
    request: web::Json<AnswerRequest>,
) -> Result<web::Json<AnswerResponse>, ServiceError> {
    let start_time = Instant::now();
    let AnswerRequest { query } = request.into_inner();

    if query.trim().is_empty() {
        return Err(
            ServiceError::validation("Transcript content must not be empty")
                .with_detail("field", "query"),
        );
    }

    info!("Processing transcript: {}", preview(&query, 50));

    let items = state.extractor.extract(&query).await.map_err(|e| {
        error!(error = %e, kind = %e.kind(), "Failed to extract key information");
        ServiceError::data_processing("Failed to extract key information")
            .with_detail("original_error", e.to_string())
    })?;

    info!(count = items.len(), "Extracted {} items", items.len());
    for (i, item) in items.iter().enumerate() {
        info!("Item {}: {}", i + 1, item);
    }

    let response = AnswerResponse::labelled(items);

    info!(
        elapsed_ms = start_time.elapsed().as_millis() as u64,
        "Request completed in {:.2}s",
        start_time.elapsed().as_secs_f64()
    );

    Ok(web::Json(response))
}
