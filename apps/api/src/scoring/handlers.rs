//! Axum route handlers for the stateless scoring API.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::Deserialize;
use tracing::info;

use crate::errors::AppError;
use crate::models::feedback::AtsFeedback;
use crate::models::resume::ResumeContent;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub content: ResumeContent,
    #[serde(default)]
    pub job_description: Option<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/ats/analyze
///
/// Scores a résumé without recording anything. Does not count against the
/// per-résumé attempt quota.
pub async fn handle_analyze(
    State(state): State<AppState>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<Json<AtsFeedback>, AppError> {
    let Json(request) = payload?;
    let feedback = state
        .scorer
        .analyze(&request.content, request.job_description.as_deref());

    info!(
        backend = state.scorer.backend(),
        score = feedback.overall.score,
        with_jd = request.job_description.is_some(),
        "Analyzed resume"
    );

    Ok(Json(feedback))
}
