use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::analysis::AtsAnalysis;
use crate::scoring::handlers::AnalyzeRequest;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct AnalysisHistoryResponse {
    pub resume_id: Uuid,
    pub attempts_used: u32,
    pub attempts_remaining: u32,
    pub latest_score: Option<u32>,
    pub analyses: Vec<AtsAnalysis>,
}

/// POST /api/v1/resumes/:id/ats-analyses
///
/// Scores the résumé and records the result. Rejected once the résumé has
/// used all of its attempts.
pub async fn handle_record_analysis(
    State(state): State<AppState>,
    Path(resume_id): Path<Uuid>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<AtsAnalysis>), AppError> {
    let Json(request) = payload?;
    let feedback = state
        .scorer
        .analyze(&request.content, request.job_description.as_deref());

    let analysis = state.ledger.record(resume_id, feedback).await?;
    info!(%resume_id, score = analysis.score, "Recorded ATS analysis");

    Ok((StatusCode::CREATED, Json(analysis)))
}

/// GET /api/v1/resumes/:id/ats-analyses
pub async fn handle_analysis_history(
    State(state): State<AppState>,
    Path(resume_id): Path<Uuid>,
) -> Result<Json<AnalysisHistoryResponse>, AppError> {
    let ledger = &state.ledger;
    let snapshot = ledger.snapshot(resume_id).await;

    Ok(Json(AnalysisHistoryResponse {
        resume_id,
        attempts_used: snapshot.attempts_used,
        attempts_remaining: ledger.max_attempts().saturating_sub(snapshot.attempts_used),
        latest_score: snapshot.latest_score,
        analyses: snapshot.analyses,
    }))
}
