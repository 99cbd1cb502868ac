//! In-memory record of scoring runs per résumé, with the attempt quota.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::analysis::AtsAnalysis;
use crate::models::feedback::AtsFeedback;

/// Shared, cloneable handle. Lives for the process lifetime.
#[derive(Clone)]
pub struct AnalysisLedger {
    inner: Arc<RwLock<HashMap<Uuid, Vec<AtsAnalysis>>>>,
    max_attempts: u32,
}

impl AnalysisLedger {
    pub fn new(max_attempts: u32) -> Self {
        Self {
            inner: Arc::new(RwLock::new(HashMap::new())),
            max_attempts,
        }
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Appends a new analysis unless the résumé has used up its attempts.
    /// Quota check and append happen under one write lock; a rejected call
    /// leaves the map untouched.
    pub async fn record(
        &self,
        resume_id: Uuid,
        feedback: AtsFeedback,
    ) -> Result<AtsAnalysis, AppError> {
        let mut guard = self.inner.write().await;

        let used = guard.get(&resume_id).map_or(0, Vec::len) as u32;
        if used >= self.max_attempts {
            warn!(%resume_id, max = self.max_attempts, "ATS attempt quota exhausted");
            return Err(AppError::QuotaExceeded(
                "Maximum ATS analysis attempts reached".to_string(),
            ));
        }

        let analysis = AtsAnalysis::new(resume_id, feedback);
        let history = guard.entry(resume_id).or_default();
        history.push(analysis.clone());
        debug!(%resume_id, attempts = history.len(), score = analysis.score, "Recorded analysis");

        Ok(analysis)
    }

    /// Attempts used, latest score and full history (newest first), all read
    /// under a single guard so they agree with each other.
    pub async fn snapshot(&self, resume_id: Uuid) -> LedgerSnapshot {
        let guard = self.inner.read().await;
        let history = guard.get(&resume_id).map(Vec::as_slice).unwrap_or_default();

        LedgerSnapshot {
            attempts_used: history.len() as u32,
            latest_score: history.last().map(|a| a.score),
            analyses: history.iter().rev().cloned().collect(),
        }
    }
}

/// Consistent view of one résumé's analyses.
#[derive(Debug, Clone)]
pub struct LedgerSnapshot {
    pub attempts_used: u32,
    /// Score of the most recent analysis, kept as the résumé's current score.
    pub latest_score: Option<u32>,
    pub analyses: Vec<AtsAnalysis>,
}
