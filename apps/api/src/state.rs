use std::sync::Arc;

use crate::analyses::ledger::AnalysisLedger;
use crate::config::Config;
use crate::scoring::{ResumeScorer, RuleBasedScorer};

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable scorer. Default: RuleBasedScorer.
    pub scorer: Arc<dyn ResumeScorer>,
    /// Recorded analyses and attempt quota, keyed by résumé id.
    pub ledger: AnalysisLedger,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            scorer: Arc::new(RuleBasedScorer),
            ledger: AnalysisLedger::new(config.max_ats_attempts),
        }
    }
}
