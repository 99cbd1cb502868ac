use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::feedback::{AtsFeedback, KeywordsSection};

/// One recorded scoring run against a résumé.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AtsAnalysis {
    pub id: Uuid,
    pub resume_id: Uuid,
    pub score: u32,
    pub feedback: AtsFeedback,
    pub keywords: KeywordsSection,
    pub suggestions: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl AtsAnalysis {
    pub fn new(resume_id: Uuid, feedback: AtsFeedback) -> Self {
        Self {
            id: Uuid::new_v4(),
            resume_id,
            score: feedback.overall.score,
            keywords: feedback.sections.keywords.clone(),
            suggestions: feedback.all_suggestions(),
            feedback,
            created_at: Utc::now(),
        }
    }
}
