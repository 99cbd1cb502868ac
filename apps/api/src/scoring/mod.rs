//! ATS compatibility scorer: a deterministic, rule-based estimate of how an
//! applicant tracking system would rate a résumé.
//!
//! Four independent passes (keywords, format, content, length) over the same
//! document, combined with fixed weights. Every call builds a fresh
//! `AtsFeedback`; nothing is cached or shared between calls.
//!
//! `AppState` holds an `Arc<dyn ResumeScorer>`; `RuleBasedScorer` is the default.

pub mod aggregate;
pub mod content;
pub mod extract;
pub mod format;
pub mod handlers;
pub mod keywords;
pub mod length;

use crate::models::feedback::{AtsFeedback, FeedbackSections, OverallScore};
use crate::models::resume::ResumeContent;

use self::aggregate::{compute_overall_score, overall_message, SectionWeights};

/// Pluggable scorer backend. Implementations must be pure: identical input
/// yields identical output.
pub trait ResumeScorer: Send + Sync {
    fn analyze(&self, content: &ResumeContent, job_description: Option<&str>) -> AtsFeedback;

    /// Short backend label, surfaced in logs.
    fn backend(&self) -> &'static str;
}

/// Default scorer: the fixed heuristic rule set.
pub struct RuleBasedScorer;

impl ResumeScorer for RuleBasedScorer {
    fn analyze(&self, content: &ResumeContent, job_description: Option<&str>) -> AtsFeedback {
        analyze_resume(content, job_description)
    }

    fn backend(&self) -> &'static str {
        "rule_based"
    }
}

/// Scores a résumé, optionally against a job description.
///
/// Never fails: poor input simply scores low and comes back with issues and
/// suggestions explaining why.
pub fn analyze_resume(content: &ResumeContent, job_description: Option<&str>) -> AtsFeedback {
    let keywords = keywords::analyze_keywords(content, job_description);
    let format = format::analyze_format(content);
    let content_section = content::analyze_content(content);
    let length = length::analyze_length(content);

    let score = compute_overall_score(
        keywords.score,
        format.score,
        content_section.score,
        length.score,
        &SectionWeights::default(),
    );

    AtsFeedback {
        overall: OverallScore {
            score,
            message: overall_message(score).to_string(),
        },
        sections: FeedbackSections {
            keywords,
            format,
            content: content_section,
            length,
        },
    }
}
