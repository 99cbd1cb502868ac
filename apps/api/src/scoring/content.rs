//! Content quality: summary, description depth, metrics and action verbs.

use std::sync::LazyLock;

use regex::Regex;

use crate::models::feedback::IssuesSection;
use crate::models::resume::ResumeContent;
use crate::scoring::extract::{extract_resume_text, text_len};

const MIN_SUMMARY_LEN: usize = 50;
const MIN_DESCRIPTION_LEN: usize = 100;
const MIN_ACTION_VERBS: usize = 3;

const SUMMARY_PENALTY: i32 = 20;
const DESCRIPTION_PENALTY: i32 = 15;
const METRICS_PENALTY: i32 = 15;
const ACTION_VERB_PENALTY: i32 = 10;

pub const ACTION_VERBS: &[&str] = &[
    "achieved",
    "improved",
    "increased",
    "decreased",
    "managed",
    "led",
    "developed",
    "implemented",
    "created",
    "designed",
    "optimized",
    "streamlined",
    "delivered",
];

// Case-sensitive: "5K" or "5 years" do not count.
static QUANTIFIED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[0-9]+(%|k|\+|million|thousand|hours|years|projects|teams)")
        .expect("static regex")
});

pub fn analyze_content(content: &ResumeContent) -> IssuesSection {
    let mut issues = Vec::new();
    let mut suggestions = Vec::new();
    let mut score = 100_i32;

    if text_len(&content.summary) < MIN_SUMMARY_LEN {
        issues.push("Professional summary is too short or missing".to_string());
        suggestions.push("Add a compelling professional summary (2-3 sentences)".to_string());
        score -= SUMMARY_PENALTY;
    }

    let short_descriptions = content
        .experience
        .iter()
        .filter(|exp| text_len(&exp.description) < MIN_DESCRIPTION_LEN)
        .count();

    if short_descriptions > 0 {
        issues.push(format!(
            "{short_descriptions} experience entries lack detailed descriptions"
        ));
        suggestions.push(
            "Expand job descriptions with specific achievements and responsibilities".to_string(),
        );
        score -= DESCRIPTION_PENALTY;
    }

    let resume_text = extract_resume_text(content);

    if !has_quantified_achievement(&resume_text) {
        issues.push("No quantified achievements found".to_string());
        suggestions.push(
            "Include specific numbers, percentages, or metrics to demonstrate impact".to_string(),
        );
        score -= METRICS_PENALTY;
    }

    if count_action_verbs(&resume_text) < MIN_ACTION_VERBS {
        issues.push("Limited use of strong action verbs".to_string());
        suggestions.push(
            "Start bullet points with strong action verbs like 'achieved', 'improved', 'led'"
                .to_string(),
        );
        score -= ACTION_VERB_PENALTY;
    }

    IssuesSection {
        score: score.max(0) as u32,
        issues,
        suggestions,
    }
}

pub fn has_quantified_achievement(text: &str) -> bool {
    QUANTIFIED.is_match(text)
}

/// Number of distinct action verbs appearing anywhere (substring, any case).
pub fn count_action_verbs(text: &str) -> usize {
    let lower = text.to_lowercase();
    ACTION_VERBS.iter().filter(|v| lower.contains(*v)).count()
}
