//! Keyword coverage: how many target keywords appear in the résumé text.
//!
//! Target set is either the 20 most frequent words of a job description, or
//! the built-in soft-skill + technical vocabulary when none is given.
//! Matching is plain substring containment ("java" matches "javascript").

use std::collections::HashMap;

use crate::models::feedback::KeywordsSection;
use crate::models::resume::ResumeContent;
use crate::scoring::extract::extract_resume_text;

pub const COMMON_KEYWORDS: &[&str] = &[
    "leadership",
    "management",
    "communication",
    "teamwork",
    "problem-solving",
    "analytical",
    "strategic",
    "innovative",
    "results-driven",
    "experienced",
    "proficient",
    "skilled",
    "expert",
    "advanced",
    "collaborative",
];

pub const TECH_KEYWORDS: &[&str] = &[
    "javascript",
    "python",
    "java",
    "react",
    "node.js",
    "sql",
    "aws",
    "docker",
    "kubernetes",
    "git",
    "agile",
    "scrum",
    "api",
    "database",
    "cloud",
    "devops",
];

const JD_KEYWORD_LIMIT: usize = 20;
const MISSING_LIMIT: usize = 10;
const SUGGESTED_LIMIT: usize = 5;

pub fn analyze_keywords(content: &ResumeContent, job_description: Option<&str>) -> KeywordsSection {
    let resume_text = extract_resume_text(content).to_lowercase();

    let targets: Vec<String> = match job_description.filter(|jd| !jd.is_empty()) {
        Some(jd) => extract_keywords_from_job(&jd.to_lowercase()),
        None => COMMON_KEYWORDS
            .iter()
            .chain(TECH_KEYWORDS)
            .map(|k| k.to_string())
            .collect(),
    };

    let (found, missing): (Vec<String>, Vec<String>) = targets
        .iter()
        .cloned()
        .partition(|kw| resume_text.contains(&kw.to_lowercase()));

    let score = if targets.is_empty() {
        0
    } else {
        let ratio = found.len() as f64 / targets.len() as f64;
        ((ratio * 100.0).round() as u32).min(100)
    };

    let missing: Vec<String> = missing.into_iter().take(MISSING_LIMIT).collect();
    let suggestions = keyword_suggestions(&missing, score);

    KeywordsSection {
        score,
        found,
        missing,
        suggestions,
    }
}

/// Top keywords of a (lower-cased) job description by frequency.
///
/// Candidates are whole runs of word characters (`[A-Za-z0-9_]`) made only of
/// ASCII letters, at least 3 long. Equal counts keep first-appearance order.
pub fn extract_keywords_from_job(job_text: &str) -> Vec<String> {
    let mut order: Vec<&str> = Vec::new();
    let mut frequency: HashMap<&str, u32> = HashMap::new();

    let words = job_text
        .split(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
        .filter(|w| w.len() >= 3 && w.chars().all(|c| c.is_ascii_alphabetic()));

    for word in words {
        let count = frequency.entry(word).or_insert_with(|| {
            order.push(word);
            0
        });
        *count += 1;
    }

    // sort_by is stable, so ties stay in first-appearance order
    order.sort_by(|a, b| frequency[b].cmp(&frequency[a]));
    order
        .into_iter()
        .take(JD_KEYWORD_LIMIT)
        .map(str::to_string)
        .collect()
}

fn keyword_suggestions(missing: &[String], score: u32) -> Vec<String> {
    let mut suggestions = Vec::new();

    if score < 50 {
        suggestions.push("Consider adding more industry-specific keywords".to_string());
        suggestions.push("Review the job description for important terms to include".to_string());
    }

    if !missing.is_empty() {
        let top: Vec<&str> = missing
            .iter()
            .take(SUGGESTED_LIMIT)
            .map(String::as_str)
            .collect();
        suggestions.push(format!("Try incorporating: {}", top.join(", ")));
    }

    suggestions
}
