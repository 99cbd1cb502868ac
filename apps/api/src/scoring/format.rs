//! Structural completeness and date-format consistency.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::models::feedback::IssuesSection;
use crate::models::resume::ResumeContent;

const EMAIL_PENALTY: i32 = 15;
const PHONE_PENALTY: i32 = 10;
const EXPERIENCE_PENALTY: i32 = 30;
const EDUCATION_PENALTY: i32 = 20;
const SKILLS_PENALTY: i32 = 15;
const DATE_FORMAT_PENALTY: i32 = 10;

static MONTH_SLASH_YEAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{1,2}/[0-9]{4}$").expect("static regex"));
static WORD_SPACE_YEAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_]+ [0-9]{4}$").expect("static regex"));
static BARE_YEAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{4}$").expect("static regex"));

/// Shape bucket a date string falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateShape {
    MonthSlashYear,
    MonthNameYear,
    Year,
    Other,
}

impl DateShape {
    pub fn classify(date: &str) -> Self {
        if MONTH_SLASH_YEAR.is_match(date) {
            DateShape::MonthSlashYear
        } else if WORD_SPACE_YEAR.is_match(date) {
            DateShape::MonthNameYear
        } else if BARE_YEAR.is_match(date) {
            DateShape::Year
        } else {
            DateShape::Other
        }
    }
}

pub fn analyze_format(content: &ResumeContent) -> IssuesSection {
    let mut issues = Vec::new();
    let mut suggestions = Vec::new();
    let mut score = 100_i32;

    let mut penalize = |issue: &str, suggestion: &str, penalty: i32| {
        issues.push(issue.to_string());
        suggestions.push(suggestion.to_string());
        score -= penalty;
    };

    if content.personal_info.email.is_empty() {
        penalize(
            "Missing email address",
            "Add a professional email address",
            EMAIL_PENALTY,
        );
    }

    if content.personal_info.phone.is_empty() {
        penalize(
            "Missing phone number",
            "Include a phone number for contact",
            PHONE_PENALTY,
        );
    }

    if content.experience.is_empty() {
        penalize(
            "No work experience listed",
            "Add your work experience",
            EXPERIENCE_PENALTY,
        );
    }

    if content.education.is_empty() {
        penalize(
            "No education listed",
            "Include your educational background",
            EDUCATION_PENALTY,
        );
    }

    if content.skills.is_empty() {
        penalize(
            "No skills section",
            "Add a skills section with relevant abilities",
            SKILLS_PENALTY,
        );
    }

    if !is_consistent_date_format(&experience_dates(content)) {
        penalize(
            "Inconsistent date formatting",
            "Use consistent date format (e.g., MM/YYYY) throughout",
            DATE_FORMAT_PENALTY,
        );
    }

    IssuesSection {
        score: score.max(0) as u32,
        issues,
        suggestions,
    }
}

/// Start and end dates of every experience entry. An ongoing role contributes
/// only its start date; its end reads as "Present", which is not a date.
fn experience_dates(content: &ResumeContent) -> Vec<&str> {
    content
        .experience
        .iter()
        .flat_map(|exp| {
            let end = (!exp.current).then_some(exp.end_date.as_str());
            std::iter::once(exp.start_date.as_str()).chain(end)
        })
        .collect()
}

/// True when every non-empty date has the same shape. Fewer than two dates
/// are trivially consistent.
pub fn is_consistent_date_format(dates: &[&str]) -> bool {
    let shapes: HashSet<DateShape> = dates
        .iter()
        .filter(|d| !d.is_empty())
        .map(|d| DateShape::classify(d))
        .collect();

    let valid = dates.iter().filter(|d| !d.is_empty()).count();
    valid < 2 || shapes.len() == 1
}
