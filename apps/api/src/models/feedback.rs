use serde::{Deserialize, Serialize};

/// Full scorer output. Built fresh on every call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AtsFeedback {
    pub overall: OverallScore,
    pub sections: FeedbackSections,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverallScore {
    pub score: u32, // 0 – 100
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackSections {
    pub keywords: KeywordsSection,
    pub format: IssuesSection,
    pub content: IssuesSection,
    pub length: LengthSection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordsSection {
    pub score: u32,
    pub found: Vec<String>,
    pub missing: Vec<String>, // at most 10
    pub suggestions: Vec<String>,
}

/// Shared shape of the format and content sections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IssuesSection {
    pub score: u32,
    pub issues: Vec<String>,
    pub suggestions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LengthSection {
    pub score: u32,
    pub word_count: usize,
    pub ideal: String,
    pub suggestions: Vec<String>,
}

impl AtsFeedback {
    /// Every section's suggestions, in section order.
    pub fn all_suggestions(&self) -> Vec<String> {
        let s = &self.sections;
        s.keywords
            .suggestions
            .iter()
            .chain(&s.format.suggestions)
            .chain(&s.content.suggestions)
            .chain(&s.length.suggestions)
            .cloned()
            .collect()
    }
}
