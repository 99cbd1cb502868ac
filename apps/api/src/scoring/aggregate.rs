/// Fixed sub-score weights for the overall score.
#[derive(Debug, Clone)]
pub struct SectionWeights {
    pub keywords: f64,
    pub format: f64,
    pub content: f64,
    pub length: f64,
}

impl Default for SectionWeights {
    fn default() -> Self {
        Self {
            keywords: 0.3,
            format: 0.25,
            content: 0.25,
            length: 0.2,
        }
    }
}

/// Rounded weighted mean of the four sub-scores, clamped to 0–100.
pub fn compute_overall_score(
    keywords: u32,
    format: u32,
    content: u32,
    length: u32,
    weights: &SectionWeights,
) -> u32 {
    let weighted = keywords as f64 * weights.keywords
        + format as f64 * weights.format
        + content as f64 * weights.content
        + length as f64 * weights.length;
    weighted.round().clamp(0.0, 100.0) as u32
}

pub fn overall_message(score: u32) -> &'static str {
    match score {
        s if s >= 90 => "Excellent! Your resume is well-optimized for ATS systems.",
        s if s >= 80 => "Great job! Your resume performs well with minor areas for improvement.",
        s if s >= 70 => "Good foundation with several opportunities for optimization.",
        s if s >= 60 => "Your resume needs some improvements to pass ATS filters effectively.",
        _ => "Significant improvements needed to optimize for ATS systems.",
    }
}
