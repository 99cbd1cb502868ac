use crate::models::feedback::LengthSection;
use crate::models::resume::ResumeContent;
use crate::scoring::extract::extract_resume_text;

pub fn analyze_length(content: &ResumeContent) -> LengthSection {
    let word_count = extract_resume_text(content).split_whitespace().count();
    length_band(word_count)
}

/// Maps a word count to its band. Checked in order <200, <400, >800, >600:
/// 400–600 words land on the default "Perfect length" and 601–800 on "Good length".
pub fn length_band(word_count: usize) -> LengthSection {
    let (score, ideal, suggestions): (u32, &str, Vec<&str>) = if word_count < 200 {
        (
            40,
            "Too short",
            vec![
                "Expand your resume with more detailed descriptions",
                "Add more relevant experience and achievements",
            ],
        )
    } else if word_count < 400 {
        (
            70,
            "Could be longer",
            vec!["Consider adding more details to strengthen your resume"],
        )
    } else if word_count > 800 {
        (
            75,
            "Consider shortening",
            vec!["Try to keep resume concise while maintaining key information"],
        )
    } else if word_count > 600 {
        (90, "Good length", vec![])
    } else {
        (100, "Perfect length", vec![])
    };

    LengthSection {
        score,
        word_count,
        ideal: ideal.to_string(),
        suggestions: suggestions.into_iter().map(String::from).collect(),
    }
}
