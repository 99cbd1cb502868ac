//! Flattens a structured résumé into the single string every analyzer searches.

use crate::models::resume::ResumeContent;

/// Joins, in document order: name, summary, experience (position, company,
/// description, achievements), education (degree, school), skills (category,
/// items) and projects (name, description, technologies).
///
/// Empty fields are dropped before joining, so no empty tokens or doubled
/// separators ever appear.
pub fn extract_resume_text(content: &ResumeContent) -> String {
    let mut parts: Vec<&str> = vec![
        content.personal_info.first_name.as_str(),
        content.personal_info.last_name.as_str(),
        content.summary.as_str(),
    ];

    for exp in &content.experience {
        parts.extend([&exp.position, &exp.company, &exp.description].map(String::as_str));
        parts.extend(exp.achievements.iter().map(String::as_str));
    }

    for edu in &content.education {
        parts.extend([edu.degree.as_str(), edu.school.as_str()]);
    }

    for group in &content.skills {
        parts.push(&group.category);
        parts.extend(group.items.iter().map(String::as_str));
    }

    for project in content.projects.iter().flatten() {
        parts.extend([project.name.as_str(), project.description.as_str()]);
        parts.extend(project.technologies.iter().map(String::as_str));
    }

    parts.retain(|p| !p.is_empty());
    parts.join(" ")
}

/// Length as the browser editor measures it (UTF-16 code units).
pub fn text_len(s: &str) -> usize {
    s.encode_utf16().count()
}
