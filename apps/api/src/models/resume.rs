use serde::{Deserialize, Serialize};

/// Structured résumé document as stored by the editor.
///
/// Field names are camelCase on the wire so stored documents round-trip unchanged.
/// Missing arrays deserialize as empty; the scorer treats "absent" and "empty" alike.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeContent {
    #[serde(default)]
    pub personal_info: PersonalInfo,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub experience: Vec<ExperienceEntry>,
    #[serde(default)]
    pub education: Vec<EducationEntry>,
    #[serde(default)]
    pub skills: Vec<SkillCategory>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub projects: Option<Vec<ProjectEntry>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub certifications: Option<Vec<CertificationEntry>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub languages: Option<Vec<LanguageEntry>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfo {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
}

/// A single work-history entry. `current = true` means the role is ongoing
/// and `end_date` reads as "Present" whatever its stored value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceEntry {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub position: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
    #[serde(default)]
    pub current: bool,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub achievements: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationEntry {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub degree: String,
    #[serde(default)]
    pub school: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub graduation_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gpa: Option<String>,
    #[serde(default)]
    pub achievements: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillCategory {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub items: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectEntry {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
}

// Not consumed by the scorer; carried so the document round-trips.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificationEntry {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub issuer: String,
    #[serde(default)]
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageEntry {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub language: String,
    #[serde(default)]
    pub proficiency: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_arrays_default_to_empty() {
        let content: ResumeContent = serde_json::from_value(json!({
            "personalInfo": { "firstName": "Ada", "lastName": "Lovelace" },
            "summary": ""
        }))
        .unwrap();

        assert!(content.experience.is_empty());
        assert!(content.education.is_empty());
        assert!(content.skills.is_empty());
        assert!(content.projects.is_none());
        assert_eq!(content.personal_info.first_name, "Ada");
        assert_eq!(content.personal_info.email, "");
    }

    #[test]
    fn test_certifications_and_languages_survive_round_trip() {
        let doc = json!({
            "personalInfo": {
                "firstName": "Grace",
                "lastName": "Hopper",
                "email": "grace@navy.mil",
                "phone": "555-0100",
                "location": "Arlington, VA",
                "github": "ghopper"
            },
            "summary": "Compiler pioneer.",
            "experience": [{
                "id": "e1",
                "position": "Rear Admiral",
                "company": "US Navy",
                "location": "Washington",
                "startDate": "01/1943",
                "endDate": "",
                "current": true,
                "description": "Led COBOL standardisation.",
                "achievements": ["Found the first bug"]
            }],
            "education": [],
            "skills": [],
            "certifications": [{
                "id": "c1",
                "name": "PhD Mathematics",
                "issuer": "Yale",
                "date": "1934"
            }],
            "languages": [{ "id": "l1", "language": "English", "proficiency": "Native" }]
        });

        let content: ResumeContent = serde_json::from_value(doc.clone()).unwrap();
        let back = serde_json::to_value(&content).unwrap();

        assert_eq!(back["certifications"], doc["certifications"]);
        assert_eq!(back["languages"], doc["languages"]);
        assert_eq!(back["experience"][0]["startDate"], "01/1943");
        assert_eq!(back["experience"][0]["current"], true);
        assert!(back.get("projects").is_none());
    }
}
