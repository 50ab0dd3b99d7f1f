use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::FixtureError;

/// Literal content of the synthetic resume.
///
/// Layout lives in `builder`; this type only carries the words. Any field
/// omitted from a JSON fixture falls back to the default resume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResumeFixture {
    pub name: String,
    pub title: String,
    pub email: String,
    pub phone: String,
    pub skills: Vec<String>,
    pub education: Vec<String>,
    pub experience: Vec<ExperienceEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    /// e.g. "Senior Python Developer - TechCorp Inc"
    pub role: String,
    #[serde(default)]
    pub bullets: Vec<String>,
}

impl Default for ResumeFixture {
    fn default() -> Self {
        Self {
            name: "Jane Smith".to_string(),
            title: "Senior Python Developer".to_string(),
            email: "jane.smith@example.com".to_string(),
            phone: "+1-555-987-6543".to_string(),
            skills: ["Python", "FastAPI", "Docker", "PostgreSQL", "AWS", "React"]
                .into_iter()
                .map(String::from)
                .collect(),
            education: vec![
                "Master of Science in Computer Science".to_string(),
                "Stanford University (2019-2021)".to_string(),
            ],
            experience: vec![
                ExperienceEntry {
                    role: "Senior Python Developer - TechCorp Inc".to_string(),
                    bullets: vec![
                        "Led development of REST APIs serving 1M+ requests daily".to_string(),
                        "Implemented microservices architecture using FastAPI".to_string(),
                    ],
                },
                ExperienceEntry {
                    role: "Software Engineer - WebSolutions Ltd".to_string(),
                    bullets: vec![
                        "Developed web applications using Python and Django".to_string(),
                        "Collaborated with cross-functional teams".to_string(),
                    ],
                },
            ],
        }
    }
}

impl ResumeFixture {
    /// Loads a fixture from a JSON file.
    pub fn from_json_file(path: &Path) -> Result<Self, FixtureError> {
        let raw = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Skills as drawn on the page: a single comma-joined line.
    pub fn skills_line(&self) -> String {
        self.skills.join(", ")
    }

    /// Every string a text extractor should find in the rendered document.
    #[cfg(test)]
    pub fn expected_text(&self) -> Vec<String> {
        let mut lines = vec![
            self.name.clone(),
            self.title.clone(),
            self.email.clone(),
            self.phone.clone(),
            self.skills_line(),
        ];
        lines.extend(self.education.iter().cloned());
        for entry in &self.experience {
            lines.push(entry.role.clone());
            lines.extend(entry.bullets.iter().cloned());
        }
        lines
    }
}
