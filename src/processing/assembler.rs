//! Document assembly: runs every extractor over one text and merges the results

use crate::config::ExtractionConfig;
use crate::error::Result;
use crate::processing::achievements::extract_achievements;
use crate::processing::certifications::CertificationParser;
use crate::processing::document::Document;
use crate::processing::education::EducationParser;
use crate::processing::entities::EntityRecognizer;
use crate::processing::experience::ExperienceParser;
use crate::processing::locator::{FoldedText, SectionKind, SectionLocator};
use crate::processing::projects::ProjectParser;
use crate::processing::skills::SkillCategorizer;
use log::debug;
use std::time::Instant;

/// Structured-field extraction engine.
///
/// Holds only compiled patterns, so one instance can be shared across
/// threads and reused for any number of documents.
pub struct ResumeParser {
    entities: EntityRecognizer,
    locator: SectionLocator,
    skills: SkillCategorizer,
    education: EducationParser,
    experience: ExperienceParser,
    projects: ProjectParser,
    certifications: CertificationParser,
}

impl ResumeParser {
    pub fn new() -> Result<Self> {
        Self::with_config(&ExtractionConfig::default())
    }

    pub fn with_config(config: &ExtractionConfig) -> Result<Self> {
        Ok(Self {
            entities: EntityRecognizer::new(),
            locator: SectionLocator::new(config.windows)?,
            skills: SkillCategorizer::new()?,
            education: EducationParser::new(),
            experience: ExperienceParser::new(),
            projects: ProjectParser::new(),
            certifications: CertificationParser::new(),
        })
    }

    /// Extract a [`Document`] from `text`. Never fails: anything not found
    /// is left at its empty default.
    pub fn parse(&self, text: &str) -> Document {
        let start = Instant::now();
        let folded = FoldedText::new(text);
        let mut document = Document {
            personal_info: self.entities.recognize(text),
            ..Default::default()
        };

        if let Some(window) = self.locator.locate(&folded, SectionKind::Skills) {
            document.skills = self.skills.categorize(window.text);
        }
        if let Some(window) = self.locator.locate(&folded, SectionKind::Education) {
            document.education = self.education.parse(window.text);
        }
        if let Some(window) = self.locator.locate(&folded, SectionKind::Experience) {
            document.experience = self.experience.parse(window.text);
        }
        if let Some(window) = self.locator.locate(&folded, SectionKind::Projects) {
            document.projects = self.projects.parse(window.text);
        }
        if let Some(window) = self.locator.locate(&folded, SectionKind::Certifications) {
            document.certifications = self.certifications.parse(window.text);
        }
        if let Some(window) = self.locator.locate(&folded, SectionKind::Achievements) {
            document.achievements = extract_achievements(window.text);
        }

        debug!(
            "Extracted {} education, {} experience, {} project, {} certification records",
            document.education.len(),
            document.experience.len(),
            document.projects.len(),
            document.certifications.len()
        );
        debug!("Parsed {} chars in {:?}", text.chars().count(), start.elapsed());

        document
    }
}

impl Default for ResumeParser {
    fn default() -> Self {
        Self::new().expect("Failed to build default resume parser")
    }
}

/// Parse `text` with the default section windows.
pub fn parse_resume(text: &str) -> Document {
    ResumeParser::default().parse(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::entities::GITHUB_PLACEHOLDER;

    const SAMPLE: &str = "Jane Doe\n\
        jane.doe@example.com | +1 (415) 555-0134 | San Francisco, CA\n\
        linkedin.com/in/janedoe | GitHub\n\
        \n\
        Skills\n\
        Python, Rust, React, Docker, HTML, Figma\n\
        \n\
        Experience\n\
        Backend Engineer | Mar 2021 - Present\n\
        Acme Corp • Remote\n\
        ● Designed the event ingestion pipeline\n\
        ● Cut p99 latency by forty percent\n\
        \n\
        Education\n\
        Bachelor of Science in Computer Science\n\
        University of California\n\
        2020\n\
        GPA: 3.7\n\
        \n\
        Projects\n\
        Inventory Tracker [View Project]\n\
        Technologies: Python, React, Postgres\n\
        A tool for tracking warehouse stock across branches.\n\
        \n\
        Certifications\n\
        AWS Solutions Architect — Amazon 2022\n\
        \n\
        Awards\n\
        Winner of the campus coding challenge\n";

    #[test]
    fn test_full_document() {
        let document = parse_resume(SAMPLE);

        let info = &document.personal_info;
        assert_eq!(info.name, "Jane Doe");
        assert_eq!(info.email, "jane.doe@example.com");
        assert_eq!(info.location, "San Francisco, CA");
        assert_eq!(info.linkedin, "linkedin.com/in/janedoe");
        assert_eq!(info.github, GITHUB_PLACEHOLDER);
        assert!(info.phone.contains("555-0134"));

        assert_eq!(document.skills.get("Languages").unwrap(), ["Python", "Rust"]);
        assert_eq!(document.skills.get("Frameworks").unwrap(), ["React"]);

        assert_eq!(document.experience.len(), 1);
        assert_eq!(document.experience[0].position, "Backend Engineer");
        assert_eq!(document.experience[0].company, "Acme Corp");
        assert_eq!(document.experience[0].start_date, "Mar");

        assert_eq!(document.education.len(), 1);
        assert_eq!(document.education[0].institution, "University of California");
        assert_eq!(document.education[0].end_date, "2020");
        assert_eq!(document.education[0].cgpa, "3.7");

        assert_eq!(document.projects[0].title, "Inventory Tracker");
        assert_eq!(document.projects[0].technologies, vec!["Python", "React", "Postgres"]);

        assert_eq!(document.certifications[0].name, "AWS Solutions Architect");
        assert_eq!(document.certifications[0].date, "2022");

        assert_eq!(document.achievements, vec!["Winner of the campus coding challenge"]);
    }

    #[test]
    fn test_contact_header_only() {
        let document = parse_resume("jane doe\njane@example.com\n(555) 123-4567");

        assert_eq!(document.personal_info.name, "jane doe");
        assert_eq!(document.personal_info.email, "jane@example.com");
        let phone = &document.personal_info.phone;
        let p555 = phone.find("555").unwrap();
        let p123 = phone.find("123").unwrap();
        let p4567 = phone.find("4567").unwrap();
        assert!(p555 < p123 && p123 < p4567);
    }

    #[test]
    fn test_education_scenario() {
        let document = parse_resume("Education\nBachelor of Science\nState University\n2021\nGPA: 3.8");
        assert_eq!(document.education.len(), 1);
        assert_eq!(document.education[0].degree, "Bachelor of Science");
        assert_eq!(document.education[0].institution, "State University");
        assert_eq!(document.education[0].end_date, "2021");
        assert_eq!(document.education[0].cgpa, "3.8");
    }

    #[test]
    fn test_linkedin_url_and_github_placeholder() {
        let document = parse_resume("Jane\nlinkedin.com/in/janedoe\nGitHub");
        assert_eq!(document.personal_info.linkedin, "linkedin.com/in/janedoe");
        assert_eq!(document.personal_info.github, "GitHub");
    }

    #[test]
    fn test_total_on_degenerate_input() {
        for text in ["", "\u{0}\u{7}\u{1b}[0m\r\n\t", "no sections at all here", "skills", "experience\n\n\n"] {
            let document = parse_resume(text);
            assert!(document.education.is_empty());
            assert!(document.projects.is_empty());
            assert!(document.certifications.is_empty());
        }

        let document = parse_resume("");
        assert_eq!(document, Document::default());
    }

    #[test]
    fn test_missing_section_yields_empty_sequence() {
        let document = parse_resume("Jane Doe\nBachelor of Arts\nSome University");
        assert!(document.education.is_empty());
    }

    #[test]
    fn test_deterministic_output() {
        let parser = ResumeParser::new().unwrap();
        let first = serde_json::to_string(&parser.parse(SAMPLE)).unwrap();
        let second = serde_json::to_string(&parser.parse(SAMPLE)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_custom_windows() {
        let mut config = ExtractionConfig::default();
        config.windows.education = 30;
        let parser = ResumeParser::with_config(&config).unwrap();

        let document = parser.parse("Education\nBachelor of Science\nState University\n2021");
        assert_eq!(document.education[0].institution, "");
    }
}
