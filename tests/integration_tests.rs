//! Integration tests for the resume parser

use resume_parser::error::ResumeParserError;
use resume_parser::input::manager::InputManager;
use resume_parser::input::OcrEngine;
use resume_parser::output::ParseOutcome;
use resume_parser::processing::{validate, ResumeParser};
use std::path::Path;
use std::sync::Arc;

#[tokio::test]
async fn test_text_extraction_from_txt() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/sample_resume.txt");

    let result = manager.extract_text(path).await;
    assert!(result.is_ok());

    let text = result.unwrap();
    assert!(text.contains("John Doe"));
    assert!(text.contains("Software Engineer"));
    assert!(text.contains("React"));
    assert!(text.contains("Node.js"));
}

#[tokio::test]
async fn test_text_extraction_from_markdown() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/sample_resume.md");

    let result = manager.extract_text(path).await;
    assert!(result.is_ok());

    let text = result.unwrap();
    assert!(text.contains("John Doe"));
    assert!(text.contains("Software Engineer"));
    assert!(text.contains("React"));
    assert!(text.contains("Node.js"));
    // Should not contain markdown formatting
    assert!(!text.contains("**"));
    assert!(!text.contains("##"));
}

#[tokio::test]
async fn test_caching_functionality() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/sample_resume.txt");

    let text1 = manager.extract_text(path).await.unwrap();
    assert_eq!(manager.cache_size(), 1);

    let text2 = manager.extract_text(path).await.unwrap();
    assert_eq!(text1, text2);
    assert_eq!(manager.cache_size(), 1);
}

#[tokio::test]
async fn test_unsupported_file_type() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/unsupported.xyz");

    let result = manager.extract_text(path).await;
    assert!(matches!(result, Err(ResumeParserError::UnsupportedFormat(_))));
}

#[tokio::test]
async fn test_nonexistent_file() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/nonexistent.txt");

    let result = manager.extract_text(path).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_parse_text_resume() {
    let mut manager = InputManager::new();
    let text = manager
        .extract_text(Path::new("tests/fixtures/sample_resume.txt"))
        .await
        .unwrap();

    let document = ResumeParser::new().unwrap().parse(&text);

    let info = &document.personal_info;
    assert_eq!(info.name, "John Doe");
    assert_eq!(info.email, "john.doe@email.com");
    assert_eq!(info.phone, "(555) 987-6543");
    assert_eq!(info.location, "Seattle, WA");
    assert_eq!(info.linkedin, "linkedin.com/in/johndoe");
    assert_eq!(info.github, "github.com/johndoe");
    assert_eq!(info.website, "");

    assert_eq!(document.experience.len(), 2);
    let current = &document.experience[0];
    assert_eq!(current.position, "Software Engineer");
    assert_eq!(current.company, "TechCorp Inc");
    assert_eq!(current.location, "Seattle, WA");
    assert_eq!(current.start_date, "Jan");
    assert_eq!(current.end_date, "Present");
    assert_eq!(
        current.responsibilities,
        vec![
            "Built customer dashboards in React and Node.js",
            "Reduced API response times by 35 percent",
        ]
    );
    let previous = &document.experience[1];
    assert_eq!(previous.position, "Junior Developer");
    assert_eq!(previous.company, "StartupXYZ");
    assert_eq!(previous.start_date, "Jun");
    assert_eq!(previous.end_date, "Dec");
    assert!(previous.responsibilities.len() <= 6);

    assert_eq!(document.education.len(), 1);
    let education = &document.education[0];
    assert_eq!(education.degree, "Bachelor of Science in Computer Science");
    assert_eq!(education.institution, "University of Washington");
    assert_eq!(education.end_date, "2017");
    assert_eq!(education.cgpa, "3.6");

    assert_eq!(document.skills.get("Languages").unwrap(), ["Python"]);
    assert_eq!(document.skills.get("Frameworks").unwrap(), ["React", "Node.js"]);
    assert_eq!(document.skills.get("Tools").unwrap(), ["Docker", "AWS"]);
    assert_eq!(document.skills.get("Web Technologies").unwrap(), ["HTML", "CSS"]);

    let project = &document.projects[0];
    assert_eq!(project.title, "Task Manager App");
    assert_eq!(project.link, "https://github.com/johndoe/tasks");
    assert_eq!(project.technologies, vec!["React", "Node.js", "MongoDB"]);
    assert_eq!(project.description, "Collaborative task board with realtime updates.");

    let certification = &document.certifications[0];
    assert_eq!(certification.name, "AWS Certified Developer");
    assert_eq!(certification.date, "2021");

    assert_eq!(document.achievements, vec!["Employee of the Year at TechCorp 2022"]);

    assert!(validate(&document).valid);
}

#[tokio::test]
async fn test_parse_markdown_resume() {
    let mut manager = InputManager::new();
    let text = manager
        .extract_text(Path::new("tests/fixtures/sample_resume.md"))
        .await
        .unwrap();

    let document = ResumeParser::new().unwrap().parse(&text);

    assert_eq!(document.personal_info.name, "John Doe");
    assert_eq!(document.experience[0].position, "Software Engineer");
    assert_eq!(document.experience[0].company, "TechCorp Inc");
    assert_eq!(document.education[0].institution, "University of Washington");
    assert!(document.skills.get("Frameworks").is_some());
}

struct CannedOcr;

impl OcrEngine for CannedOcr {
    fn recognize(&self, _image: &[u8]) -> anyhow::Result<String> {
        Ok("Jane Roe\njane@roe.dev\nGitHub\nEducation\nMaster of Science\nTechnical University\n2019".to_string())
    }
}

#[tokio::test]
async fn test_image_resume_through_ocr() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scan.jpg");
    std::fs::write(&path, [0xff, 0xd8, 0xff]).unwrap();

    let mut manager = InputManager::new().with_ocr(Arc::new(CannedOcr));
    let text = manager.extract_text(&path).await.unwrap();
    let document = ResumeParser::new().unwrap().parse(&text);

    assert_eq!(document.personal_info.name, "Jane Roe");
    assert_eq!(document.personal_info.github, "GitHub");
    assert_eq!(document.education[0].degree, "Master of Science");
    assert_eq!(document.education[0].end_date, "2019");
}

#[tokio::test]
async fn test_failure_envelope_for_missing_file() {
    let mut manager = InputManager::new();
    let outcome = match manager.extract_text(Path::new("tests/fixtures/missing.pdf")).await {
        Ok(text) => ParseOutcome::success(ResumeParser::new().unwrap().parse(&text), None),
        Err(e) => ParseOutcome::failure(e),
    };

    assert!(!outcome.success);
    assert!(outcome.data.is_none());
    assert_eq!(outcome.message, "Failed to process resume");
    assert!(outcome.error.unwrap().contains("missing.pdf"));
}
