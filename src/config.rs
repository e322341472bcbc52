//! Configuration management for the resume parser

use crate::error::{Result, ResumeParserError};
use crate::processing::locator::SectionKind;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub extraction: ExtractionConfig,
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractionConfig {
    #[serde(default)]
    pub windows: SectionWindows,
}

/// Number of characters scanned after a section keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SectionWindows {
    pub education: usize,
    pub experience: usize,
    pub projects: usize,
    pub certifications: usize,
    pub achievements: usize,
    pub skills: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    pub enable_cache: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub pretty_json: bool,
    pub color_output: bool,
    pub include_raw_text: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    Console,
    Json,
    Markdown,
}

impl Default for SectionWindows {
    fn default() -> Self {
        Self {
            education: 1000,
            experience: 2000,
            projects: 2500,
            certifications: 800,
            achievements: 600,
            skills: 800,
        }
    }
}

impl SectionWindows {
    pub fn size(&self, kind: SectionKind) -> usize {
        match kind {
            SectionKind::Education => self.education,
            SectionKind::Experience => self.experience,
            SectionKind::Projects => self.projects,
            SectionKind::Certifications => self.certifications,
            SectionKind::Achievements => self.achievements,
            SectionKind::Skills => self.skills,
        }
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self { enable_cache: true }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Json,
            pretty_json: true,
            color_output: true,
            include_raw_text: false,
        }
    }
}

impl Config {
    /// Load from the default location, writing defaults on first use.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            let config = Self::default();
            config.save()?;
            Ok(config)
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| ResumeParserError::Configuration(format!("Failed to parse config: {}", e)))
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| ResumeParserError::Configuration(format!("Failed to serialize config: {}", e)))
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, self.to_toml()?)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("resume-parser")
            .join("config.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_windows() {
        let windows = SectionWindows::default();
        assert_eq!(windows.size(SectionKind::Education), 1000);
        assert_eq!(windows.size(SectionKind::Experience), 2000);
        assert_eq!(windows.size(SectionKind::Projects), 2500);
        assert_eq!(windows.size(SectionKind::Certifications), 800);
        assert_eq!(windows.size(SectionKind::Achievements), 600);
        assert_eq!(windows.size(SectionKind::Skills), 800);
    }

    #[test]
    fn test_toml_round_trip() {
        let mut config = Config::default();
        config.extraction.windows.projects = 4000;
        config.output.format = OutputFormat::Markdown;

        let text = config.to_toml().unwrap();
        let parsed = Config::from_toml(&text).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let parsed = Config::from_toml("[extraction.windows]\nskills = 1200\n").unwrap();
        assert_eq!(parsed.extraction.windows.skills, 1200);
        assert_eq!(parsed.extraction.windows.education, 1000);
        assert!(parsed.input.enable_cache);
        assert_eq!(parsed.output.format, OutputFormat::Json);
    }

    #[test]
    fn test_invalid_config_is_reported() {
        let err = Config::from_toml("extraction = 3").unwrap_err();
        assert!(matches!(err, ResumeParserError::Configuration(_)));
    }

    #[test]
    fn test_save_and_load_from_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = Config::default();
        config.save_to(&path).unwrap();
        assert_eq!(Config::load_from(&path).unwrap(), config);
    }
}
