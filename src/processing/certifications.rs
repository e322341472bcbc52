//! Certifications section parser
//!
//! One record per qualifying line: `Name — Issuer (2021)` or `Name - Issuer - 2021`.

use crate::processing::document::CertificationRecord;
use crate::processing::locator::SectionKind;
use crate::processing::text::{char_len, section_lines, strip_bullet};
use regex::Regex;

pub const MAX_CERTIFICATIONS: usize = 5;

const MIN_LINE_CHARS: usize = 11;

pub struct CertificationParser {
    year_regex: Regex,
}

impl Default for CertificationParser {
    fn default() -> Self {
        Self::new()
    }
}

impl CertificationParser {
    pub fn new() -> Self {
        Self {
            year_regex: Regex::new(r"\b(?:19|20)\d{2}\b").expect("Invalid year regex"),
        }
    }

    /// Lines that can hold a certification. Heading lines ("Certifications",
    /// "Certificates & Licenses") are skipped.
    pub fn qualifies(line: &str) -> bool {
        char_len(line) >= MIN_LINE_CHARS && !line.to_lowercase().starts_with("certif")
    }

    pub fn parse_line(&self, line: &str) -> CertificationRecord {
        let body = strip_bullet(line).unwrap_or(line);
        let date = self
            .year_regex
            .find(body)
            .map(|m| m.as_str().to_string())
            .unwrap_or_default();

        let separator = if body.contains('—') { '—' } else { '-' };
        let mut parts = body.split(separator).map(str::trim);
        let name = parts.next().unwrap_or_default().to_string();
        let issuer = parts.next().unwrap_or_default().to_string();

        CertificationRecord { name, issuer, date }
    }

    pub fn parse(&self, window: &str) -> Vec<CertificationRecord> {
        section_lines(window, SectionKind::Certifications.line_cap())
            .into_iter()
            .filter(|line| !line.is_empty() && Self::qualifies(line))
            .map(|line| self.parse_line(line))
            .take(MAX_CERTIFICATIONS)
            .collect()
    }
}
