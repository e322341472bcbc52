//! Section anchoring by keyword and fixed-size character windows
//!
//! A section starts at the first occurrence of one of its keywords and
//! extends a fixed number of characters. The end of a section is never
//! detected, so a window may run into the next heading; the parsers only
//! accept lines that look like their own records.

use crate::config::SectionWindows;
use crate::error::{Result, ResumeParserError};
use crate::processing::text::{char_window, fold_case};
use aho_corasick::{AhoCorasick, MatchKind};
use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SectionKind {
    Skills,
    Education,
    Experience,
    Projects,
    Certifications,
    Achievements,
}

/// How a section with several keywords picks its anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchPolicy {
    /// Earliest position of any keyword.
    Earliest,
    /// First occurrence of the first keyword (in list order) that appears at all.
    Priority,
}

impl SectionKind {
    pub const ALL: [SectionKind; 6] = [
        SectionKind::Skills,
        SectionKind::Education,
        SectionKind::Experience,
        SectionKind::Projects,
        SectionKind::Certifications,
        SectionKind::Achievements,
    ];

    pub fn keywords(self) -> &'static [&'static str] {
        match self {
            SectionKind::Skills => &["skill"],
            SectionKind::Education => &["education"],
            SectionKind::Experience => &["experience", "work history"],
            SectionKind::Projects => &["project"],
            SectionKind::Certifications => &["certification", "certificate"],
            SectionKind::Achievements => &["achievement", "award", "honor", "recognition"],
        }
    }

    pub fn match_policy(self) -> MatchPolicy {
        match self {
            SectionKind::Achievements => MatchPolicy::Priority,
            _ => MatchPolicy::Earliest,
        }
    }

    /// Maximum number of window lines the section's parser looks at.
    pub fn line_cap(self) -> usize {
        match self {
            SectionKind::Education => 30,
            SectionKind::Experience => 50,
            SectionKind::Projects => 60,
            SectionKind::Certifications => 15,
            SectionKind::Achievements => 10,
            // The skills window is scanned as a whole, not line by line.
            SectionKind::Skills => usize::MAX,
        }
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SectionKind::Skills => write!(f, "Skills"),
            SectionKind::Education => write!(f, "Education"),
            SectionKind::Experience => write!(f, "Experience"),
            SectionKind::Projects => write!(f, "Projects"),
            SectionKind::Certifications => write!(f, "Certifications"),
            SectionKind::Achievements => write!(f, "Achievements"),
        }
    }
}

/// A located section: its anchor (in characters) and the window text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionWindow<'a> {
    pub kind: SectionKind,
    pub start: usize,
    pub text: &'a str,
}

/// Case-folded view of a document, computed once and shared by every lookup.
pub struct FoldedText<'a> {
    original: &'a str,
    folded: String,
}

impl<'a> FoldedText<'a> {
    pub fn new(original: &'a str) -> Self {
        Self {
            original,
            folded: fold_case(original),
        }
    }

    pub fn original(&self) -> &'a str {
        self.original
    }

    pub fn folded(&self) -> &str {
        &self.folded
    }

    fn char_offset(&self, byte_offset: usize) -> usize {
        self.folded[..byte_offset].chars().count()
    }
}

pub struct SectionLocator {
    windows: SectionWindows,
    matchers: Vec<(SectionKind, AhoCorasick)>,
}

impl SectionLocator {
    pub fn new(windows: SectionWindows) -> Result<Self> {
        let mut matchers = Vec::with_capacity(SectionKind::ALL.len());

        for kind in SectionKind::ALL {
            let matcher = AhoCorasick::builder()
                .match_kind(MatchKind::LeftmostFirst)
                .build(kind.keywords())
                .map_err(|e| {
                    ResumeParserError::Processing(format!(
                        "Failed to build {} section matcher: {}",
                        kind, e
                    ))
                })?;
            matchers.push((kind, matcher));
        }

        Ok(Self { windows, matchers })
    }

    /// Character offset of the section anchor in `text`, if any keyword occurs.
    pub fn anchor(&self, text: &FoldedText<'_>, kind: SectionKind) -> Option<usize> {
        let byte_offset = match kind.match_policy() {
            MatchPolicy::Earliest => self.matcher(kind)?.find(text.folded())?.start(),
            MatchPolicy::Priority => kind
                .keywords()
                .iter()
                .find_map(|keyword| text.folded().find(keyword))?,
        };

        Some(text.char_offset(byte_offset))
    }

    /// Find the window for `kind`, or `None` when none of its keywords occur.
    pub fn locate<'a>(&self, text: &FoldedText<'a>, kind: SectionKind) -> Option<SectionWindow<'a>> {
        let Some(start) = self.anchor(text, kind) else {
            debug!("{} section not found", kind);
            return None;
        };

        let window = char_window(text.original(), start, self.windows.size(kind));
        debug!(
            "{} section anchored at char {} ({} chars)",
            kind,
            start,
            window.chars().count()
        );

        Some(SectionWindow {
            kind,
            start,
            text: window,
        })
    }

    fn matcher(&self, kind: SectionKind) -> Option<&AhoCorasick> {
        self.matchers
            .iter()
            .find(|(candidate, _)| *candidate == kind)
            .map(|(_, matcher)| matcher)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn locator() -> SectionLocator {
        SectionLocator::new(SectionWindows::default()).unwrap()
    }

    #[test]
    fn test_missing_section() {
        let text = FoldedText::new("Jane Doe\nSkills: Rust");
        assert!(locator().locate(&text, SectionKind::Education).is_none());
    }

    #[test]
    fn test_window_keeps_original_case() {
        let text = FoldedText::new("Jane\nEDUCATION\nState University");
        let window = locator().locate(&text, SectionKind::Education).unwrap();
        assert_eq!(window.start, 5);
        assert_eq!(window.text, "EDUCATION\nState University");
    }

    #[test]
    fn test_earliest_keyword_wins() {
        let text = FoldedText::new("Work History\nAcme\nExperience summary");
        let window = locator().locate(&text, SectionKind::Experience).unwrap();
        assert_eq!(window.start, 0);

        let text = FoldedText::new("Certificate in Rust\nCertifications");
        assert_eq!(locator().anchor(&text, SectionKind::Certifications), Some(0));
    }

    #[test]
    fn test_priority_policy_for_achievements() {
        let text = FoldedText::new("Honors\nDean's list\nAwards\nBest paper award");
        let anchor = locator().anchor(&text, SectionKind::Achievements).unwrap();
        // "award" outranks "honor" even though it appears later.
        assert_eq!(anchor, text.original().find("Awards").unwrap());
    }

    #[test]
    fn test_window_is_capped() {
        let mut windows = SectionWindows::default();
        windows.skills = 6;
        let locator = SectionLocator::new(windows).unwrap();

        let text = FoldedText::new("Intro\nSkills: Rust, Go");
        let window = locator.locate(&text, SectionKind::Skills).unwrap();
        assert_eq!(window.text, "Skills");
    }

    #[test]
    fn test_offsets_survive_multibyte_text() {
        let text = FoldedText::new("Zoë Müller\nÉducation\nEducation\nMIT");
        let window = locator().locate(&text, SectionKind::Education).unwrap();
        assert_eq!(window.start, 21);
        assert_eq!(window.text, "Education\nMIT");
    }
}
