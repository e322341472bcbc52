//! Achievements list extraction

use crate::processing::locator::SectionKind;
use crate::processing::text::{char_len, section_lines, strip_bullet};

pub const MAX_ACHIEVEMENTS: usize = 5;

const MIN_LINE_CHARS: usize = 16;

/// Collect achievement lines from the achievements window.
///
/// Lines that mention one of the section keywords are headings, not entries.
pub fn extract_achievements(window: &str) -> Vec<String> {
    let keywords = SectionKind::Achievements.keywords();

    section_lines(window, SectionKind::Achievements.line_cap())
        .into_iter()
        .filter(|line| char_len(line) >= MIN_LINE_CHARS)
        .filter(|line| {
            let lower = line.to_lowercase();
            !keywords.iter().any(|keyword| lower.contains(keyword))
        })
        .map(|line| strip_bullet(line).unwrap_or(line).to_string())
        .take(MAX_ACHIEVEMENTS)
        .collect()
}
