//! Experience section parser
//!
//! A line carrying a date range (`Jan 2020 - Present`, `2018 to 2021`) opens
//! a record. The text before the range, or failing that the previous
//! non-blank line, is the position. Later lines fill in the company and
//! collect responsibilities until the next date range.

use crate::processing::document::ExperienceRecord;
use crate::processing::locator::SectionKind;
use crate::processing::rules::{apply_first, LineRule};
use crate::processing::text::{char_len, is_bullet, section_lines, strip_bullet};
use regex::Regex;

const MONTHS: &str = r"(?:Jan(?:uary)?|Feb(?:ruary)?|Mar(?:ch)?|Apr(?:il)?|May|June?|July?|Aug(?:ust)?|Sep(?:t(?:ember)?)?|Oct(?:ober)?|Nov(?:ember)?|Dec(?:ember)?)\b\.?";

const MAX_HEADER_CHARS: usize = 100;
const MIN_BULLET_CHARS: usize = 11;
const MIN_FREE_TEXT_CHARS: usize = 21;
const MAX_RESPONSIBILITIES: usize = 5;
const MIN_POSITION_CHARS: usize = 6;

pub struct ExperienceParser {
    date_range_regex: Regex,
}

/// Parser state while scanning one experience window.
pub struct ExperienceScan<'p> {
    parser: &'p ExperienceParser,
    previous_line: Option<String>,
    current: Option<ExperienceRecord>,
    records: Vec<ExperienceRecord>,
}

impl Default for ExperienceParser {
    fn default() -> Self {
        Self::new()
    }
}

impl ExperienceParser {
    pub fn new() -> Self {
        let start = format!(r"({months}|\d{{4}}\b)(?:[ \t,]+\d{{4}}\b)?", months = MONTHS);
        let end = format!(r"({months}|Present\b|Current\b|\d{{4}}\b)(?:[ \t,]+\d{{4}}\b)?", months = MONTHS);
        let pattern = format!(r"(?i)\b{start}[^\n]{{0,40}}?\s*(?:[–—-]|\bto\b)\s*{end}");

        Self {
            date_range_regex: Regex::new(&pattern).expect("Invalid date range regex"),
        }
    }

    /// Start and end markers of the first date range on `line`, with its byte
    /// offset. A year following a month name is matched but not captured.
    pub fn date_range<'l>(&self, line: &'l str) -> Option<(&'l str, &'l str, usize)> {
        let caps = self.date_range_regex.captures(line)?;
        let whole = caps.get(0)?;
        Some((caps.get(1)?.as_str(), caps.get(2)?.as_str(), whole.start()))
    }

    pub fn parse(&self, window: &str) -> Vec<ExperienceRecord> {
        let rules = rules();
        let mut scan = ExperienceScan::new(self);

        for line in section_lines(window, SectionKind::Experience.line_cap()) {
            if line.is_empty() {
                continue;
            }
            if !line.eq_ignore_ascii_case("experience") {
                apply_first(&rules, &mut scan, line);
            }
            scan.previous_line = Some(line.to_string());
        }

        scan.finish()
    }
}

impl<'p> ExperienceScan<'p> {
    pub fn new(parser: &'p ExperienceParser) -> Self {
        Self {
            parser,
            previous_line: None,
            current: None,
            records: Vec::new(),
        }
    }

    pub fn current(&self) -> Option<&ExperienceRecord> {
        self.current.as_ref()
    }

    /// Close the open record; it is kept only if a position was found.
    fn close(&mut self) {
        if let Some(record) = self.current.take() {
            if !record.position.is_empty() {
                self.records.push(record);
            }
        }
    }

    pub fn finish(mut self) -> Vec<ExperienceRecord> {
        self.close();
        self.records
    }

    fn company_unset(&self, line: &str) -> bool {
        !is_bullet(line) && self.current.as_ref().is_some_and(|r| r.company.is_empty())
    }
}

/// Rules in priority order.
pub fn rules<'p>() -> [LineRule<ExperienceScan<'p>>; 7] {
    [
        LineRule::new("date-range", has_date_range, start_record),
        LineRule::new("company-location", has_company_location, set_company_location),
        LineRule::new("company-separator", has_company_separator, set_company_after_separator),
        LineRule::new("company-guess", is_company_guess, set_company),
        LineRule::new("bullet", is_bullet_line, add_bullet),
        LineRule::new("position", is_position, set_position),
        LineRule::new("free-text", is_free_text, add_free_text),
    ]
}

fn has_date_range(scan: &ExperienceScan<'_>, line: &str) -> bool {
    scan.parser.date_range_regex.is_match(line)
}

fn start_record(scan: &mut ExperienceScan<'_>, line: &str) {
    scan.close();

    let Some((start, end, offset)) = scan.parser.date_range(line) else {
        return;
    };

    let prefix = line[..offset].trim().trim_end_matches(['|', ',', '-', '–', '—', '•', '·', '@']).trim();
    let position = if !prefix.is_empty() {
        prefix.to_string()
    } else {
        scan.previous_line
            .as_deref()
            .filter(|previous| char_len(previous) < MAX_HEADER_CHARS)
            .unwrap_or_default()
            .to_string()
    };

    scan.current = Some(ExperienceRecord {
        position,
        start_date: start.to_string(),
        end_date: end.to_string(),
        ..Default::default()
    });
}

/// `Company • Location`, both sides non-empty.
fn has_company_location(scan: &ExperienceScan<'_>, line: &str) -> bool {
    scan.company_unset(line)
        && line
            .split_once('•')
            .is_some_and(|(company, location)| !company.trim().is_empty() && !location.trim().is_empty())
}

fn set_company_location(scan: &mut ExperienceScan<'_>, line: &str) {
    let mut parts = line.split('•').map(str::trim);
    if let Some(record) = scan.current.as_mut() {
        record.company = parts.next().unwrap_or_default().to_string();
        record.location = parts.next().unwrap_or_default().to_string();
    }
}

fn has_company_separator(scan: &ExperienceScan<'_>, line: &str) -> bool {
    scan.company_unset(line) && (line.contains('—') || line.contains('@'))
}

fn set_company_after_separator(scan: &mut ExperienceScan<'_>, line: &str) {
    let separator = if line.contains('—') { '—' } else { '@' };
    let company = line.rsplit(separator).next().unwrap_or_default().trim();
    if let Some(record) = scan.current.as_mut() {
        record.company = company.to_string();
    }
}

fn is_company_guess(scan: &ExperienceScan<'_>, line: &str) -> bool {
    scan.company_unset(line)
        && scan.current.as_ref().is_some_and(|r| r.position.is_empty())
        && char_len(line) < MAX_HEADER_CHARS
}

fn set_company(scan: &mut ExperienceScan<'_>, line: &str) {
    if let Some(record) = scan.current.as_mut() {
        record.company = line.to_string();
    }
}

fn is_bullet_line(scan: &ExperienceScan<'_>, line: &str) -> bool {
    scan.current.is_some() && is_bullet(line)
}

fn add_bullet(scan: &mut ExperienceScan<'_>, line: &str) {
    let body = strip_bullet(line).unwrap_or(line);
    if char_len(body) < MIN_BULLET_CHARS {
        return;
    }
    if let Some(record) = scan.current.as_mut() {
        record.responsibilities.push(body.to_string());
    }
}

/// Titles rarely lead with digits.
fn is_position(scan: &ExperienceScan<'_>, line: &str) -> bool {
    let len = char_len(line);
    scan.current.as_ref().is_some_and(|r| r.position.is_empty())
        && (MIN_POSITION_CHARS..MAX_HEADER_CHARS).contains(&len)
        && !line.chars().take(10).any(|c| c.is_ascii_digit())
}

fn set_position(scan: &mut ExperienceScan<'_>, line: &str) {
    if let Some(record) = scan.current.as_mut() {
        record.position = line.to_string();
    }
}

fn is_free_text(scan: &ExperienceScan<'_>, line: &str) -> bool {
    scan.current
        .as_ref()
        .is_some_and(|r| r.responsibilities.len() < MAX_RESPONSIBILITIES)
        && char_len(line) >= MIN_FREE_TEXT_CHARS
}

fn add_free_text(scan: &mut ExperienceScan<'_>, line: &str) {
    if let Some(record) = scan.current.as_mut() {
        record.responsibilities.push(line.to_string());
    }
}
