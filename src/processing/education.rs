//! Education section parser
//!
//! A line naming a degree opens a record; the lines after it fill the open
//! record's GPA, graduation year and institution until the next degree line.

use crate::processing::document::EducationRecord;
use crate::processing::locator::SectionKind;
use crate::processing::rules::{apply_first, LineRule};
use crate::processing::text::{char_len, section_lines};
use regex::Regex;

const DEGREE_KEYWORDS: [&str; 8] = [
    "bachelor", "master", "b.tech", "b.e", "m.tech", "m.e", "phd", "diploma",
];

const MIN_INSTITUTION_CHARS: usize = 11;

pub struct EducationParser {
    gpa_regex: Regex,
    year_regex: Regex,
    number_regex: Regex,
}

/// Parser state while scanning one education window.
pub struct EducationScan<'p> {
    parser: &'p EducationParser,
    current: Option<EducationRecord>,
    records: Vec<EducationRecord>,
}

impl Default for EducationParser {
    fn default() -> Self {
        Self::new()
    }
}

impl EducationParser {
    pub fn new() -> Self {
        Self {
            gpa_regex: Regex::new(r"(?i)gpa").expect("Invalid GPA regex"),
            year_regex: Regex::new(r"\b(?:19|20)\d{2}\b").expect("Invalid year regex"),
            number_regex: Regex::new(r"\d+\.?\d*").expect("Invalid number regex"),
        }
    }

    pub fn parse(&self, window: &str) -> Vec<EducationRecord> {
        let rules = rules();
        let mut scan = EducationScan::new(self);

        for line in section_lines(window, SectionKind::Education.line_cap()) {
            if line.is_empty() {
                continue;
            }
            apply_first(&rules, &mut scan, line);
        }

        scan.finish()
    }
}

impl<'p> EducationScan<'p> {
    pub fn new(parser: &'p EducationParser) -> Self {
        Self {
            parser,
            current: None,
            records: Vec::new(),
        }
    }

    pub fn current(&self) -> Option<&EducationRecord> {
        self.current.as_ref()
    }

    pub fn finish(mut self) -> Vec<EducationRecord> {
        self.records.extend(self.current.take());
        self.records
    }
}

/// Rules in priority order.
pub fn rules<'p>() -> [LineRule<EducationScan<'p>>; 4] {
    [
        LineRule::new("degree", is_degree_line, start_record),
        LineRule::new("gpa", mentions_gpa, set_cgpa),
        LineRule::new("year", mentions_year, set_end_date),
        LineRule::new("institution", is_institution, set_institution),
    ]
}

fn is_degree_line(_: &EducationScan<'_>, line: &str) -> bool {
    let lower = line.to_lowercase();
    DEGREE_KEYWORDS.iter().any(|keyword| lower.contains(keyword))
}

fn start_record(scan: &mut EducationScan<'_>, line: &str) {
    scan.records.extend(scan.current.take());
    scan.current = Some(EducationRecord {
        degree: line.to_string(),
        ..Default::default()
    });
}

fn mentions_gpa(scan: &EducationScan<'_>, line: &str) -> bool {
    scan.current.is_some() && scan.parser.gpa_regex.is_match(line)
}

/// First number on the line, even when a year precedes the GPA.
fn set_cgpa(scan: &mut EducationScan<'_>, line: &str) {
    let number = scan.parser.number_regex.find(line).map(|m| m.as_str().to_string());
    if let (Some(record), Some(number)) = (scan.current.as_mut(), number) {
        if record.cgpa.is_empty() {
            record.cgpa = number;
        }
    }
}

fn mentions_year(scan: &EducationScan<'_>, line: &str) -> bool {
    scan.current.is_some() && scan.parser.year_regex.is_match(line)
}

fn set_end_date(scan: &mut EducationScan<'_>, line: &str) {
    let year = scan.parser.year_regex.find(line).map(|m| m.as_str().to_string());
    if let (Some(record), Some(year)) = (scan.current.as_mut(), year) {
        if record.end_date.is_empty() {
            record.end_date = year;
        }
    }
}

fn is_institution(scan: &EducationScan<'_>, line: &str) -> bool {
    scan.current
        .as_ref()
        .is_some_and(|record| record.institution.is_empty())
        && char_len(line) >= MIN_INSTITUTION_CHARS
}

fn set_institution(scan: &mut EducationScan<'_>, line: &str) {
    if let Some(record) = scan.current.as_mut() {
        record.institution = line.to_string();
    }
}
