//! Projects section parser

use crate::processing::document::ProjectRecord;
use crate::processing::locator::SectionKind;
use crate::processing::rules::{apply_first, LineRule};
use crate::processing::text::{char_len, is_bullet, section_lines};
use regex::Regex;

pub const MAX_PROJECTS: usize = 8;
pub const MAX_TECHNOLOGIES: usize = 10;

const MIN_TITLE_CHARS: usize = 10;
const MAX_TITLE_CHARS: usize = 150;
const MIN_DESCRIPTION_CHARS: usize = 21;

pub struct ProjectParser {
    url_regex: Regex,
    indicator_regex: Regex,
    trailing_indicator_regex: Regex,
    technologies_regex: Regex,
}

pub struct ProjectScan<'p> {
    parser: &'p ProjectParser,
    current: Option<ProjectRecord>,
    records: Vec<ProjectRecord>,
}

impl Default for ProjectParser {
    fn default() -> Self {
        Self::new()
    }
}

impl ProjectParser {
    pub fn new() -> Self {
        Self {
            url_regex: Regex::new(r"https?://[\w\-./]+").expect("Invalid URL regex"),
            indicator_regex: Regex::new(r"(?i)\[(?:View Project|GitHub|Demo|Link)\]")
                .expect("Invalid link indicator regex"),
            trailing_indicator_regex: Regex::new(r"\s*\[.*?\]\s*$")
                .expect("Invalid trailing indicator regex"),
            technologies_regex: Regex::new(r"(?i)^(?:Technologies?|Tech Stack|Built with)\s*:\s*")
                .expect("Invalid technologies regex"),
        }
    }

    /// Whether `line` opens a new project.
    ///
    /// Titles are medium-length, unbulleted lines that either carry a link
    /// marker such as `[View Project]` or read like a bare heading.
    pub fn is_title(&self, line: &str) -> bool {
        let len = char_len(line);
        if !(MIN_TITLE_CHARS..MAX_TITLE_CHARS).contains(&len)
            || is_bullet(line)
            || line.to_lowercase().starts_with("tech")
        {
            return false;
        }

        if self.indicator_regex.is_match(line) {
            return true;
        }

        !self.url_regex.is_match(line)
            && !line.contains(':')
            && !line.contains('—')
            && !line.ends_with(['.', '!', '?', ',', ';'])
    }

    pub fn parse(&self, window: &str) -> Vec<ProjectRecord> {
        let rules = rules();
        let mut scan = ProjectScan::new(self);

        for line in section_lines(window, SectionKind::Projects.line_cap()) {
            if line.is_empty() || line.eq_ignore_ascii_case("projects") {
                continue;
            }
            apply_first(&rules, &mut scan, line);

            if scan.records.len() >= MAX_PROJECTS {
                break;
            }
        }

        scan.finish()
    }
}

impl<'p> ProjectScan<'p> {
    pub fn new(parser: &'p ProjectParser) -> Self {
        Self {
            parser,
            current: None,
            records: Vec::new(),
        }
    }

    pub fn current(&self) -> Option<&ProjectRecord> {
        self.current.as_ref()
    }

    fn close(&mut self) {
        if let Some(record) = self.current.take() {
            if !record.title.is_empty() && self.records.len() < MAX_PROJECTS {
                self.records.push(record);
            }
        }
    }

    pub fn finish(mut self) -> Vec<ProjectRecord> {
        self.close();
        self.records
    }
}

/// Rules in priority order.
pub fn rules<'p>() -> [LineRule<ProjectScan<'p>>; 4] {
    [
        LineRule::new("title", is_title_line, start_record),
        LineRule::new("link", has_url, set_link),
        LineRule::new("technologies", lists_technologies, set_technologies),
        LineRule::new("description", is_description, append_description),
    ]
}

fn is_title_line(scan: &ProjectScan<'_>, line: &str) -> bool {
    scan.parser.is_title(line)
}

fn start_record(scan: &mut ProjectScan<'_>, line: &str) {
    scan.close();
    let title = scan.parser.trailing_indicator_regex.replace(line, "");
    scan.current = Some(ProjectRecord {
        title: title.trim().to_string(),
        ..Default::default()
    });
}

fn has_url(scan: &ProjectScan<'_>, line: &str) -> bool {
    scan.current.is_some() && scan.parser.url_regex.is_match(line)
}

fn set_link(scan: &mut ProjectScan<'_>, line: &str) {
    let Some(url) = scan.parser.url_regex.find(line) else {
        return;
    };
    // Each URL line replaces the previous link; within a line the first URL counts.
    if let Some(record) = scan.current.as_mut() {
        record.link = url.as_str().to_string();
    }
}

fn lists_technologies(scan: &ProjectScan<'_>, line: &str) -> bool {
    scan.current.is_some() && scan.parser.technologies_regex.is_match(line)
}

fn set_technologies(scan: &mut ProjectScan<'_>, line: &str) {
    let list = scan.parser.technologies_regex.replace(line, "");
    let technologies: Vec<String> = list
        .split([',', ';'])
        .map(str::trim)
        .filter(|tech| !tech.is_empty())
        .take(MAX_TECHNOLOGIES)
        .map(str::to_string)
        .collect();

    if let Some(record) = scan.current.as_mut() {
        record.technologies = technologies;
    }
}

fn is_description(scan: &ProjectScan<'_>, line: &str) -> bool {
    scan.current.is_some() && char_len(line) >= MIN_DESCRIPTION_CHARS
}

fn append_description(scan: &mut ProjectScan<'_>, line: &str) {
    if let Some(record) = scan.current.as_mut() {
        if !record.description.is_empty() {
            record.description.push(' ');
        }
        record.description.push_str(line);
    }
}
