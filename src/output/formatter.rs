//! Output formatters: JSON for machines, console and Markdown for people

use crate::config::OutputFormat;
use crate::error::Result;
use crate::output::report::ParseOutcome;
use crate::processing::document::{Document, PersonalInfo};
use colored::{Color, Colorize};
use std::path::Path;

/// Trait for rendering a parse outcome
pub trait OutputFormatter {
    fn format_outcome(&self, outcome: &ParseOutcome) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Terminal summary with optional colors
pub struct ConsoleFormatter {
    use_colors: bool,
}

/// The envelope as JSON
pub struct JsonFormatter {
    pretty: bool,
}

pub struct MarkdownFormatter {
    include_raw_text: bool,
}

/// Picks the formatter for a requested output format
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
}

fn contact_fields(info: &PersonalInfo) -> [(&'static str, &str); 7] {
    [
        ("Name", info.name.as_str()),
        ("Email", info.email.as_str()),
        ("Phone", info.phone.as_str()),
        ("Location", info.location.as_str()),
        ("LinkedIn", info.linkedin.as_str()),
        ("GitHub", info.github.as_str()),
        ("Website", info.website.as_str()),
    ]
}

/// Join non-empty parts with `sep`.
fn join_present<S: AsRef<str>>(parts: &[S], sep: &str) -> String {
    parts
        .iter()
        .map(AsRef::<str>::as_ref)
        .filter(|part| !part.is_empty())
        .collect::<Vec<&str>>()
        .join(sep)
}

fn date_range(start: &str, end: &str) -> String {
    match (start.is_empty(), end.is_empty()) {
        (false, false) => format!("{} - {}", start, end),
        _ => join_present(&[start, end], ""),
    }
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool) -> Self {
        Self { use_colors }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str, level: u8) -> String {
        let prefix = match level {
            1 => "█",
            2 => "▓",
            _ => "▒",
        };

        let color = match level {
            1 => Color::Blue,
            2 => Color::Green,
            _ => Color::Yellow,
        };

        if self.use_colors {
            format!("\n{} {}\n", prefix.color(color).bold(), title.color(color).bold())
        } else {
            format!("\n{} {}\n", prefix, title)
        }
    }

    fn format_document(&self, document: &Document, output: &mut String) {
        output.push_str(&self.format_header("Contact", 2));
        for (label, value) in contact_fields(&document.personal_info) {
            if !value.is_empty() {
                output.push_str(&format!("  {:<9} {}\n", format!("{}:", label), value));
            }
        }

        if !document.education.is_empty() {
            output.push_str(&self.format_header(&format!("Education ({})", document.education.len()), 2));
            for record in &document.education {
                output.push_str(&format!("  • {}\n", self.colorize(&record.degree, Color::Cyan)));
                let details = join_present(&[&record.institution, &record.end_date], " | ");
                if !details.is_empty() {
                    output.push_str(&format!("    {}\n", details));
                }
                if !record.cgpa.is_empty() {
                    output.push_str(&format!("    CGPA: {}\n", record.cgpa));
                }
            }
        }

        if !document.experience.is_empty() {
            output.push_str(&self.format_header(&format!("Experience ({})", document.experience.len()), 2));
            for record in &document.experience {
                output.push_str(&format!("  • {}", self.colorize(&record.position, Color::Cyan)));
                let dates = date_range(&record.start_date, &record.end_date);
                if !dates.is_empty() {
                    output.push_str(&format!(" ({})", dates));
                }
                output.push('\n');
                let employer = join_present(&[&record.company, &record.location], ", ");
                if !employer.is_empty() {
                    output.push_str(&format!("    {}\n", employer));
                }
                for responsibility in &record.responsibilities {
                    output.push_str(&format!("    - {}\n", responsibility));
                }
            }
        }

        if !document.projects.is_empty() {
            output.push_str(&self.format_header(&format!("Projects ({})", document.projects.len()), 2));
            for project in &document.projects {
                output.push_str(&format!("  • {}\n", self.colorize(&project.title, Color::Cyan)));
                if !project.technologies.is_empty() {
                    output.push_str(&format!("    Technologies: {}\n", project.technologies.join(", ")));
                }
                if !project.link.is_empty() {
                    output.push_str(&format!("    Link: {}\n", project.link));
                }
                if !project.description.is_empty() {
                    output.push_str(&format!("    {}\n", project.description));
                }
            }
        }

        if !document.skills.is_empty() {
            output.push_str(&self.format_header(&format!("Skills ({})", document.skills.skill_count()), 2));
            for (category, skills) in document.skills.iter() {
                output.push_str(&format!("  {}: {}\n", self.colorize(category, Color::Magenta), skills.join(", ")));
            }
        }

        if !document.certifications.is_empty() {
            output.push_str(&self.format_header("Certifications", 2));
            for cert in &document.certifications {
                let line = join_present(&[&cert.name, &cert.issuer, &cert.date], " | ");
                output.push_str(&format!("  • {}\n", line));
            }
        }

        if !document.achievements.is_empty() {
            output.push_str(&self.format_header("Achievements", 2));
            for achievement in &document.achievements {
                output.push_str(&format!("  • {}\n", achievement));
            }
        }
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_outcome(&self, outcome: &ParseOutcome) -> Result<String> {
        let mut output = String::new();

        output.push_str(&self.format_header("RESUME PARSE RESULT", 1));
        let status = if outcome.success {
            self.colorize(&outcome.message, Color::Green)
        } else {
            self.colorize(&outcome.message, Color::Red)
        };
        output.push_str(&format!("Status: {}\n", status));

        if let Some(error) = &outcome.error {
            output.push_str(&format!("Error: {}\n", self.colorize(error, Color::Red)));
        }

        if let Some(document) = &outcome.data {
            self.format_document(document, &mut output);
        }

        if let Some(raw_text) = &outcome.raw_text {
            output.push_str(&self.format_header("Raw Text", 3));
            output.push_str(raw_text);
            output.push('\n');
        }

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_outcome(&self, outcome: &ParseOutcome) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(outcome)?)
        } else {
            Ok(serde_json::to_string(outcome)?)
        }
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl MarkdownFormatter {
    pub fn new(include_raw_text: bool) -> Self {
        Self { include_raw_text }
    }

    fn format_document(document: &Document, output: &mut String) {
        let info = &document.personal_info;
        let title = if info.name.is_empty() { "Resume" } else { info.name.as_str() };
        output.push_str(&format!("# {}\n\n", title));

        output.push_str("| Field | Value |\n");
        output.push_str("|-------|-------|\n");
        for (label, value) in contact_fields(info) {
            if !value.is_empty() {
                output.push_str(&format!("| {} | {} |\n", label, value));
            }
        }
        output.push('\n');

        if !document.education.is_empty() {
            output.push_str("## Education\n\n");
            for record in &document.education {
                output.push_str(&format!("- **{}**", record.degree));
                let details = join_present(&[&record.institution, &record.end_date], ", ");
                if !details.is_empty() {
                    output.push_str(&format!(", {}", details));
                }
                if !record.cgpa.is_empty() {
                    output.push_str(&format!(" (CGPA {})", record.cgpa));
                }
                output.push('\n');
            }
            output.push('\n');
        }

        if !document.experience.is_empty() {
            output.push_str("## Experience\n\n");
            for record in &document.experience {
                output.push_str(&format!("### {}\n\n", record.position));
                let employer = join_present(&[&record.company, &record.location], ", ");
                let dates = date_range(&record.start_date, &record.end_date);
                let meta = join_present(&[&employer, &dates], " | ");
                if !meta.is_empty() {
                    output.push_str(&format!("*{}*\n\n", meta));
                }
                for responsibility in &record.responsibilities {
                    output.push_str(&format!("- {}\n", responsibility));
                }
                output.push('\n');
            }
        }

        if !document.projects.is_empty() {
            output.push_str("## Projects\n\n");
            for project in &document.projects {
                if project.link.is_empty() {
                    output.push_str(&format!("### {}\n\n", project.title));
                } else {
                    output.push_str(&format!("### [{}]({})\n\n", project.title, project.link));
                }
                if !project.description.is_empty() {
                    output.push_str(&format!("{}\n\n", project.description));
                }
                if !project.technologies.is_empty() {
                    output.push_str(&format!("**Technologies:** {}\n\n", project.technologies.join(", ")));
                }
            }
        }

        if !document.skills.is_empty() {
            output.push_str("## Skills\n\n");
            for (category, skills) in document.skills.iter() {
                output.push_str(&format!("- **{}:** {}\n", category, skills.join(", ")));
            }
            output.push('\n');
        }

        if !document.certifications.is_empty() {
            output.push_str("## Certifications\n\n");
            for cert in &document.certifications {
                output.push_str(&format!("- {}\n", join_present(&[&cert.name, &cert.issuer, &cert.date], " | ")));
            }
            output.push('\n');
        }

        if !document.achievements.is_empty() {
            output.push_str("## Achievements\n\n");
            for achievement in &document.achievements {
                output.push_str(&format!("- {}\n", achievement));
            }
            output.push('\n');
        }
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_outcome(&self, outcome: &ParseOutcome) -> Result<String> {
        let mut output = String::new();

        match &outcome.data {
            Some(document) => Self::format_document(document, &mut output),
            None => {
                output.push_str("# Resume\n\n");
                output.push_str(&format!("**{}**\n\n", outcome.message));
                if let Some(error) = &outcome.error {
                    output.push_str(&format!("> {}\n", error));
                }
            }
        }

        if self.include_raw_text {
            if let Some(raw_text) = &outcome.raw_text {
                output.push_str("## Raw Text\n\n```text\n");
                output.push_str(raw_text);
                output.push_str("\n```\n");
            }
        }

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }
}

impl ReportGenerator {
    pub fn new() -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(true),
            json_formatter: JsonFormatter::new(true),
            markdown_formatter: MarkdownFormatter::new(false),
        }
    }

    pub fn with_options(use_colors: bool, pretty_json: bool, include_raw_text: bool) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors),
            json_formatter: JsonFormatter::new(pretty_json),
            markdown_formatter: MarkdownFormatter::new(include_raw_text),
        }
    }

    pub fn generate_report(&self, outcome: &ParseOutcome, format: &OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Console => self.console_formatter.format_outcome(outcome),
            OutputFormat::Json => self.json_formatter.format_outcome(outcome),
            OutputFormat::Markdown => self.markdown_formatter.format_outcome(outcome),
        }
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

pub fn save_report_to_file(content: &str, file_path: &Path) -> Result<()> {
    use std::fs;
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(file_path, content)?;
    Ok(())
}

pub fn suggest_filename(format: &OutputFormat, input_name: &str, timestamp: bool) -> String {
    let base_name = Path::new(input_name)
        .file_stem()
        .unwrap_or_default()
        .to_string_lossy();

    let timestamp_suffix = if timestamp {
        format!("_{}", chrono::Utc::now().format("%Y%m%d_%H%M%S"))
    } else {
        String::new()
    };

    match format {
        OutputFormat::Console => format!("{}_parsed{}.txt", base_name, timestamp_suffix),
        OutputFormat::Json => format!("{}_parsed{}.json", base_name, timestamp_suffix),
        OutputFormat::Markdown => format!("{}_parsed{}.md", base_name, timestamp_suffix),
    }
}
