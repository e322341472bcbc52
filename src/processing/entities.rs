//! Pattern matchers for atomic contact facts
//!
//! Every recognizer returns the first match in the text, or `None`.

use crate::processing::document::PersonalInfo;
use regex::Regex;
use std::ops::Range;

/// Literal stored when a platform is named but no profile URL is found.
pub const LINKEDIN_PLACEHOLDER: &str = "LinkedIn";
pub const GITHUB_PLACEHOLDER: &str = "GitHub";

const MIN_PHONE_DIGITS: usize = 9;
const MAX_NAME_WORDS: usize = 4;

pub struct EntityRecognizer {
    email_regex: Regex,
    phone_regex: Regex,
    linkedin_regex: Regex,
    linkedin_word_regex: Regex,
    github_regex: Regex,
    github_word_regex: Regex,
    website_regex: Regex,
    domestic_location_regex: Regex,
    international_location_regex: Regex,
}

impl Default for EntityRecognizer {
    fn default() -> Self {
        Self::new()
    }
}

impl EntityRecognizer {
    pub fn new() -> Self {
        let email_regex = Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b")
            .expect("Invalid email regex");

        // Optional country code, then at most three digit groups; a fourth group
        // only joins through punctuation so a trailing year stays out.
        let phone_regex = Regex::new(
            r"(?:\+\d{1,3}[ \t.\-•]?)?\(?\d{1,4}\)?[ \t.\-•]?\(?\d{1,5}\)?[ \t.\-•]?\d{1,5}(?:[.\-•]\d{1,9})?",
        )
        .expect("Invalid phone regex");

        let linkedin_regex = Regex::new(r"(?i)(?:https?://)?(?:www\.)?linkedin\.com/in/[\w-]+")
            .expect("Invalid LinkedIn regex");
        let linkedin_word_regex = Regex::new(r"(?i)\blinkedin\b")
            .expect("Invalid LinkedIn word regex");

        let github_regex = Regex::new(r"(?i)(?:https?://)?(?:www\.)?github\.com/[\w-]+")
            .expect("Invalid GitHub regex");
        let github_word_regex = Regex::new(r"(?i)\bgithub\b")
            .expect("Invalid GitHub word regex");

        let website_regex = Regex::new(r"(?i)(?:https?://)?(?:www\.)?[\w-]+\.(?:com|io|dev|net|org)/?[\w-]*")
            .expect("Invalid website regex");

        let domestic_location_regex = Regex::new(r"\b[A-Z][a-z]+(?:[ \t]+[A-Z][a-z]+)*,[ \t]*[A-Z]{2}\b")
            .expect("Invalid domestic location regex");
        let international_location_regex = Regex::new(r"\b[A-Z][a-z]+(?:[ \t]+[A-Z][a-z]+)*,[ \t]+[A-Z][a-z]+\b")
            .expect("Invalid international location regex");

        Self {
            email_regex,
            phone_regex,
            linkedin_regex,
            linkedin_word_regex,
            github_regex,
            github_word_regex,
            website_regex,
            domestic_location_regex,
            international_location_regex,
        }
    }

    /// Run every recognizer over the full text.
    pub fn recognize(&self, text: &str) -> PersonalInfo {
        PersonalInfo {
            name: Self::name(text).unwrap_or_default(),
            email: self.email(text).unwrap_or_default(),
            phone: self.phone(text).unwrap_or_default(),
            location: self.location(text).unwrap_or_default(),
            linkedin: self.linkedin(text).unwrap_or_default(),
            github: self.github(text).unwrap_or_default(),
            website: self.website(text).unwrap_or_default(),
        }
    }

    pub fn email(&self, text: &str) -> Option<String> {
        self.email_regex.find(text).map(|m| m.as_str().to_string())
    }

    /// First digit-group match holding at least nine digits.
    /// The match is returned as written, without normalization.
    pub fn phone(&self, text: &str) -> Option<String> {
        self.phone_regex
            .find_iter(text)
            .map(|m| m.as_str().trim())
            .find(|candidate| {
                candidate.chars().filter(char::is_ascii_digit).count() >= MIN_PHONE_DIGITS
            })
            .map(str::to_string)
    }

    pub fn linkedin(&self, text: &str) -> Option<String> {
        Self::profile(text, &self.linkedin_regex, &self.linkedin_word_regex, LINKEDIN_PLACEHOLDER)
    }

    pub fn github(&self, text: &str) -> Option<String> {
        Self::profile(text, &self.github_regex, &self.github_word_regex, GITHUB_PLACEHOLDER)
    }

    /// First bare domain that is neither a LinkedIn/GitHub link nor the
    /// domain half of an email address.
    pub fn website(&self, text: &str) -> Option<String> {
        let emails: Vec<Range<usize>> = self.email_regex.find_iter(text).map(|m| m.range()).collect();

        self.website_regex
            .find_iter(text)
            .filter(|m| !emails.iter().any(|email| email.start < m.end() && m.start() < email.end))
            .map(|m| m.as_str())
            .find(|candidate| {
                let lower = candidate.to_lowercase();
                !lower.contains("linkedin") && !lower.contains("github")
            })
            .map(str::to_string)
    }

    /// First non-blank line of at most four words with no digit, `@` or "http".
    pub fn name(text: &str) -> Option<String> {
        text.lines()
            .map(str::trim)
            .find(|line| {
                !line.is_empty()
                    && line.split_whitespace().count() <= MAX_NAME_WORDS
                    && !line.chars().any(|c| c.is_ascii_digit())
                    && !line.contains('@')
                    && !line.to_lowercase().contains("http")
            })
            .map(str::to_string)
    }

    /// `City, ST` first, then `City, Country`.
    pub fn location(&self, text: &str) -> Option<String> {
        self.domestic_location_regex
            .find(text)
            .or_else(|| self.international_location_regex.find(text))
            .map(|m| m.as_str().to_string())
    }

    fn profile(text: &str, url: &Regex, word: &Regex, placeholder: &str) -> Option<String> {
        if let Some(m) = url.find(text) {
            return Some(m.as_str().to_string());
        }

        word.is_match(text).then(|| placeholder.to_string())
    }
}
