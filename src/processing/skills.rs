//! Skill token extraction and categorization

use crate::error::{Result, ResumeParserError};
use crate::processing::document::SkillMap;
use aho_corasick::AhoCorasick;
use regex::Regex;

/// Catch-all category for tokens outside the taxonomy.
pub const CATCH_ALL_CATEGORY: &str = "Technical Skills";

const MAX_CONSIDERED_TOKENS: usize = 20;
const MAX_UNCATEGORIZED: usize = 10;
const MAX_FALLBACK_TOKENS: usize = 15;

/// Fixed taxonomy, in precedence order. A token goes to the first category
/// with a keyword contained in it.
const TAXONOMY: &[(&str, &[&str])] = &[
    (
        "Languages",
        &["python", "javascript", "java", "c++", "c#", "ruby", "go", "rust", "php", "typescript"],
    ),
    (
        "Frameworks",
        &["react", "angular", "vue", "django", "flask", "spring", "express", "next.js", "node.js"],
    ),
    (
        "Tools",
        &["git", "docker", "kubernetes", "jenkins", "aws", "azure", "gcp", "mongodb", "postgresql"],
    ),
    ("Web Technologies", &["html", "css", "sass", "tailwind", "bootstrap"]),
];

pub struct SkillCategorizer {
    token_regex: Regex,
    keyword_matcher: AhoCorasick,
    keyword_category: Vec<usize>,
}

impl SkillCategorizer {
    pub fn new() -> Result<Self> {
        // Capitalized word runs (optionally dotted), acronyms, and `name.js`.
        let token_regex = Regex::new(
            r"\b[A-Z][a-z]+(?:\.[a-z]+)?(?:[ \t]+[A-Z][a-z]+)*\b|[A-Z]{2,}|\b[a-z]+\.js\b",
        )
        .expect("Invalid skill token regex");

        let mut keywords = Vec::new();
        let mut keyword_category = Vec::new();
        for (index, (_, category_keywords)) in TAXONOMY.iter().enumerate() {
            for keyword in category_keywords.iter() {
                keywords.push(*keyword);
                keyword_category.push(index);
            }
        }

        let keyword_matcher = AhoCorasick::new(&keywords)
            .map_err(|e| ResumeParserError::Processing(format!("Failed to build skill matcher: {}", e)))?;

        Ok(Self {
            token_regex,
            keyword_matcher,
            keyword_category,
        })
    }

    /// Skill-like tokens in `window`, in order of appearance.
    pub fn tokens<'a>(&self, window: &'a str) -> Vec<&'a str> {
        self.token_regex.find_iter(window).map(|m| m.as_str()).collect()
    }

    /// Name of the taxonomy category `token` belongs to, if any.
    pub fn category_of(&self, token: &str) -> Option<&'static str> {
        self.category_index(token).map(|index| TAXONOMY[index].0)
    }

    fn category_index(&self, token: &str) -> Option<usize> {
        let lower = token.to_lowercase();
        self.keyword_matcher
            .find_overlapping_iter(&lower)
            .map(|m| self.keyword_category[m.pattern().as_usize()])
            .min()
    }

    /// Bucket the first twenty tokens of the skills window.
    ///
    /// Taxonomy categories appear in taxonomy order whatever order their
    /// tokens were seen in; the catch-all comes last and holds at most ten tokens.
    pub fn categorize(&self, window: &str) -> SkillMap {
        let tokens = self.tokens(window);
        let mut buckets: Vec<Vec<String>> = vec![Vec::new(); TAXONOMY.len()];
        let mut uncategorized: Vec<String> = Vec::new();

        for token in tokens.iter().take(MAX_CONSIDERED_TOKENS) {
            match self.category_index(token) {
                Some(index) => buckets[index].push(token.to_string()),
                None => {
                    if !uncategorized.iter().any(|t| t.as_str() == *token) {
                        uncategorized.push(token.to_string());
                    }
                }
            }
        }

        let mut skills = SkillMap::new();
        for ((category, _), bucket) in TAXONOMY.iter().zip(buckets) {
            skills.extend(category, bucket);
        }
        uncategorized.truncate(MAX_UNCATEGORIZED);
        skills.extend(CATCH_ALL_CATEGORY, uncategorized);

        if skills.is_empty() && !tokens.is_empty() {
            let fallback = tokens
                .iter()
                .take(MAX_FALLBACK_TOKENS)
                .map(|token| token.to_string());
            skills.extend(CATCH_ALL_CATEGORY, fallback);
        }

        skills
    }
}
