//! Character and line helpers shared by the section parsers

/// Characters that open a bullet line.
pub const BULLETS: [char; 5] = ['●', '•', '-', '*', '○'];

/// Lowercase `text` one character at a time.
///
/// Unlike `str::to_lowercase`, every input character maps to exactly one
/// output character, so character offsets found in the result are valid in
/// the original text.
pub fn fold_case(text: &str) -> String {
    text.chars()
        .map(|c| c.to_lowercase().next().unwrap_or(c))
        .collect()
}

/// Length in characters, not bytes.
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Up to `len` characters of `text` starting at character offset `start`.
pub fn char_window(text: &str, start: usize, len: usize) -> &str {
    let begin = match text.char_indices().nth(start) {
        Some((index, _)) => index,
        None => return "",
    };

    let rest = &text[begin..];
    let end = rest
        .char_indices()
        .nth(len)
        .map(|(index, _)| begin + index)
        .unwrap_or(text.len());

    &text[begin..end]
}

/// The first `limit` lines of `window`, trimmed.
pub fn section_lines(window: &str, limit: usize) -> Vec<&str> {
    window.split('\n').take(limit).map(str::trim).collect()
}

pub fn is_bullet(line: &str) -> bool {
    line.starts_with(BULLETS)
}

/// The text after a leading bullet character, or `None` for plain lines.
pub fn strip_bullet(line: &str) -> Option<&str> {
    line.strip_prefix(BULLETS).map(str::trim)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fold_case_preserves_char_count() {
        let text = "İstanbul Ünİversity";
        let folded = fold_case(text);
        assert_eq!(char_len(&folded), char_len(text));
        assert!(folded.starts_with('i'));
    }

    #[test]
    fn test_char_window() {
        assert_eq!(char_window("education history", 0, 9), "education");
        assert_eq!(char_window("résumé skills", 7, 100), "skills");
        assert_eq!(char_window("short", 10, 5), "");
        assert_eq!(char_window("ab", 0, 0), "");
    }

    #[test]
    fn test_section_lines_trims_and_caps() {
        let lines = section_lines("  Projects \r\n  first\n\nsecond\nthird", 4);
        assert_eq!(lines, vec!["Projects", "first", "", "second"]);
    }

    #[test]
    fn test_bullets() {
        assert!(is_bullet("● Led the team"));
        assert!(is_bullet("- shipped"));
        assert!(!is_bullet("Shipped - fast"));
        assert_eq!(strip_bullet("○  Mentored juniors"), Some("Mentored juniors"));
        assert_eq!(strip_bullet("Plain line"), None);
    }
}
