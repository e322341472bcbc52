//! Ordered line rules driving the record parsers
//!
//! Each parser keeps a list of rules and offers every line to them in order;
//! the first rule whose guard accepts the line performs its action and the
//! remaining rules are skipped.

/// A guard plus the state change it triggers.
pub struct LineRule<S> {
    pub name: &'static str,
    pub matches: fn(&S, &str) -> bool,
    pub apply: fn(&mut S, &str),
}

impl<S> LineRule<S> {
    pub fn new(name: &'static str, matches: fn(&S, &str) -> bool, apply: fn(&mut S, &str)) -> Self {
        Self { name, matches, apply }
    }
}

/// Apply the first rule that accepts `line` and return its name.
pub fn apply_first<S>(rules: &[LineRule<S>], state: &mut S, line: &str) -> Option<&'static str> {
    let rule = rules.iter().find(|rule| (rule.matches)(&*state, line))?;
    (rule.apply)(state, line);
    Some(rule.name)
}

/// Name of the rule that would fire for `line`, without applying it.
pub fn first_match<S>(rules: &[LineRule<S>], state: &S, line: &str) -> Option<&'static str> {
    rules
        .iter()
        .find(|rule| (rule.matches)(state, line))
        .map(|rule| rule.name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Tally {
        short: usize,
        long: usize,
    }

    fn rules() -> [LineRule<Tally>; 2] {
        [
            LineRule::new(
                "short",
                |_: &Tally, line: &str| line.len() < 5,
                |tally: &mut Tally, _: &str| tally.short += 1,
            ),
            LineRule::new(
                "long",
                |_: &Tally, line: &str| line.len() >= 3,
                |tally: &mut Tally, _: &str| tally.long += 1,
            ),
        ]
    }

    #[test]
    fn test_first_rule_wins() {
        let mut tally = Tally::default();
        assert_eq!(apply_first(&rules(), &mut tally, "abc"), Some("short"));
        assert_eq!(apply_first(&rules(), &mut tally, "abcdef"), Some("long"));
        assert_eq!(tally.short, 1);
        assert_eq!(tally.long, 1);
    }

    #[test]
    fn test_first_match_does_not_mutate() {
        let tally = Tally::default();
        assert_eq!(first_match(&rules(), &tally, "abcdef"), Some("long"));
        assert_eq!(tally.long, 0);
    }

    #[test]
    fn test_no_rule_matches() {
        let empty: [LineRule<Tally>; 0] = [];
        let mut tally = Tally::default();
        assert_eq!(apply_first(&empty, &mut tally, "anything"), None);
    }
}
