//! Author attribution: extraction from the first paragraph and removal from
//! plain and rich output.
//!
//! Both directions are driven by ordered rule tables; the first rule that
//! applies wins.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::model::ParsedStory;

/// First paragraphs shorter than this that start with a name are taken
/// whole as the author line.
pub const AUTHOR_LINE_MAX_LEN: usize = 60;

/// One or more capitalized names, optionally joined with "and".
const NAMES: &str = r"[A-Z][a-z]+(?:\s+[A-Z][a-z]+)*(?:\s+and\s+[A-Z][a-z]+(?:\s+[A-Z][a-z]+)*)*";

/// An author-shape rule; capture group 1 is the author.
pub struct AuthorRule {
    /// Rule name, for diagnostics
    pub name: &'static str,
    pattern: Regex,
}

impl AuthorRule {
    fn new(name: &'static str, pattern: &str) -> Self {
        Self {
            name,
            pattern: Regex::new(pattern).unwrap(),
        }
    }

    /// Apply the rule to a paragraph, returning the captured author.
    pub fn capture<'t>(&self, text: &'t str) -> Option<&'t str> {
        self.pattern
            .captures(text)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }
}

/// Author shapes in priority order.
pub static AUTHOR_RULES: Lazy<Vec<AuthorRule>> = Lazy::new(|| {
    vec![
        AuthorRule::new("names_city", &format!(r"^({}),\s+[A-Z][a-z]+", NAMES)),
        AuthorRule::new("names_only", &format!(r"^({})\s*$", NAMES)),
        AuthorRule::new(
            "hyphenated",
            r"^([A-Z][a-z]+-[A-Z][a-z]+(?:\s+[A-Z][a-z]+)*(?:\s+and\s+[A-Z][a-z]+-[A-Z][a-z]+(?:\s+[A-Z][a-z]+)*)*)",
        ),
        AuthorRule::new("by_line", r"^By\s+([A-Z][a-z]+(?:\s+[A-Z][a-z]+)*)"),
        AuthorRule::new("names_place", &format!(r"^({})\s*,\s*[A-Za-z]+", NAMES)),
    ]
});

static NAME_PREFIX: Lazy<Regex> = Lazy::new(|| Regex::new(&format!("^{}", NAMES)).unwrap());

static FUNCTION_WORD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(The|A|An|In|On|At|For|With|By|After|Before|During|Since|Until|About|Over|Under|Through|Against|Between|Among|Around|Inside|Outside|Upon|Within|Without|From|To|Of|Into|Onto|Across|Down|Up|Off|Out)\b",
    )
    .unwrap()
});

/// A pattern built around an extracted author: `^prefix AUTHOR suffix`,
/// matched case-insensitively.
#[derive(Debug, Clone, Copy)]
pub struct AuthorPattern {
    /// Regex fragment before the author
    pub prefix: &'static str,
    /// Regex fragment after the author
    pub suffix: &'static str,
}

impl AuthorPattern {
    const fn new(prefix: &'static str, suffix: &'static str) -> Self {
        Self { prefix, suffix }
    }

    /// Compile the pattern for a concrete author.
    pub fn compile(&self, author: &str) -> Option<Regex> {
        let pattern = format!("(?i)^{}{}{}", self.prefix, regex::escape(author), self.suffix);
        match Regex::new(&pattern) {
            Ok(re) => Some(re),
            Err(e) => {
                log::warn!("Skipping author pattern for '{}': {}", author, e);
                None
            }
        }
    }
}

/// Author spans stripped from the start of a paragraph, in order.
pub const REMOVAL_PATTERNS: &[AuthorPattern] = &[
    AuthorPattern::new("", r",\s+[A-Za-z]+\s*"),
    AuthorPattern::new("", r"\s+and\s+[A-Z][a-z]+(?:\s+[A-Z][a-z]+)*,\s+[A-Za-z]+\s*"),
    AuthorPattern::new("", r"\s*"),
    AuthorPattern::new("", r"\s+and\s+[A-Z][a-z]+(?:\s+[A-Z][a-z]+)*\s*"),
];

/// Shapes of a paragraph that only carries the author attribution.
pub const AUTHOR_PARAGRAPH_PATTERNS: &[AuthorPattern] = &[
    AuthorPattern::new("", ""),
    AuthorPattern::new(r"By\s+", ""),
    AuthorPattern::new("", r",\s+[A-Za-z]+"),
];

/// Extract the author attribution from a first paragraph.
pub fn extract_author_from(first_paragraph: &str) -> String {
    let first_paragraph = first_paragraph.trim();

    for rule in AUTHOR_RULES.iter() {
        if let Some(author) = rule.capture(first_paragraph) {
            let author = strip_location(author.trim());
            log::debug!("Author '{}' matched rule {}", author, rule.name);
            return author.to_string();
        }
    }

    if first_paragraph.chars().count() < AUTHOR_LINE_MAX_LEN && NAME_PREFIX.is_match(first_paragraph)
    {
        return first_paragraph.to_string();
    }

    String::new()
}

/// Extract the author attribution of a body story.
pub fn extract_author(story: &ParsedStory) -> String {
    story
        .first_paragraph()
        .map(extract_author_from)
        .unwrap_or_default()
}

/// Remove the author span from the start of a paragraph.
///
/// The removal patterns are tried in order and the first one that changes
/// the text wins. If none applies while the paragraph still names the
/// author, everything before the first function word is discarded.
pub fn remove_author(paragraph: &str, author: &str) -> String {
    let paragraph = paragraph.trim();
    if author.is_empty() {
        return paragraph.to_string();
    }

    for pattern in REMOVAL_PATTERNS {
        if let Some(re) = pattern.compile(author) {
            let cleaned = re.replace(paragraph, "");
            let cleaned = cleaned.trim();
            if cleaned != paragraph {
                return cleaned.to_string();
            }
        }
    }

    if paragraph.to_lowercase().contains(&author.to_lowercase()) {
        if let Some(m) = FUNCTION_WORD.find(paragraph) {
            return paragraph[m.start()..].trim().to_string();
        }
    }

    paragraph.to_string()
}

/// Check if a paragraph is only the author attribution.
pub fn is_author_paragraph(paragraph: &str, author: &str) -> bool {
    if author.is_empty() {
        return false;
    }
    let paragraph = paragraph.trim();
    AUTHOR_PARAGRAPH_PATTERNS
        .iter()
        .filter_map(|pattern| pattern.compile(author))
        .any(|re| re.is_match(paragraph))
}

fn strip_location(name: &str) -> &str {
    match name.find(',') {
        Some(idx) => &name[..idx],
        None => name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_and_city() {
        assert_eq!(extract_author_from("John Doe, Lagos"), "John Doe");
        assert_eq!(
            extract_author_from("John Doe and Mary Smith, Abuja"),
            "John Doe and Mary Smith"
        );
    }

    #[test]
    fn test_names_alone() {
        assert_eq!(extract_author_from("Chidi Okafor"), "Chidi Okafor");
        assert_eq!(
            extract_author_from("Chidi Okafor and Bola Ade "),
            "Chidi Okafor and Bola Ade"
        );
    }

    #[test]
    fn test_hyphenated_name() {
        assert_eq!(
            extract_author_from("Adaeze-Obi Nwosu reports from the capital"),
            "Adaeze-Obi Nwosu"
        );
    }

    #[test]
    fn test_by_line() {
        assert_eq!(extract_author_from("By Jane Smith in Lagos"), "Jane Smith");
    }

    #[test]
    fn test_names_then_spaced_comma() {
        assert_eq!(extract_author_from("John Doe ,Lagos"), "John Doe");
        assert_eq!(
            extract_author_from("John Doe and Mary Smith , Abuja bureau"),
            "John Doe and Mary Smith"
        );
    }

    #[test]
    fn test_short_line_fallback() {
        assert_eq!(
            extract_author_from("Chidi Okafor with agency reports"),
            "Chidi Okafor with agency reports"
        );
    }

    #[test]
    fn test_no_author() {
        assert_eq!(extract_author_from("the council voted"), "");
        assert_eq!(
            extract_author_from(
                "Lawmakers gathered at the chamber on Tuesday for a vote that lasted hours"
            ),
            ""
        );
        assert_eq!(extract_author_from(""), "");
    }

    #[test]
    fn test_remove_name_and_city() {
        assert_eq!(
            remove_author("John Doe, Lagos The council voted 7-2.", "John Doe"),
            "The council voted 7-2."
        );
        assert_eq!(
            remove_author("JOHN DOE, LAGOS The council voted.", "John Doe"),
            "The council voted."
        );
    }

    #[test]
    fn test_remove_falls_back_to_function_word() {
        assert_eq!(
            remove_author("Reporter Jane Smith writes that the council voted.", "Jane Smith"),
            "the council voted."
        );
    }

    #[test]
    fn test_remove_without_author_is_trim() {
        assert_eq!(remove_author("  Some text  ", ""), "Some text");
    }

    #[test]
    fn test_remove_is_idempotent() {
        let cases = [
            ("John Doe, Lagos The council voted 7-2.", "John Doe"),
            ("Chidi Okafor and Bola Ade, Abuja Residents protested.", "Chidi Okafor"),
            ("Reporter Jane Smith writes that the council voted.", "Jane Smith"),
            ("Chidi Okafor Lawmakers met.", "Chidi Okafor"),
        ];
        for (paragraph, author) in cases {
            let once = remove_author(paragraph, author);
            let twice = remove_author(&once, author);
            assert_eq!(once, twice, "not idempotent for {:?}", paragraph);
        }
    }

    #[test]
    fn test_author_paragraph() {
        assert!(is_author_paragraph("John Doe, Lagos", "John Doe"));
        assert!(is_author_paragraph("By John Doe", "John Doe"));
        assert!(is_author_paragraph("john doe", "John Doe"));
        assert!(!is_author_paragraph("The council voted.", "John Doe"));
        assert!(!is_author_paragraph("John Doe, Lagos", ""));
    }

    #[test]
    fn test_author_with_regex_metacharacters() {
        assert!(is_author_paragraph("A. (Ed.) Okoro, Lagos", "A. (Ed.) Okoro"));
        assert_eq!(remove_author("A. (Ed.) Okoro, Lagos Text here", "A. (Ed.) Okoro"), "Text here");
    }
}
