//! Story classification: headline, body content, or noise.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::ClassifyConfig;
use crate::model::ParsedStory;

/// Classification of a story.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StoryKind {
    /// Large, bold, short, single-paragraph text
    Headline,
    /// Article body text
    BodyContent,
    /// Neither; excluded from matching
    Unknown,
}

/// Page furniture that never forms an article: section slugs, jump lines,
/// photo credits, datelines, page numbers.
static METADATA_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?i)^news$",
        r"(?i)^All stories continued on",
        r"(?i)^Continued from",
        r"(?i)^•L-R:",
        r"(?i)^Photo:",
        r"(?i)^(MONDAY|TUESDAY|WEDNESDAY|THURSDAY|FRIDAY|SATURDAY|SUNDAY),.*\d{4}$",
        r"(?i)^\d{1,2}$",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

static AUTHOR_LINE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"^[A-Z][a-z]+(?:\s+[A-Z][a-z]+)*,\s+[A-Z][a-z]+",
        r"^By\s+[A-Z][a-z]+",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

/// Check if text is page metadata rather than news content.
pub fn is_metadata(text: &str, config: &ClassifyConfig) -> bool {
    let text = text.trim();
    if text.chars().count() < config.min_story_len {
        return true;
    }
    METADATA_PATTERNS.iter().any(|re| re.is_match(text))
}

/// Check if text starts with an author attribution (`Name, City` or `By Name`).
pub fn looks_like_author_line(text: &str) -> bool {
    let text = text.trim();
    AUTHOR_LINE_PATTERNS.iter().any(|re| re.is_match(text))
}

/// Classify a story by formatting and length.
pub fn classify(story: &ParsedStory, config: &ClassifyConfig) -> StoryKind {
    let Some(avg_font_size) = story.average_font_size() else {
        return StoryKind::Unknown;
    };
    let has_bold = story.has_bold();
    let length = story.raw_content.chars().count();
    let paragraph_count = story.paragraph_count();

    if avg_font_size >= config.headline_min_font_size
        && has_bold
        && length < config.headline_max_len
        && paragraph_count <= config.headline_max_paragraphs
    {
        return StoryKind::Headline;
    }

    if avg_font_size < config.headline_min_font_size
        && length > config.body_min_len
        && paragraph_count > config.body_min_paragraphs
    {
        return StoryKind::BodyContent;
    }

    if looks_like_author_line(&story.raw_content) {
        return StoryKind::BodyContent;
    }

    StoryKind::Unknown
}

/// Classify a story, treating metadata noise as `Unknown`.
pub fn classify_filtered(story: &ParsedStory, config: &ClassifyConfig) -> StoryKind {
    if is_metadata(&story.raw_content, config) {
        log::debug!("{}: metadata, skipped", story.story_id);
        return StoryKind::Unknown;
    }
    let kind = classify(story, config);
    log::debug!("{}: classified as {:?}", story.story_id, kind);
    kind
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ContentElement;

    fn story(text: &str, size: f64, style: &str, paragraphs: &[&str]) -> ParsedStory {
        ParsedStory::new(
            "u10",
            "Story_u10.xml",
            vec![ContentElement::new(text, size, style, 1)],
            paragraphs.iter().map(|p| p.to_string()).collect(),
        )
    }

    #[test]
    fn test_metadata_noise() {
        let config = ClassifyConfig::default();
        assert!(is_metadata("news", &config));
        assert!(is_metadata("NEWS", &config));
        assert!(is_metadata("Photo: Jane Smith", &config));
        assert!(is_metadata("•L-R: Governor and aides", &config));
        assert!(is_metadata("All stories continued on page 4", &config));
        assert!(is_metadata("Continued from page 1", &config));
        assert!(is_metadata("MONDAY, JANUARY 12, 2025", &config));
        assert!(is_metadata("Friday, March 7, 2025", &config));
        assert!(is_metadata("37", &config));
        assert!(is_metadata("ab", &config));
        assert!(is_metadata("   ", &config));

        assert!(!is_metadata("newsroom updates", &config));
        assert!(!is_metadata("123", &config));
        assert!(!is_metadata("The council voted on Monday, 2025", &config));
    }

    #[test]
    fn test_headline_boundary() {
        let config = ClassifyConfig::default();
        let text = "H".repeat(99);
        let s = story(&text, 15.0, "Bold", &[&text]);
        assert_eq!(classify(&s, &config), StoryKind::Headline);

        let text = "H".repeat(100);
        let s = story(&text, 15.0, "Bold", &[&text]);
        assert_ne!(classify(&s, &config), StoryKind::Headline);
    }

    #[test]
    fn test_headline_requires_bold() {
        let config = ClassifyConfig::default();
        let s = story("City Council Approves Budget", 18.0, "Regular", &["City Council Approves Budget"]);
        assert_eq!(classify(&s, &config), StoryKind::Unknown);
    }

    #[test]
    fn test_body_content() {
        let config = ClassifyConfig::default();
        let s = story(
            "text",
            12.0,
            "Regular",
            &[
                "The council met on Tuesday to discuss the budget.",
                "Members voted in favour after a long debate.",
            ],
        );
        assert_eq!(classify(&s, &config), StoryKind::BodyContent);
    }

    #[test]
    fn test_author_line_makes_body() {
        let config = ClassifyConfig::default();
        let s = story("John Doe, Lagos", 12.0, "Regular", &["John Doe, Lagos"]);
        assert_eq!(classify(&s, &config), StoryKind::BodyContent);

        let s = story("By Jane Smith", 12.0, "Regular", &["By Jane Smith"]);
        assert_eq!(classify(&s, &config), StoryKind::BodyContent);
    }

    #[test]
    fn test_photo_credit_filtered() {
        let config = ClassifyConfig::default();
        let s = story("Photo: Jane Smith", 9.0, "Italic", &["Photo: Jane Smith"]);
        assert_eq!(classify_filtered(&s, &config), StoryKind::Unknown);
    }

    #[test]
    fn test_author_line_shapes() {
        assert!(looks_like_author_line("John Doe, Lagos"));
        assert!(looks_like_author_line("By Jane"));
        assert!(!looks_like_author_line("john doe, lagos"));
        assert!(!looks_like_author_line("The council voted"));
    }
}
