//! Category marker detection.
//!
//! Page layouts label their section with tiny stand-alone stories: one
//! paragraph, one run, one `Content` node holding a short word such as
//! `news` or `metro`. The leading consecutive run of such markers names the
//! category of the whole document.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::model::ParsedStory;

/// Maximum length, in characters, of a marker's text.
pub const MAX_MARKER_LEN: usize = 30;

static CATEGORY_CHARSET: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z0-9\s\-_&,\.]+$").unwrap());

/// A marker story found while scanning a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerRecord {
    /// Position of the story in the document's story list (0-based)
    pub position: usize,
    /// Story identifier
    pub story_id: String,
    /// Trimmed marker text
    pub text: String,
}

impl MarkerRecord {
    /// Create a new marker record.
    pub fn new(position: usize, story_id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            position,
            story_id: story_id.into(),
            text: text.into(),
        }
    }
}

/// Category assembled from the leading markers of a document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentCategory {
    /// Concatenated marker texts, `None` when no leading marker exists
    pub category: Option<String>,
    /// Story ids of the markers that formed the category
    pub marker_ids: HashSet<String>,
}

impl DocumentCategory {
    /// Whether the story was consumed as a category marker.
    pub fn is_marker(&self, story_id: &str) -> bool {
        self.marker_ids.contains(story_id)
    }
}

/// Trimmed text of a structurally trivial story, if it is one.
///
/// A marker has exactly one paragraph container holding exactly one run
/// holding exactly one `Content` node whose trimmed text is 1 to 30
/// characters long.
pub fn marker_text(story: &ParsedStory) -> Option<&str> {
    let text = story.layout.single_content()?.trim();
    let len = text.chars().count();
    if len > 0 && len <= MAX_MARKER_LEN {
        Some(text)
    } else {
        None
    }
}

/// Check if a story is shaped like a category marker.
pub fn is_marker(story: &ParsedStory) -> bool {
    marker_text(story).is_some()
}

/// Check if text is usable as a category name.
///
/// Rejects pure numbers (page markers), characters outside the category
/// charset, and anything resembling an e-mail address or URL.
pub fn is_valid_category(text: &str) -> bool {
    let text = text.trim();
    if text.is_empty() || text.chars().count() > MAX_MARKER_LEN {
        return false;
    }
    if !text.chars().any(char::is_alphabetic) {
        log::debug!("Rejected category '{}': no letters", text);
        return false;
    }
    if !CATEGORY_CHARSET.is_match(text) {
        return false;
    }
    !(text.contains('@') || text.to_lowercase().contains("http"))
}

/// Category carried by the story itself, when it is a marker with valid text.
pub fn story_category(story: &ParsedStory) -> Option<&str> {
    marker_text(story).filter(|text| is_valid_category(text))
}

/// Scan positioned stories for markers with valid category text.
pub fn scan_markers<'a, I>(stories: I) -> Vec<MarkerRecord>
where
    I: IntoIterator<Item = (usize, &'a ParsedStory)>,
{
    stories
        .into_iter()
        .filter_map(|(position, story)| {
            story_category(story).map(|text| {
                log::debug!(
                    "Found marker at position {}: '{}' ({})",
                    position,
                    text,
                    story.story_id
                );
                MarkerRecord::new(position, story.story_id.as_str(), text)
            })
        })
        .collect()
}

/// Assemble the document category from scanned markers.
///
/// Markers are accepted while their positions run 0, 1, 2, ...; the first
/// gap ends the category. Accepted texts are concatenated without separator.
pub fn assemble_category(markers: &[MarkerRecord]) -> DocumentCategory {
    let mut result = DocumentCategory::default();
    let mut category = String::new();

    for (expected, marker) in markers.iter().enumerate() {
        if marker.position != expected {
            log::debug!(
                "Marker gap at position {} (expected {})",
                marker.position,
                expected
            );
            break;
        }
        category.push_str(&marker.text);
        result.marker_ids.insert(marker.story_id.clone());
    }

    if !category.is_empty() {
        log::debug!("Document category: '{}'", category);
        result.category = Some(category);
    }
    result
}

/// Detect the document category from positioned stories.
pub fn detect_category<'a, I>(stories: I) -> DocumentCategory
where
    I: IntoIterator<Item = (usize, &'a ParsedStory)>,
{
    assemble_category(&scan_markers(stories))
}
