//! # unidml
//!
//! News article extraction from IDML newspaper stories.
//!
//! This library reads the story documents of an IDML package (one
//! `Stories/Story_*.xml` per story) and turns them into article records:
//! headline, author, category, plain-text body and HTML body.
//!
//! ## Quick Start
//!
//! ```no_run
//! use unidml::{extract_articles, to_json, JsonFormat, StoryInput};
//!
//! fn main() -> unidml::Result<()> {
//!     let data = std::fs::read("Stories/Story_u1a2.xml")?;
//!     let stories = vec![StoryInput::new("Story_u1a2.xml", data)];
//!
//!     let extraction = extract_articles(&stories);
//!     println!("{}", to_json(&extraction, JsonFormat::Pretty)?);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Category detection**: leading one-line marker stories name the section
//! - **Classification**: headline, body and noise stories by formatting
//! - **Author attribution**: byline extraction and removal from the body
//! - **Headline matching**: content similarity with story-id proximity fallback
//! - **HTML rendering**: bold, italic and heading sizes kept as markup
//! - **Parallel processing**: optional Rayon story parsing

pub mod detect;
pub mod error;
pub mod extract;
pub mod model;
pub mod parser;
pub mod render;

// Re-export commonly used types
pub use detect::{detect_category, DocumentCategory, MarkerRecord};
pub use error::{Error, Result};
pub use extract::{ClassifyConfig, ExtractOptions, Extraction, Extractor, MatchConfig, StoryKind};
pub use model::{
    Article, ArticleMetadata, ArticleType, ContentElement, ParsedStory, StoryInput, StoryLayout,
};
pub use parser::StoryParser;
pub use render::{ExtractionSummary, HtmlOptions, JsonFormat};

use std::path::Path;

use serde::Serialize;

/// Parse one story document from bytes.
///
/// Returns `Ok(None)` when the story holds no text.
///
/// # Example
///
/// ```no_run
/// use unidml::parse_story;
///
/// let data = std::fs::read("Story_u1a2.xml").unwrap();
/// if let Some(story) = parse_story("Story_u1a2.xml", &data).unwrap() {
///     println!("{}: {}", story.story_id, story.raw_content);
/// }
/// ```
pub fn parse_story(filename: &str, data: &[u8]) -> Result<Option<ParsedStory>> {
    StoryParser::from_bytes(filename, data).parse()
}

/// Parse one story document from disk.
///
/// # Example
///
/// ```no_run
/// use unidml::parse_story_file;
///
/// let story = parse_story_file("Stories/Story_u1a2.xml").unwrap();
/// ```
pub fn parse_story_file<P: AsRef<Path>>(path: P) -> Result<Option<ParsedStory>> {
    let parser = StoryParser::open(path)?;
    parser.parse()
}

/// Extract articles from a document's stories with default options.
///
/// Stories must be in document order. Malformed stories are skipped.
pub fn extract_articles(stories: &[StoryInput]) -> Extraction {
    Extractor::default().extract(stories)
}

/// Extract articles with custom options.
///
/// # Example
///
/// ```no_run
/// use unidml::{extract_articles_with_options, ExtractOptions, HtmlOptions};
///
/// let options = ExtractOptions::new()
///     .sorted_by_filename()
///     .with_parallel(true)
///     .with_html(HtmlOptions::new().with_escape(true));
/// let extraction = extract_articles_with_options(&[], &options);
/// assert!(extraction.is_empty());
/// ```
pub fn extract_articles_with_options(stories: &[StoryInput], options: &ExtractOptions) -> Extraction {
    Extractor::new(options.clone()).extract(stories)
}

/// Serialize an extraction, article list or single article to JSON.
pub fn to_json<T: Serialize + ?Sized>(value: &T, format: JsonFormat) -> Result<String> {
    render::to_json(value, format)
}
