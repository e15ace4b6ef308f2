//! Data model for story and article content.
//!
//! Parsed stories are the intermediate representation between the story
//! parser and the extraction pipeline; articles are the final records handed
//! to a publishing collaborator.

mod article;
mod story;

pub use article::{Article, ArticleMetadata, ArticleType};
pub use story::{
    ContentElement, ParagraphLayout, ParsedStory, RunLayout, StoryInput, StoryLayout,
    DEFAULT_FONT_SIZE, DEFAULT_FONT_STYLE,
};
