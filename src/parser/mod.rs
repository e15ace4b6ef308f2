//! Story document parsing.

mod story_parser;

pub use story_parser::StoryParser;
