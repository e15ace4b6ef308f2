//! Story-level types produced by the story parser.

use serde::{Deserialize, Serialize};

/// Font size used when a run has no parseable `PointSize`.
pub const DEFAULT_FONT_SIZE: f64 = 12.0;

/// Font style used when a run has no `FontStyle`.
pub const DEFAULT_FONT_STYLE: &str = "Regular";

/// One story document as supplied by the archive collaborator.
#[derive(Debug, Clone)]
pub struct StoryInput {
    /// Name of the story file (e.g. `Stories/Story_u184ec.xml`)
    pub filename: String,

    /// Raw story XML
    pub data: Vec<u8>,
}

impl StoryInput {
    /// Create a new story input.
    pub fn new(filename: impl Into<String>, data: impl Into<Vec<u8>>) -> Self {
        Self {
            filename: filename.into(),
            data: data.into(),
        }
    }
}

/// A run of text with its formatting, tagged with its paragraph container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentElement {
    /// Trimmed, non-empty text
    pub text: String,

    /// Font size in points
    pub font_size: f64,

    /// Font style name (e.g. "Bold Italic")
    pub font_style: String,

    /// Whether the font style names a bold face
    pub is_bold: bool,

    /// Whether the font style names an italic face
    pub is_italic: bool,

    /// Applied character style reference
    pub applied_character_style: String,

    /// Applied paragraph style reference of the owning paragraph
    pub applied_paragraph_style: String,

    /// 1-based index of the owning paragraph container
    pub paragraph_index: usize,
}

impl ContentElement {
    /// Create an element with the given text, size and style.
    ///
    /// Bold and italic flags are derived from the style name.
    pub fn new(
        text: impl Into<String>,
        font_size: f64,
        font_style: impl Into<String>,
        paragraph_index: usize,
    ) -> Self {
        let font_style = font_style.into();
        Self {
            text: text.into(),
            font_size,
            is_bold: font_style.contains("Bold"),
            is_italic: font_style.contains("Italic"),
            font_style,
            applied_character_style: String::new(),
            applied_paragraph_style: String::new(),
            paragraph_index,
        }
    }

    /// Set the applied character and paragraph style references.
    pub fn with_styles(
        mut self,
        character_style: impl Into<String>,
        paragraph_style: impl Into<String>,
    ) -> Self {
        self.applied_character_style = character_style.into();
        self.applied_paragraph_style = paragraph_style.into();
        self
    }
}

/// Structural summary of a story: paragraph containers, their runs, and the
/// raw text of each run's direct `Content` children.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StoryLayout {
    /// Paragraph containers in document order
    pub paragraphs: Vec<ParagraphLayout>,
}

/// Runs of one paragraph container.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParagraphLayout {
    /// Formatted runs in document order
    pub runs: Vec<RunLayout>,
}

/// Direct `Content` children of one run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunLayout {
    /// Untrimmed text of each `Content` node (empty for `<Content/>`)
    pub contents: Vec<String>,
}

impl StoryLayout {
    /// The sole content text when the story is one paragraph holding one run
    /// holding one `Content` node.
    pub fn single_content(&self) -> Option<&str> {
        match self.paragraphs.as_slice() {
            [paragraph] => match paragraph.runs.as_slice() {
                [run] => match run.contents.as_slice() {
                    [content] => Some(content.as_str()),
                    _ => None,
                },
                _ => None,
            },
            _ => None,
        }
    }
}

/// A parsed story.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParsedStory {
    /// Story identifier (`Self` attribute), unique within a document
    pub story_id: String,

    /// Source filename
    pub filename: String,

    /// Formatted text runs in document order
    pub elements: Vec<ContentElement>,

    /// Paragraph texts joined with spaces
    pub raw_content: String,

    /// Paragraph texts joined with newlines
    pub full_text: String,

    /// Output paragraphs (split at containers and explicit line breaks)
    pub paragraphs: Vec<String>,

    /// Category carried by the story itself or inherited from the document
    pub category: Option<String>,

    /// Structural summary used for marker detection
    #[serde(skip)]
    pub layout: StoryLayout,
}

impl ParsedStory {
    /// Build a story from its elements and output paragraphs.
    pub fn new(
        story_id: impl Into<String>,
        filename: impl Into<String>,
        elements: Vec<ContentElement>,
        paragraphs: Vec<String>,
    ) -> Self {
        Self {
            story_id: story_id.into(),
            filename: filename.into(),
            raw_content: paragraphs.join(" "),
            full_text: paragraphs.join("\n"),
            elements,
            paragraphs,
            category: None,
            layout: StoryLayout::default(),
        }
    }

    /// Attach a structural layout.
    pub fn with_layout(mut self, layout: StoryLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Number of output paragraphs.
    pub fn paragraph_count(&self) -> usize {
        self.paragraphs.len()
    }

    /// Average font size across elements, or `None` for a story without elements.
    pub fn average_font_size(&self) -> Option<f64> {
        if self.elements.is_empty() {
            return None;
        }
        let total: f64 = self.elements.iter().map(|e| e.font_size).sum();
        Some(total / self.elements.len() as f64)
    }

    /// Whether any element is bold.
    pub fn has_bold(&self) -> bool {
        self.elements.iter().any(|e| e.is_bold)
    }

    /// First output paragraph, trimmed.
    pub fn first_paragraph(&self) -> Option<&str> {
        self.paragraphs.first().map(|p| p.trim())
    }

    /// Category of this story, or an empty string.
    pub fn category_or_empty(&self) -> &str {
        self.category.as_deref().unwrap_or("")
    }
}
