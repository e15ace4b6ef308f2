//! Extraction options and heuristic constants.

use crate::render::HtmlOptions;

/// Options for extracting articles from a document's stories.
#[derive(Debug, Clone, Default)]
pub struct ExtractOptions {
    /// Story classification thresholds
    pub classify: ClassifyConfig,

    /// Headline matching weights and thresholds
    pub matching: MatchConfig,

    /// HTML rendering options
    pub html: HtmlOptions,

    /// Sort stories by filename before processing
    pub sort_by_filename: bool,

    /// Parse stories in parallel (results keep input order)
    pub parallel: bool,
}

impl ExtractOptions {
    /// Create new extract options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set classification thresholds.
    pub fn with_classify(mut self, classify: ClassifyConfig) -> Self {
        self.classify = classify;
        self
    }

    /// Set headline matching configuration.
    pub fn with_matching(mut self, matching: MatchConfig) -> Self {
        self.matching = matching;
        self
    }

    /// Set HTML rendering options.
    pub fn with_html(mut self, html: HtmlOptions) -> Self {
        self.html = html;
        self
    }

    /// Sort stories by filename before category detection.
    ///
    /// Category detection depends on story order. Callers that cannot supply
    /// stories in archive order can opt into the archive's filename order.
    pub fn sorted_by_filename(mut self) -> Self {
        self.sort_by_filename = true;
        self
    }

    /// Enable or disable parallel story parsing.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}

/// Thresholds for headline/body classification.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassifyConfig {
    /// Average font size at or above which a bold story may be a headline
    pub headline_min_font_size: f64,

    /// Headlines are shorter than this many characters
    pub headline_max_len: usize,

    /// Headlines have at most this many paragraphs
    pub headline_max_paragraphs: usize,

    /// Body stories are longer than this many characters
    pub body_min_len: usize,

    /// Body stories have more than this many paragraphs
    pub body_min_paragraphs: usize,

    /// Stories shorter than this many characters are noise
    pub min_story_len: usize,
}

impl Default for ClassifyConfig {
    fn default() -> Self {
        Self {
            headline_min_font_size: 15.0,
            headline_max_len: 100,
            headline_max_paragraphs: 1,
            body_min_len: 50,
            body_min_paragraphs: 1,
            min_story_len: 3,
        }
    }
}

/// Weights and thresholds for headline matching.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchConfig {
    /// Minimum content similarity for a direct match
    pub similarity_threshold: f64,

    /// Weight of content similarity in the combined score
    pub content_weight: f64,

    /// Weight of id proximity in the combined score
    pub proximity_weight: f64,

    /// Minimum combined score for a match
    pub combined_threshold: f64,

    /// Weight of the word-overlap ratio in content similarity
    pub word_overlap_weight: f64,

    /// Score per shared capitalized phrase
    pub entity_weight: f64,

    /// Score per shared importance keyword
    pub keyword_weight: f64,

    /// Body characters compared for word overlap
    pub word_window: usize,

    /// Body characters compared for capitalized phrases
    pub entity_window: usize,

    /// Look for capitalized phrases in the original-case text. When off,
    /// phrases are searched in lowercased text and never score.
    pub case_sensitive_entities: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            similarity_threshold: 2.0,
            content_weight: 0.7,
            proximity_weight: 0.3,
            combined_threshold: 1.0,
            word_overlap_weight: 5.0,
            entity_weight: 2.0,
            keyword_weight: 1.0,
            word_window: 300,
            entity_window: 400,
            case_sensitive_entities: true,
        }
    }
}
