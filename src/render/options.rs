//! Rendering options.

/// Font size at or above which an element renders as `<h3>`.
pub const H3_MIN_FONT_SIZE: f64 = 20.0;

/// Font size at or above which a non-bold element renders as `<h4>`.
pub const H4_MIN_FONT_SIZE: f64 = 16.0;

/// Options for rendering body stories as HTML.
#[derive(Debug, Clone, PartialEq)]
pub struct HtmlOptions {
    /// Escape `&`, `<` and `>` in element text
    pub escape_text: bool,

    /// Minimum font size for `<h3>` elements
    pub h3_min_font_size: f64,

    /// Minimum font size for non-bold `<h4>` elements
    pub h4_min_font_size: f64,
}

impl HtmlOptions {
    /// Create new HTML options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable text escaping.
    pub fn with_escape(mut self, escape: bool) -> Self {
        self.escape_text = escape;
        self
    }

    /// Set the heading font size thresholds.
    pub fn with_heading_sizes(mut self, h3: f64, h4: f64) -> Self {
        self.h3_min_font_size = h3;
        self.h4_min_font_size = h4;
        self
    }
}

impl Default for HtmlOptions {
    fn default() -> Self {
        Self {
            escape_text: false,
            h3_min_font_size: H3_MIN_FONT_SIZE,
            h4_min_font_size: H4_MIN_FONT_SIZE,
        }
    }
}
