//! HTML rendering for body stories.

use crate::extract::is_author_paragraph;
use crate::model::{ContentElement, ParsedStory};

use super::HtmlOptions;

/// Render a body story to HTML, dropping its author paragraph.
pub fn to_html(story: &ParsedStory, author: &str, options: &HtmlOptions) -> String {
    HtmlRenderer::new(options.clone()).render(story, author)
}

/// Count `<p>` paragraphs in rendered HTML.
pub fn count_html_paragraphs(html: &str) -> usize {
    html.matches("<p>").count()
}

/// HTML renderer.
pub struct HtmlRenderer {
    options: HtmlOptions,
}

impl HtmlRenderer {
    /// Create a new HTML renderer.
    pub fn new(options: HtmlOptions) -> Self {
        Self { options }
    }

    /// Render a story's elements as `<p>` paragraphs joined by newlines.
    pub fn render(&self, story: &ParsedStory, author: &str) -> String {
        let mut paragraphs = Vec::new();

        for group in group_by_paragraph(&story.elements) {
            let plain = group
                .iter()
                .map(|e| e.text.as_str())
                .collect::<Vec<_>>()
                .join(" ");

            if is_author_paragraph(&plain, author) {
                log::debug!(
                    "{}: dropped author paragraph '{}'",
                    story.story_id,
                    plain
                );
                continue;
            }

            let html: String = group
                .iter()
                .map(|e| format_element(e, &self.options))
                .collect();
            if !html.trim().is_empty() {
                paragraphs.push(format!("<p>{}</p>", html));
            }
        }

        paragraphs.join("\n")
    }
}

/// Split elements into runs of equal paragraph index, keeping order.
pub fn group_by_paragraph(elements: &[ContentElement]) -> Vec<&[ContentElement]> {
    let mut groups = Vec::new();
    let mut start = 0;

    for i in 1..=elements.len() {
        if i == elements.len() || elements[i].paragraph_index != elements[start].paragraph_index {
            if start < i {
                groups.push(&elements[start..i]);
            }
            start = i;
        }
    }

    groups
}

/// Render one element: bold, then italic, then heading by font size.
pub fn format_element(element: &ContentElement, options: &HtmlOptions) -> String {
    let mut html = if options.escape_text {
        escape_html(&element.text)
    } else {
        element.text.clone()
    };

    if element.is_bold {
        html = format!("<strong>{}</strong>", html);
    }
    if element.is_italic {
        html = format!("<em>{}</em>", html);
    }

    if element.font_size >= options.h3_min_font_size {
        html = format!("<h3>{}</h3>", html);
    } else if element.font_size >= options.h4_min_font_size && !element.is_bold {
        html = format!("<h4>{}</h4>", html);
    }

    html
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
