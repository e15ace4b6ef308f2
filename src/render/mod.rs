//! Rendering of body stories and extraction results.

mod html;
mod json;
mod options;
mod result;
mod text;

pub use html::{count_html_paragraphs, format_element, group_by_paragraph, to_html, HtmlRenderer};
pub use json::{to_json, JsonFormat};
pub use options::HtmlOptions;
pub use result::{ExtractionSummary, MultiAuthorArticle};
pub use text::to_plain_content;
