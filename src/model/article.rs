//! Article records produced by the extraction pipeline.

use serde::{Deserialize, Serialize};

/// Kind of article record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArticleType {
    /// A body story, with a matched or synthesized headline
    NewsArticle,
    /// A headline story that no body story claimed
    StandaloneHeadline,
}

impl ArticleType {
    /// Wire name of the article type.
    pub fn as_str(&self) -> &'static str {
        match self {
            ArticleType::NewsArticle => "news_article",
            ArticleType::StandaloneHeadline => "standalone_headline",
        }
    }
}

impl std::fmt::Display for ArticleType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-article counts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleMetadata {
    /// Number of content elements in the body story
    pub body_elements: usize,

    /// Number of content elements in the headline story
    pub headline_elements: usize,

    /// Whether the article's headline came from a headline story
    pub has_matching_headline: bool,

    /// Whether rich HTML content was produced
    pub formatting_preserved: bool,

    /// Number of `<p>` paragraphs in the HTML content
    pub html_paragraph_count: usize,
}

/// One extracted article.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    /// Story id of the body (or standalone headline) story
    pub story_id: String,

    /// Story id of the matched headline story, empty if none
    pub headline_story_id: String,

    /// Source filename
    pub filename: String,

    /// Filename of the matched headline story, empty if none
    pub headline_filename: String,

    /// Article kind
    pub article_type: ArticleType,

    /// Headline text
    pub headline: String,

    /// Raw author attribution (may name several people)
    pub author: String,

    /// Section category
    pub category: String,

    /// Plain-text content with the author line removed
    pub content: String,

    /// Rich HTML content
    pub content_html: String,

    /// Newline-joined paragraphs of the source story
    pub full_text: String,

    /// Paragraphs of the source story
    pub paragraphs: Vec<String>,

    /// Counts
    pub metadata: ArticleMetadata,
}

impl Article {
    /// Whether this article carries HTML content.
    pub fn has_html(&self) -> bool {
        !self.content_html.is_empty()
    }

    /// Whether the author attribution names more than one person.
    pub fn is_multi_author(&self) -> bool {
        self.author.to_lowercase().contains(" and ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_article_type_serde() {
        let json = serde_json::to_string(&ArticleType::StandaloneHeadline).unwrap();
        assert_eq!(json, "\"standalone_headline\"");
        assert_eq!(ArticleType::NewsArticle.to_string(), "news_article");
    }
}
