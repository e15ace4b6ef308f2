//! Summary statistics over extracted articles.

use std::collections::{BTreeMap, HashSet};

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::model::Article;

use super::count_html_paragraphs;

static AUTHOR_SEPARATOR: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\s+and\s+").unwrap());

/// Headlines in the multi-author listing are cut to this many characters.
const SUMMARY_HEADLINE_LEN: usize = 50;

/// An article credited to several authors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultiAuthorArticle {
    /// Headline, truncated for display
    pub headline: String,
    /// Raw author attribution
    pub authors: String,
}

/// Statistics collected over one document's articles.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionSummary {
    /// Total number of articles
    pub total_articles: usize,

    /// Article count per type (`news_article`, `standalone_headline`)
    pub articles_by_type: BTreeMap<String, usize>,

    /// Articles with a non-empty headline
    pub headlines_found: usize,

    /// Articles with an author
    pub articles_with_authors: usize,

    /// Distinct author names across all attributions
    pub total_unique_authors: usize,

    /// Articles with single-author attributions
    pub single_author_articles: usize,

    /// Articles with multi-author attributions
    pub multi_author_articles: Vec<MultiAuthorArticle>,

    /// Articles with non-empty plain content
    pub content_pieces: usize,

    /// Articles with HTML content
    pub articles_with_html: usize,

    /// Total `<p>` paragraphs across all HTML content
    pub total_html_paragraphs: usize,
}

impl ExtractionSummary {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Compute statistics over a list of articles.
    pub fn from_articles(articles: &[Article]) -> Self {
        let mut summary = Self::new();
        let mut unique_authors: HashSet<String> = HashSet::new();

        for article in articles {
            summary.add_article(article, &mut unique_authors);
        }

        summary.total_unique_authors = unique_authors.len();
        summary
    }

    fn add_article(&mut self, article: &Article, unique_authors: &mut HashSet<String>) {
        self.total_articles += 1;
        *self
            .articles_by_type
            .entry(article.article_type.as_str().to_string())
            .or_insert(0) += 1;

        if !article.headline.is_empty() {
            self.headlines_found += 1;
        }
        if !article.content.is_empty() {
            self.content_pieces += 1;
        }
        if article.has_html() {
            self.articles_with_html += 1;
            self.total_html_paragraphs += count_html_paragraphs(&article.content_html);
        }

        if article.author.is_empty() {
            return;
        }
        self.articles_with_authors += 1;

        if article.is_multi_author() {
            self.multi_author_articles.push(MultiAuthorArticle {
                headline: truncate_headline(&article.headline),
                authors: article.author.clone(),
            });
        } else {
            self.single_author_articles += 1;
        }

        for name in split_authors(&article.author) {
            unique_authors.insert(name);
        }
    }
}

/// Split an attribution into individual names, dropping trailing locations.
pub fn split_authors(attribution: &str) -> Vec<String> {
    AUTHOR_SEPARATOR
        .split(attribution.trim())
        .map(|name| {
            let name = name.trim();
            match name.find(',') {
                Some(idx) => &name[..idx],
                None => name,
            }
        })
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

fn truncate_headline(headline: &str) -> String {
    if headline.chars().count() > SUMMARY_HEADLINE_LEN {
        let cut: String = headline.chars().take(SUMMARY_HEADLINE_LEN).collect();
        format!("{}...", cut)
    } else {
        headline.to_string()
    }
}
