//! Article extraction pipeline.
//!
//! Stories are parsed, stripped of their leading category markers,
//! classified into headlines and bodies, and assembled into articles:
//! one `news_article` per body story and one `standalone_headline` per
//! headline that no body story claimed.

mod author;
mod classify;
mod matcher;
mod options;

pub use author::{
    extract_author, extract_author_from, is_author_paragraph, remove_author, AuthorPattern,
    AuthorRule, AUTHOR_PARAGRAPH_PATTERNS, AUTHOR_RULES, REMOVAL_PATTERNS,
};
pub use classify::{classify, classify_filtered, is_metadata, looks_like_author_line, StoryKind};
pub use matcher::{
    combined_score, content_similarity, fallback_headline, id_distance, proximity_score,
    HeadlineMatch, HeadlineMatcher, MatchStrategy, UsedHeadlines, IMPORTANT_KEYWORDS,
};
pub use options::{ClassifyConfig, ExtractOptions, MatchConfig};

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::detect;
use crate::model::{Article, ArticleMetadata, ArticleType, ParsedStory, StoryInput};
use crate::parser::StoryParser;
use crate::render::{count_html_paragraphs, to_html, to_plain_content, ExtractionSummary};

/// Result of extracting one document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Extraction {
    /// Document category assembled from leading marker stories
    pub category: Option<String>,

    /// Articles in output order: news articles, then standalone headlines
    pub articles: Vec<Article>,

    /// Statistics over the articles
    pub summary: ExtractionSummary,
}

impl Extraction {
    /// Number of extracted articles.
    pub fn len(&self) -> usize {
        self.articles.len()
    }

    /// Whether no article was extracted.
    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }

    /// Articles of one type.
    pub fn articles_of_type(&self, article_type: ArticleType) -> impl Iterator<Item = &Article> {
        self.articles
            .iter()
            .filter(move |a| a.article_type == article_type)
    }
}

/// Extracts articles from the stories of one document.
///
/// An extractor holds only configuration; every call works on its own
/// state, so one extractor can serve concurrent documents.
#[derive(Debug, Clone, Default)]
pub struct Extractor {
    options: ExtractOptions,
}

impl Extractor {
    /// Create an extractor with the given options.
    pub fn new(options: ExtractOptions) -> Self {
        Self { options }
    }

    /// Extraction options.
    pub fn options(&self) -> &ExtractOptions {
        &self.options
    }

    /// Extract articles from raw story documents.
    ///
    /// Stories must be supplied in document order: the category is read
    /// from the markers at the head of the list. Stories that fail to parse
    /// are logged and skipped.
    pub fn extract(&self, stories: &[StoryInput]) -> Extraction {
        let mut inputs: Vec<&StoryInput> = stories.iter().collect();
        if self.options.sort_by_filename {
            inputs.sort_by(|a, b| a.filename.cmp(&b.filename));
        }

        let parsed = self.parse_all(&inputs);
        log::debug!("Parsed {} of {} stories", parsed.len(), inputs.len());
        self.extract_parsed(parsed)
    }

    /// Extract articles from already parsed stories, each tagged with its
    /// position in the document's story list.
    pub fn extract_parsed(&self, stories: Vec<(usize, ParsedStory)>) -> Extraction {
        let detected = detect::detect_category(stories.iter().map(|(i, s)| (*i, s)));

        let mut headlines = Vec::new();
        let mut bodies = Vec::new();

        for (_, mut story) in stories {
            if detected.is_marker(&story.story_id) {
                log::debug!("{}: category marker, excluded", story.story_id);
                continue;
            }
            if story.category.is_none() {
                story.category = detected.category.clone();
            }

            match classify_filtered(&story, &self.options.classify) {
                StoryKind::Headline => headlines.push(story),
                StoryKind::BodyContent => bodies.push(story),
                StoryKind::Unknown => {}
            }
        }

        let mut matcher = HeadlineMatcher::new(&headlines, &self.options.matching);
        let mut articles = Vec::with_capacity(bodies.len() + headlines.len());

        for body in &bodies {
            let matched = matcher.claim(body);
            articles.push(self.news_article(body, matched));
        }
        articles.extend(matcher.unused().map(standalone_article));

        let summary = ExtractionSummary::from_articles(&articles);
        log::debug!(
            "Extracted {} articles ({} headlines, {} bodies), category {:?}",
            articles.len(),
            headlines.len(),
            bodies.len(),
            detected.category
        );

        Extraction {
            category: detected.category,
            articles,
            summary,
        }
    }

    fn parse_all(&self, inputs: &[&StoryInput]) -> Vec<(usize, ParsedStory)> {
        if self.options.parallel {
            inputs
                .par_iter()
                .enumerate()
                .filter_map(|(i, input)| parse_input(input).map(|s| (i, s)))
                .collect()
        } else {
            inputs
                .iter()
                .enumerate()
                .filter_map(|(i, input)| parse_input(input).map(|s| (i, s)))
                .collect()
        }
    }

    fn news_article(&self, body: &ParsedStory, matched: Option<HeadlineMatch<'_>>) -> Article {
        let author = extract_author(body);
        let content = to_plain_content(body, &author);
        let content_html = to_html(body, &author, &self.options.html);
        let html_paragraph_count = count_html_paragraphs(&content_html);

        let (headline, headline_story_id, headline_filename, headline_elements) = match matched {
            Some(m) => (
                m.headline.raw_content.clone(),
                m.headline.story_id.clone(),
                m.headline.filename.clone(),
                m.headline.elements.len(),
            ),
            None => (fallback_headline(body), String::new(), String::new(), 0),
        };

        Article {
            story_id: body.story_id.clone(),
            headline_story_id,
            filename: body.filename.clone(),
            headline_filename,
            article_type: ArticleType::NewsArticle,
            headline,
            author,
            category: body.category_or_empty().to_string(),
            content,
            full_text: body.full_text.clone(),
            paragraphs: body.paragraphs.clone(),
            metadata: ArticleMetadata {
                body_elements: body.elements.len(),
                headline_elements,
                has_matching_headline: matched.is_some(),
                formatting_preserved: !content_html.is_empty(),
                html_paragraph_count,
            },
            content_html,
        }
    }
}

fn parse_input(input: &StoryInput) -> Option<ParsedStory> {
    match StoryParser::from_bytes(input.filename.as_str(), &input.data).parse() {
        Ok(Some(mut story)) => {
            story.category = detect::story_category(&story).map(str::to_string);
            Some(story)
        }
        Ok(None) => None,
        Err(e) => {
            log::warn!("Skipping story {}: {}", input.filename, e);
            None
        }
    }
}

fn standalone_article(headline: &ParsedStory) -> Article {
    Article {
        story_id: headline.story_id.clone(),
        headline_story_id: headline.story_id.clone(),
        filename: headline.filename.clone(),
        headline_filename: headline.filename.clone(),
        article_type: ArticleType::StandaloneHeadline,
        headline: headline.raw_content.clone(),
        author: String::new(),
        category: headline.category_or_empty().to_string(),
        content: String::new(),
        content_html: String::new(),
        full_text: headline.raw_content.clone(),
        paragraphs: vec![headline.raw_content.clone()],
        metadata: ArticleMetadata {
            body_elements: 0,
            headline_elements: headline.elements.len(),
            has_matching_headline: true,
            formatting_preserved: false,
            html_paragraph_count: 0,
        },
    }
}
