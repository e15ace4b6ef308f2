//! Headline matching.
//!
//! Body stories claim headlines greedily in document order. Each body story
//! first looks for a headline sharing enough vocabulary with its opening
//! text; failing that, a combined score also rewards headlines whose story
//! ids are numerically close. A claimed headline is unavailable to later
//! body stories.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

use super::MatchConfig;
use crate::model::ParsedStory;

/// Keywords that signal a shared subject when present in both texts.
pub const IMPORTANT_KEYWORDS: &[&str] = &[
    "president",
    "minister",
    "governor",
    "senator",
    "chairman",
    "commission",
    "committee",
    "party",
    "government",
    "assembly",
    "court",
    "justice",
    "university",
    "union",
    "movement",
    "congress",
    "forum",
];

const STOP_WORDS: &[&str] = &[
    "this", "that", "with", "from", "they", "were", "been", "have", "will", "would", "could",
    "should", "said", "says", "also", "more", "most", "much", "many", "some", "very", "when",
    "where", "what", "which", "while", "after", "before", "during", "since", "until", "about",
    "above", "below", "between", "through", "against",
];

/// Fallback headlines are cut to this many characters.
const FALLBACK_HEADLINE_LEN: usize = 100;

static WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b[a-z]{4,}\b").unwrap());
static ENTITY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[A-Z][a-z]+(?:\s+[A-Z][a-z]+)*\b").unwrap());
static DIGITS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-9]+").unwrap());

/// How a headline was matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchStrategy {
    /// Content similarity alone reached its threshold
    Content,
    /// Similarity and id proximity together reached their threshold
    Combined,
}

/// A headline claimed by a body story.
#[derive(Debug, Clone, Copy)]
pub struct HeadlineMatch<'a> {
    /// The matched headline story
    pub headline: &'a ParsedStory,
    /// Strategy that accepted the match
    pub strategy: MatchStrategy,
    /// Score under that strategy
    pub score: f64,
}

/// Headline story ids already claimed within one document.
#[derive(Debug, Clone, Default)]
pub struct UsedHeadlines {
    ids: HashSet<String>,
}

impl UsedHeadlines {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a headline as used. Returns `false` if it already was.
    pub fn claim(&mut self, story_id: &str) -> bool {
        self.ids.insert(story_id.to_string())
    }

    /// Whether a headline has been used.
    pub fn contains(&self, story_id: &str) -> bool {
        self.ids.contains(story_id)
    }

    /// Number of used headlines.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether no headline has been used.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

/// Matches body stories to headline stories for one document.
pub struct HeadlineMatcher<'a> {
    headlines: &'a [ParsedStory],
    config: &'a MatchConfig,
    used: UsedHeadlines,
}

impl<'a> HeadlineMatcher<'a> {
    /// Create a matcher over the document's headline stories.
    pub fn new(headlines: &'a [ParsedStory], config: &'a MatchConfig) -> Self {
        Self {
            headlines,
            config,
            used: UsedHeadlines::new(),
        }
    }

    /// Headlines not yet claimed, in document order.
    pub fn unused(&self) -> impl Iterator<Item = &'a ParsedStory> + '_ {
        self.headlines
            .iter()
            .filter(move |h| !self.used.contains(&h.story_id))
    }

    /// Ids claimed so far.
    pub fn used(&self) -> &UsedHeadlines {
        &self.used
    }

    /// Find and claim the best headline for a body story.
    pub fn claim(&mut self, body: &ParsedStory) -> Option<HeadlineMatch<'a>> {
        let found = self.find(body)?;
        self.used.claim(&found.headline.story_id);
        log::debug!(
            "{}: matched headline {} ({:?}, score {:.2})",
            body.story_id,
            found.headline.story_id,
            found.strategy,
            found.score
        );
        Some(found)
    }

    /// Find the best unused headline for a body story without claiming it.
    pub fn find(&self, body: &ParsedStory) -> Option<HeadlineMatch<'a>> {
        let config = self.config;
        let candidates: Vec<(&'a ParsedStory, f64)> = self
            .unused()
            .map(|h| (h, content_similarity(&h.raw_content, &body.raw_content, config)))
            .collect();

        if let Some((headline, score)) = first_max(candidates.iter().copied()) {
            if score >= config.similarity_threshold {
                return Some(HeadlineMatch {
                    headline,
                    strategy: MatchStrategy::Content,
                    score,
                });
            }
        }

        let combined = candidates.iter().map(|&(headline, similarity)| {
            let distance = id_distance(&body.story_id, &headline.story_id);
            (headline, combined_score(similarity, distance, config))
        });

        match first_max(combined) {
            Some((headline, score)) if score >= config.combined_threshold => Some(HeadlineMatch {
                headline,
                strategy: MatchStrategy::Combined,
                score,
            }),
            _ => None,
        }
    }
}

/// Highest-scoring candidate; the earliest one wins ties.
fn first_max<'a, I>(candidates: I) -> Option<(&'a ParsedStory, f64)>
where
    I: IntoIterator<Item = (&'a ParsedStory, f64)>,
{
    let mut best: Option<(&'a ParsedStory, f64)> = None;
    for (story, score) in candidates {
        if best.map_or(true, |(_, best_score)| score > best_score) {
            best = Some((story, score));
        }
    }
    best
}

/// Similarity between a headline and a body text.
///
/// Sums the weighted share of headline words found near the start of the
/// body, a bonus per shared capitalized phrase, and a bonus per important
/// keyword present in both.
pub fn content_similarity(headline: &str, body: &str, config: &MatchConfig) -> f64 {
    let mut score = 0.0;

    let headline_lower = headline.to_lowercase();
    let body_lower = body.to_lowercase();

    let headline_words = significant_words(&headline_lower);
    let body_window: String = body_lower.chars().take(config.word_window).collect();
    let body_words = significant_words(&body_window);

    if !headline_words.is_empty() {
        let common = headline_words.intersection(&body_words).count();
        score += common as f64 / headline_words.len() as f64 * config.word_overlap_weight;
    }

    // Lowercased sources never contain a capitalized phrase
    let (headline_source, body_source) = if config.case_sensitive_entities {
        (headline, body)
    } else {
        (headline_lower.as_str(), body_lower.as_str())
    };
    let body_entity_window: String = body_source.chars().take(config.entity_window).collect();
    let headline_entities: HashSet<&str> = ENTITY
        .find_iter(headline_source)
        .map(|m| m.as_str())
        .collect();
    let body_entities: HashSet<&str> = ENTITY
        .find_iter(&body_entity_window)
        .map(|m| m.as_str())
        .collect();
    let common_entities = headline_entities.intersection(&body_entities).count();
    score += common_entities as f64 * config.entity_weight;

    for keyword in IMPORTANT_KEYWORDS {
        if headline_lower.contains(keyword) && body_lower.contains(keyword) {
            score += config.keyword_weight;
        }
    }

    score
}

fn significant_words(text: &str) -> HashSet<&str> {
    WORD.find_iter(text)
        .map(|m| m.as_str())
        .filter(|w| !STOP_WORDS.contains(w))
        .collect()
}

/// Numeric distance between the first digit runs of two story ids.
///
/// Infinite when either id has no digits.
pub fn id_distance(a: &str, b: &str) -> f64 {
    match (id_number(a), id_number(b)) {
        (Some(x), Some(y)) => (x - y).abs(),
        _ => f64::INFINITY,
    }
}

fn id_number(id: &str) -> Option<f64> {
    DIGITS.find(id).and_then(|m| m.as_str().parse::<f64>().ok())
}

/// Proximity score for an id distance: 10 at distance 0, falling to 0 at 100.
pub fn proximity_score(distance: f64) -> f64 {
    (10.0 - distance / 10.0).max(0.0)
}

/// Weighted blend of content similarity and id proximity.
pub fn combined_score(similarity: f64, distance: f64, config: &MatchConfig) -> f64 {
    similarity * config.content_weight + proximity_score(distance) * config.proximity_weight
}

/// Headline taken from a body story's own text when no headline matched.
///
/// Uses the first bold element above body size, else the first sentence of
/// the first paragraph, cut to 100 characters.
pub fn fallback_headline(story: &ParsedStory) -> String {
    if let Some(element) = story.elements.iter().find(|e| {
        e.is_bold && e.font_size > 10.0 && e.text.chars().count() < FALLBACK_HEADLINE_LEN
    }) {
        return element.text.clone();
    }

    let Some(first) = story.paragraphs.first() else {
        return String::new();
    };
    let sentence = first.split('.').next().unwrap_or_default();
    if sentence.chars().count() > FALLBACK_HEADLINE_LEN {
        let cut: String = sentence.chars().take(FALLBACK_HEADLINE_LEN).collect();
        format!("{}...", cut)
    } else {
        sentence.to_string()
    }
}
