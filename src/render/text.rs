//! Plain-text rendering for body stories.

use crate::extract::remove_author;
use crate::model::ParsedStory;

/// A cleaned first paragraph is kept only if more than this many characters remain.
const MIN_FIRST_PARAGRAPH_LEN: usize = 10;

/// Render a body story's paragraphs as plain text with the author span removed.
pub fn to_plain_content(story: &ParsedStory, author: &str) -> String {
    let Some((first, rest)) = story.paragraphs.split_first() else {
        return String::new();
    };

    let mut paragraphs: Vec<String> = Vec::with_capacity(story.paragraphs.len());

    if author.is_empty() {
        paragraphs.extend(non_empty(&story.paragraphs));
    } else {
        let cleaned = remove_author(first.trim(), author);
        if cleaned.trim().chars().count() > MIN_FIRST_PARAGRAPH_LEN {
            paragraphs.push(cleaned.trim().to_string());
        }
        paragraphs.extend(non_empty(rest));
    }

    paragraphs.join("\n")
}

fn non_empty(paragraphs: &[String]) -> impl Iterator<Item = String> + '_ {
    paragraphs
        .iter()
        .map(|p| p.trim())
        .filter(|p| !p.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn story(paragraphs: &[&str]) -> ParsedStory {
        ParsedStory::new(
            "u30",
            "Story_u30.xml",
            vec![],
            paragraphs.iter().map(|p| p.to_string()).collect(),
        )
    }

    #[test]
    fn test_author_line_removed() {
        let s = story(&["John Doe, Lagos", "The council voted 7-2 to approve the plan."]);
        assert_eq!(
            to_plain_content(&s, "John Doe"),
            "The council voted 7-2 to approve the plan."
        );
    }

    #[test]
    fn test_author_prefix_removed_from_long_first_paragraph() {
        let s = story(&["John Doe, Lagos The council voted on the budget.", "  ", " More. "]);
        assert_eq!(
            to_plain_content(&s, "John Doe"),
            "The council voted on the budget.\nMore."
        );
    }

    #[test]
    fn test_no_author_keeps_everything() {
        let s = story(&[" First ", "", "Second"]);
        assert_eq!(to_plain_content(&s, ""), "First\nSecond");
    }

    #[test]
    fn test_empty_story() {
        assert_eq!(to_plain_content(&story(&[]), "John Doe"), "");
    }
}
