//! Ingredient highlighting for cook mode
//!
//! Splits an instruction into runs so the UI can emphasize the words that name
//! one of the recipe's ingredients. Matching here is word-bounded, unlike
//! [`crate::matcher::ingredient_appears_in`] which does plain substring tests.

use log::{debug, warn};
use regex::{Regex, RegexBuilder};

use crate::model::HighlightSegment;
use crate::normalize::extract_core_words;

/// Core words across all ingredients, first-seen order, without repeats
fn collect_words<S: AsRef<str>>(ingredients: &[S]) -> Vec<String> {
    let mut words: Vec<String> = Vec::new();
    for ingredient in ingredients {
        for word in extract_core_words(ingredient.as_ref()) {
            if !words.contains(&word) {
                words.push(word);
            }
        }
    }
    words
}

/// `\b(w1|w2|...)s?\b`, case-insensitive, with every word escaped
fn build_pattern(words: &[String]) -> Result<Regex, regex::Error> {
    let alternation = words
        .iter()
        .map(|w| regex::escape(w))
        .collect::<Vec<_>>()
        .join("|");

    RegexBuilder::new(&format!(r"\b(?:{})s?\b", alternation))
        .case_insensitive(true)
        .build()
}

/// Segment `instruction` into highlighted and plain runs
///
/// Highlighted runs keep the instruction's own casing. Concatenating the
/// `text` of the returned segments always gives back `instruction`. When
/// nothing matches, the whole instruction comes back as one plain segment.
///
/// # Example
/// ```
/// use dishlist_search::{highlight_segments, HighlightSegment};
///
/// let segments = highlight_segments(
///     "Add the chopped tomatoes to the pot",
///     &["2 cups chopped fresh tomatoes"],
/// );
/// assert_eq!(
///     segments,
///     vec![
///         HighlightSegment::plain("Add the chopped "),
///         HighlightSegment::highlighted("tomatoes"),
///         HighlightSegment::plain(" to the pot"),
///     ]
/// );
/// ```
pub fn highlight_segments<S: AsRef<str>>(
    instruction: &str,
    ingredients: &[S],
) -> Vec<HighlightSegment> {
    let fallback = || vec![HighlightSegment::plain(instruction)];

    let words = collect_words(ingredients);
    if words.is_empty() {
        return fallback();
    }

    let pattern = match build_pattern(&words) {
        Ok(pattern) => pattern,
        Err(e) => {
            warn!(
                "Could not build highlight pattern from {} words: {}",
                words.len(),
                e
            );
            return fallback();
        }
    };

    let mut segments = Vec::new();
    let mut last_end = 0;

    for found in pattern.find_iter(instruction) {
        if found.start() > last_end {
            segments.push(HighlightSegment::plain(
                &instruction[last_end..found.start()],
            ));
        }
        segments.push(HighlightSegment::highlighted(found.as_str()));
        last_end = found.end();
    }

    if segments.is_empty() {
        return fallback();
    }

    if last_end < instruction.len() {
        segments.push(HighlightSegment::plain(&instruction[last_end..]));
    }

    debug!(
        "Highlighted {} of {} segments",
        segments.iter().filter(|s| s.is_highlight).count(),
        segments.len()
    );
    segments
}
