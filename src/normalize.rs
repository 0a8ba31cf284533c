//! Ingredient name normalization
//!
//! Reduces a raw ingredient line such as `"2 cups chopped fresh tomatoes"` to
//! its significant ("core") words: quantities, units, preparation words and
//! stop-words are removed, and everything is lowercased.

use lazy_static::lazy_static;
use log::trace;
use regex::Regex;

/// Measurement units stripped together with an optional leading quantity
pub const UNITS: &[&str] = &[
    "cups",
    "cup",
    "tbsp",
    "tsp",
    "teaspoon",
    "tablespoon",
    "oz",
    "ounce",
    "lb",
    "pound",
    "g",
    "gram",
    "kg",
    "ml",
    "liter",
    "pinch",
    "dash",
    "handful",
];

/// Preparation words that say nothing about what the ingredient is
pub const PREP_WORDS: &[&str] = &[
    "chopped", "diced", "sliced", "minced", "grated", "shredded", "crushed", "whole", "fresh",
    "dried", "frozen", "canned", "cooked", "raw", "to taste",
];

pub const STOP_WORDS: &[&str] = &["a", "an", "the", "of", "for", "in", "on", "to", "and", "or"];

/// Words shorter than this (in characters) never count as core words
const MIN_WORD_LEN: usize = 3;

lazy_static! {
    static ref UNIT_REGEX: Regex = Regex::new(&format!(
        r"(?i)\b(?:[0-9]+(?:[./][0-9]+)?\s*)?(?:{})\b",
        alternation(UNITS)
    ))
    .expect("Unit pattern should be valid");
    static ref PREP_REGEX: Regex =
        Regex::new(&format!(r"(?i)\b(?:{})\b", alternation(PREP_WORDS)))
            .expect("Prep word pattern should be valid");
    static ref LEFTOVER_REGEX: Regex =
        Regex::new(r"[0-9,()]").expect("Leftover character pattern should be valid");
}

fn alternation(words: &[&str]) -> String {
    words
        .iter()
        .map(|w| regex::escape(w))
        .collect::<Vec<_>>()
        .join("|")
}

pub fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.contains(&word)
}

/// Extract the core words of an ingredient line
///
/// Order follows the source text and duplicates are kept. Never fails: input
/// with nothing meaningful in it (empty, punctuation only, "to taste")
/// yields an empty vector.
///
/// Digits are stripped after units are removed, so a glued token such as
/// `"cup1"` survives as the core word `"cup"`. Feeding that output back in
/// then yields nothing. Re-running is only stable for input without such
/// unit-plus-digit tokens.
///
/// # Example
/// ```
/// use dishlist_search::extract_core_words;
///
/// assert_eq!(extract_core_words("2 cups chopped fresh tomatoes"), vec!["tomatoes"]);
/// ```
pub fn extract_core_words(ingredient: &str) -> Vec<String> {
    let lowered = ingredient.to_lowercase();
    let without_units = UNIT_REGEX.replace_all(&lowered, "");
    let without_prep = PREP_REGEX.replace_all(&without_units, "");
    let cleaned = LEFTOVER_REGEX.replace_all(&without_prep, "");

    let words: Vec<String> = cleaned
        .split_whitespace()
        .filter(|word| word.chars().count() >= MIN_WORD_LEN && !is_stop_word(word))
        .map(str::trim)
        .filter(|word| !word.is_empty())
        .map(str::to_string)
        .collect();

    trace!("core words of {:?}: {:?}", ingredient, words);
    words
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quantity_unit_and_prep_removed() {
        assert_eq!(
            extract_core_words("2 cups chopped fresh tomatoes"),
            vec!["tomatoes"]
        );
    }

    #[test]
    fn test_mixed_case_and_punctuation() {
        assert_eq!(
            extract_core_words("1 Cup Grated Parmesan Cheese, (divided)"),
            vec!["parmesan", "cheese", "divided"]
        );
    }

    #[test]
    fn test_fractions_and_decimals() {
        assert_eq!(extract_core_words("1/2 tsp ground cumin"), vec!["ground", "cumin"]);
        assert_eq!(extract_core_words("1.5kg beef brisket"), vec!["beef", "brisket"]);
        assert_eq!(extract_core_words("200 g flour"), vec!["flour"]);
    }

    #[test]
    fn test_unit_without_quantity() {
        assert_eq!(extract_core_words("pinch of saffron"), vec!["saffron"]);
        assert_eq!(extract_core_words("a dash hot sauce"), vec!["hot", "sauce"]);
    }

    #[test]
    fn test_units_are_word_bounded() {
        // "g" and "oz" inside words must survive
        assert_eq!(extract_core_words("3 eggs"), vec!["eggs"]);
        assert_eq!(extract_core_words("ozark honey"), vec!["ozark", "honey"]);
    }

    #[test]
    fn test_only_listed_unit_forms_are_removed() {
        // Only "cup" has a plural form in the unit list
        assert_eq!(
            extract_core_words("2 tablespoons olive oil"),
            vec!["tablespoons", "olive", "oil"]
        );
    }

    #[test]
    fn test_to_taste_removed() {
        assert_eq!(extract_core_words("salt to taste"), vec!["salt"]);
        assert!(extract_core_words("to taste").is_empty());
    }

    #[test]
    fn test_short_words_and_stop_words_dropped() {
        assert_eq!(
            extract_core_words("juice of an orange and a lime"),
            vec!["juice", "orange", "lime"]
        );
        assert!(extract_core_words("ice").contains(&"ice".to_string()));
        assert!(extract_core_words("oil").contains(&"oil".to_string()));
    }

    #[test]
    fn test_empty_and_junk_input() {
        assert!(extract_core_words("").is_empty());
        assert!(extract_core_words("   ").is_empty());
        assert!(extract_core_words(",,,()()").is_empty());
        assert!(extract_core_words("12 34").is_empty());
    }

    #[test]
    fn test_duplicates_kept_in_order() {
        assert_eq!(
            extract_core_words("chicken stock or chicken broth"),
            vec!["chicken", "stock", "chicken", "broth"]
        );
    }

    #[test]
    fn test_idempotent_on_own_output() {
        let inputs = [
            "2 cups chopped fresh tomatoes",
            "1 lb ground beef (80/20)",
            "3 tablespoons unsalted butter, melted",
            "handful fresh basil leaves",
            "4 oz dried spaghetti",
            "salt and pepper to taste",
        ];

        for input in inputs {
            let once = extract_core_words(input);
            let twice = extract_core_words(&once.join(" "));
            assert_eq!(once, twice, "not idempotent for {:?}", input);
        }
    }

    #[test]
    fn test_unit_glued_to_digits_is_not_stable() {
        assert_eq!(extract_core_words("cup1"), vec!["cup"]);
        assert!(extract_core_words("cup").is_empty());
    }

    #[test]
    fn test_is_stop_word() {
        assert!(is_stop_word("the"));
        assert!(!is_stop_word("tea"));
    }
}
