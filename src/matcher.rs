use log::trace;

use crate::normalize::extract_core_words;

/// Cooking verbs that show up in ingredient lines ("fold in beaten eggs") but
/// never identify the ingredient inside an instruction
pub const COOKING_VERBS: &[&str] = &[
    "heat", "cook", "add", "mix", "stir", "pour", "season", "serve", "place", "remove", "cut",
    "chop", "dice", "slice", "combine", "blend", "whisk", "fold", "bring", "reduce", "simmer",
];

pub fn is_cooking_verb(word: &str) -> bool {
    COOKING_VERBS.contains(&word)
}

/// Spellings of a core word tried against an instruction: the word itself,
/// plural, past tense, and the word minus its last character.
///
/// The last form is a crude singular ("tomatoes" -> "tomatoe") applied to
/// every word, short ones included. It is not a stemmer.
fn variants(word: &str) -> [String; 4] {
    let mut chopped = word.to_string();
    chopped.pop();

    [
        word.to_string(),
        format!("{}s", word),
        format!("{}ed", word),
        chopped,
    ]
}

/// Whether `ingredient` is referenced in `instruction`
///
/// Containment is a plain substring test on the lowercased instruction, so
/// "egg" also hits "eggplant". Ingredients whose core words are all cooking
/// verbs, or that have no core words, never match.
pub fn ingredient_appears_in(ingredient: &str, instruction: &str) -> bool {
    let instruction = instruction.to_lowercase();

    for word in extract_core_words(ingredient) {
        if is_cooking_verb(&word) {
            continue;
        }

        if let Some(hit) = variants(&word)
            .iter()
            .find(|variant| instruction.contains(variant.as_str()))
        {
            trace!("{:?} matched instruction via {:?}", ingredient, hit);
            return true;
        }
    }

    false
}
