use log::debug;

use crate::model::{Searchable, SearchableDishList, SearchableRecipe};
use crate::normalize::extract_core_words;

/// Lowercased, whitespace-separated search terms. Empty when the query is blank.
pub fn search_terms(query: &str) -> Vec<String> {
    query
        .trim()
        .to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

fn contains_term(field: &str, term: &str) -> bool {
    field.to_lowercase().contains(term)
}

/// Raw line contains the term, or the term and one of the line's core words
/// contain each other ("tomato" finds "2 cups tomatoes", "cherry tomatoes"
/// finds "tomatoes").
fn ingredient_matches(ingredient: &str, term: &str) -> bool {
    contains_term(ingredient, term)
        || extract_core_words(ingredient)
            .iter()
            .any(|word| word.contains(term) || term.contains(word.as_str()))
}

fn item_matches<T: Searchable + ?Sized>(item: &T, term: &str) -> bool {
    contains_term(item.title(), term)
        || item
            .description()
            .is_some_and(|description| contains_term(description, term))
        || item.tags().iter().any(|tag| contains_term(tag, term))
        || item
            .ingredients()
            .iter()
            .any(|ingredient| ingredient_matches(ingredient, term))
}

/// Filter `items` down to those matching any term of `query`
///
/// A single term hitting any field is enough: terms are OR-ed, not AND-ed.
/// The result keeps the input order. A blank query returns every item.
pub fn filter_items<'a, T: Searchable>(items: &'a [T], query: &str) -> Vec<&'a T> {
    let terms = search_terms(query);
    if terms.is_empty() {
        debug!("Blank query, returning all {} items", items.len());
        return items.iter().collect();
    }

    let matched: Vec<&T> = items
        .iter()
        .filter(|item| terms.iter().any(|term| item_matches(*item, term)))
        .collect();

    debug!(
        "Query {:?} matched {} of {} items",
        terms,
        matched.len(),
        items.len()
    );
    matched
}

/// Filter recipes by title, description, tags and ingredients
///
/// # Example
/// ```
/// use dishlist_search::{filter_recipes, SearchableRecipe};
///
/// let recipes = vec![
///     SearchableRecipe {
///         title: "Pasta Carbonara".to_string(),
///         ..Default::default()
///     },
///     SearchableRecipe {
///         title: "Chicken Curry".to_string(),
///         description: Some("Spicy Indian curry".to_string()),
///         ..Default::default()
///     },
/// ];
///
/// let found = filter_recipes(&recipes, "Indian");
/// assert_eq!(found.len(), 1);
/// assert_eq!(found[0].title, "Chicken Curry");
/// ```
pub fn filter_recipes<'a>(
    recipes: &'a [SearchableRecipe],
    query: &str,
) -> Vec<&'a SearchableRecipe> {
    filter_items(recipes, query)
}

/// Filter dishlists by title, description and tags
pub fn filter_dish_lists<'a>(
    dish_lists: &'a [SearchableDishList],
    query: &str,
) -> Vec<&'a SearchableDishList> {
    filter_items(dish_lists, query)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recipe(id: &str, title: &str) -> SearchableRecipe {
        SearchableRecipe {
            id: Some(id.to_string()),
            title: title.to_string(),
            ..Default::default()
        }
    }

    fn ids(found: &[&SearchableRecipe]) -> Vec<String> {
        found.iter().filter_map(|r| r.id.clone()).collect()
    }

    fn sample() -> Vec<SearchableRecipe> {
        vec![
            SearchableRecipe {
                description: Some("Creamy Roman classic".to_string()),
                tags: vec!["Italian".to_string(), "quick".to_string()],
                ingredients: vec![
                    "400 g spaghetti".to_string(),
                    "4 egg yolks".to_string(),
                    "100 g guanciale".to_string(),
                ],
                ..recipe("1", "Pasta Carbonara")
            },
            SearchableRecipe {
                description: Some("Spicy Indian curry".to_string()),
                tags: vec!["dinner".to_string()],
                ingredients: vec![
                    "2 cups chopped fresh tomatoes".to_string(),
                    "1 lb chicken thighs".to_string(),
                ],
                ..recipe("2", "Chicken Curry")
            },
            SearchableRecipe {
                ingredients: vec!["3 cups cherry tomatoes".to_string()],
                ..recipe("3", "Summer Salad")
            },
        ]
    }

    #[test]
    fn test_search_terms() {
        assert_eq!(search_terms("  Chicken   CURRY \t"), vec!["chicken", "curry"]);
        assert!(search_terms(" \n ").is_empty());
    }

    #[test]
    fn test_description_match() {
        let recipes = sample();
        assert_eq!(ids(&filter_recipes(&recipes, "Indian")), vec!["2"]);
    }

    #[test]
    fn test_title_and_tag_match() {
        let recipes = sample();
        assert_eq!(ids(&filter_recipes(&recipes, "carbonara")), vec!["1"]);
        assert_eq!(ids(&filter_recipes(&recipes, "ital")), vec!["1"]);
    }

    #[test]
    fn test_ingredient_raw_substring() {
        let recipes = sample();
        assert_eq!(ids(&filter_recipes(&recipes, "yolk")), vec!["1"]);
    }

    #[test]
    fn test_ingredient_core_word_both_directions() {
        let recipes = sample();
        // "tomato" is inside the core word "tomatoes"
        assert_eq!(ids(&filter_recipes(&recipes, "tomato")), vec!["2", "3"]);
        // the core word "thighs" is inside the longer term
        assert_eq!(ids(&filter_recipes(&recipes, "thighsandlegs")), vec!["2"]);
    }

    #[test]
    fn test_terms_are_or_ed() {
        let recipes = sample();
        assert_eq!(
            ids(&filter_recipes(&recipes, "salad carbonara")),
            vec!["1", "3"]
        );
        assert_eq!(ids(&filter_recipes(&recipes, "salad nonexistent")), vec!["3"]);
    }

    #[test]
    fn test_blank_query_is_identity() {
        let recipes = sample();
        for query in ["", "   ", "\t\n"] {
            let found = filter_recipes(&recipes, query);
            assert_eq!(found.len(), recipes.len());
            assert!(found.iter().zip(recipes.iter()).all(|(a, b)| std::ptr::eq(*a, b)));
        }
    }

    #[test]
    fn test_no_match_and_empty_input() {
        let recipes = sample();
        assert!(filter_recipes(&recipes, "sushi").is_empty());
        assert!(filter_recipes(&[], "anything").is_empty());
    }

    #[test]
    fn test_dish_lists_ignore_ingredients() {
        let lists = vec![
            SearchableDishList {
                id: Some("a".to_string()),
                title: "Weeknight Dinners".to_string(),
                description: None,
                tags: vec!["Family".to_string()],
            },
            SearchableDishList {
                id: Some("b".to_string()),
                title: "Baking".to_string(),
                description: Some("Breads and cakes".to_string()),
                tags: Vec::new(),
            },
        ];

        let found: Vec<_> = filter_dish_lists(&lists, "family cakes")
            .into_iter()
            .filter_map(|l| l.id.as_deref())
            .collect();
        assert_eq!(found, vec!["a", "b"]);
        assert!(filter_dish_lists(&lists, "tomato").is_empty());
    }
}
