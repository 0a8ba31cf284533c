//! Text matching for DishList recipes and dishlists
//!
//! - [`extract_core_words`] reduces an ingredient line to its significant words
//! - [`ingredient_appears_in`] decides whether a step mentions an ingredient
//! - [`highlight_segments`] splits a step into highlighted and plain runs
//! - [`filter_recipes`] / [`filter_dish_lists`] implement the search box
//! - [`cook_steps`] combines the above for the cook mode view
//!
//! None of the matching functions can fail. Only loading data from JSON
//! returns a [`SearchError`].

pub mod config;
pub mod cook_mode;
pub mod error;
pub mod highlight;
pub mod matcher;
pub mod model;
pub mod normalize;
pub mod search;
pub mod uniffi_bindings;

use std::path::Path;

use log::debug;

pub use config::SearchConfig;
pub use cook_mode::{cook_steps, ingredients_in_instruction};
pub use error::SearchError;
pub use highlight::highlight_segments;
pub use matcher::ingredient_appears_in;
pub use model::{
    CookRecipe, CookStep, HighlightSegment, Searchable, SearchableDishList, SearchableRecipe,
};
pub use normalize::extract_core_words;
pub use search::{filter_dish_lists, filter_items, filter_recipes};

/// Parse a JSON array of recipe records as returned by the API
pub fn recipes_from_json(json: &str) -> Result<Vec<SearchableRecipe>, SearchError> {
    Ok(serde_json::from_str(json)?)
}

/// Parse a JSON array of dishlist records as returned by the API
pub fn dish_lists_from_json(json: &str) -> Result<Vec<SearchableDishList>, SearchError> {
    Ok(serde_json::from_str(json)?)
}

/// Parse a single recipe with ingredients and instructions for cook mode
pub fn cook_recipe_from_json(json: &str) -> Result<CookRecipe, SearchError> {
    Ok(serde_json::from_str(json)?)
}

/// Load recipes from a JSON file
pub fn load_recipes(path: impl AsRef<Path>) -> Result<Vec<SearchableRecipe>, SearchError> {
    let path = path.as_ref();
    let recipes = recipes_from_json(&std::fs::read_to_string(path)?)?;
    debug!("Loaded {} recipes from {}", recipes.len(), path.display());
    Ok(recipes)
}

/// Load dishlists from a JSON file
pub fn load_dish_lists(path: impl AsRef<Path>) -> Result<Vec<SearchableDishList>, SearchError> {
    let path = path.as_ref();
    let dish_lists = dish_lists_from_json(&std::fs::read_to_string(path)?)?;
    debug!("Loaded {} dishlists from {}", dish_lists.len(), path.display());
    Ok(dish_lists)
}

/// Load a single cook mode recipe from a JSON file
pub fn load_cook_recipe(path: impl AsRef<Path>) -> Result<CookRecipe, SearchError> {
    cook_recipe_from_json(&std::fs::read_to_string(path)?)
}
