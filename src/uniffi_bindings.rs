//! UniFFI bindings for dishlist-search
//!
//! This module provides FFI-compatible types and functions for use with iOS and Android.
//! Everything here is synchronous; the matching functions never block.

use std::fmt;

use crate::{CookStep, HighlightSegment, SearchError, SearchableDishList, SearchableRecipe};

// Re-export UniFFI macro
#[cfg(feature = "uniffi")]
uniffi::setup_scaffolding!();

/// FFI-compatible recipe projection
#[derive(Debug, Clone)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct FfiSearchableRecipe {
    /// Recipe id (empty string if none)
    pub id: String,
    pub title: String,
    /// Recipe description (empty string if none)
    pub description: String,
    pub tags: Vec<String>,
    /// Raw ingredient lines
    pub ingredients: Vec<String>,
}

/// FFI-compatible dishlist projection
#[derive(Debug, Clone)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct FfiSearchableDishList {
    /// DishList id (empty string if none)
    pub id: String,
    pub title: String,
    /// DishList description (empty string if none)
    pub description: String,
    pub tags: Vec<String>,
}

/// FFI-compatible highlight run
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct FfiHighlightSegment {
    pub text: String,
    pub is_highlight: bool,
}

/// FFI-compatible cook mode step
#[derive(Debug, Clone)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct FfiCookStep {
    pub index: u32,
    pub instruction: String,
    pub segments: Vec<FfiHighlightSegment>,
    pub ingredients: Vec<String>,
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

impl From<SearchableRecipe> for FfiSearchableRecipe {
    fn from(recipe: SearchableRecipe) -> Self {
        FfiSearchableRecipe {
            id: recipe.id.unwrap_or_default(),
            title: recipe.title,
            description: recipe.description.unwrap_or_default(),
            tags: recipe.tags,
            ingredients: recipe.ingredients,
        }
    }
}

impl From<FfiSearchableRecipe> for SearchableRecipe {
    fn from(ffi: FfiSearchableRecipe) -> Self {
        SearchableRecipe {
            id: non_empty(ffi.id),
            title: ffi.title,
            description: non_empty(ffi.description),
            tags: ffi.tags,
            ingredients: ffi.ingredients,
        }
    }
}

impl From<SearchableDishList> for FfiSearchableDishList {
    fn from(list: SearchableDishList) -> Self {
        FfiSearchableDishList {
            id: list.id.unwrap_or_default(),
            title: list.title,
            description: list.description.unwrap_or_default(),
            tags: list.tags,
        }
    }
}

impl From<FfiSearchableDishList> for SearchableDishList {
    fn from(ffi: FfiSearchableDishList) -> Self {
        SearchableDishList {
            id: non_empty(ffi.id),
            title: ffi.title,
            description: non_empty(ffi.description),
            tags: ffi.tags,
        }
    }
}

impl From<HighlightSegment> for FfiHighlightSegment {
    fn from(segment: HighlightSegment) -> Self {
        FfiHighlightSegment {
            text: segment.text,
            is_highlight: segment.is_highlight,
        }
    }
}

impl From<CookStep> for FfiCookStep {
    fn from(step: CookStep) -> Self {
        FfiCookStep {
            index: u32::try_from(step.index).unwrap_or(u32::MAX),
            instruction: step.instruction,
            segments: step.segments.into_iter().map(Into::into).collect(),
            ingredients: step.ingredients,
        }
    }
}

/// FFI-compatible error type
#[derive(Debug, Clone)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Error))]
pub enum FfiSearchError {
    /// Payload could not be parsed
    InvalidPayload { message: String },
    /// Any other failure
    Internal { message: String },
}

impl fmt::Display for FfiSearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FfiSearchError::InvalidPayload { message } => {
                write!(f, "Invalid payload: {}", message)
            }
            FfiSearchError::Internal { message } => write!(f, "Internal error: {}", message),
        }
    }
}

impl std::error::Error for FfiSearchError {}

impl From<SearchError> for FfiSearchError {
    fn from(err: SearchError) -> Self {
        match err {
            SearchError::Json(e) => FfiSearchError::InvalidPayload {
                message: e.to_string(),
            },
            other => FfiSearchError::Internal {
                message: other.to_string(),
            },
        }
    }
}

/// Extract the core words of an ingredient line
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn extract_core_words(ingredient: String) -> Vec<String> {
    crate::extract_core_words(&ingredient)
}

/// Whether an instruction references an ingredient
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn ingredient_appears_in(ingredient: String, instruction: String) -> bool {
    crate::ingredient_appears_in(&ingredient, &instruction)
}

/// Split an instruction into highlighted and plain runs
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn highlight_segments(
    instruction: String,
    ingredients: Vec<String>,
) -> Vec<FfiHighlightSegment> {
    crate::highlight_segments(&instruction, &ingredients)
        .into_iter()
        .map(Into::into)
        .collect()
}

/// Filter recipes by a free-text query, keeping input order
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn filter_recipes(
    recipes: Vec<FfiSearchableRecipe>,
    query: String,
) -> Vec<FfiSearchableRecipe> {
    let recipes: Vec<SearchableRecipe> = recipes.into_iter().map(Into::into).collect();
    crate::filter_recipes(&recipes, &query)
        .into_iter()
        .cloned()
        .map(Into::into)
        .collect()
}

/// Filter dishlists by a free-text query, keeping input order
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn filter_dish_lists(
    dish_lists: Vec<FfiSearchableDishList>,
    query: String,
) -> Vec<FfiSearchableDishList> {
    let dish_lists: Vec<SearchableDishList> = dish_lists.into_iter().map(Into::into).collect();
    crate::filter_dish_lists(&dish_lists, &query)
        .into_iter()
        .cloned()
        .map(Into::into)
        .collect()
}

/// Filter a raw API recipe payload (JSON array) without building records first
///
/// # Returns
/// A JSON array containing the matching records
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn filter_recipes_json(payload: String, query: String) -> Result<String, FfiSearchError> {
    let recipes = crate::recipes_from_json(&payload)?;
    let matched = crate::filter_recipes(&recipes, &query);
    serde_json::to_string(&matched).map_err(|e| FfiSearchError::Internal {
        message: e.to_string(),
    })
}

/// Prepare cook mode steps for a recipe
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn cook_steps(instructions: Vec<String>, ingredients: Vec<String>) -> Vec<FfiCookStep> {
    crate::cook_steps(&instructions, &ingredients)
        .into_iter()
        .map(Into::into)
        .collect()
}

/// Get the library version
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
