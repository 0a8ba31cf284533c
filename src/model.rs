use serde::{Deserialize, Deserializer, Serialize};

/// Read-only projection of an API recipe record used for search
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchableRecipe {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub tags: Vec<String>,
    /// Raw ingredient lines, e.g. "2 cups chopped fresh tomatoes"
    #[serde(default, deserialize_with = "null_as_empty")]
    pub ingredients: Vec<String>,
}

/// Read-only projection of an API dishlist record used for search
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchableDishList {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub tags: Vec<String>,
}

/// A recipe as needed by cook mode: ingredient lines plus ordered steps
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CookRecipe {
    #[serde(default)]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub ingredients: Vec<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub instructions: Vec<String>,
}

/// A contiguous run of an instruction, highlighted or not
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HighlightSegment {
    pub text: String,
    pub is_highlight: bool,
}

impl HighlightSegment {
    pub fn plain(text: impl Into<String>) -> Self {
        HighlightSegment {
            text: text.into(),
            is_highlight: false,
        }
    }

    pub fn highlighted(text: impl Into<String>) -> Self {
        HighlightSegment {
            text: text.into(),
            is_highlight: true,
        }
    }
}

/// One instruction of a recipe prepared for the cook mode view
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CookStep {
    /// Zero-based position in the recipe's instruction list
    pub index: usize,
    pub instruction: String,
    pub segments: Vec<HighlightSegment>,
    /// Raw ingredient lines referenced by this step, in recipe order
    pub ingredients: Vec<String>,
}

/// Fields the search filter looks at
///
/// Implemented for the two projections above; callers with their own record
/// types can implement it and use [`crate::search::filter_items`] directly.
pub trait Searchable {
    fn title(&self) -> &str;
    fn description(&self) -> Option<&str>;
    fn tags(&self) -> &[String];

    /// Raw ingredient lines. Only recipes have them.
    fn ingredients(&self) -> &[String] {
        &[]
    }
}

impl Searchable for SearchableRecipe {
    fn title(&self) -> &str {
        &self.title
    }

    fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    fn tags(&self) -> &[String] {
        &self.tags
    }

    fn ingredients(&self) -> &[String] {
        &self.ingredients
    }
}

impl Searchable for SearchableDishList {
    fn title(&self) -> &str {
        &self.title
    }

    fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    fn tags(&self) -> &[String] {
        &self.tags
    }
}

// The API sends `null` for missing lists as often as it omits the field.
fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Vec<String>>::deserialize(deserializer).map(Option::unwrap_or_default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recipe_null_and_missing_lists() {
        let json = r#"[
            {"id": "1", "title": "Pasta", "tags": null},
            {"title": "Curry", "description": "Spicy", "ingredients": ["1 onion"], "createdAt": "2024-01-01"}
        ]"#;

        let recipes: Vec<SearchableRecipe> = serde_json::from_str(json).unwrap();
        assert_eq!(recipes.len(), 2);
        assert!(recipes[0].tags.is_empty());
        assert!(recipes[0].ingredients.is_empty());
        assert_eq!(recipes[1].id, None);
        assert_eq!(recipes[1].description.as_deref(), Some("Spicy"));
        assert_eq!(recipes[1].ingredients, vec!["1 onion".to_string()]);
    }

    #[test]
    fn test_dish_list_has_no_ingredients() {
        let list = SearchableDishList {
            title: "Weeknight".to_string(),
            ..Default::default()
        };
        assert!(list.ingredients().is_empty());
    }

    #[test]
    fn test_highlight_segment_serializes_camel_case() {
        let json = serde_json::to_string(&HighlightSegment::highlighted("eggs")).unwrap();
        assert_eq!(json, r#"{"text":"eggs","isHighlight":true}"#);
    }
}
