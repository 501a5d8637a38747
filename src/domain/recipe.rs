//! Recipe domain model.
//!
//! A [`Recipe`] is a read-only record returned by the search API. The wire format
//! is the one produced by the backend's MongoDB documents: the identifier arrives
//! as `_id`, the description as `desc`, and every numeric field may be missing or
//! `null`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique key of a recipe as assigned by the search API.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecipeId(String);

impl RecipeId {
    /// Wraps a raw identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecipeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RecipeId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// A recipe as returned by `GET /search`.
///
/// Never mutated after decoding. Ingredient and direction order is significant:
/// directions are sequential steps.
///
/// # Examples
///
/// ```
/// use epicurious::Recipe;
///
/// let json = r#"{
///     "_id": "65a1",
///     "title": "Lentil Soup",
///     "desc": "Hearty.",
///     "rating": 4.375,
///     "calories": 320.0,
///     "fat": null,
///     "categories": ["Soup", "Vegan"],
///     "ingredients": ["1 cup lentils"],
///     "directions": ["Simmer."]
/// }"#;
///
/// let recipe: Recipe = serde_json::from_str(json).unwrap();
/// assert_eq!(recipe.id.as_str(), "65a1");
/// assert_eq!(recipe.fat, None);
/// assert!(recipe.has_category("vegan"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    #[serde(rename = "_id", alias = "id")]
    pub id: RecipeId,
    #[serde(default)]
    pub title: String,
    #[serde(rename = "desc", alias = "description", default)]
    pub description: Option<String>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub calories: Option<f64>,
    #[serde(default)]
    pub fat: Option<f64>,
    #[serde(default)]
    pub protein: Option<f64>,
    #[serde(default)]
    pub sodium: Option<f64>,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub directions: Vec<String>,
}

impl Recipe {
    /// Creates a recipe with the given id and title and no other data.
    ///
    /// Mostly useful for tests and fixtures.
    #[must_use]
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: RecipeId::new(id),
            title: title.into(),
            description: None,
            rating: None,
            calories: None,
            fat: None,
            protein: None,
            sodium: None,
            categories: Vec::new(),
            ingredients: Vec::new(),
            directions: Vec::new(),
        }
    }

    /// Returns true if the recipe carries `category`, ignoring ASCII case.
    #[must_use]
    pub fn has_category(&self, category: &str) -> bool {
        self.categories
            .iter()
            .any(|c| c.trim().eq_ignore_ascii_case(category.trim()))
    }
}

/// Formats an optional nutritional value for display.
///
/// Whole numbers print without decimals, missing values print as `n/a`.
#[must_use]
pub fn format_quantity(value: Option<f64>) -> String {
    match value {
        Some(v) if v.fract() == 0.0 => format!("{v:.0}"),
        Some(v) => format!("{v:.1}"),
        None => "n/a".to_string(),
    }
}
