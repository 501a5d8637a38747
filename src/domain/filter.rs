//! Recipe filters and the filter criteria chosen in the filter form.
//!
//! Every option of the filter form is a small [`RecipeFilter`] implementation.
//! [`FilterCriteria`] holds the user's current choices and composes the active
//! filters into a single predicate. The result store only ever sees that
//! predicate; it never inspects individual options.

use super::error::{RecipeError, Result};
use super::recipe::Recipe;
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use serde::{Deserialize, Serialize};

/// A predicate over recipes.
///
/// Implementations must be pure: the same recipe always yields the same answer.
pub trait RecipeFilter {
    /// Returns the name of this filter (for logging/debugging).
    fn name(&self) -> &str;

    /// Returns true if the recipe should stay in the filtered results.
    fn matches(&self, recipe: &Recipe) -> bool;
}

/// Keeps recipes carrying every required category.
#[derive(Debug, Clone)]
pub struct CategoryFilter<'a> {
    required: &'a [String],
}

impl RecipeFilter for CategoryFilter<'_> {
    fn name(&self) -> &str {
        "category"
    }

    fn matches(&self, recipe: &Recipe) -> bool {
        self.required.iter().all(|c| recipe.has_category(c))
    }
}

/// Drops recipes carrying any excluded category.
#[derive(Debug, Clone)]
pub struct ExcludeCategoryFilter<'a> {
    excluded: &'a [String],
}

impl RecipeFilter for ExcludeCategoryFilter<'_> {
    fn name(&self) -> &str {
        "exclude"
    }

    fn matches(&self, recipe: &Recipe) -> bool {
        !self.excluded.iter().any(|c| recipe.has_category(c))
    }
}

/// Which side of a numeric range a [`NutritionFilter`] enforces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    /// Field must be greater than or equal to the limit.
    AtLeast,
    /// Field must be less than or equal to the limit.
    AtMost,
}

/// Numeric range check on one recipe field.
///
/// A recipe without a value for the field never satisfies the bound.
pub struct NutritionFilter {
    name: &'static str,
    field: fn(&Recipe) -> Option<f64>,
    bound: Bound,
    limit: f64,
}

impl NutritionFilter {
    #[must_use]
    pub fn new(name: &'static str, field: fn(&Recipe) -> Option<f64>, bound: Bound, limit: f64) -> Self {
        Self { name, field, bound, limit }
    }
}

impl RecipeFilter for NutritionFilter {
    fn name(&self) -> &str {
        self.name
    }

    fn matches(&self, recipe: &Recipe) -> bool {
        (self.field)(recipe).is_some_and(|value| match self.bound {
            Bound::AtLeast => value >= self.limit,
            Bound::AtMost => value <= self.limit,
        })
    }
}

/// Fuzzy keyword match against the recipe title.
///
/// The keyword is split on whitespace; every token has to fuzzy-match the
/// lowercased title.
pub struct KeywordFilter {
    tokens: Vec<String>,
    matcher: SkimMatcherV2,
}

impl KeywordFilter {
    #[must_use]
    pub fn new(keyword: &str) -> Self {
        Self {
            tokens: keyword.split_whitespace().map(str::to_lowercase).collect(),
            matcher: SkimMatcherV2::default(),
        }
    }
}

impl RecipeFilter for KeywordFilter {
    fn name(&self) -> &str {
        "keyword"
    }

    fn matches(&self, recipe: &Recipe) -> bool {
        let title = recipe.title.to_lowercase();
        self.tokens
            .iter()
            .all(|token| self.matcher.fuzzy_match(&title, token).is_some())
    }
}

/// The options currently selected in the filter form.
///
/// Empty criteria accept every recipe.
///
/// # Examples
///
/// ```
/// use epicurious::{FilterCriteria, Recipe};
/// use epicurious::domain::filter::RecipeFilter;
///
/// let mut criteria = FilterCriteria::default();
/// criteria.set("min-rating", "4").unwrap();
///
/// let mut good = Recipe::new("1", "Roast Chicken");
/// good.rating = Some(4.5);
/// let unrated = Recipe::new("2", "Chicken Salad");
///
/// assert!(criteria.matches(&good));
/// assert!(!criteria.matches(&unrated));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct FilterCriteria {
    pub categories: Vec<String>,
    pub exclude: Vec<String>,
    pub min_rating: Option<f64>,
    pub max_calories: Option<f64>,
    pub min_protein: Option<f64>,
    pub max_fat: Option<f64>,
    pub max_sodium: Option<f64>,
    pub keyword: Option<String>,
}

impl FilterCriteria {
    /// Option names accepted by [`FilterCriteria::set`].
    pub const KEYS: [&'static str; 8] = [
        "category",
        "exclude",
        "min-rating",
        "max-calories",
        "min-protein",
        "max-fat",
        "max-sodium",
        "keyword",
    ];

    /// Returns true if no option is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Updates one option from a `key`/`value` pair as typed in the filter form.
    ///
    /// `category` and `exclude` accept comma-separated lists and add to the
    /// existing selection. An empty value clears the option.
    ///
    /// # Errors
    ///
    /// Returns [`RecipeError::Command`] for unknown keys, non-numeric or negative
    /// limits.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let value = value.trim();
        match key {
            "category" | "categories" => Self::extend_list(&mut self.categories, value),
            "exclude" => Self::extend_list(&mut self.exclude, value),
            "min-rating" => self.min_rating = Self::parse_limit(key, value)?,
            "max-calories" => self.max_calories = Self::parse_limit(key, value)?,
            "min-protein" => self.min_protein = Self::parse_limit(key, value)?,
            "max-fat" => self.max_fat = Self::parse_limit(key, value)?,
            "max-sodium" => self.max_sodium = Self::parse_limit(key, value)?,
            "keyword" => {
                self.keyword = if value.is_empty() { None } else { Some(value.to_string()) };
            }
            other => {
                return Err(RecipeError::Command(format!(
                    "unknown filter '{other}' (expected one of: {})",
                    Self::KEYS.join(", ")
                )));
            }
        }
        Ok(())
    }

    fn extend_list(list: &mut Vec<String>, value: &str) {
        if value.is_empty() {
            list.clear();
            return;
        }
        for item in value.split(',').map(str::trim).filter(|s| !s.is_empty()) {
            if !list.iter().any(|existing| existing.eq_ignore_ascii_case(item)) {
                list.push(item.to_string());
            }
        }
    }

    fn parse_limit(key: &str, value: &str) -> Result<Option<f64>> {
        if value.is_empty() {
            return Ok(None);
        }
        match value.parse::<f64>() {
            Ok(limit) if limit.is_finite() && limit >= 0.0 => Ok(Some(limit)),
            _ => Err(RecipeError::Command(format!(
                "filter '{key}' expects a non-negative number, got '{value}'"
            ))),
        }
    }

    /// Builds the list of active filters.
    #[must_use]
    pub fn active_filters(&self) -> Vec<Box<dyn RecipeFilter + '_>> {
        let mut filters: Vec<Box<dyn RecipeFilter + '_>> = Vec::new();

        if !self.categories.is_empty() {
            filters.push(Box::new(CategoryFilter { required: &self.categories }));
        }
        if !self.exclude.is_empty() {
            filters.push(Box::new(ExcludeCategoryFilter { excluded: &self.exclude }));
        }

        let ranges: [(&'static str, fn(&Recipe) -> Option<f64>, Bound, Option<f64>); 5] = [
            ("min-rating", |r| r.rating, Bound::AtLeast, self.min_rating),
            ("max-calories", |r| r.calories, Bound::AtMost, self.max_calories),
            ("min-protein", |r| r.protein, Bound::AtLeast, self.min_protein),
            ("max-fat", |r| r.fat, Bound::AtMost, self.max_fat),
            ("max-sodium", |r| r.sodium, Bound::AtMost, self.max_sodium),
        ];
        for (name, field, bound, limit) in ranges {
            if let Some(limit) = limit {
                filters.push(Box::new(NutritionFilter::new(name, field, bound, limit)));
            }
        }

        if let Some(keyword) = self.keyword.as_deref().filter(|k| !k.trim().is_empty()) {
            filters.push(Box::new(KeywordFilter::new(keyword)));
        }

        filters
    }

    /// Short human-readable summary, e.g. `category=Vegan min-rating=4`.
    #[must_use]
    pub fn summary(&self) -> String {
        let mut parts = Vec::new();
        if !self.categories.is_empty() {
            parts.push(format!("category={}", self.categories.join(",")));
        }
        if !self.exclude.is_empty() {
            parts.push(format!("exclude={}", self.exclude.join(",")));
        }
        let limits = [
            ("min-rating", self.min_rating),
            ("max-calories", self.max_calories),
            ("min-protein", self.min_protein),
            ("max-fat", self.max_fat),
            ("max-sodium", self.max_sodium),
        ];
        for (key, limit) in limits {
            if let Some(limit) = limit {
                parts.push(format!("{key}={limit}"));
            }
        }
        if let Some(keyword) = &self.keyword {
            parts.push(format!("keyword={keyword}"));
        }
        parts.join(" ")
    }
}

impl RecipeFilter for FilterCriteria {
    fn name(&self) -> &str {
        "criteria"
    }

    fn matches(&self, recipe: &Recipe) -> bool {
        self.active_filters().iter().all(|f| f.matches(recipe))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recipe(id: &str, title: &str, categories: &[&str]) -> Recipe {
        let mut r = Recipe::new(id, title);
        r.categories = categories.iter().map(|c| (*c).to_string()).collect();
        r
    }

    #[test]
    fn empty_criteria_accept_everything() {
        let criteria = FilterCriteria::default();
        assert!(criteria.is_empty());
        assert!(criteria.active_filters().is_empty());
        assert!(criteria.matches(&Recipe::new("1", "Anything")));
    }

    #[test]
    fn categories_must_all_be_present() {
        let mut criteria = FilterCriteria::default();
        criteria.set("category", "Vegan, Soup").unwrap();

        assert!(criteria.matches(&recipe("1", "Lentil Soup", &["Soup", "Vegan", "Winter"])));
        assert!(!criteria.matches(&recipe("2", "Tomato Soup", &["Soup"])));
    }

    #[test]
    fn excluded_categories_reject() {
        let mut criteria = FilterCriteria::default();
        criteria.set("exclude", "pork").unwrap();

        assert!(!criteria.matches(&recipe("1", "Carnitas", &["Pork"])));
        assert!(criteria.matches(&recipe("2", "Tacos", &["Chicken"])));
    }

    #[test]
    fn numeric_bounds_reject_missing_values() {
        let mut criteria = FilterCriteria::default();
        criteria.set("max-calories", "500").unwrap();

        let mut light = Recipe::new("1", "Salad");
        light.calories = Some(500.0);
        let mut heavy = Recipe::new("2", "Lasagna");
        heavy.calories = Some(900.0);
        let unknown = Recipe::new("3", "Mystery");

        assert!(criteria.matches(&light));
        assert!(!criteria.matches(&heavy));
        assert!(!criteria.matches(&unknown));
    }

    #[test]
    fn keyword_tokens_fuzzy_match_title() {
        let mut criteria = FilterCriteria::default();
        criteria.set("keyword", "grill chkn").unwrap();

        assert!(criteria.matches(&Recipe::new("1", "Grilled Chicken Thighs")));
        assert!(!criteria.matches(&Recipe::new("2", "Grilled Salmon")));
    }

    #[test]
    fn empty_value_clears_option() {
        let mut criteria = FilterCriteria::default();
        criteria.set("min-rating", "3.5").unwrap();
        criteria.set("category", "Vegan").unwrap();
        criteria.set("min-rating", "").unwrap();
        criteria.set("category", "").unwrap();

        assert!(criteria.is_empty());
    }

    #[test]
    fn invalid_input_is_rejected_without_change() {
        let mut criteria = FilterCriteria::default();

        assert!(matches!(criteria.set("spiciness", "3"), Err(RecipeError::Command(_))));
        assert!(matches!(criteria.set("min-rating", "lots"), Err(RecipeError::Command(_))));
        assert!(matches!(criteria.set("max-fat", "-2"), Err(RecipeError::Command(_))));
        assert!(criteria.is_empty());
    }

    #[test]
    fn summary_lists_active_options() {
        let mut criteria = FilterCriteria::default();
        criteria.set("category", "Vegan").unwrap();
        criteria.set("min-rating", "4").unwrap();

        assert_eq!(criteria.summary(), "category=Vegan min-rating=4");
    }
}
