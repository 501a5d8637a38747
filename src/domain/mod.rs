//! Domain layer for the recipe browser.
//!
//! Core domain types, independent of the HTTP client, the terminal and the
//! event loop.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`recipe`]: Recipe record as returned by the search API
//! - [`filter`]: Filter form options and the recipe predicates they build
//!
//! # Examples
//!
//! ```
//! use epicurious::domain::{FilterCriteria, Recipe, Result};
//! use epicurious::domain::filter::RecipeFilter;
//!
//! fn vegan_only(recipes: &[Recipe]) -> Result<Vec<Recipe>> {
//!     let mut criteria = FilterCriteria::default();
//!     criteria.set("category", "Vegan")?;
//!     Ok(recipes.iter().filter(|r| criteria.matches(r)).cloned().collect())
//! }
//! ```

pub mod error;
pub mod filter;
pub mod recipe;

pub use error::{RecipeError, Result};
pub use filter::FilterCriteria;
pub use recipe::{Recipe, RecipeId};
