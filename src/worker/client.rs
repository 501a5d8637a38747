//! Clients for the remote recipe-search API.
//!
//! [`RecipeSource`] is the seam between the fetch worker and the outside world:
//! a function from a query string to a list of recipes. [`HttpRecipeSource`] is
//! the production implementation calling `GET {base_url}/search?query=<term>`;
//! tests substitute in-memory sources.

use crate::domain::error::{RecipeError, Result};
use crate::domain::Recipe;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

/// Something that can answer a recipe search.
#[async_trait]
pub trait RecipeSource: Send + Sync {
    /// Returns the recipes matching `query`, in the order the source ranks them.
    ///
    /// # Errors
    ///
    /// Any failure (transport, status, body) is an error; partial results are
    /// never returned.
    async fn search(&self, query: &str) -> Result<Vec<Recipe>>;
}

/// HTTP client for the search API.
#[derive(Debug, Clone)]
pub struct HttpRecipeSource {
    client: Client,
    base_url: String,
}

impl HttpRecipeSource {
    /// Creates a client for the API rooted at `base_url` (trailing `/` ignored).
    ///
    /// # Errors
    ///
    /// Returns [`RecipeError::Config`] if the HTTP client cannot be built.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| RecipeError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Full URL of the search endpoint.
    #[must_use]
    pub fn search_url(&self) -> String {
        format!("{}/search", self.base_url)
    }
}

#[async_trait]
impl RecipeSource for HttpRecipeSource {
    /// Runs the search request.
    ///
    /// The body is read completely and decoded as a JSON array of recipes, so a
    /// malformed body is reported as [`RecipeError::Decode`] rather than as a
    /// transport error.
    async fn search(&self, query: &str) -> Result<Vec<Recipe>> {
        let url = self.search_url();
        tracing::debug!(url = %url, query = %query, "sending search request");

        let response = self
            .client
            .get(&url)
            .query(&[("query", query)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::debug!(status = status.as_u16(), "search API returned an error status");
            return Err(RecipeError::Http { status: status.as_u16() });
        }

        let body = response.bytes().await?;
        let recipes: Vec<Recipe> = serde_json::from_slice(&body)?;

        tracing::debug!(count = recipes.len(), bytes = body.len(), "search response decoded");
        Ok(recipes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_url_ignores_trailing_slash() {
        let source = HttpRecipeSource::new("http://localhost:5000/", Duration::from_secs(1)).unwrap();
        assert_eq!(source.search_url(), "http://localhost:5000/search");
    }
}
