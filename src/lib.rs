//! EpiCurious: a terminal recipe browser.
//!
//! EpiCurious searches a remote recipe API by keyword and lets the user narrow
//! and browse the results:
//! - Keyword search via `GET /search?query=<term>` on a background task
//! - Client-side filtering by category and nutrition limits, plus a fuzzy
//!   keyword filter on titles
//! - Fixed-size pages (6 recipes by default) with clamped navigation
//! - Per-recipe details (ingredients, numbered directions)
//! - Stale-response protection when searches overlap

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Terminal front end (main.rs, cli)                  │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Command parsing                                  │
//! │  - Event handling                                   │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                                        │
//! ┌───────────────┐                       ┌───────────────┐
//! │ UI Layer      │                       │ Worker Layer  │
//! │ (ui/)         │                       │ (worker/)     │
//! │ - Rendering   │                       │ - HTTP search │
//! │ - Theming     │                       │ - Async tasks │
//! │ - Components  │                       │ - Trace links │
//! └───────────────┘                       └───────────────┘
//!         │                                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - XDG paths (infrastructure/)                      │
//! │  - Error types (domain/error)                       │
//! │  - Recipe model and filters (domain/)               │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │
//! │  - OpenTelemetry tracing to a local OTLP file       │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! Defaults, overridden by a TOML file, overridden by command-line flags:
//!
//! ```toml
//! # ~/.config/epicurious/config.toml
//! api_base_url = "http://127.0.0.1:5000"
//! page_size = 6
//! request_timeout_secs = 30
//! theme_name = "catppuccin-latte"
//! trace_level = "debug"
//! ```
//!
//! # Example
//!
//! ```rust
//! use epicurious::{handle_event, initialize, Action, Config, Event};
//!
//! let config = Config::default();
//! let mut state = initialize(&config);
//!
//! let (should_render, actions) = handle_event(&mut state, &Event::ChangeSearchTerm("chicken".into()))?;
//! assert!(should_render);
//! assert!(matches!(actions.as_slice(), [Action::PostToWorker(_)]));
//! # Ok::<(), epicurious::RecipeError>(())
//! ```

pub mod app;
pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod ui;
pub mod worker;

pub use app::{handle_event, input_event, parse_command, Action, AppState, Event, FetchStatus};
pub use domain::{FilterCriteria, Recipe, RecipeError, RecipeId, Result};
pub use ui::Theme;

use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

/// Address of the search API used when nothing else is configured.
pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:5000";

/// Runtime configuration.
///
/// Every field has a default, so a config file only needs the keys it changes.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Base URL of the search API; `/search` is appended.
    pub api_base_url: String,

    /// Recipes per page. Must be at least 1. Default: 6
    pub page_size: usize,

    /// Whole-request timeout for a search. Default: 30
    pub request_timeout_secs: u64,

    /// Built-in theme name (`catppuccin-mocha`, `catppuccin-latte`).
    /// Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme. Takes precedence over `theme_name`.
    /// See [`ui::theme`] for the format.
    pub theme_file: Option<String>,

    /// Tracing filter (`trace`, `debug`, `info`, ... or an `EnvFilter`
    /// directive). `RUST_LOG` wins when set. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            page_size: app::pagination::DEFAULT_PAGE_SIZE,
            request_timeout_secs: 30,
            theme_name: None,
            theme_file: None,
            trace_level: None,
        }
    }
}

impl Config {
    /// Parses a TOML document. Missing keys keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`RecipeError::Config`] for invalid TOML, unknown keys or
    /// mistyped values.
    ///
    /// # Example
    ///
    /// ```rust
    /// use epicurious::Config;
    ///
    /// let config = Config::from_toml_str("page_size = 9")?;
    /// assert_eq!(config.page_size, 9);
    /// assert_eq!(config.api_base_url, "http://127.0.0.1:5000");
    /// # Ok::<(), epicurious::RecipeError>(())
    /// ```
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Reads and parses a TOML config file.
    ///
    /// # Errors
    ///
    /// Returns [`RecipeError::Config`] if the file cannot be read or parsed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .map_err(|e| RecipeError::Config(format!("cannot read {}: {e}", path.display())))?;

        toml::from_str(&contents)
            .map_err(|e| RecipeError::Config(format!("invalid config {}: {e}", path.display())))
    }

    /// Loads the config file layer.
    ///
    /// An explicit path must exist. Otherwise the default location is used
    /// when a file is there, and built-in defaults when not.
    ///
    /// # Errors
    ///
    /// Propagates [`Config::from_file`] errors.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        match infrastructure::get_config_path() {
            Some(path) if path.is_file() => Self::from_file(path),
            _ => Ok(Self::default()),
        }
    }

    /// Checks cross-field constraints.
    ///
    /// # Errors
    ///
    /// Returns [`RecipeError::Config`] for a zero page size, a zero timeout, or
    /// a base URL that is not `http(s)://...`.
    pub fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(RecipeError::Config("page_size must be at least 1".to_string()));
        }
        if self.request_timeout_secs == 0 {
            return Err(RecipeError::Config("request_timeout_secs must be at least 1".to_string()));
        }
        let url = self.api_base_url.trim();
        if !(url.starts_with("http://") || url.starts_with("https://")) || url.ends_with("://") {
            return Err(RecipeError::Config(format!(
                "api_base_url must be an http(s) URL, got '{}'",
                self.api_base_url
            )));
        }
        Ok(())
    }

    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

/// Creates the initial application state.
///
/// Resolves the theme (file, then name, then default); a theme that fails to
/// load falls back to the default with a log entry, it never aborts startup.
///
/// # Example
///
/// ```rust
/// use epicurious::{initialize, Config};
///
/// let config = Config {
///     theme_name: Some("catppuccin-latte".to_string()),
///     ..Default::default()
/// };
///
/// let state = initialize(&config);
/// assert_eq!(state.theme.name, "catppuccin-latte");
/// assert_eq!(state.page_size, 6);
/// ```
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!(api = %config.api_base_url, page_size = config.page_size, "initializing epicurious");

    let theme = config.theme_file.as_ref().map_or_else(
        || {
            config.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
                Theme::from_name(theme_name).unwrap_or_else(|| {
                    tracing::warn!(theme_name = %theme_name, "unknown theme, using default");
                    Theme::default()
                })
            })
        },
        |theme_file| {
            Theme::from_file(infrastructure::expand_tilde(theme_file)).unwrap_or_else(|e| {
                tracing::warn!(theme_file = %theme_file, error = %e, "failed to load theme from file, using default");
                Theme::default()
            })
        },
    );

    AppState::new(config.page_size, theme)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = Config::default();
        assert_eq!(config.page_size, 6);
        assert_eq!(config.request_timeout(), Duration::from_secs(30));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn toml_overrides_only_given_keys() {
        let config = Config::from_toml_str("api_base_url = \"https://recipes.example\"\ntrace_level = \"debug\"").unwrap();
        assert_eq!(config.api_base_url, "https://recipes.example");
        assert_eq!(config.trace_level.as_deref(), Some("debug"));
        assert_eq!(config.page_size, 6);
    }

    #[test]
    fn unknown_and_mistyped_keys_are_config_errors() {
        assert!(matches!(Config::from_toml_str("colour = 1"), Err(RecipeError::Config(_))));
        assert!(matches!(Config::from_toml_str("page_size = \"six\""), Err(RecipeError::Config(_))));
    }

    #[test]
    fn validation() {
        let bad_page = Config { page_size: 0, ..Config::default() };
        assert!(bad_page.validate().is_err());

        let bad_url = Config { api_base_url: "localhost:5000".into(), ..Config::default() };
        assert!(bad_url.validate().is_err());

        let bare_scheme = Config { api_base_url: "http://".into(), ..Config::default() };
        assert!(bare_scheme.validate().is_err());

        let no_timeout = Config { request_timeout_secs: 0, ..Config::default() };
        assert!(no_timeout.validate().is_err());
    }

    #[test]
    fn initialize_falls_back_to_default_theme() {
        let config = Config {
            theme_name: Some("no-such-theme".into()),
            ..Config::default()
        };
        assert_eq!(initialize(&config).theme.name, "catppuccin-mocha");

        let config = Config {
            theme_file: Some("/no/such/theme.toml".into()),
            theme_name: Some("catppuccin-latte".into()),
            ..Config::default()
        };
        assert_eq!(initialize(&config).theme.name, "catppuccin-mocha");
    }
}
