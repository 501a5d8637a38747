//! Command-line interface of the `epicurious` binary.
//!
//! Flags form the top configuration layer: each one given on the command line
//! replaces the value from the config file.

use crate::domain::error::Result;
use crate::Config;
use clap::Parser;
use std::path::PathBuf;

/// Browse recipes from a recipe search API in the terminal.
#[derive(Debug, Parser)]
#[command(name = "epicurious", version)]
#[command(about = "Search, filter and browse recipes from a recipe search API", long_about = None)]
pub struct Cli {
    /// Config file (default: $XDG_CONFIG_HOME/epicurious/config.toml if present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Base URL of the search API
    #[arg(long, value_name = "URL")]
    pub api_url: Option<String>,

    /// Recipes per page
    #[arg(long, value_name = "N")]
    pub page_size: Option<usize>,

    /// Search timeout in seconds
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Built-in theme (catppuccin-mocha, catppuccin-latte)
    #[arg(long)]
    pub theme: Option<String>,

    /// Custom TOML theme file
    #[arg(long, value_name = "PATH")]
    pub theme_file: Option<String>,

    /// Tracing filter, e.g. `debug` or `epicurious=trace`
    #[arg(long, value_name = "LEVEL")]
    pub trace_level: Option<String>,

    /// Terminal width used for layout
    #[arg(short, long, default_value_t = 100)]
    pub width: usize,

    /// Search to run at startup
    #[arg(short, long)]
    pub query: Option<String>,
}

impl Cli {
    /// Overwrites the fields of `config` given on the command line.
    pub fn apply_to(&self, config: &mut Config) {
        if let Some(url) = &self.api_url {
            config.api_base_url.clone_from(url);
        }
        if let Some(page_size) = self.page_size {
            config.page_size = page_size;
        }
        if let Some(timeout) = self.timeout {
            config.request_timeout_secs = timeout;
        }
        if let Some(theme) = &self.theme {
            config.theme_name = Some(theme.clone());
        }
        if let Some(theme_file) = &self.theme_file {
            config.theme_file = Some(theme_file.clone());
        }
        if let Some(level) = &self.trace_level {
            config.trace_level = Some(level.clone());
        }
    }

    /// Resolves the effective configuration: defaults, then the config file,
    /// then these flags, validated.
    ///
    /// # Errors
    ///
    /// Returns [`crate::RecipeError::Config`] if the config file is unreadable
    /// or invalid, or the merged configuration fails validation.
    pub fn resolve_config(&self) -> Result<Config> {
        let mut config = Config::load(self.config.as_deref())?;
        self.apply_to(&mut config);
        config.validate()?;
        Ok(config)
    }
}
