//! Infrastructure layer for filesystem and environment interactions.
//!
//! Resolves where the application keeps its files (trace output, user
//! configuration) following the XDG base directory conventions.

pub mod paths;

pub use paths::{expand_tilde, get_config_path, get_data_dir};
