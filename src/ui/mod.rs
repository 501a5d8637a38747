//! Terminal rendering with component-based layout.
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → render → ANSI text
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: Display-ready view model types
//! - [`renderer`]: Rendering entry points
//! - [`components`]: Header, search bar, cards, pagination, banners, footer
//! - [`helpers`]: Highlighting, centring, truncation
//! - [`theme`]: Colour schemes and ANSI escape sequences

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::{render, render_viewmodel};
pub use theme::Theme;
pub use viewmodel::{
    EmptyState, FooterInfo, HeaderInfo, PaginationInfo, RecipeCard, RecipeDetails, SearchBarInfo, UIViewModel,
};
