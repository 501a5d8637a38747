//! Application layer coordinating state, events, and actions.
//!
//! This module sits between the terminal front end (main.rs) and the
//! domain/worker layers. It implements the search session as an explicit
//! reducer with a unidirectional data flow:
//!
//! ```text
//! Command line → Event → handle_event → State Mutations → Actions → Side Effects
//!                             ↑                                  ↓
//!                             └──────── Worker Responses ────────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`command`]: Typed command lines to events
//! - [`handler`]: Event processing and state transition coordinator
//! - [`pagination`]: Page count and page slice derivation
//! - [`state`]: Search session state and view model computation
//! - [`status`]: Fetch status of the session
//!
//! # Example
//!
//! ```rust
//! use epicurious::app::{AppState, Event, handle_event};
//! use epicurious::ui::Theme;
//!
//! let mut state = AppState::new(6, Theme::default());
//! let (should_render, actions) = handle_event(&mut state, &Event::NextPage)?;
//! assert!(!should_render);
//! assert!(actions.is_empty());
//! # Ok::<(), epicurious::RecipeError>(())
//! ```

pub mod actions;
pub mod command;
pub mod handler;
pub mod pagination;
pub mod state;
pub mod status;

pub use actions::Action;
pub use command::{input_event, parse_command};
pub use handler::{handle_event, Event};
pub use state::AppState;
pub use status::FetchStatus;
