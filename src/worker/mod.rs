//! Background fetch worker for the search API.
//!
//! Searches run as tokio tasks so the event loop keeps accepting input while a
//! request is in flight. Results come back as [`WorkerResponse`] values on a
//! channel and re-enter the application as events. Messages carry trace context
//! so worker spans nest under the event that issued them.
//!
//! # Architecture
//!
//! - `messages`: Request/response protocol types with trace context propagation
//! - `client`: The [`RecipeSource`] seam and its HTTP implementation
//! - `handler`: Worker implementation and message processing logic

pub mod client;
pub mod handler;
pub mod messages;

pub use client::{HttpRecipeSource, RecipeSource};
pub use handler::{handle_message, SearchWorker};
pub use messages::{TraceContext, WorkerMessage, WorkerResponse};
