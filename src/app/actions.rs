//! Actions representing side effects to be executed by the event loop.
//!
//! The event handler never performs I/O. It returns a `Vec<Action>` after
//! processing each event and the binary's event loop executes them in order.
//!
//! # Example
//!
//! ```rust
//! use epicurious::app::Action;
//! use epicurious::worker::WorkerMessage;
//!
//! let actions = vec![
//!     Action::PostToWorker(WorkerMessage::search_recipes(1, "chicken")),
//! ];
//! assert_eq!(actions.len(), 1);
//! ```

use crate::worker::WorkerMessage;

/// Commands representing side effects to be executed by the event loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Posts a message to the fetch worker.
    ///
    /// The worker answers asynchronously with a
    /// [`WorkerResponse`](crate::worker::WorkerResponse), fed back as an event.
    PostToWorker(WorkerMessage),

    /// Leaves the event loop.
    Quit,
}
