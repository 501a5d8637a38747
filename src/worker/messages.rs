//! Request and response types exchanged with the fetch worker.
//!
//! The event loop never performs I/O itself: it posts a [`WorkerMessage`] and
//! later receives a [`WorkerResponse`] as an event. Every message carries the
//! sequence number assigned when the fetch was issued so that late responses for
//! superseded searches can be recognised and dropped. The current trace context
//! travels with the message so spans recorded in the fetch task link back to the
//! event that caused them.

use crate::domain::Recipe;
use serde::{Deserialize, Serialize};

/// Distributed tracing context for cross-task span propagation.
///
/// Captures the current trace and span IDs from OpenTelemetry to maintain
/// trace continuity when a fetch runs in its own task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceContext {
    /// OpenTelemetry trace ID as a hex string.
    pub trace_id: String,

    /// Parent span ID for linking spans across tasks.
    pub parent_span_id: String,
}

impl TraceContext {
    /// Creates a trace context from the current tracing span.
    ///
    /// Returns `None` if the current span context is invalid or not sampled,
    /// which is always the case when tracing has not been initialized.
    #[must_use]
    pub fn from_current() -> Option<Self> {
        use opentelemetry::trace::TraceContextExt;
        use tracing_opentelemetry::OpenTelemetrySpanExt;

        let otel_context = tracing::Span::current().context();
        let span_ref = otel_context.span();
        let span_context = span_ref.span_context();

        if !span_context.is_valid() {
            return None;
        }

        Some(Self {
            trace_id: format!("{:032x}", span_context.trace_id()),
            parent_span_id: format!("{:016x}", span_context.span_id()),
        })
    }
}

/// Messages posted from the event loop to the fetch worker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkerMessage {
    /// Run `GET /search?query=<query>` against the search API.
    SearchRecipes {
        /// Sequence number assigned when the fetch was issued.
        seq: u64,

        /// Search term, already trimmed and never empty.
        query: String,

        /// Trace context for linking spans across tasks.
        #[serde(skip_serializing_if = "Option::is_none")]
        trace_context: Option<TraceContext>,
    },
}

impl WorkerMessage {
    /// Creates a `SearchRecipes` message with the current trace context.
    #[must_use]
    pub fn search_recipes(seq: u64, query: impl Into<String>) -> Self {
        Self::SearchRecipes {
            seq,
            query: query.into(),
            trace_context: TraceContext::from_current(),
        }
    }

    /// Sequence number of the fetch this message starts.
    #[must_use]
    pub const fn seq(&self) -> u64 {
        match self {
            Self::SearchRecipes { seq, .. } => *seq,
        }
    }

    pub(crate) const fn trace_context(&self) -> Option<&TraceContext> {
        match self {
            Self::SearchRecipes { trace_context, .. } => trace_context.as_ref(),
        }
    }
}

/// Responses sent from the fetch worker back to the event loop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum WorkerResponse {
    /// The search API returned a decodable recipe list.
    RecipesLoaded {
        /// Sequence number of the originating request.
        seq: u64,

        /// Query the recipes were fetched for.
        query: String,

        /// Recipes in the order the API returned them.
        recipes: Vec<Recipe>,
    },

    /// The fetch failed: non-success status, transport error or malformed body.
    Error {
        /// Sequence number of the originating request.
        seq: u64,

        /// Query that was being fetched.
        query: String,

        /// Human-readable error message.
        message: String,
    },
}

impl WorkerResponse {
    /// Sequence number of the request this response answers.
    #[must_use]
    pub const fn seq(&self) -> u64 {
        match self {
            Self::RecipesLoaded { seq, .. } | Self::Error { seq, .. } => *seq,
        }
    }
}
