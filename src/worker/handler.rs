//! Fetch worker running searches off the event loop.
//!
//! Each posted [`WorkerMessage`] is handled in its own task on the current tokio
//! runtime. With the binary's `current_thread` runtime the tasks interleave with
//! the event loop on one thread and only suspend on the HTTP request. Responses
//! are delivered in completion order, not issue order; discarding stale ones is
//! the event handler's job.

use crate::domain::error::Result;
use crate::domain::Recipe;
use crate::worker::client::RecipeSource;
use crate::worker::{WorkerMessage, WorkerResponse};
use std::sync::Arc;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tracing::Instrument;

/// Posts searches to a [`RecipeSource`] and reports the outcome on a channel.
pub struct SearchWorker<S> {
    source: Arc<S>,
    responses: UnboundedSender<WorkerResponse>,
}

impl<S: RecipeSource + 'static> SearchWorker<S> {
    /// Creates a worker sending every response to `responses`.
    pub fn new(source: S, responses: UnboundedSender<WorkerResponse>) -> Self {
        Self {
            source: Arc::new(source),
            responses,
        }
    }

    /// Spawns a task handling `message`.
    ///
    /// The returned handle may be dropped; the task keeps running and its
    /// response still arrives on the channel. There is no cancellation: a
    /// superseded search runs to completion.
    pub fn post(&self, message: WorkerMessage) -> JoinHandle<()> {
        let source = Arc::clone(&self.source);
        let responses = self.responses.clone();

        tokio::spawn(async move {
            let response = handle_message(source.as_ref(), message).await;
            if responses.send(response).is_err() {
                tracing::debug!("event loop closed, dropping search response");
            }
        })
    }
}

/// Processes a worker message and returns the response to deliver.
///
/// Links the handling span to the trace context carried by the message.
pub async fn handle_message<S: RecipeSource + ?Sized>(source: &S, message: WorkerMessage) -> WorkerResponse {
    let span = tracing::debug_span!("worker_handle_message", seq = message.seq());
    attach_parent_trace_context(&span, &message);

    async move {
        match message {
            WorkerMessage::SearchRecipes { seq, query, .. } => {
                let result = source.search(&query).await;
                handle_fetch_result(seq, query, result)
            }
        }
    }
    .instrument(span)
    .await
}

/// Turns a fetch outcome into a response with consistent logging.
fn handle_fetch_result(seq: u64, query: String, result: Result<Vec<Recipe>>) -> WorkerResponse {
    match result {
        Ok(recipes) => {
            tracing::debug!(seq, count = recipes.len(), "search succeeded");
            WorkerResponse::RecipesLoaded { seq, query, recipes }
        }
        Err(e) => {
            tracing::warn!(seq, query = %query, error = %e, "search failed");
            WorkerResponse::Error {
                seq,
                query,
                message: e.to_string(),
            }
        }
    }
}

/// Reconstructs the remote parent from the message and sets it on `span`.
fn attach_parent_trace_context(span: &tracing::Span, message: &WorkerMessage) {
    use opentelemetry::trace::{SpanContext, SpanId, TraceContextExt, TraceFlags, TraceId, TraceState};
    use tracing_opentelemetry::OpenTelemetrySpanExt;

    let Some(trace_context) = message.trace_context() else {
        return;
    };
    let (Ok(trace_id), Ok(span_id)) = (
        TraceId::from_hex(&trace_context.trace_id),
        SpanId::from_hex(&trace_context.parent_span_id),
    ) else {
        tracing::debug!("ignoring malformed trace context");
        return;
    };

    let span_context = SpanContext::new(trace_id, span_id, TraceFlags::SAMPLED, true, TraceState::default());
    span.set_parent(opentelemetry::Context::new().with_remote_span_context(span_context));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RecipeError;
    use async_trait::async_trait;

    struct FixedSource;

    #[async_trait]
    impl RecipeSource for FixedSource {
        async fn search(&self, query: &str) -> Result<Vec<Recipe>> {
            match query {
                "broken" => Err(RecipeError::Http { status: 500 }),
                _ => Ok(vec![Recipe::new("1", format!("{query} pie"))]),
            }
        }
    }

    #[tokio::test]
    async fn success_becomes_recipes_loaded() {
        let response = handle_message(&FixedSource, WorkerMessage::search_recipes(3, "apple")).await;

        match response {
            WorkerResponse::RecipesLoaded { seq, query, recipes } => {
                assert_eq!(seq, 3);
                assert_eq!(query, "apple");
                assert_eq!(recipes[0].title, "apple pie");
            }
            other => panic!("unexpected response {other:?}"),
        }
    }

    #[tokio::test]
    async fn failure_becomes_error_with_seq() {
        let response = handle_message(&FixedSource, WorkerMessage::search_recipes(7, "broken")).await;

        assert_eq!(
            response,
            WorkerResponse::Error {
                seq: 7,
                query: "broken".into(),
                message: "HTTP error! status: 500".into(),
            }
        );
    }

    #[tokio::test]
    async fn posted_messages_answer_on_the_channel() {
        let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
        let worker = SearchWorker::new(FixedSource, tx);

        worker.post(WorkerMessage::search_recipes(1, "plum")).await.unwrap();

        let response = rx.recv().await.unwrap();
        assert_eq!(response.seq(), 1);
    }
}
