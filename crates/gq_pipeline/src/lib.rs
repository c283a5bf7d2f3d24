use std::sync::Arc;

use gq_core::format::format_results;
use gq_core::{
    ArticleSource, DeliveryResult, Error, FetchOutcome, QueueTransport, SearchQuery,
};
use gq_queue::{ensure_retention, publish};
use tracing::error;

/// Correlation attribute attached to every published message.
const CORRELATION_ID: &str = "guardian_content";

/// Runs one fetch → format → ensure-retention → publish cycle over the
/// injected collaborators.
pub struct Pipeline {
    source: Arc<dyn ArticleSource>,
    transport: Arc<dyn QueueTransport>,
}

impl Pipeline {
    pub fn new(source: Arc<dyn ArticleSource>, transport: Arc<dyn QueueTransport>) -> Self {
        Self { source, transport }
    }

    /// Execute the full pipeline for one query. Never fails: every error is
    /// folded into the returned envelope, so nothing is published unless the
    /// whole sequence completed.
    pub async fn run(&self, query: &SearchQuery, queue: &str) -> DeliveryResult {
        let articles = match self.source.fetch(query).await {
            Ok(FetchOutcome::Success(articles)) => articles,
            Ok(FetchOutcome::Empty) => {
                return DeliveryResult::no_content(format!(
                    "No articles found mentioning {}",
                    query.text
                ));
            }
            Err(err) => {
                error!("Fetch failed: {}", err);
                return DeliveryResult::error(format!(
                    "Error retrieving data from Guardian API: {}",
                    err
                ));
            }
        };

        let formatted = match format_results(&articles) {
            Ok(formatted) => formatted,
            Err(err) => {
                error!("Formatting failed: {}", err);
                return match err {
                    Error::MissingField(_) => DeliveryResult::error(format!(
                        "Error formatting search results: {}",
                        err
                    )),
                    other => unexpected(other),
                };
            }
        };

        if let Err(err) = ensure_retention(self.transport.as_ref(), queue).await {
            error!("Retention update failed: {}", err);
            return queue_failure(err);
        }

        match publish(self.transport.as_ref(), queue, &formatted, CORRELATION_ID).await {
            Ok(message_id) => DeliveryResult::ok(
                format!(
                    "Successfully sent articles from '{}' query to {}",
                    query.text, queue
                ),
                message_id,
            ),
            Err(err) => {
                error!("Publish failed: {}", err);
                queue_failure(err)
            }
        }
    }
}

fn queue_failure(err: Error) -> DeliveryResult {
    match err {
        err @ (Error::QueueAdmin { .. } | Error::Transport(_)) => DeliveryResult::error(format!(
            "Error interacting with queue service: {}",
            err
        )),
        other => unexpected(other),
    }
}

fn unexpected(err: Error) -> DeliveryResult {
    DeliveryResult::error(format!("Unexpected error occurred: {}", err))
}
