use std::collections::HashMap;

use gq_core::{Error, FormattedArticle, QueueTransport, Result};
use tracing::info;

use crate::admin_error;

/// Serialize the formatted articles into one message body and send it.
/// Sends exactly once; retrying a failed publish is the caller's decision.
pub async fn publish(
    transport: &dyn QueueTransport,
    queue: &str,
    payload: &[FormattedArticle],
    correlation_id: &str,
) -> Result<String> {
    let body = serde_json::to_string(payload)
        .map_err(|e| Error::Transport(format!("failed to serialize message body: {}", e)))?;
    let attributes = HashMap::from([("ID".to_string(), correlation_id.to_string())]);

    let message_id = transport
        .send(queue, body, attributes)
        .await
        .map_err(|e| admin_error(queue, e))?;
    info!(
        "Successfully sent message to {} - Message ID: {}",
        queue, message_id
    );
    Ok(message_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryQueue;

    fn sample_payload() -> Vec<FormattedArticle> {
        vec![FormattedArticle {
            web_publication_date: "2023-01-01T10:00:00Z".to_string(),
            web_title: "Example headline".to_string(),
            web_url: "https://www.theguardian.com/example".to_string(),
            content_preview: "Body text.".to_string(),
            keywords: vec!["World news".to_string()],
        }]
    }

    #[tokio::test]
    async fn test_publish_sends_one_message_with_correlation_id() {
        let transport = MemoryQueue::new();
        let payload = sample_payload();

        let message_id = publish(&transport, "test_queue", &payload, "guardian_content")
            .await
            .unwrap();
        assert!(!message_id.is_empty());

        let messages = transport.messages("test_queue").await;
        assert_eq!(messages.len(), 1);
        assert_eq!(
            messages[0].attributes.get("ID").map(String::as_str),
            Some("guardian_content")
        );

        let sent: Vec<FormattedArticle> = serde_json::from_str(&messages[0].body).unwrap();
        assert_eq!(sent, payload);
    }

    #[tokio::test]
    async fn test_publish_failure_maps_to_queue_admin() {
        use async_trait::async_trait;
        use gq_core::Error;

        struct RefusingTransport;

        #[async_trait]
        impl QueueTransport for RefusingTransport {
            async fn retention_period(&self, _queue: &str) -> Result<u64> {
                Ok(0)
            }

            async fn set_retention_period(&self, _queue: &str, _seconds: u64) -> Result<()> {
                Ok(())
            }

            async fn send(
                &self,
                _queue: &str,
                _body: String,
                _attributes: HashMap<String, String>,
            ) -> Result<String> {
                Err(Error::Unexpected("broker unavailable".to_string()))
            }
        }

        let err = publish(&RefusingTransport, "test_queue", &sample_payload(), "id")
            .await
            .unwrap_err();
        assert!(matches!(err, Error::QueueAdmin { queue, .. } if queue == "test_queue"));
    }
}
