use std::collections::HashMap;

use async_trait::async_trait;
use gq_core::{QueueTransport, Result};
use tokio::sync::RwLock;
use uuid::Uuid;

/// Retention given to queues created on first touch (4 days), so a fresh
/// queue still exercises the ensure step before the first send.
const DEFAULT_RETENTION_SECONDS: u64 = 345_600;

#[derive(Debug, Clone)]
pub struct QueuedMessage {
    pub body: String,
    pub attributes: HashMap<String, String>,
}

#[derive(Debug)]
struct QueueState {
    retention_seconds: u64,
    messages: Vec<QueuedMessage>,
}

impl QueueState {
    fn new() -> Self {
        Self {
            retention_seconds: DEFAULT_RETENTION_SECONDS,
            messages: Vec::new(),
        }
    }
}

/// In-memory queue transport for dry runs and tests. Queues come into
/// existence the first time they are touched.
pub struct MemoryQueue {
    queues: RwLock<HashMap<String, QueueState>>,
}

impl MemoryQueue {
    pub fn new() -> Self {
        Self {
            queues: RwLock::new(HashMap::new()),
        }
    }

    /// Messages sent to the queue so far, oldest first.
    pub async fn messages(&self, queue: &str) -> Vec<QueuedMessage> {
        let queues = self.queues.read().await;
        queues
            .get(queue)
            .map(|state| state.messages.clone())
            .unwrap_or_default()
    }
}

impl Default for MemoryQueue {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl QueueTransport for MemoryQueue {
    async fn retention_period(&self, queue: &str) -> Result<u64> {
        let mut queues = self.queues.write().await;
        let state = queues
            .entry(queue.to_string())
            .or_insert_with(QueueState::new);
        Ok(state.retention_seconds)
    }

    async fn set_retention_period(&self, queue: &str, seconds: u64) -> Result<()> {
        let mut queues = self.queues.write().await;
        let state = queues
            .entry(queue.to_string())
            .or_insert_with(QueueState::new);
        state.retention_seconds = seconds;
        Ok(())
    }

    async fn send(
        &self,
        queue: &str,
        body: String,
        attributes: HashMap<String, String>,
    ) -> Result<String> {
        let mut queues = self.queues.write().await;
        let state = queues
            .entry(queue.to_string())
            .or_insert_with(QueueState::new);
        state.messages.push(QueuedMessage { body, attributes });
        Ok(Uuid::new_v4().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fresh_queue_has_default_retention() {
        let transport = MemoryQueue::new();
        let retention = transport.retention_period("q").await.unwrap();
        assert_eq!(retention, DEFAULT_RETENTION_SECONDS);
    }

    #[tokio::test]
    async fn test_set_retention_round_trips() {
        let transport = MemoryQueue::new();
        transport.set_retention_period("q", 259_200).await.unwrap();
        assert_eq!(transport.retention_period("q").await.unwrap(), 259_200);
    }

    #[tokio::test]
    async fn test_send_stores_messages_with_distinct_ids() {
        let transport = MemoryQueue::new();

        let first = transport
            .send("q", "one".to_string(), HashMap::new())
            .await
            .unwrap();
        let second = transport
            .send("q", "two".to_string(), HashMap::new())
            .await
            .unwrap();
        assert_ne!(first, second);

        let messages = transport.messages("q").await;
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].body, "one");
        assert_eq!(messages[1].body, "two");
    }

    #[tokio::test]
    async fn test_queues_are_isolated() {
        let transport = MemoryQueue::new();
        transport
            .send("a", "payload".to_string(), HashMap::new())
            .await
            .unwrap();
        assert!(transport.messages("b").await.is_empty());
    }
}
