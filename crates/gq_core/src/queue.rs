use std::collections::HashMap;

use async_trait::async_trait;

use crate::Result;

/// Message-queue capability the pipeline publishes through.
#[async_trait]
pub trait QueueTransport: Send + Sync {
    /// Current message retention period of the queue, in seconds
    async fn retention_period(&self, queue: &str) -> Result<u64>;

    /// Set the message retention period of the queue, in seconds
    async fn set_retention_period(&self, queue: &str, seconds: u64) -> Result<()>;

    /// Send a single message, returning the transport-assigned message id
    async fn send(
        &self,
        queue: &str,
        body: String,
        attributes: HashMap<String, String>,
    ) -> Result<String>;
}
