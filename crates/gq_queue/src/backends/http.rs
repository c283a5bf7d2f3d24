use std::collections::HashMap;
use std::env;
use std::time::Duration;

use async_trait::async_trait;
use gq_core::{QueueTransport, Result};
use serde::{Deserialize, Serialize};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Serialize, Deserialize)]
struct QueueAttributes {
    retention_period: u64,
}

#[derive(Debug, Serialize)]
struct OutgoingMessage<'a> {
    body: &'a str,
    attributes: &'a HashMap<String, String>,
}

#[derive(Debug, Deserialize)]
struct SentMessage {
    message_id: String,
}

/// Queue transport speaking the REST queue-service API:
/// `GET`/`PUT /queues/{id}/attributes` and `POST /queues/{id}/messages`.
pub struct HttpQueue {
    http: reqwest::Client,
    base_url: String,
}

impl HttpQueue {
    /// Queue service address from `QUEUE_HOST` / `QUEUE_PORT`.
    pub fn from_env() -> Result<Self> {
        let host = env::var("QUEUE_HOST").unwrap_or_else(|_| "localhost".to_string());
        let port = env::var("QUEUE_PORT").unwrap_or_else(|_| "9324".to_string());
        Self::new(format!("http://{}:{}", host, port))
    }

    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }

    fn attributes_url(&self, queue: &str) -> String {
        format!("{}/queues/{}/attributes", self.base_url, queue)
    }

    fn messages_url(&self, queue: &str) -> String {
        format!("{}/queues/{}/messages", self.base_url, queue)
    }
}

#[async_trait]
impl QueueTransport for HttpQueue {
    async fn retention_period(&self, queue: &str) -> Result<u64> {
        let attributes: QueueAttributes = self
            .http
            .get(self.attributes_url(queue))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(attributes.retention_period)
    }

    async fn set_retention_period(&self, queue: &str, seconds: u64) -> Result<()> {
        self.http
            .put(self.attributes_url(queue))
            .json(&QueueAttributes {
                retention_period: seconds,
            })
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    async fn send(
        &self,
        queue: &str,
        body: String,
        attributes: HashMap<String, String>,
    ) -> Result<String> {
        let sent: SentMessage = self
            .http
            .post(self.messages_url(queue))
            .json(&OutgoingMessage {
                body: &body,
                attributes: &attributes,
            })
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(sent.message_id)
    }
}
