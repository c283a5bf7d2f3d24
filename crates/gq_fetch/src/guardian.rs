use std::time::Duration;

use async_trait::async_trait;
use gq_core::{ArticleSource, Error, FetchOutcome, RawArticle, Result, SearchQuery};
use serde::Deserialize;
use tracing::{info, warn};
use url::Url;

use crate::retry::RetryPolicy;
use crate::status;

const DEFAULT_BASE_URL: &str = "https://content.guardianapis.com";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Deserialize)]
struct SearchResponse {
    response: SearchBody,
}

#[derive(Debug, Deserialize)]
struct SearchBody {
    total: u64,
    #[serde(default)]
    results: Vec<RawArticle>,
}

/// Client for the Guardian content search endpoint. Accepts the API's own
/// page-size cap as-is; resilience comes from the wrapped retry policy.
pub struct GuardianClient {
    http: reqwest::Client,
    search_url: Url,
    api_key: String,
    retry: RetryPolicy,
}

impl GuardianClient {
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    pub fn with_base_url(api_key: impl Into<String>, base_url: &str) -> Result<Self> {
        let search_url = Url::parse(base_url)
            .and_then(|base| base.join("/search"))
            .map_err(|e| Error::InvalidInput(format!("invalid API base url: {}", e)))?;
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            http,
            search_url,
            api_key: api_key.into(),
            retry: RetryPolicy::default(),
        })
    }

    pub fn with_retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    async fn search(&self, query: &SearchQuery) -> Result<FetchOutcome> {
        let mut params = vec![
            ("api-key", self.api_key.as_str()),
            ("q", query.text.as_str()),
            ("order-by", "newest"),
            ("show-fields", "bodyText"),
            ("show-tags", "keyword"),
        ];
        if let Some(from_date) = &query.from_date {
            params.push(("from-date", from_date.as_str()));
        }

        let response = self
            .http
            .get(self.search_url.clone())
            .query(&params)
            .send()
            .await?;
        // Status errors carry the bare endpoint, never the keyed query string.
        status::check(response.status().as_u16(), self.search_url.as_str())?;

        let parsed: SearchResponse = response.json().await?;
        if parsed.response.total == 0 {
            warn!("No articles found mentioning {}", query.text);
            return Ok(FetchOutcome::Empty);
        }
        if parsed.response.results.is_empty() {
            return Err(Error::Unexpected(format!(
                "search reported {} results but returned none",
                parsed.response.total
            )));
        }
        info!(
            "Successfully retrieved {} latest articles mentioning {}",
            parsed.response.results.len(),
            query.text
        );
        Ok(FetchOutcome::Success(parsed.response.results))
    }
}

#[async_trait]
impl ArticleSource for GuardianClient {
    async fn fetch(&self, query: &SearchQuery) -> Result<FetchOutcome> {
        self.retry.run(|| self.search(query)).await
    }
}
