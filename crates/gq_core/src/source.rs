use async_trait::async_trait;

use crate::{FetchOutcome, Result, SearchQuery};

/// Article search capability the pipeline fetches through.
#[async_trait]
pub trait ArticleSource: Send + Sync {
    /// Fetch the newest articles matching the query
    async fn fetch(&self, query: &SearchQuery) -> Result<FetchOutcome>;
}
