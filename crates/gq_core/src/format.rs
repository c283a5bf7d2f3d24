use serde_json::Value;

use crate::{Error, FormattedArticle, RawArticle, Result};

/// Maximum number of characters kept from an article body.
const PREVIEW_CHARS: usize = 500;

/// Reduce raw search results to the queue payload shape, keeping only the
/// fields downstream consumers need. The input is left untouched; the first
/// missing required field aborts the whole batch.
pub fn format_results(search_results: &[RawArticle]) -> Result<Vec<FormattedArticle>> {
    search_results.iter().map(format_article).collect()
}

fn format_article(article: &RawArticle) -> Result<FormattedArticle> {
    let fields = require(article, "fields")?;
    let body_text = require_str(fields, "bodyText")?;

    let tags = require(article, "tags")?
        .as_array()
        .ok_or_else(|| Error::MissingField("tags".to_string()))?;
    let keywords = tags
        .iter()
        .map(|tag| require_str(tag, "webTitle").map(str::to_string))
        .collect::<Result<Vec<_>>>()?;

    Ok(FormattedArticle {
        web_publication_date: require_str(article, "webPublicationDate")?.to_string(),
        web_title: require_str(article, "webTitle")?.to_string(),
        web_url: require_str(article, "webUrl")?.to_string(),
        content_preview: body_text.chars().take(PREVIEW_CHARS).collect(),
        keywords,
    })
}

fn require<'a>(value: &'a Value, field: &str) -> Result<&'a Value> {
    value
        .get(field)
        .ok_or_else(|| Error::MissingField(field.to_string()))
}

fn require_str<'a>(value: &'a Value, field: &str) -> Result<&'a str> {
    require(value, field)?
        .as_str()
        .ok_or_else(|| Error::MissingField(field.to_string()))
}
