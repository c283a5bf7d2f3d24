use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{Error, Result};

/// Article object exactly as the Guardian API returned it. Kept opaque:
/// only the formatter knows which fields it needs.
pub type RawArticle = Value;

/// Immutable input to one fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub text: String,
    pub from_date: Option<String>,
}

impl SearchQuery {
    pub fn new(text: impl Into<String>, from_date: Option<String>) -> Result<Self> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(Error::InvalidInput(
                "search query must not be empty".to_string(),
            ));
        }
        if let Some(date) = &from_date {
            NaiveDate::parse_from_str(date, "%Y-%m-%d").map_err(|_| {
                Error::InvalidInput(format!("invalid from-date (expected YYYY-MM-DD): {}", date))
            })?;
        }
        Ok(Self { text, from_date })
    }
}

/// Outcome of one search-API call. `Empty` is distinct from a success with
/// articles so callers must pattern-match instead of checking a list length.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    Success(Vec<RawArticle>),
    Empty,
}

/// The queue payload shape: exactly these five fields per article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormattedArticle {
    #[serde(rename = "webPublicationDate")]
    pub web_publication_date: String,
    #[serde(rename = "webTitle")]
    pub web_title: String,
    #[serde(rename = "webUrl")]
    pub web_url: String,
    pub content_preview: String,
    pub keywords: Vec<String>,
}

/// The sole externally observed output of one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryResult {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub body: DeliveryBody,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryBody {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<DeliveryData>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryData {
    pub message_id: String,
}

impl DeliveryResult {
    pub fn ok(message: impl Into<String>, message_id: impl Into<String>) -> Self {
        Self {
            status_code: 200,
            body: DeliveryBody {
                message: message.into(),
                data: Some(DeliveryData {
                    message_id: message_id.into(),
                }),
            },
        }
    }

    pub fn no_content(message: impl Into<String>) -> Self {
        Self {
            status_code: 204,
            body: DeliveryBody {
                message: message.into(),
                data: None,
            },
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status_code: 500,
            body: DeliveryBody {
                message: message.into(),
                data: None,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_query_rejects_empty_text() {
        assert!(SearchQuery::new("", None).is_err());
        assert!(SearchQuery::new("   ", None).is_err());
        assert!(SearchQuery::new("machine learning", None).is_ok());
    }

    #[test]
    fn test_search_query_validates_from_date() {
        assert!(SearchQuery::new("test", Some("2023-01-01".to_string())).is_ok());
        assert!(SearchQuery::new("test", Some("01-01-2023".to_string())).is_err());
        assert!(SearchQuery::new("test", Some("2023-13-01".to_string())).is_err());
        assert!(SearchQuery::new("test", Some("yesterday".to_string())).is_err());
    }

    #[test]
    fn test_delivery_result_serializes_like_the_envelope() {
        let result = DeliveryResult::ok("sent", "abc-123");
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["statusCode"], 200);
        assert_eq!(json["body"]["message"], "sent");
        assert_eq!(json["body"]["data"]["message_id"], "abc-123");

        let result = DeliveryResult::no_content("nothing");
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["statusCode"], 204);
        assert!(json["body"].get("data").is_none());
    }
}
