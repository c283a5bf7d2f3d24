use gq_core::{Error, ErrorKind, Result};

/// Map an HTTP status code to a failure category. `None` means the response
/// can be treated as success (200-399).
pub fn classify(status: u16) -> Option<ErrorKind> {
    match status {
        200..=399 => None,
        429 => Some(ErrorKind::RateLimited),
        400..=499 => Some(ErrorKind::ClientError),
        500..=599 => Some(ErrorKind::ServerError),
        _ => Some(ErrorKind::Unexpected),
    }
}

/// Convert a non-success status into the typed error carrying status and URL.
pub fn check(status: u16, url: &str) -> Result<()> {
    match classify(status) {
        None => Ok(()),
        Some(ErrorKind::RateLimited) => Err(Error::RateLimited(url.to_string())),
        Some(ErrorKind::ClientError) => Err(Error::ClientRequest {
            status,
            url: url.to_string(),
        }),
        Some(ErrorKind::ServerError) => Err(Error::ServerRequest {
            status,
            url: url.to_string(),
        }),
        Some(ErrorKind::Unexpected) => Err(Error::Unexpected(format!(
            "unhandled status {} - URL: {}",
            status, url
        ))),
    }
}
