use thiserror::Error;

/// Failure category derived from an HTTP response status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    RateLimited,
    ClientError,
    ServerError,
    Unexpected,
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("Rate limit exceeded - URL: {0}")]
    RateLimited(String),

    #[error("Client side error {status} - URL: {url}")]
    ClientRequest { status: u16, url: String },

    #[error("Server side error {status} - URL: {url}")]
    ServerRequest { status: u16, url: String },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("missing field `{0}`")]
    MissingField(String),

    #[error("Queue admin error on {queue}: {cause}")]
    QueueAdmin { queue: String, cause: String },

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Category used by the retry policy. Anything that is not a classified
    /// HTTP status failure counts as unexpected and is never retried.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::RateLimited(_) => ErrorKind::RateLimited,
            Error::ClientRequest { .. } => ErrorKind::ClientError,
            Error::ServerRequest { .. } => ErrorKind::ServerError,
            _ => ErrorKind::Unexpected,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_maps_status_errors() {
        let err = Error::RateLimited("https://test.com".to_string());
        assert_eq!(err.kind(), ErrorKind::RateLimited);

        let err = Error::ClientRequest {
            status: 404,
            url: "https://test.com".to_string(),
        };
        assert_eq!(err.kind(), ErrorKind::ClientError);

        let err = Error::ServerRequest {
            status: 503,
            url: "https://test.com".to_string(),
        };
        assert_eq!(err.kind(), ErrorKind::ServerError);
    }

    #[test]
    fn test_kind_defaults_to_unexpected() {
        let err = Error::MissingField("webUrl".to_string());
        assert_eq!(err.kind(), ErrorKind::Unexpected);

        let err = Error::Transport("connection reset".to_string());
        assert_eq!(err.kind(), ErrorKind::Unexpected);
    }
}
