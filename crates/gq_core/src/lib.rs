pub mod error;
pub mod format;
pub mod queue;
pub mod source;
pub mod types;

pub use error::{Error, ErrorKind};
pub use queue::QueueTransport;
pub use source::ArticleSource;
pub use types::{
    DeliveryBody, DeliveryData, DeliveryResult, FetchOutcome, FormattedArticle, RawArticle,
    SearchQuery,
};

pub type Result<T> = std::result::Result<T, Error>;
