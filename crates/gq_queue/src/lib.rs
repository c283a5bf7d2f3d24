pub mod backends;
pub mod publisher;
pub mod retention;

pub use backends::http::HttpQueue;
pub use backends::memory::MemoryQueue;
pub use publisher::publish;
pub use retention::{ensure_retention, RETENTION_SECONDS};

use gq_core::Error;

/// Wrap a transport-call failure into the admin error for `queue`, keeping
/// already-typed queue errors intact.
pub(crate) fn admin_error(queue: &str, err: Error) -> Error {
    match err {
        err @ (Error::QueueAdmin { .. } | Error::Transport(_)) => err,
        other => Error::QueueAdmin {
            queue: queue.to_string(),
            cause: other.to_string(),
        },
    }
}
