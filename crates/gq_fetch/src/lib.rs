pub mod guardian;
pub mod retry;
pub mod status;

pub use guardian::GuardianClient;
pub use retry::RetryPolicy;
