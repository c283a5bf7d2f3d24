use gq_core::{QueueTransport, Result};
use tracing::info;

use crate::admin_error;

/// Retention policy applied to every destination queue: 3 days.
pub const RETENTION_SECONDS: u64 = 259_200;

/// Make sure the queue keeps unconsumed messages for [`RETENTION_SECONDS`].
/// No-op when the queue is already configured; only an actual update is
/// logged.
pub async fn ensure_retention(transport: &dyn QueueTransport, queue: &str) -> Result<()> {
    let current = transport
        .retention_period(queue)
        .await
        .map_err(|e| admin_error(queue, e))?;
    if current == RETENTION_SECONDS {
        return Ok(());
    }

    transport
        .set_retention_period(queue, RETENTION_SECONDS)
        .await
        .map_err(|e| admin_error(queue, e))?;
    info!(
        "Successfully updated message retention period of {} to 3 days",
        queue
    );
    Ok(())
}
