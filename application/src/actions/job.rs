//! Job polling.

use crate::actions::{error::ActionError, ActionResult};
use crate::ports::platform::PlatformClient;
use stratus_domain::Job;
use tracing::debug;

/// Drives a backend job to a terminal state.
///
/// Suspends until the client reports completion or failure, forwarding the
/// warnings collected while polling. Retry, timeout, and cancellation
/// policy live in the client; a timeout or cancellation error comes back
/// unchanged in kind.
pub async fn poll_job(client: &dyn PlatformClient, job: Job) -> ActionResult<()> {
    debug!("polling job {}", job);
    let (warnings, result) = client.poll_job(job).await;
    (warnings, result.map_err(ActionError::from))
}
