//! Run a function later on the async runtime.

use std::time::Duration;

use thiserror::Error;
use tokio::runtime::Handle;
use tokio::runtime::TryCurrentError;
use tracing::debug;

/// Error returned when a call cannot be scheduled.
#[derive(Debug, Error)]
pub enum DelayError {
    #[error("no async runtime to schedule the call on: {0}")]
    NoRuntime(#[from] TryCurrentError),
}

/// Call `func(args)` once, no sooner than `wait` from now.
///
/// Returns as soon as the call is scheduled. The call runs as a detached
/// task on the current tokio runtime; on a current-thread runtime it runs
/// only after the caller yields. There is no way to cancel it.
pub fn delay<A, F>(func: F, wait: Duration, args: A) -> Result<(), DelayError>
where
    A: Send + 'static,
    F: FnOnce(A) + Send + 'static,
{
    let handle = Handle::try_current()?;
    debug!(?wait, "delay: scheduling call");

    // The join handle is dropped, which detaches the task.
    handle.spawn(async move {
        tokio::time::sleep(wait).await;
        func(args);
    });
    return Ok(());
}
