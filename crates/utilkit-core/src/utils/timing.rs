use std::time::Duration;

/// Resolve after `ms` milliseconds
///
/// No cancellation beyond dropping the future.
pub async fn wait(ms: u64) {
    log::trace!("waiting {}ms", ms);
    tokio::time::sleep(Duration::from_millis(ms)).await;
}
