//! Bounded execution for store calls.

use std::{future::Future, time::Duration};

use tracing::warn;

use crate::errors::ServiceError;

pub const DEFAULT_OPERATION_TIMEOUT: Duration = Duration::from_secs(10);

/// Run `fut`, turning an expired `limit` into [`ServiceError::Persistence`].
///
/// On expiry `fut` is dropped, not rolled back: a write it already committed
/// stays in the store even though the caller sees an error. A timed-out
/// create therefore means "outcome unknown", not "nothing written".
pub async fn with_timeout<T, F>(limit: Duration, op: &'static str, fut: F) -> Result<T, ServiceError>
where
    F: Future<Output = Result<T, ServiceError>>,
{
    match tokio::time::timeout(limit, fut).await {
        Ok(res) => res,
        Err(_) => {
            warn!(op, timeout_ms = limit.as_millis() as u64, "store operation timed out");
            Err(ServiceError::Persistence(format!("{op} timed out after {}ms", limit.as_millis())))
        }
    }
}
