//! Environment/runtime helpers
//!
//! Sanity checks run once at startup, before the listener is bound.

use tracing::warn;

/// Warn when the API documentation directory is missing; `/doc` will 404.
pub async fn ensure_static_dir(static_dir: &str) -> bool {
    if tokio::fs::metadata(static_dir).await.is_err() {
        warn!(%static_dir, "static docs directory not found; /doc will 404");
        return false;
    }
    true
}
