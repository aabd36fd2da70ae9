//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// Listing parameters (`?limit=`).
///
/// Clamped in the handler via `clamp_limit` before reaching the store.
#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub limit: Option<i64>,
}
