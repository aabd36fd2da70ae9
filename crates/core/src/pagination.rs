//! Listing limits.

/// Number of characters of content exposed in a listing preview.
pub const PREVIEW_LENGTH: i32 = 100;

/// Default page size for recent-snippet listings.
pub const DEFAULT_LIST_LIMIT: i64 = 20;

/// Upper bound on a single listing page.
pub const MAX_LIST_LIMIT: i64 = 100;

/// Clamp a user-provided limit to `[1, max]`, falling back to `default`.
pub fn clamp_limit(limit: Option<i64>, default: i64, max: i64) -> i64 {
    limit.unwrap_or(default).max(1).min(max)
}
