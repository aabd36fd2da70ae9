//! Slug generation.
//!
//! A slug is the short public identifier of a snippet: [`SLUG_LENGTH`]
//! characters drawn uniformly, with replacement, from the 62-symbol
//! alphanumeric alphabet. The keyspace is 62^6 (about 56.8 billion), so
//! blind collisions are rare but possible; the store re-checks every
//! candidate and retries up to [`MAX_SLUG_ATTEMPTS`] times.

use rand::Rng;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Number of characters in a generated slug.
pub const SLUG_LENGTH: usize = 6;

/// Maximum generate-and-check rounds before allocation gives up.
pub const MAX_SLUG_ATTEMPTS: u32 = 10;

/// Column width of `snippets.slug`. Generated slugs are shorter; anything
/// longer can never match a stored row.
pub const SLUG_COLUMN_WIDTH: usize = 10;

// ---------------------------------------------------------------------------
// Generators
// ---------------------------------------------------------------------------

/// Source of candidate slugs.
///
/// Implementations are pure generators and never look at storage; the
/// store owns the collision check.
pub trait SlugGenerator: Send + Sync + 'static {
    /// Produce the next candidate slug.
    fn generate(&self) -> String;
}

/// Default generator backed by the thread-local RNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomSlugGenerator;

impl SlugGenerator for RandomSlugGenerator {
    fn generate(&self) -> String {
        generate_slug()
    }
}

/// Generate a random slug of [`SLUG_LENGTH`] characters from `[A-Za-z0-9]`.
pub fn generate_slug() -> String {
    rand::rng()
        .sample_iter(&rand::distr::Alphanumeric)
        .take(SLUG_LENGTH)
        .map(char::from)
        .collect()
}

/// Whether `candidate` has the shape of a generated slug.
pub fn is_valid_slug(candidate: &str) -> bool {
    candidate.len() == SLUG_LENGTH && candidate.bytes().all(|b| b.is_ascii_alphanumeric())
}

/// Whether `candidate` could be stored in `snippets.slug` at all.
///
/// Looser than [`is_valid_slug`]: rows written before the current
/// generator may carry any non-empty key up to [`SLUG_COLUMN_WIDTH`].
pub fn fits_slug_column(candidate: &str) -> bool {
    !candidate.is_empty() && candidate.chars().count() <= SLUG_COLUMN_WIDTH
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
