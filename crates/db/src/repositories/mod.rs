//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async SQL methods that
//! accept any Postgres executor (a pool or a checked-out connection) as the
//! first argument.

pub mod snippet_repo;

pub use snippet_repo::SnippetRepo;
