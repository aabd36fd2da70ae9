//! Domain model structs.
//!
//! Each submodule contains a `FromRow` + `Serialize` struct per row shape
//! the repository returns.

pub mod snippet;
