//! Pure domain logic for snipbin.
//!
//! Nothing in this crate touches the database or the network, so it can be
//! shared by the store, the HTTP service and the bootstrap CLI.

pub mod error;
pub mod pagination;
pub mod slug;
pub mod types;
pub mod validation;
