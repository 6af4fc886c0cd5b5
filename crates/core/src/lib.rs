//! Store-independent building blocks for the newsroom API.
//!
//! - [`error`]: the failure taxonomy shared by every layer.
//! - [`query`]: validation of list-endpoint query strings.
//! - [`input`]: validation of request bodies and path identifiers.

pub mod error;
pub mod input;
pub mod query;
pub mod types;
