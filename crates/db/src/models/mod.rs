//! Row structs returned by the repositories.
//!
//! Each struct derives `FromRow` for sqlx and `Serialize` so handlers can
//! return it unchanged. Request payloads live in `newsroom_core::input`.

pub mod article;
pub mod comment;
pub mod topic;
pub mod user;
