//! Request handlers.
//!
//! Each submodule provides async handler functions for one resource.
//! Handlers validate input through `newsroom_core`, delegate to the
//! corresponding repository in `newsroom_db`, and map errors via
//! [`AppError`](crate::error::AppError).

pub mod articles;
pub mod comments;
pub mod endpoints;
pub mod topics;
pub mod users;
