//! HTTP request handlers.
//!
//! Handlers are thin: extract, validate, call the repository or statistics
//! layer, wrap the result in [`crate::response::DataResponse`]. All
//! owner-scoped handlers take [`crate::middleware::auth::AuthUser`] as their
//! first extractor.

pub mod gate;
pub mod items;
pub mod ranking;
pub mod refresh;
pub mod stats;
pub mod wear;
