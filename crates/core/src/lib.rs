//! Pure domain logic for the closetlog wardrobe tracker.
//!
//! This crate contains no database or network dependencies. All statistics
//! and rankings are computed against pre-loaded data passed in by the caller
//! (see [`snapshot::ClosetSnapshot`]).

pub mod category;
pub mod error;
pub mod ranking;
pub mod snapshot;
pub mod types;
