//! Prelude module for the timeline_dates crate.
//!
//! Re-exports the derive macros used across modules from derive_more.

pub use derive_more::{Display, From};
