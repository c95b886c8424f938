//! Common utilities for the Wisp renderer.
//!
//! Shared infrastructure used by every stage of the pipeline:
//! - **Warning System** - deduplicated, colored diagnostics on stderr

pub mod warning;

pub use warning::{clear_warnings, warn_once};
