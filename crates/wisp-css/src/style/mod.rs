//! Specified values carried by declarations and resolved property maps.

/// Value types and color parsing.
pub mod values;

pub use values::{ColorValue, Unit, Value};
