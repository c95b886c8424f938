//! CSS parser.
//!
//! Grammar:
//!
//! ```text
//! stylesheet  := rule*
//! rule        := selector ("," selector)* "{" declaration? (";" declaration?)* "}"
//! selector    := "*" | tag? ("#" id | "." class)*
//! declaration := name ":" value
//! value       := keyword | number "px" | "#" hex{6}
//! ```
//!
//! Parsing stops at the first error; there is no recovery.

mod error;
mod stylesheet;

pub use error::ParseError;
pub use stylesheet::{CssParser, Declaration, Rule, Stylesheet, parse, parse_selector};
