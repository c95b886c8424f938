//! CSS tokenizer module.

/// CSS token types.
pub mod token;
/// CSS tokenizer implementation.
pub mod tokenizer;

pub use token::{CssToken, PositionedToken};
pub use tokenizer::CssTokenizer;
