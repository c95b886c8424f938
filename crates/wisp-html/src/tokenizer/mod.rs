//! HTML tokenizer module.
//!
//! A pared-down version of the
//! [WHATWG tokenizer](https://html.spec.whatwg.org/multipage/parsing.html#tokenization)
//! state machine that stops at the first error instead of recovering.

/// Tokenizer state machine implementation.
pub mod core;
/// Token types produced by the tokenizer.
pub mod token;

pub use core::{HtmlTokenizer, TokenizerState};
pub use token::{Attribute, Token};
