//! HTML tokenizer and tree builder for the Wisp renderer.
//!
//! # Scope
//!
//! The accepted language is deliberately small:
//! - Balanced elements `<name attr="value">...</name>` and self-closing `<name/>`
//! - Single- or double-quoted and unquoted attribute values
//! - Text runs, kept verbatim (whitespace included)
//! - `<!-- comments -->` and `<!DOCTYPE ...>`, which are skipped
//!
//! Tag and attribute names are ASCII-lowercased. Anything unbalanced is a
//! [`ParseError`]; there is no error recovery.
//!
//! # Not Supported
//!
//! - Character references (`&amp;` is kept as literal text)
//! - Void elements without the self-closing slash
//! - Implied end tags and the rest of the WHATWG tree construction rules

/// Parse errors shared by the tokenizer and the tree builder.
pub mod error;
/// Tree construction from the token stream.
pub mod parser;
/// Tokenizer state machine.
pub mod tokenizer;

pub use error::ParseError;
pub use parser::{HtmlParser, format_tree};
pub use tokenizer::{Attribute, HtmlTokenizer, Token};

use wisp_dom::DomTree;

/// Tokenize and parse `input` into a document tree.
///
/// # Errors
///
/// Returns a [`ParseError`] for unbalanced or mismatched tags, an unterminated
/// quoted attribute value, or markup cut off by the end of input.
pub fn parse(input: &str) -> Result<DomTree, ParseError> {
    let tokens = HtmlTokenizer::new(input).run()?;
    HtmlParser::new(tokens).run()
}
