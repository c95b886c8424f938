use thiserror::Error;

/// Fatal HTML syntax error. Lines are 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A quoted attribute value ran into the end of input.
    #[error("line {line}: unterminated quoted value for attribute '{attribute}'")]
    UnterminatedAttributeValue {
        /// Attribute whose value was open.
        attribute: String,
        /// Line where the value started.
        line: usize,
    },

    /// An end tag closed a different element than the one currently open.
    #[error("line {line}: end tag </{found}> does not match open element <{expected}>")]
    MismatchedEndTag {
        /// Name of the innermost open element.
        expected: String,
        /// Name in the end tag.
        found: String,
        /// Line of the end tag.
        line: usize,
    },

    /// The input ended while an element was still open.
    #[error("line {line}: element <{tag}> is never closed")]
    UnclosedElement {
        /// Innermost unclosed element.
        tag: String,
        /// Line of its start tag.
        line: usize,
    },

    /// An end tag appeared with no element open.
    #[error("line {line}: end tag </{tag}> has no matching start tag")]
    UnexpectedEndTag {
        /// Name in the end tag.
        tag: String,
        /// Line of the end tag.
        line: usize,
    },

    /// The input ended in the middle of markup.
    #[error("line {line}: unexpected end of input in {state} state")]
    UnexpectedEof {
        /// Tokenizer state at end of input.
        state: String,
        /// Last line of the input.
        line: usize,
    },

    /// A character that cannot appear at this point in a tag.
    #[error("line {line}: unexpected character {found:?} in {state} state")]
    UnexpectedCharacter {
        /// The offending character.
        found: char,
        /// Tokenizer state that rejected it.
        state: String,
        /// Line of the character.
        line: usize,
    },
}

impl ParseError {
    /// Line the error was reported on.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UnterminatedAttributeValue { line, .. }
            | Self::MismatchedEndTag { line, .. }
            | Self::UnclosedElement { line, .. }
            | Self::UnexpectedEndTag { line, .. }
            | Self::UnexpectedEof { line, .. }
            | Self::UnexpectedCharacter { line, .. } => *line,
        }
    }
}
