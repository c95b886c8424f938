//! CSS token types, a small subset of
//! [§ 4 Tokenization](https://www.w3.org/TR/css-syntax-3/#tokenization).

use std::fmt;

/// A CSS token.
#[derive(Debug, Clone, PartialEq)]
pub enum CssToken {
    /// An identifier such as `div`, `margin-left` or `auto`.
    Ident(String),
    /// `#` followed by name characters, e.g. `#main` or `#ff0000`.
    Hash(String),
    /// A number with no unit.
    Number(f32),
    /// A number followed by a unit, e.g. `12px` or `1.5em`.
    Dimension {
        /// Numeric part.
        value: f32,
        /// Unit text as written.
        unit: String,
    },
    /// Any other single character, e.g. `*` or `.`.
    Delim(char),
    /// `:`
    Colon,
    /// `;`
    Semicolon,
    /// `,`
    Comma,
    /// `{`
    LeftBrace,
    /// `}`
    RightBrace,
    /// One or more whitespace characters.
    Whitespace,
    /// End of input.
    EOF,
}

impl CssToken {
    /// Check if this is an EOF token.
    #[must_use]
    pub const fn is_eof(&self) -> bool {
        matches!(self, Self::EOF)
    }
}

impl fmt::Display for CssToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ident(s) => f.write_str(s),
            Self::Hash(s) => write!(f, "#{s}"),
            Self::Number(n) => write!(f, "{n}"),
            Self::Dimension { value, unit } => write!(f, "{value}{unit}"),
            Self::Delim(c) => write!(f, "{c}"),
            Self::Colon => f.write_str(":"),
            Self::Semicolon => f.write_str(";"),
            Self::Comma => f.write_str(","),
            Self::LeftBrace => f.write_str("{"),
            Self::RightBrace => f.write_str("}"),
            Self::Whitespace => f.write_str("whitespace"),
            Self::EOF => f.write_str("end of input"),
        }
    }
}

/// A token with the 1-based line it started on.
#[derive(Debug, Clone, PartialEq)]
pub struct PositionedToken {
    /// The token.
    pub token: CssToken,
    /// Line of its first character.
    pub line: usize,
}
