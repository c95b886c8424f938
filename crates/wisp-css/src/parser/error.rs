use thiserror::Error;

/// Fatal CSS syntax error. Lines are 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A selector list was not followed by `{`.
    #[error("line {line}: expected '{{' after selector, found {found}")]
    MissingOpenBrace {
        /// What was found instead.
        found: String,
        /// Line of the offending token.
        line: usize,
    },

    /// The input ended inside a declaration block.
    #[error("line {line}: expected '}}' before end of input")]
    MissingCloseBrace {
        /// Last line of the input.
        line: usize,
    },

    /// A property name was not followed by `:`.
    #[error("line {line}: expected ':' after property '{property}', found {found}")]
    MissingColon {
        /// The property name.
        property: String,
        /// What was found instead.
        found: String,
        /// Line of the offending token.
        line: usize,
    },

    /// A declaration has `:` but no value.
    #[error("line {line}: expected a value for property '{property}', found {found}")]
    MissingValue {
        /// The property name.
        property: String,
        /// What was found instead.
        found: String,
        /// Line of the offending token.
        line: usize,
    },

    /// A length with a unit other than `px`.
    #[error("line {line}: unsupported unit '{unit}' (only px is supported)")]
    UnsupportedUnit {
        /// The unit as written.
        unit: String,
        /// Line of the length.
        line: usize,
    },

    /// A number with no unit at all.
    #[error("line {line}: number {value} is missing a unit (expected px)")]
    MissingUnit {
        /// The number as written.
        value: String,
        /// Line of the number.
        line: usize,
    },

    /// A `#` color that is not exactly six hex digits.
    #[error("line {line}: invalid color '#{value}' (expected six hex digits)")]
    InvalidColor {
        /// Text after the `#`.
        value: String,
        /// Line of the color.
        line: usize,
    },

    /// A token that cannot appear where it was found.
    #[error("line {line}: unexpected {found} in {context}")]
    UnexpectedToken {
        /// The token as text.
        found: String,
        /// What was being parsed.
        context: &'static str,
        /// Line of the token.
        line: usize,
    },
}

impl ParseError {
    /// Line the error was reported on.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::MissingOpenBrace { line, .. }
            | Self::MissingCloseBrace { line }
            | Self::MissingColon { line, .. }
            | Self::MissingValue { line, .. }
            | Self::UnsupportedUnit { line, .. }
            | Self::MissingUnit { line, .. }
            | Self::InvalidColor { line, .. }
            | Self::UnexpectedToken { line, .. } => *line,
        }
    }
}
