/// An attribute on a start tag token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    /// Lowercased attribute name.
    pub name: String,
    /// Raw value; empty for a bare attribute such as `hidden`.
    pub value: String,
}

impl Attribute {
    /// Create a new attribute with the given name and value.
    #[must_use]
    pub const fn new(name: String, value: String) -> Self {
        Self { name, value }
    }
}

/// Tokens handed from the tokenizer to the tree builder.
///
/// Tag tokens remember the line they started on so tree construction errors
/// can point back into the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// `<name attr="value">` or `<name/>`.
    StartTag {
        /// Lowercased tag name.
        name: String,
        /// Whether the tag ended with `/>`.
        self_closing: bool,
        /// Attributes in source order; duplicates are kept.
        attributes: Vec<Attribute>,
        /// Line of the `<`.
        line: usize,
    },

    /// `</name>`.
    EndTag {
        /// Lowercased tag name.
        name: String,
        /// Line of the `<`.
        line: usize,
    },

    /// A maximal run of character data between two pieces of markup.
    Text {
        /// The characters, verbatim.
        data: String,
        /// Line of the first character.
        line: usize,
    },

    /// End of input.
    EndOfFile,
}

impl Token {
    /// Create a new start tag token with no attributes.
    #[must_use]
    pub const fn new_start_tag(line: usize) -> Self {
        Self::StartTag {
            name: String::new(),
            self_closing: false,
            attributes: Vec::new(),
            line,
        }
    }

    /// Create a new end tag token.
    #[must_use]
    pub const fn new_end_tag(line: usize) -> Self {
        Self::EndTag {
            name: String::new(),
            line,
        }
    }

    /// Append a character to the tag name. No-op for other token kinds.
    pub fn append_to_tag_name(&mut self, c: char) {
        if let Self::StartTag { name, .. } | Self::EndTag { name, .. } = self {
            name.push(c);
        }
    }

    /// Start a new, empty attribute on a start tag.
    pub fn start_new_attribute(&mut self) {
        if let Self::StartTag { attributes, .. } = self {
            attributes.push(Attribute::new(String::new(), String::new()));
        }
    }

    /// Append a character to the name of the attribute being built.
    pub fn append_to_current_attribute_name(&mut self, c: char) {
        if let Self::StartTag { attributes, .. } = self {
            if let Some(attr) = attributes.last_mut() {
                attr.name.push(c);
            }
        }
    }

    /// Append a character to the value of the attribute being built.
    pub fn append_to_current_attribute_value(&mut self, c: char) {
        if let Self::StartTag { attributes, .. } = self {
            if let Some(attr) = attributes.last_mut() {
                attr.value.push(c);
            }
        }
    }

    /// Name of the attribute being built, if any.
    #[must_use]
    pub fn current_attribute_name(&self) -> Option<&str> {
        match self {
            Self::StartTag { attributes, .. } => attributes.last().map(|a| a.name.as_str()),
            _ => None,
        }
    }

    /// Mark a start tag as self-closing.
    pub fn set_self_closing(&mut self) {
        if let Self::StartTag { self_closing, .. } = self {
            *self_closing = true;
        }
    }
}
