use strum_macros::Display;

use super::token::Token;
use crate::error::ParseError;

/// The tokenizer state machine.
///
/// The states follow the naming of
/// [§ 13.2.5 Tokenization](https://html.spec.whatwg.org/multipage/parsing.html#tokenization),
/// minus everything needed only for scripts, character references and error
/// recovery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum TokenizerState {
    /// Character data between tags.
    Data,
    /// Just after `<`.
    TagOpen,
    /// Just after `</`.
    EndTagOpen,
    /// Inside a tag name.
    TagName,
    /// After an end tag name, waiting for `>`.
    AfterEndTagName,
    /// Between attributes.
    BeforeAttributeName,
    /// Inside an attribute name.
    AttributeName,
    /// After an attribute name, before `=` or the next attribute.
    AfterAttributeName,
    /// After `=`.
    BeforeAttributeValue,
    /// Inside `"..."`.
    AttributeValueDoubleQuoted,
    /// Inside `'...'`.
    AttributeValueSingleQuoted,
    /// Inside an unquoted value.
    AttributeValueUnquoted,
    /// Right after a closing quote.
    AfterAttributeValueQuoted,
    /// After `/` inside a start tag.
    SelfClosingStartTag,
    /// Just after `<!`.
    MarkupDeclarationOpen,
    /// Inside `<!-- ... -->`.
    Comment,
    /// Inside `<!DOCTYPE ...>` or any other `<!...>` declaration.
    Declaration,
}

/// HTML tokenizer. Converts source text into a flat list of [`Token`]s.
///
/// ```
/// use wisp_html::{HtmlTokenizer, Token};
///
/// let tokens = HtmlTokenizer::new("<p>hi</p>").run().unwrap();
/// assert!(matches!(&tokens[1], Token::Text { data, .. } if data == "hi"));
/// ```
pub struct HtmlTokenizer {
    state: TokenizerState,
    input: Vec<char>,
    current_pos: usize,
    current_input_character: Option<char>,
    line: usize,
    // When true, the next iteration of the main loop will not consume a new character.
    reconsume: bool,
    current_token: Option<Token>,
    text_buffer: String,
    text_line: usize,
    attribute_line: usize,
    token_stream: Vec<Token>,
    at_eof: bool,
}

impl HtmlTokenizer {
    /// Create a new tokenizer for the given input, starting in the data state.
    #[must_use]
    pub fn new(input: &str) -> Self {
        Self {
            state: TokenizerState::Data,
            input: input.chars().collect(),
            current_pos: 0,
            current_input_character: None,
            line: 1,
            reconsume: false,
            current_token: None,
            text_buffer: String::new(),
            text_line: 1,
            attribute_line: 1,
            token_stream: Vec::new(),
            at_eof: false,
        }
    }

    /// Run the state machine to the end of input.
    ///
    /// The returned stream always ends with [`Token::EndOfFile`].
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] for an unterminated attribute value, a tag cut
    /// off by the end of input, or a character that cannot appear inside a tag.
    pub fn run(mut self) -> Result<Vec<Token>, ParseError> {
        while !self.at_eof {
            if self.reconsume {
                self.reconsume = false;
            } else {
                self.consume();
            }
            match self.state {
                TokenizerState::Data => self.handle_data_state(),
                TokenizerState::TagOpen => self.handle_tag_open_state(),
                TokenizerState::EndTagOpen => self.handle_end_tag_open_state()?,
                TokenizerState::TagName => self.handle_tag_name_state()?,
                TokenizerState::AfterEndTagName => self.handle_after_end_tag_name_state()?,
                TokenizerState::BeforeAttributeName => self.handle_before_attribute_name_state()?,
                TokenizerState::AttributeName => self.handle_attribute_name_state()?,
                TokenizerState::AfterAttributeName => self.handle_after_attribute_name_state()?,
                TokenizerState::BeforeAttributeValue => {
                    self.handle_before_attribute_value_state()?;
                }
                TokenizerState::AttributeValueDoubleQuoted => {
                    self.handle_attribute_value_quoted_state('"')?;
                }
                TokenizerState::AttributeValueSingleQuoted => {
                    self.handle_attribute_value_quoted_state('\'')?;
                }
                TokenizerState::AttributeValueUnquoted => {
                    self.handle_attribute_value_unquoted_state()?;
                }
                TokenizerState::AfterAttributeValueQuoted => {
                    self.handle_after_attribute_value_quoted_state()?;
                }
                TokenizerState::SelfClosingStartTag => self.handle_self_closing_start_tag_state()?,
                TokenizerState::MarkupDeclarationOpen => self.handle_markup_declaration_open_state(),
                TokenizerState::Comment => self.handle_comment_state()?,
                TokenizerState::Declaration => self.handle_declaration_state()?,
            }
        }
        Ok(self.token_stream)
    }

    fn consume(&mut self) {
        self.current_input_character = self.input.get(self.current_pos).copied();
        if let Some(c) = self.current_input_character {
            self.current_pos += 1;
            if c == '\n' {
                self.line += 1;
            }
        }
    }

    const fn switch_to(&mut self, state: TokenizerState) {
        self.state = state;
    }

    const fn reconsume_in(&mut self, state: TokenizerState) {
        self.reconsume = true;
        self.state = state;
    }

    /// Whether the unconsumed input starts with `s`, compared ASCII case-insensitively.
    fn next_few_characters_are(&self, s: &str) -> bool {
        let mut rest = self.input.iter().skip(self.current_pos);
        s.chars()
            .all(|expected| rest.next().is_some_and(|c| c.eq_ignore_ascii_case(&expected)))
    }

    fn eof_error(&self) -> ParseError {
        ParseError::UnexpectedEof {
            state: self.state.to_string(),
            line: self.line,
        }
    }

    fn unexpected(&self, found: char) -> ParseError {
        ParseError::UnexpectedCharacter {
            found,
            state: self.state.to_string(),
            line: self.line,
        }
    }

    fn flush_text(&mut self) {
        if !self.text_buffer.is_empty() {
            self.token_stream.push(Token::Text {
                data: std::mem::take(&mut self.text_buffer),
                line: self.text_line,
            });
        }
    }

    fn push_text(&mut self, c: char) {
        if self.text_buffer.is_empty() {
            self.text_line = self.line - usize::from(c == '\n');
        }
        self.text_buffer.push(c);
    }

    fn emit_current_token(&mut self) {
        if let Some(token) = self.current_token.take() {
            self.token_stream.push(token);
        }
        self.switch_to(TokenizerState::Data);
    }

    fn with_current_token(&mut self, f: impl FnOnce(&mut Token)) {
        if let Some(token) = self.current_token.as_mut() {
            f(token);
        }
    }

    fn handle_data_state(&mut self) {
        match self.current_input_character {
            Some('<') => self.switch_to(TokenizerState::TagOpen),
            None => {
                self.flush_text();
                self.token_stream.push(Token::EndOfFile);
                self.at_eof = true;
            }
            Some(c) => self.push_text(c),
        }
    }

    fn handle_tag_open_state(&mut self) {
        match self.current_input_character {
            Some('/') => {
                self.flush_text();
                self.switch_to(TokenizerState::EndTagOpen);
            }
            Some('!') => {
                self.flush_text();
                self.switch_to(TokenizerState::MarkupDeclarationOpen);
            }
            Some(c) if c.is_ascii_alphabetic() => {
                self.flush_text();
                self.current_token = Some(Token::new_start_tag(self.line));
                self.reconsume_in(TokenizerState::TagName);
            }
            // A lone `<` is character data, as in `a < b`.
            _ => {
                self.push_text('<');
                self.reconsume_in(TokenizerState::Data);
            }
        }
    }

    fn handle_end_tag_open_state(&mut self) -> Result<(), ParseError> {
        match self.current_input_character {
            Some(c) if c.is_ascii_alphabetic() => {
                self.current_token = Some(Token::new_end_tag(self.line));
                self.reconsume_in(TokenizerState::TagName);
                Ok(())
            }
            Some(c) => Err(self.unexpected(c)),
            None => Err(self.eof_error()),
        }
    }

    fn handle_tag_name_state(&mut self) -> Result<(), ParseError> {
        let is_end_tag = matches!(self.current_token, Some(Token::EndTag { .. }));
        match self.current_input_character {
            Some(c) if c.is_whitespace() => {
                if is_end_tag {
                    self.switch_to(TokenizerState::AfterEndTagName);
                } else {
                    self.switch_to(TokenizerState::BeforeAttributeName);
                }
            }
            Some('/') if !is_end_tag => self.switch_to(TokenizerState::SelfClosingStartTag),
            Some('>') => self.emit_current_token(),
            Some(c @ ('<' | '/' | '"' | '\'' | '=')) => return Err(self.unexpected(c)),
            Some(c) => self.with_current_token(|t| t.append_to_tag_name(c.to_ascii_lowercase())),
            None => return Err(self.eof_error()),
        }
        Ok(())
    }

    fn handle_after_end_tag_name_state(&mut self) -> Result<(), ParseError> {
        match self.current_input_character {
            Some(c) if c.is_whitespace() => Ok(()),
            Some('>') => {
                self.emit_current_token();
                Ok(())
            }
            Some(c) => Err(self.unexpected(c)),
            None => Err(self.eof_error()),
        }
    }

    fn handle_before_attribute_name_state(&mut self) -> Result<(), ParseError> {
        match self.current_input_character {
            Some(c) if c.is_whitespace() => {}
            Some('/') => self.switch_to(TokenizerState::SelfClosingStartTag),
            Some('>') => self.emit_current_token(),
            Some(c @ ('"' | '\'' | '<' | '=')) => return Err(self.unexpected(c)),
            Some(_) => {
                self.with_current_token(Token::start_new_attribute);
                self.reconsume_in(TokenizerState::AttributeName);
            }
            None => return Err(self.eof_error()),
        }
        Ok(())
    }

    fn handle_attribute_name_state(&mut self) -> Result<(), ParseError> {
        match self.current_input_character {
            Some(c) if c.is_whitespace() => self.switch_to(TokenizerState::AfterAttributeName),
            Some('/') => self.switch_to(TokenizerState::SelfClosingStartTag),
            Some('=') => self.switch_to(TokenizerState::BeforeAttributeValue),
            Some('>') => self.emit_current_token(),
            Some(c @ ('"' | '\'' | '<')) => return Err(self.unexpected(c)),
            Some(c) => self.with_current_token(|t| {
                t.append_to_current_attribute_name(c.to_ascii_lowercase());
            }),
            None => return Err(self.eof_error()),
        }
        Ok(())
    }

    fn handle_after_attribute_name_state(&mut self) -> Result<(), ParseError> {
        match self.current_input_character {
            Some(c) if c.is_whitespace() => {}
            Some('/') => self.switch_to(TokenizerState::SelfClosingStartTag),
            Some('=') => self.switch_to(TokenizerState::BeforeAttributeValue),
            Some('>') => self.emit_current_token(),
            Some(c @ ('"' | '\'' | '<')) => return Err(self.unexpected(c)),
            Some(_) => {
                self.with_current_token(Token::start_new_attribute);
                self.reconsume_in(TokenizerState::AttributeName);
            }
            None => return Err(self.eof_error()),
        }
        Ok(())
    }

    fn handle_before_attribute_value_state(&mut self) -> Result<(), ParseError> {
        match self.current_input_character {
            Some(c) if c.is_whitespace() => {}
            Some('"') => {
                self.attribute_line = self.line;
                self.switch_to(TokenizerState::AttributeValueDoubleQuoted);
            }
            Some('\'') => {
                self.attribute_line = self.line;
                self.switch_to(TokenizerState::AttributeValueSingleQuoted);
            }
            Some('>') => self.emit_current_token(),
            Some(_) => self.reconsume_in(TokenizerState::AttributeValueUnquoted),
            None => return Err(self.eof_error()),
        }
        Ok(())
    }

    fn handle_attribute_value_quoted_state(&mut self, quote: char) -> Result<(), ParseError> {
        match self.current_input_character {
            Some(c) if c == quote => self.switch_to(TokenizerState::AfterAttributeValueQuoted),
            Some(c) => self.with_current_token(|t| t.append_to_current_attribute_value(c)),
            None => {
                let attribute = self
                    .current_token
                    .as_ref()
                    .and_then(Token::current_attribute_name)
                    .unwrap_or_default()
                    .to_owned();
                return Err(ParseError::UnterminatedAttributeValue {
                    attribute,
                    line: self.attribute_line,
                });
            }
        }
        Ok(())
    }

    fn handle_attribute_value_unquoted_state(&mut self) -> Result<(), ParseError> {
        match self.current_input_character {
            Some(c) if c.is_whitespace() => self.switch_to(TokenizerState::BeforeAttributeName),
            Some('>') => self.emit_current_token(),
            Some(c @ ('"' | '\'' | '<' | '=' | '`')) => return Err(self.unexpected(c)),
            Some(c) => self.with_current_token(|t| t.append_to_current_attribute_value(c)),
            None => return Err(self.eof_error()),
        }
        Ok(())
    }

    fn handle_after_attribute_value_quoted_state(&mut self) -> Result<(), ParseError> {
        match self.current_input_character {
            Some(c) if c.is_whitespace() => self.switch_to(TokenizerState::BeforeAttributeName),
            Some('/') => self.switch_to(TokenizerState::SelfClosingStartTag),
            Some('>') => self.emit_current_token(),
            // `a="1"b="2"`: missing whitespace between attributes is tolerated.
            Some(_) => self.reconsume_in(TokenizerState::BeforeAttributeName),
            None => return Err(self.eof_error()),
        }
        Ok(())
    }

    fn handle_self_closing_start_tag_state(&mut self) -> Result<(), ParseError> {
        match self.current_input_character {
            Some('>') => {
                self.with_current_token(Token::set_self_closing);
                self.emit_current_token();
                Ok(())
            }
            Some(c) => Err(self.unexpected(c)),
            None => Err(self.eof_error()),
        }
    }

    fn handle_markup_declaration_open_state(&mut self) {
        // The current character is the one right after `<!`.
        if self.current_input_character == Some('-') && self.next_few_characters_are("-") {
            self.current_pos += 1;
            self.switch_to(TokenizerState::Comment);
        } else {
            self.reconsume_in(TokenizerState::Declaration);
        }
    }

    fn handle_comment_state(&mut self) -> Result<(), ParseError> {
        match self.current_input_character {
            Some('-') if self.next_few_characters_are("->") => {
                self.current_pos += 2;
                self.switch_to(TokenizerState::Data);
                Ok(())
            }
            Some(_) => Ok(()),
            None => Err(self.eof_error()),
        }
    }

    fn handle_declaration_state(&mut self) -> Result<(), ParseError> {
        match self.current_input_character {
            Some('>') => {
                self.switch_to(TokenizerState::Data);
                Ok(())
            }
            Some(_) => Ok(()),
            None => Err(self.eof_error()),
        }
    }
}
