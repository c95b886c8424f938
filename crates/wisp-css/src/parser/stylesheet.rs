use super::error::ParseError;
use crate::selector::{Selector, Specificity};
use crate::style::{ColorValue, Unit, Value};
use crate::tokenizer::{CssToken, CssTokenizer, PositionedToken};

static END_OF_INPUT: CssToken = CssToken::EOF;

/// A property name paired with its value, e.g. `margin-left: 8px`.
#[derive(Debug, Clone, PartialEq)]
pub struct Declaration {
    /// The property name, lowercased.
    pub name: String,
    /// The declared value.
    pub value: Value,
}

/// A style rule: comma-separated selectors plus a declaration block.
///
/// The rule applies to an element when any one of its selectors matches.
#[derive(Debug, Clone, PartialEq)]
pub struct Rule {
    /// The selector alternatives, in source order.
    pub selectors: Vec<Selector>,
    /// The declarations, in source order.
    pub declarations: Vec<Declaration>,
}

impl Rule {
    /// Sum of the specificities of every selector in the list.
    #[must_use]
    pub fn specificity(&self) -> Specificity {
        self.selectors.iter().map(Selector::specificity).sum()
    }
}

/// A parsed stylesheet. Rule order is source order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Stylesheet {
    /// The rules, in source order.
    pub rules: Vec<Rule>,
}

/// Parse a stylesheet.
///
/// # Errors
///
/// Returns the first [`ParseError`] in the input.
pub fn parse(input: &str) -> Result<Stylesheet, ParseError> {
    CssParser::new(input).parse_stylesheet()
}

/// Parse a single compound selector such as `div#main.note`.
///
/// # Errors
///
/// Returns a [`ParseError`] if the input is not exactly one selector.
pub fn parse_selector(input: &str) -> Result<Selector, ParseError> {
    let mut parser = CssParser::new(input);
    parser.skip_whitespace();
    let selector = parser.parse_selector()?;
    parser.skip_whitespace();
    let next = parser.next_token();
    if next.token.is_eof() {
        Ok(selector)
    } else {
        Err(ParseError::UnexpectedToken {
            found: next.token.to_string(),
            context: "selector",
            line: next.line,
        })
    }
}

/// Recursive-descent parser over the token stream.
pub struct CssParser {
    tokens: Vec<PositionedToken>,
    position: usize,
}

impl CssParser {
    /// Tokenize `input` and prepare to parse it.
    #[must_use]
    pub fn new(input: &str) -> Self {
        let mut tokenizer = CssTokenizer::new(input);
        tokenizer.run();
        Self {
            tokens: tokenizer.into_tokens(),
            position: 0,
        }
    }

    /// Parse every rule up to the end of input.
    ///
    /// # Errors
    ///
    /// Returns the first [`ParseError`] in the input.
    pub fn parse_stylesheet(&mut self) -> Result<Stylesheet, ParseError> {
        let mut rules = Vec::new();
        loop {
            self.skip_whitespace();
            if self.peek().is_eof() {
                break;
            }
            rules.push(self.parse_rule()?);
        }
        Ok(Stylesheet { rules })
    }

    fn parse_rule(&mut self) -> Result<Rule, ParseError> {
        let selectors = self.parse_selector_list()?;
        let next = self.next_token();
        if next.token != CssToken::LeftBrace {
            return Err(ParseError::MissingOpenBrace {
                found: next.token.to_string(),
                line: next.line,
            });
        }
        let declarations = self.parse_declarations()?;
        Ok(Rule {
            selectors,
            declarations,
        })
    }

    fn parse_selector_list(&mut self) -> Result<Vec<Selector>, ParseError> {
        let mut selectors = vec![self.parse_selector()?];
        loop {
            self.skip_whitespace();
            if *self.peek() != CssToken::Comma {
                return Ok(selectors);
            }
            let _ = self.next_token();
            self.skip_whitespace();
            selectors.push(self.parse_selector()?);
        }
    }

    fn parse_selector(&mut self) -> Result<Selector, ParseError> {
        let mut selector = Selector::universal();
        let mut seen_any = false;

        match self.peek().clone() {
            CssToken::Delim('*') => {
                let _ = self.next_token();
                seen_any = true;
            }
            CssToken::Ident(name) => {
                let _ = self.next_token();
                selector.tag_name = Some(name.to_ascii_lowercase());
                seen_any = true;
            }
            _ => {}
        }

        loop {
            match self.peek().clone() {
                CssToken::Hash(id) if selector.id.is_none() => {
                    let _ = self.next_token();
                    selector.id = Some(id);
                }
                CssToken::Delim('.') => {
                    let _ = self.next_token();
                    let next = self.next_token();
                    let CssToken::Ident(class) = next.token else {
                        return Err(ParseError::UnexpectedToken {
                            found: next.token.to_string(),
                            context: "class selector",
                            line: next.line,
                        });
                    };
                    selector.classes.push(class);
                }
                _ => break,
            }
            seen_any = true;
        }

        if seen_any {
            Ok(selector)
        } else {
            let next = self.next_token();
            Err(ParseError::UnexpectedToken {
                found: next.token.to_string(),
                context: "selector",
                line: next.line,
            })
        }
    }

    /// Parse declarations after the `{`, consuming the closing `}`.
    fn parse_declarations(&mut self) -> Result<Vec<Declaration>, ParseError> {
        let mut declarations = Vec::new();
        loop {
            self.skip_whitespace();
            let next = self.next_token();
            match next.token {
                CssToken::RightBrace => return Ok(declarations),
                CssToken::Semicolon => {}
                CssToken::EOF => return Err(ParseError::MissingCloseBrace { line: next.line }),
                CssToken::Ident(name) => {
                    declarations.push(self.parse_declaration(name.to_ascii_lowercase())?);
                    self.skip_whitespace();
                    let after = self.peek();
                    match after {
                        CssToken::Semicolon | CssToken::RightBrace => {}
                        CssToken::EOF => {
                            return Err(ParseError::MissingCloseBrace {
                                line: self.peek_line(),
                            });
                        }
                        other => {
                            return Err(ParseError::UnexpectedToken {
                                found: other.to_string(),
                                context: "declaration value",
                                line: self.peek_line(),
                            });
                        }
                    }
                }
                other => {
                    return Err(ParseError::UnexpectedToken {
                        found: other.to_string(),
                        context: "declaration block",
                        line: next.line,
                    });
                }
            }
        }
    }

    /// Parse `: value` after a property name.
    fn parse_declaration(&mut self, name: String) -> Result<Declaration, ParseError> {
        self.skip_whitespace();
        let colon = self.next_token();
        if colon.token != CssToken::Colon {
            return Err(ParseError::MissingColon {
                property: name,
                found: colon.token.to_string(),
                line: colon.line,
            });
        }

        self.skip_whitespace();
        let next = self.next_token();
        let line = next.line;
        let value = match next.token {
            CssToken::Ident(keyword) => Value::Keyword(keyword.to_ascii_lowercase()),
            CssToken::Dimension { value, unit } => {
                if unit.eq_ignore_ascii_case("px") {
                    Value::Length(value, Unit::Px)
                } else {
                    return Err(ParseError::UnsupportedUnit { unit, line });
                }
            }
            CssToken::Number(value) => {
                return Err(ParseError::MissingUnit {
                    value: value.to_string(),
                    line,
                });
            }
            CssToken::Hash(hex) => match ColorValue::from_hex(&hex) {
                Some(color) => Value::Color(color),
                None => return Err(ParseError::InvalidColor { value: hex, line }),
            },
            CssToken::Delim('#') => {
                return Err(ParseError::InvalidColor {
                    value: String::new(),
                    line,
                });
            }
            other => {
                return Err(ParseError::MissingValue {
                    property: name,
                    found: other.to_string(),
                    line,
                });
            }
        };
        Ok(Declaration { name, value })
    }

    fn skip_whitespace(&mut self) {
        while *self.peek() == CssToken::Whitespace {
            self.position += 1;
        }
    }

    fn peek(&self) -> &CssToken {
        self.tokens
            .get(self.position)
            .map_or(&END_OF_INPUT, |t| &t.token)
    }

    fn peek_line(&self) -> usize {
        self.tokens
            .get(self.position)
            .or_else(|| self.tokens.last())
            .map_or(1, |t| t.line)
    }

    /// Consume one token. Past the end this keeps returning EOF.
    fn next_token(&mut self) -> PositionedToken {
        match self.tokens.get(self.position) {
            Some(token) => {
                if !token.token.is_eof() {
                    self.position += 1;
                }
                token.clone()
            }
            None => PositionedToken {
                token: CssToken::EOF,
                line: self.peek_line(),
            },
        }
    }
}
