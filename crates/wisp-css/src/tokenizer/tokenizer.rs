use super::token::{CssToken, PositionedToken};

/// CSS tokenizer.
///
/// Comments are dropped. The tokenizer never fails: anything it does not
/// recognize becomes a [`CssToken::Delim`] and is rejected by the parser.
pub struct CssTokenizer {
    /// The input being tokenized
    input: Vec<char>,
    /// Current position in the input
    position: usize,
    /// Current line, 1-based
    line: usize,
    /// Collected tokens
    tokens: Vec<PositionedToken>,
}

impl CssTokenizer {
    /// Create a new CSS tokenizer with the given input.
    #[must_use]
    pub fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            position: 0,
            line: 1,
            tokens: Vec::new(),
        }
    }

    /// Tokenize the whole input. The last token is always [`CssToken::EOF`].
    pub fn run(&mut self) {
        loop {
            self.consume_comments();
            let line = self.line;
            let token = self.consume_token();
            let is_eof = token.is_eof();
            self.tokens.push(PositionedToken { token, line });
            if is_eof {
                break;
            }
        }
    }

    /// Return the collected tokens.
    #[must_use]
    pub fn into_tokens(self) -> Vec<PositionedToken> {
        self.tokens
    }

    fn consume_token(&mut self) -> CssToken {
        let Some(c) = self.consume() else {
            return CssToken::EOF;
        };

        match c {
            c if c.is_whitespace() => {
                self.consume_whitespace();
                CssToken::Whitespace
            }
            '#' if self.peek().is_some_and(is_name_code_point) => {
                CssToken::Hash(self.consume_name())
            }
            ':' => CssToken::Colon,
            ';' => CssToken::Semicolon,
            ',' => CssToken::Comma,
            '{' => CssToken::LeftBrace,
            '}' => CssToken::RightBrace,
            c if c.is_ascii_digit() => {
                self.reconsume();
                self.consume_numeric_token()
            }
            '.' | '+' | '-' if self.would_start_number(c) => {
                self.reconsume();
                self.consume_numeric_token()
            }
            '-' if self.peek().is_some_and(is_name_start_code_point) => {
                self.reconsume();
                CssToken::Ident(self.consume_name())
            }
            c if is_name_start_code_point(c) => {
                self.reconsume();
                CssToken::Ident(self.consume_name())
            }
            c => CssToken::Delim(c),
        }
    }

    /// Skip any number of `/* ... */` comments. An unterminated comment runs
    /// to the end of input.
    fn consume_comments(&mut self) {
        while self.peek() == Some('/') && self.peek_at(1) == Some('*') {
            let _ = self.consume();
            let _ = self.consume();
            loop {
                match self.consume() {
                    Some('*') if self.peek() == Some('/') => {
                        let _ = self.consume();
                        break;
                    }
                    Some(_) => {}
                    None => return,
                }
            }
        }
    }

    fn consume_whitespace(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            let _ = self.consume();
        }
    }

    fn consume_numeric_token(&mut self) -> CssToken {
        let value = self.consume_number();
        if self.peek().is_some_and(is_name_start_code_point) {
            CssToken::Dimension {
                value,
                unit: self.consume_name(),
            }
        } else if self.peek() == Some('%') {
            let _ = self.consume();
            CssToken::Dimension {
                value,
                unit: "%".to_owned(),
            }
        } else {
            CssToken::Number(value)
        }
    }

    fn consume_number(&mut self) -> f32 {
        let mut repr = String::new();
        if let Some(sign @ ('+' | '-')) = self.peek() {
            repr.push(sign);
            let _ = self.consume();
        }
        while let Some(c) = self.peek().filter(char::is_ascii_digit) {
            repr.push(c);
            let _ = self.consume();
        }
        if self.peek() == Some('.') && self.peek_at(1).is_some_and(|c| c.is_ascii_digit()) {
            repr.push('.');
            let _ = self.consume();
            while let Some(c) = self.peek().filter(char::is_ascii_digit) {
                repr.push(c);
                let _ = self.consume();
            }
        }
        repr.parse().unwrap_or(0.0)
    }

    fn consume_name(&mut self) -> String {
        let mut name = String::new();
        while let Some(c) = self.peek().filter(|&c| is_name_code_point(c)) {
            name.push(c);
            let _ = self.consume();
        }
        name
    }

    /// Whether `first` (already consumed) followed by the upcoming input
    /// starts a number such as `-4`, `+.5` or `.5`.
    fn would_start_number(&self, first: char) -> bool {
        let digit_at = |offset| self.peek_at(offset).is_some_and(|c: char| c.is_ascii_digit());
        match first {
            '+' | '-' => digit_at(0) || (self.peek() == Some('.') && digit_at(1)),
            '.' => digit_at(0),
            _ => false,
        }
    }

    fn consume(&mut self) -> Option<char> {
        let c = self.input.get(self.position).copied();
        if let Some(c) = c {
            self.position += 1;
            if c == '\n' {
                self.line += 1;
            }
        }
        c
    }

    fn reconsume(&mut self) {
        if self.position > 0 {
            self.position -= 1;
            if self.input.get(self.position) == Some(&'\n') {
                self.line -= 1;
            }
        }
    }

    fn peek(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    fn peek_at(&self, offset: usize) -> Option<char> {
        self.input.get(self.position + offset).copied()
    }
}

/// Letters, `_` and any non-ASCII character.
fn is_name_start_code_point(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_' || !c.is_ascii()
}

/// Name start code points plus digits and `-`.
fn is_name_code_point(c: char) -> bool {
    is_name_start_code_point(c) || c.is_ascii_digit() || c == '-'
}
