use crate::ParseError;

/// A lexical token in a formula.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Token {
    Number(f64),
    /// A bare identifier: the variable or a named constant.
    Ident(String),
    /// An identifier immediately followed by `(`.
    Function(String),
    /// An operator symbol; `**` is normalized to `^`.
    Op(char),
    OParen,
    CParen,
    Comma,
}

/// A token together with the character offset where it starts.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Spanned {
    pub token: Token,
    pub pos: usize,
}

/// Splits formula text into tokens.
///
/// Whether `-` is unary or binary is left to the parser, which knows if it
/// is expecting an operand.
pub(crate) struct Lexer {
    chars: Vec<char>,
    pos: usize,
}

impl Lexer {
    pub(crate) fn new(source: &str) -> Self {
        Self {
            chars: source.chars().collect(),
            pos: 0,
        }
    }

    /// Tokenizes the whole input.
    ///
    /// # Errors
    ///
    /// Returns an error on a character outside the grammar or a number that
    /// cannot be represented as `f64`.
    pub(crate) fn tokenize(mut self) -> Result<Vec<Spanned>, ParseError> {
        let mut tokens = Vec::new();
        while let Some(spanned) = self.next_token()? {
            tokens.push(spanned);
        }
        Ok(tokens)
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn peek_at(&self, offset: usize) -> Option<char> {
        self.chars.get(self.pos + offset).copied()
    }

    fn next_is_digit(&self) -> bool {
        self.peek_at(1).is_some_and(|c| c.is_ascii_digit())
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.pos += 1;
        }
    }

    fn next_token(&mut self) -> Result<Option<Spanned>, ParseError> {
        self.skip_whitespace();
        let start = self.pos;
        let Some(ch) = self.peek() else {
            return Ok(None);
        };

        let token = match ch {
            '(' => {
                self.pos += 1;
                Token::OParen
            }
            ')' => {
                self.pos += 1;
                Token::CParen
            }
            ',' => {
                self.pos += 1;
                Token::Comma
            }
            '*' if self.peek_at(1) == Some('*') => {
                self.pos += 2;
                Token::Op('^')
            }
            '+' | '-' | '*' | '/' | '^' => {
                self.pos += 1;
                Token::Op(ch)
            }
            c if c.is_ascii_digit() || (c == '.' && self.next_is_digit()) => self.scan_number()?,
            c if c.is_alphabetic() || c == '_' => self.scan_identifier(),
            other => return Err(ParseError::UnexpectedChar { ch: other, pos: start }),
        };

        Ok(Some(Spanned { token, pos: start }))
    }

    fn scan_number(&mut self) -> Result<Token, ParseError> {
        let start = self.pos;
        while self.peek().is_some_and(|c| c.is_ascii_digit() || c == '.') {
            self.pos += 1;
        }

        // An exponent only counts if digits follow, so `2e` stays `2` times `e`.
        if matches!(self.peek(), Some('e' | 'E')) {
            let digits_at = match self.peek_at(1) {
                Some('+' | '-') => 2,
                _ => 1,
            };
            if self.peek_at(digits_at).is_some_and(|c| c.is_ascii_digit()) {
                self.pos += digits_at;
                while self.peek().is_some_and(|c| c.is_ascii_digit()) {
                    self.pos += 1;
                }
            }
        }

        let text: String = self.chars[start..self.pos].iter().collect();
        text.parse::<f64>()
            .map(Token::Number)
            .map_err(|_| ParseError::MalformedNumber(text))
    }

    fn scan_identifier(&mut self) -> Token {
        let start = self.pos;
        while self.peek().is_some_and(|c| c.is_alphanumeric() || c == '_') {
            self.pos += 1;
        }
        let name: String = self.chars[start..self.pos].iter().collect();

        let mut lookahead = self.pos;
        while self.chars.get(lookahead).is_some_and(|c| c.is_whitespace()) {
            lookahead += 1;
        }
        if self.chars.get(lookahead) == Some(&'(') {
            Token::Function(name)
        } else {
            Token::Ident(name)
        }
    }
}
