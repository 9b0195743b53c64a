use crate::ast::{Token, TokenKind};
use std::fmt;
use thiserror::Error;

/// 1-based line and column of a character in the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Position { line, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    #[error("Unexpected character '{ch}' at {position}")]
    UnexpectedCharacter { ch: char, position: Position },

    #[error("Unterminated string starting at {position}: missing closing quote")]
    UnterminatedString { position: Position },
}

pub struct Lexer {
    input: Vec<char>,
    position: usize,
    line: usize,
    column: usize,
    token_start: Position,
}

impl Lexer {
    pub fn new(input: &str) -> Self {
        Lexer {
            input: input.chars().collect(),
            position: 0,
            line: 1,
            column: 1,
            token_start: Position::new(1, 1),
        }
    }

    /// Where the most recently returned token started.
    pub fn token_start(&self) -> Position {
        self.token_start
    }

    fn current_char(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    fn current_position(&self) -> Position {
        Position::new(self.line, self.column)
    }

    fn advance(&mut self) {
        if let Some(ch) = self.current_char() {
            self.position += 1;
            if ch == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
    }

    /// Moves the cursor to end of input, keeping line and column in step.
    fn finish(&mut self) {
        while self.current_char().is_some() {
            self.advance();
        }
        self.token_start = self.current_position();
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.current_char() {
            if ch.is_whitespace() {
                self.advance();
            } else {
                break;
            }
        }
    }

    fn read_identifier(&mut self) -> String {
        let mut result = String::new();
        while let Some(ch) = self.current_char() {
            if ch.is_alphanumeric() || ch == '_' {
                result.push(ch);
                self.advance();
            } else {
                break;
            }
        }
        result
    }

    /// Reads a `"..."` literal, keeping both quotes in the returned text.
    fn read_string(&mut self) -> Result<String, LexError> {
        let start = self.current_position();
        let mut result = String::from('"');
        self.advance(); // Consume opening quote

        while let Some(ch) = self.current_char() {
            result.push(ch);
            self.advance();
            if ch == '"' {
                return Ok(result);
            }
        }

        Err(LexError::UnterminatedString { position: start })
    }

    fn single(&mut self, kind: TokenKind, ch: char) -> Token {
        self.advance();
        Token::new(kind, ch.to_string())
    }

    /// Scans the next token. Once the input is exhausted every call returns
    /// `EndOfInput`.
    pub fn next_token(&mut self) -> Result<Token, LexError> {
        self.skip_whitespace();
        self.token_start = self.current_position();

        let token = match self.current_char() {
            None => Token::eof(),
            Some(ch @ '{') => self.single(TokenKind::BraceOpen, ch),
            Some(ch @ '}') => self.single(TokenKind::BraceClose, ch),
            Some(ch @ '(') => self.single(TokenKind::ParenOpen, ch),
            Some(ch @ ')') => self.single(TokenKind::ParenClose, ch),
            Some(ch @ ':') => self.single(TokenKind::Colon, ch),
            Some(ch @ '@') => self.single(TokenKind::At, ch),
            Some('"') => Token::new(TokenKind::StringLiteral, self.read_string()?),
            Some(ch) if ch.is_alphabetic() || ch == '_' => {
                Token::new(TokenKind::Identifier, self.read_identifier())
            }
            Some(ch) => {
                return Err(LexError::UnexpectedCharacter {
                    ch,
                    position: self.token_start,
                });
            }
        };

        Ok(token)
    }
}

impl Iterator for Lexer {
    type Item = Result<Token, LexError>;

    /// Yields tokens up to, but not including, `EndOfInput`. Stops after the
    /// first error.
    fn next(&mut self) -> Option<Self::Item> {
        match self.next_token() {
            Ok(token) if token.is(TokenKind::EndOfInput) => None,
            Ok(token) => Some(Ok(token)),
            Err(e) => {
                self.finish();
                Some(Err(e))
            }
        }
    }
}

#[test]
fn test_punctuation() {
    let mut lexer = Lexer::new("{ } ( ) : @");
    assert_eq!(lexer.next_token().unwrap().kind, TokenKind::BraceOpen);
    assert_eq!(lexer.next_token().unwrap().kind, TokenKind::BraceClose);
    assert_eq!(lexer.next_token().unwrap().kind, TokenKind::ParenOpen);
    assert_eq!(lexer.next_token().unwrap().kind, TokenKind::ParenClose);
    assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Colon);
    assert_eq!(lexer.next_token().unwrap().kind, TokenKind::At);
    assert_eq!(lexer.next_token().unwrap(), Token::eof());
}

#[test]
fn test_positions() {
    let mut lexer = Lexer::new("query\n  GetUser");
    lexer.next_token().unwrap();
    assert_eq!(lexer.token_start(), Position::new(1, 1));
    lexer.next_token().unwrap();
    assert_eq!(lexer.token_start(), Position::new(2, 3));
}

#[test]
fn test_iterator_stops_at_eof() {
    let kinds: Vec<TokenKind> = Lexer::new("user(id: \"1\")")
        .map(|t| t.unwrap().kind)
        .collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Identifier,
            TokenKind::ParenOpen,
            TokenKind::Identifier,
            TokenKind::Colon,
            TokenKind::StringLiteral,
            TokenKind::ParenClose,
        ]
    );
}

#[test]
fn test_iterator_error_moves_to_end() {
    let mut lexer = Lexer::new("ab\n#cd");
    assert_eq!(lexer.next().unwrap().unwrap().text, "ab");
    assert!(matches!(
        lexer.next(),
        Some(Err(LexError::UnexpectedCharacter { ch: '#', .. }))
    ));
    assert_eq!(lexer.token_start(), Position::new(2, 4));
    assert!(lexer.next().is_none());
    assert_eq!(lexer.token_start(), Position::new(2, 4));
}
