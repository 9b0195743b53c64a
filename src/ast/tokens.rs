use serde::Serialize;
use std::fmt;

/// Lexical category of a [`Token`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TokenKind {
    // Delimiters
    /// Opening brace of a selection set
    BraceOpen,

    /// Closing brace of a selection set
    BraceClose,

    /// Opening parenthesis of an argument list
    ParenOpen,

    /// Closing parenthesis of an argument list
    ParenClose,

    /// Separates an argument name from its value
    Colon,

    /// Directive prefix
    ///
    /// # Examples
    /// ```text
    /// @cache
    /// @cache(ttl: "300")
    /// ```
    At,

    // Literals
    /// String literal enclosed in double quotes
    ///
    /// The token text keeps the surrounding quotes. There are no escape
    /// sequences.
    ///
    /// # Examples
    /// ```text
    /// "123"
    /// "300"
    /// ```
    StringLiteral,

    /// Operation keyword, operation name, field, directive or argument name
    ///
    /// Must start with a letter or underscore, followed by letters, digits,
    /// or underscores. `query` is an ordinary identifier.
    ///
    /// # Examples
    /// ```text
    /// query
    /// GetUser
    /// _id2
    /// ```
    Identifier,

    /// End of input
    EndOfInput,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TokenKind::BraceOpen => "'{'",
            TokenKind::BraceClose => "'}'",
            TokenKind::ParenOpen => "'('",
            TokenKind::ParenClose => "')'",
            TokenKind::Colon => "':'",
            TokenKind::At => "'@'",
            TokenKind::StringLiteral => "string",
            TokenKind::Identifier => "identifier",
            TokenKind::EndOfInput => "end of input",
        };
        f.write_str(s)
    }
}

/// A single lexeme: its kind plus the exact source text it covers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Token {
            kind,
            text: text.into(),
        }
    }

    pub fn eof() -> Self {
        Token::new(TokenKind::EndOfInput, "")
    }

    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::EndOfInput => write!(f, "end of input"),
            TokenKind::Identifier => write!(f, "identifier `{}`", self.text),
            TokenKind::StringLiteral => write!(f, "string {}", self.text),
            _ => write!(f, "'{}'", self.text),
        }
    }
}
