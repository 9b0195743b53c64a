use crate::{
    ast::{Arguments, Directive, Field, Query, Token, TokenKind},
    lexer::{LexError, Lexer, Position},
};
use std::mem;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Expected {expected}, found {found} at {position}")]
    UnexpectedToken {
        expected: TokenKind,
        found: Token,
        position: Position,
    },

    #[error("Selection sets nested {depth} deep at {position} (limit {limit})")]
    NestingTooDeep {
        depth: usize,
        limit: usize,
        position: Position,
    },

    #[error(transparent)]
    Lex(#[from] LexError),
}

impl ParseError {
    /// The token kind the grammar required, for mismatches.
    pub fn expected(&self) -> Option<TokenKind> {
        match self {
            ParseError::UnexpectedToken { expected, .. } => Some(*expected),
            ParseError::NestingTooDeep { .. } | ParseError::Lex(_) => None,
        }
    }

    /// The token actually seen, for mismatches.
    pub fn found(&self) -> Option<&Token> {
        match self {
            ParseError::UnexpectedToken { found, .. } => Some(found),
            ParseError::NestingTooDeep { .. } | ParseError::Lex(_) => None,
        }
    }
}

/// Parses `input` into a [`Query`].
///
/// The first mismatch or lexical error aborts parsing; no partial tree is
/// returned.
pub fn parse(input: &str) -> Result<Query, ParseError> {
    let mut parser = Parser::new(Lexer::new(input))?;
    parser.parse_query()
}

/// Deepest selection-set nesting accepted by default. The query's own
/// selection set is depth 1.
pub const DEFAULT_MAX_DEPTH: usize = 256;

pub struct Parser {
    lexer: Lexer,
    current_token: Token,
    current_position: Position,
    depth: usize,
    max_depth: usize,
}

impl Parser {
    pub fn new(mut lexer: Lexer) -> Result<Self, ParseError> {
        let current_token = lexer.next_token()?;
        let current_position = lexer.token_start();
        Ok(Parser {
            lexer,
            current_token,
            current_position,
            depth: 0,
            max_depth: DEFAULT_MAX_DEPTH,
        })
    }

    /// Set the selection-set nesting limit.
    pub fn max_depth(mut self, limit: usize) -> Self {
        self.max_depth = limit;
        self
    }

    /// Moves to the next token and hands back the one just left behind.
    fn advance(&mut self) -> Result<Token, ParseError> {
        let next = self.lexer.next_token()?;
        self.current_position = self.lexer.token_start();
        Ok(mem::replace(&mut self.current_token, next))
    }

    fn expect(&mut self, expected: TokenKind) -> Result<Token, ParseError> {
        if !self.check(expected) {
            return Err(ParseError::UnexpectedToken {
                expected,
                found: self.current_token.clone(),
                position: self.current_position,
            });
        }
        self.advance()
    }

    fn check(&self, kind: TokenKind) -> bool {
        self.current_token.is(kind)
    }

    fn expect_identifier(&mut self) -> Result<String, ParseError> {
        Ok(self.expect(TokenKind::Identifier)?.text)
    }

    /// Parses `name ':' "value"` and stores it with the quotes stripped.
    fn parse_argument(&mut self, arguments: &mut Arguments) -> Result<(), ParseError> {
        let name = self.expect_identifier()?;
        self.expect(TokenKind::Colon)?;
        let literal = self.expect(TokenKind::StringLiteral)?.text;
        arguments.insert(name, unquote(&literal).to_string());
        Ok(())
    }

    fn parse_directives(&mut self) -> Result<Vec<Directive>, ParseError> {
        let mut directives = vec![];
        while self.check(TokenKind::At) {
            directives.push(self.parse_directive()?);
        }
        Ok(directives)
    }

    /// Parses `'{' Field* '}'`.
    fn parse_selection_set(&mut self) -> Result<Vec<Field>, ParseError> {
        if self.depth >= self.max_depth {
            return Err(ParseError::NestingTooDeep {
                depth: self.depth + 1,
                limit: self.max_depth,
                position: self.current_position,
            });
        }
        self.expect(TokenKind::BraceOpen)?;
        self.depth += 1;

        let mut fields = vec![];
        while self.check(TokenKind::Identifier) {
            fields.push(self.parse_field()?);
        }
        self.expect(TokenKind::BraceClose)?;

        self.depth -= 1;
        Ok(fields)
    }

    /// Parse a complete query
    ///
    /// The operation keyword is not checked: any identifier is accepted in
    /// front of the operation name.
    ///
    /// Input must end at the query's closing brace. Anything after it, even
    /// a well-formed token, fails with `expected end of input`; a parser
    /// that stopped at the brace would ignore such trailing text.
    pub fn parse_query(&mut self) -> Result<Query, ParseError> {
        let keyword = self.expect_identifier()?;
        if keyword != "query" {
            log::warn!("operation keyword `{}` accepted in place of `query`", keyword);
        }

        let name = self.expect_identifier()?;
        let directives = self.parse_directives()?;
        let selection_set = self.parse_selection_set()?;

        self.expect(TokenKind::EndOfInput)?;

        log::debug!(
            "parsed query `{}` with {} top-level field(s)",
            name,
            selection_set.len()
        );

        Ok(Query {
            name,
            directives,
            selection_set,
        })
    }

    /// Parse a field, its single optional argument, directives and nested
    /// selection set.
    pub fn parse_field(&mut self) -> Result<Field, ParseError> {
        let name = self.expect_identifier()?;

        let mut arguments = Arguments::new();
        if self.check(TokenKind::ParenOpen) {
            self.advance()?;
            // Field argument lists hold exactly one argument.
            self.parse_argument(&mut arguments)?;
            self.expect(TokenKind::ParenClose)?;
        }

        let directives = self.parse_directives()?;

        let selection_set = if self.check(TokenKind::BraceOpen) {
            self.parse_selection_set()?
        } else {
            vec![]
        };

        Ok(Field {
            name,
            arguments,
            directives,
            selection_set,
        })
    }

    /// Parse `@name` with an optional argument list.
    ///
    /// Directive arguments follow each other without separators:
    /// `@cache(ttl: "300" scope: "private")`.
    pub fn parse_directive(&mut self) -> Result<Directive, ParseError> {
        self.expect(TokenKind::At)?;
        let name = self.expect_identifier()?;

        let mut arguments = Arguments::new();
        if self.check(TokenKind::ParenOpen) {
            self.advance()?;
            while self.check(TokenKind::Identifier) {
                self.parse_argument(&mut arguments)?;
            }
            self.expect(TokenKind::ParenClose)?;
        }

        Ok(Directive { name, arguments })
    }
}

fn unquote(literal: &str) -> &str {
    literal
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(literal)
}
