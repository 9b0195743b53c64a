// tests/lexer_tests.rs

use graphql_insights::ast::{Token, TokenKind};
use graphql_insights::lexer::{LexError, Lexer, Position};

fn kinds(input: &str) -> Vec<TokenKind> {
    let mut lexer = Lexer::new(input);
    let mut out = vec![];
    loop {
        let token = lexer.next_token().unwrap();
        out.push(token.kind);
        if token.is(TokenKind::EndOfInput) {
            return out;
        }
    }
}

// ============================================================================
// Single Character Tokens
// ============================================================================

#[test]
fn test_single_char_tokens() {
    let test_cases = vec![
        ("{", TokenKind::BraceOpen),
        ("}", TokenKind::BraceClose),
        ("(", TokenKind::ParenOpen),
        (")", TokenKind::ParenClose),
        (":", TokenKind::Colon),
        ("@", TokenKind::At),
    ];

    for (input, expected) in test_cases {
        let mut lexer = Lexer::new(input);
        let token = lexer.next_token().unwrap();
        assert_eq!(token, Token::new(expected, input), "Failed for input: {}", input);
        assert_eq!(lexer.next_token().unwrap(), Token::eof());
    }
}

#[test]
fn test_adjacent_punctuation() {
    assert_eq!(
        kinds("{}():@"),
        vec![
            TokenKind::BraceOpen,
            TokenKind::BraceClose,
            TokenKind::ParenOpen,
            TokenKind::ParenClose,
            TokenKind::Colon,
            TokenKind::At,
            TokenKind::EndOfInput,
        ]
    );
}

// ============================================================================
// Identifiers
// ============================================================================

#[test]
fn test_identifiers() {
    let mut lexer = Lexer::new("query GetUser _private user_2 Ünïcode");
    for expected in ["query", "GetUser", "_private", "user_2", "Ünïcode"] {
        assert_eq!(
            lexer.next_token().unwrap(),
            Token::new(TokenKind::Identifier, expected)
        );
    }
    assert_eq!(lexer.next_token().unwrap(), Token::eof());
}

#[test]
fn test_identifier_stops_at_punctuation() {
    let mut lexer = Lexer::new("user(id");
    assert_eq!(lexer.next_token().unwrap(), Token::new(TokenKind::Identifier, "user"));
    assert_eq!(lexer.next_token().unwrap().kind, TokenKind::ParenOpen);
    assert_eq!(lexer.next_token().unwrap(), Token::new(TokenKind::Identifier, "id"));
}

#[test]
fn test_identifiers_are_case_sensitive() {
    let mut lexer = Lexer::new("Query query");
    assert_eq!(lexer.next_token().unwrap().text, "Query");
    assert_eq!(lexer.next_token().unwrap().text, "query");
}

// ============================================================================
// Strings
// ============================================================================

#[test]
fn test_string_keeps_quotes() {
    let mut lexer = Lexer::new(r#""123""#);
    assert_eq!(
        lexer.next_token().unwrap(),
        Token::new(TokenKind::StringLiteral, "\"123\"")
    );
    assert_eq!(lexer.next_token().unwrap(), Token::eof());
}

#[test]
fn test_empty_string() {
    let mut lexer = Lexer::new(r#""""#);
    assert_eq!(lexer.next_token().unwrap(), Token::new(TokenKind::StringLiteral, "\"\""));
}

#[test]
fn test_string_with_spaces_and_punctuation() {
    let mut lexer = Lexer::new(r#""a b { } #""#);
    assert_eq!(lexer.next_token().unwrap().text, r#""a b { } #""#);
}

#[test]
fn test_backslash_is_literal() {
    let mut lexer = Lexer::new(r#""a\" b"#);
    // No escapes: the string ends at the second quote.
    assert_eq!(lexer.next_token().unwrap().text, r#""a\""#);
    assert_eq!(lexer.next_token().unwrap(), Token::new(TokenKind::Identifier, "b"));
}

// ============================================================================
// Whitespace and End of Input
// ============================================================================

#[test]
fn test_whitespace_is_skipped() {
    assert_eq!(
        kinds(" \t\n query\r\n\tName  "),
        vec![TokenKind::Identifier, TokenKind::Identifier, TokenKind::EndOfInput]
    );
}

#[test]
fn test_empty_input() {
    let mut lexer = Lexer::new("");
    assert_eq!(lexer.next_token().unwrap(), Token::eof());
}

#[test]
fn test_end_of_input_is_idempotent() {
    let mut lexer = Lexer::new("x");
    lexer.next_token().unwrap();
    for _ in 0..5 {
        assert_eq!(lexer.next_token().unwrap(), Token::eof());
    }
}

// ============================================================================
// Full Query
// ============================================================================

#[test]
fn test_full_query() {
    let mut lexer = Lexer::new(r#"query GetUser { user(id: "123") @cache { name } }"#);
    let expected = vec![
        Token::new(TokenKind::Identifier, "query"),
        Token::new(TokenKind::Identifier, "GetUser"),
        Token::new(TokenKind::BraceOpen, "{"),
        Token::new(TokenKind::Identifier, "user"),
        Token::new(TokenKind::ParenOpen, "("),
        Token::new(TokenKind::Identifier, "id"),
        Token::new(TokenKind::Colon, ":"),
        Token::new(TokenKind::StringLiteral, "\"123\""),
        Token::new(TokenKind::ParenClose, ")"),
        Token::new(TokenKind::At, "@"),
        Token::new(TokenKind::Identifier, "cache"),
        Token::new(TokenKind::BraceOpen, "{"),
        Token::new(TokenKind::Identifier, "name"),
        Token::new(TokenKind::BraceClose, "}"),
        Token::new(TokenKind::BraceClose, "}"),
        Token::eof(),
    ];

    for token in expected {
        assert_eq!(lexer.next_token().unwrap(), token);
    }
}

// ============================================================================
// Error Cases
// ============================================================================

#[test]
fn test_unterminated_string() {
    let mut lexer = Lexer::new(r#"  "hello"#);
    let result = lexer.next_token();
    assert_eq!(
        result,
        Err(LexError::UnterminatedString {
            position: Position::new(1, 3)
        })
    );
    assert!(result.unwrap_err().to_string().contains("Unterminated string"));
}

#[test]
fn test_invalid_character() {
    let mut lexer = Lexer::new("user\n  #");
    lexer.next_token().unwrap();
    let result = lexer.next_token();
    assert_eq!(
        result,
        Err(LexError::UnexpectedCharacter {
            ch: '#',
            position: Position::new(2, 3)
        })
    );
    assert!(result.unwrap_err().to_string().contains("Unexpected character '#'"));
}

#[test]
fn test_comma_is_not_a_token() {
    let mut lexer = Lexer::new(",");
    assert!(matches!(
        lexer.next_token(),
        Err(LexError::UnexpectedCharacter { ch: ',', .. })
    ));
}

#[test]
fn test_leading_digit_is_not_an_identifier() {
    let mut lexer = Lexer::new("1abc");
    assert!(matches!(
        lexer.next_token(),
        Err(LexError::UnexpectedCharacter { ch: '1', .. })
    ));
}

#[test]
fn test_error_repeats_without_advancing() {
    let mut lexer = Lexer::new("$");
    let first = lexer.next_token();
    assert!(first.is_err());
    assert_eq!(lexer.next_token(), first);
}
