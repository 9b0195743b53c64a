//! Documentation content for the graphql-insights CLI

use super::CliError;

/// Available documentation categories
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocCategory {
    Grammar,
    Arguments,
    Directives,
    Errors,
    Ingest,
}

impl DocCategory {
    /// Parse category name from string
    pub fn from_name(s: &str) -> Option<Self> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "grammar" | "syntax" => Some(Self::Grammar),
            "arguments" | "args" => Some(Self::Arguments),
            "directives" | "directive" => Some(Self::Directives),
            "errors" | "error" => Some(Self::Errors),
            "ingest" | "events" => Some(Self::Ingest),
            _ => None,
        }
    }
}

/// Get the docs overview (category listing)
pub fn get_docs_overview() -> &'static str {
    r#"GRAPHQL-INSIGHTS DOCUMENTATION

graphql-insights parses a reduced GraphQL-like query language into a tree of
fields, arguments, nested selections and directives, and collects usage
statistics from analytics events.

DOCUMENTATION CATEGORIES

  grammar           Query structure, fields and selection sets
  arguments         Field and directive argument lists
  directives        @name annotations on queries and fields
  errors            Lexical and parse errors
  ingest            Analytics event format and the worker pool

QUICK REFERENCE

  query Name { ... }        Operation with a selection set
  field(arg: "value")       Field with one argument
  field { child }           Nested selection
  @name(arg: "value")       Directive

Run 'graphql-insights doc <category>' for detailed documentation.
"#
}

/// Get documentation for a specific category
pub fn get_doc_category(name: &str) -> Result<&'static str, CliError> {
    match DocCategory::from_name(name) {
        Some(DocCategory::Grammar) => Ok(GRAMMAR_DOC),
        Some(DocCategory::Arguments) => Ok(ARGUMENTS_DOC),
        Some(DocCategory::Directives) => Ok(DIRECTIVES_DOC),
        Some(DocCategory::Errors) => Ok(ERRORS_DOC),
        Some(DocCategory::Ingest) => Ok(INGEST_DOC),
        None => Err(CliError::UnknownCategory(name.to_string())),
    }
}

const GRAMMAR_DOC: &str = r#"GRAMMAR - Query Structure

QUERY
  <keyword> <Name> <directives> { <fields> }
    A query is an operation keyword, a name, optional directives and a
    selection set. Nothing may follow the closing brace.

    Example:
      query GetUser { user(id: "123") { name } }

    Constraints:
      - The keyword is normally `query`; any identifier is accepted
      - Exactly one operation per document

FIELDS
  name
  name(arg: "value")
  name @directive { children }
    A field is an identifier, optionally followed by one argument,
    directives and a nested selection set. Fields without braces are
    leaves.

IDENTIFIERS
  Letters, digits and underscores, not starting with a digit.
  Case-sensitive. There are no reserved words.

WHITESPACE
  Spaces, tabs and newlines are insignificant.

NOT SUPPORTED
  Variables ($id), fragments, inline fragments, mutations and
  subscriptions, commas, numbers and other non-string values.
"#;

const ARGUMENTS_DOC: &str = r#"ARGUMENTS - Field and Directive Arguments

FIELD ARGUMENTS
  field(name: "value")
    A field takes exactly one argument. The value must be a double-quoted
    string; quotes are stripped when stored.

    Example:
      user(id: "123")          id = 123

    Constraints:
      - user(id: "1" org: "2") is rejected: expected ')'
      - No escape sequences inside strings

DIRECTIVE ARGUMENTS
  @name(a: "1" b: "2")
    Directives take any number of arguments written back to back. There
    is no separator; a comma is an unexpected character.

REPEATED NAMES
  The last value wins; the argument keeps its first position.
"#;

const DIRECTIVES_DOC: &str = r#"DIRECTIVES - Annotations

  @name
  @name(arg: "value")
    Directives attach to the query (between the name and the opening
    brace) or to a field (after its argument list). Several directives
    may follow each other and keep their order.

    Example:
      query GetUser @persist @trace {
        user(id: "123") @cache(ttl: "300") { name }
      }

    Constraints:
      - Directives carry no selection set
      - Directives do not nest
"#;

const ERRORS_DOC: &str = r#"ERRORS - Lexical and Parse Errors

LEXICAL ERRORS
  Unexpected character 'X' at line L, column C
    Any character other than braces, parentheses, ':', '@', '"', letters,
    digits, underscores and whitespace.

  Unterminated string starting at line L, column C
    A string literal with no closing quote.

PARSE ERRORS
  Expected <kind>, found <token> at line L, column C
    The first token that does not fit the grammar. Parsing stops there;
    no partial tree is produced.

    Example:
      query { }
      => Expected identifier, found '{' at line 1, column 7
"#;

const INGEST_DOC: &str = r#"INGEST - Analytics Events

EVENT FORMAT
  One JSON object per line:

    {"timestamp": 1700000000, "operation_name": "GetUser",
     "operation_body": "query GetUser { user(id: \"1\") { name } }",
     "client_name": "web", "client_version": "1.2.0"}

  Missing keys default to empty values. Lines that are not valid JSON are
  counted as rejected and skipped.

PROCESSING
  Events are queued in a bounded queue and drained by a fixed pool of
  workers. Each worker counts fields with arguments and parses the
  operation body.

  graphql-insights ingest --input events.jsonl --workers 5 --capacity 100

LOGGING
  Set RUST_LOG=debug to see per-event worker activity.
"#;
