//! CLI support for graphql-insights
//!
//! Provides programmatic access to the command implementations so they can
//! be embedded in other tools or tested without spawning the binary.

mod check;
mod docs;
mod tokens;

pub use check::{execute_check, CheckOptions, CheckResult};
pub use docs::{get_doc_category, get_docs_overview, DocCategory};
pub use tokens::{dump_tokens, format_field_usage, format_summary};

use thiserror::Error;

/// Query used when none is given on the command line or stdin
pub const EXAMPLE_QUERY: &str = r#"query GetUser { user(id: "123") { name } }"#;

/// Errors that can occur during CLI operations
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Parse error: {0}")]
    Parse(#[from] crate::ParseError),

    #[error("Lex error: {0}")]
    Lex(#[from] crate::LexError),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Ingest error: {0}")]
    Ingest(#[from] crate::IngestError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unknown category: '{0}'\nRun 'graphql-insights docs' to see available categories.")]
    UnknownCategory(String),
}
