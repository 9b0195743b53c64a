//! Plain-text reports: token dumps and usage tables

use super::CliError;
use crate::field_counter::FieldUsage;
use crate::ingest::IngestSummary;
use crate::{Lexer, TokenKind};
use std::fmt::Write;

/// One line per token, up to and including end of input
pub fn dump_tokens(query: &str) -> Result<String, CliError> {
    let mut lexer = Lexer::new(query);
    let mut out = String::new();
    loop {
        let token = lexer.next_token()?;
        let _ = writeln!(
            out,
            "{:>3}:{:<3} {:?} {:?}",
            lexer.token_start().line,
            lexer.token_start().column,
            token.kind,
            token.text
        );
        if token.is(TokenKind::EndOfInput) {
            return Ok(out);
        }
    }
}

pub fn format_field_usage(usage: &FieldUsage) -> String {
    if usage.is_empty() {
        return "No fields with arguments found\n".to_string();
    }
    let width = usage.fields.keys().map(|k| k.len()).max().unwrap_or(0);
    let mut out = String::new();
    for (name, n) in &usage.fields {
        let _ = writeln!(out, "{:<width$}  {}", name, n, width = width);
    }
    out
}

pub fn format_summary(summary: &IngestSummary) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Events:   {}", summary.events);
    let _ = writeln!(out, "Parsed:   {}", summary.parsed);
    let _ = writeln!(out, "Failed:   {}", summary.failed);
    let _ = writeln!(out, "Rejected: {}", summary.rejected);
    if !summary.usage.is_empty() {
        out.push_str("\nField usage:\n");
        out.push_str(&format_field_usage(&summary.usage));
    }
    out
}
