//! Parse a query and render it

use super::CliError;
use crate::{output, parse};

/// Options for the parse command
#[derive(Debug, Clone, Default)]
pub struct CheckOptions {
    /// The query text
    pub query: String,
    /// Emit the tree as JSON instead of the outline
    pub json: bool,
    /// Pretty-print JSON output
    pub pretty: bool,
}

/// Result of a parse command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckResult {
    /// Indented outline from [`crate::render`]
    Outline(String),
    /// Serialized tree
    Json(String),
}

impl CheckResult {
    pub fn text(&self) -> &str {
        match self {
            CheckResult::Outline(s) | CheckResult::Json(s) => s,
        }
    }
}

/// Parse `options.query` and render it in the requested format
pub fn execute_check(options: &CheckOptions) -> Result<CheckResult, CliError> {
    let query = parse(&options.query)?;

    if !options.json {
        return Ok(CheckResult::Outline(output::render(&query)));
    }

    let json = if options.pretty {
        output::to_json_pretty(&query)?
    } else {
        output::to_json(&query)?
    };
    Ok(CheckResult::Json(json))
}
