use crate::ast::Query;
use crate::field_counter::FieldUsage;
use crate::ingest::IngestError;
use crate::parser::ParseError;
use serde::{Deserialize, Serialize};

/// One analytics record sent by a client after executing an operation.
///
/// # Example
/// ```text
/// {"timestamp": 1700000000, "operation_name": "GetUser",
///  "operation_body": "query GetUser { user(id: \"1\") { name } }",
///  "client_name": "web", "client_version": "1.2.0"}
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyticsEvent {
    pub timestamp: i64,
    pub operation_name: String,
    pub operation_body: String,
    pub client_name: String,
    pub client_version: String,
}

impl AnalyticsEvent {
    pub fn from_json(line: &str) -> Result<Self, IngestError> {
        Ok(serde_json::from_str(line)?)
    }
}

/// What a worker produced for one event.
#[derive(Debug, Clone, PartialEq)]
pub struct EventReport {
    /// 1-based id of the worker that handled the event
    pub worker: usize,
    pub timestamp: i64,
    pub operation_name: String,
    pub usage: FieldUsage,
    pub parsed: Result<Query, ParseError>,
}

impl EventReport {
    pub fn is_parsed(&self) -> bool {
        self.parsed.is_ok()
    }
}
