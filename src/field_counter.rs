//! Crude field-usage statistics.
//!
//! Counts identifiers that open an argument list at the start of a line,
//! e.g. `user(` in
//!
//! ```text
//! query GetUser($id: ID!) {
//!   user(id: $id) {
//!     name
//!   }
//! }
//! ```
//!
//! This works on raw text and accepts syntax the parser rejects (variables,
//! type annotations), which makes it usable on arbitrary client payloads.

use regex::Regex;
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::OnceLock;

fn field_regex() -> &'static Regex {
    static FIELD_RE: OnceLock<Regex> = OnceLock::new();
    FIELD_RE.get_or_init(|| Regex::new(r"(?m)^\s*(\w+)\s*\(").expect("field pattern is valid"))
}

/// Field name to number of occurrences.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FieldUsage {
    pub fields: BTreeMap<String, usize>,
}

impl FieldUsage {
    pub fn count(&self, field: &str) -> usize {
        self.fields.get(field).copied().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.fields.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Adds another usage table into this one.
    pub fn merge(&mut self, other: &FieldUsage) {
        for (name, n) in &other.fields {
            *self.fields.entry(name.clone()).or_insert(0) += n;
        }
    }
}

pub fn count_fields(query: &str) -> FieldUsage {
    let mut usage = FieldUsage::default();
    for caps in field_regex().captures_iter(query.trim()) {
        *usage.fields.entry(caps[1].to_string()).or_insert(0) += 1;
    }
    usage
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE_QUERY: &str = "query GetUser($id: ID!) {
  user(id: $id) {
    id
    name
    email
  }
}";

    #[test]
    fn test_counts_fields_with_arguments() {
        let usage = count_fields(EXAMPLE_QUERY);
        assert_eq!(usage.count("user"), 1);
        assert_eq!(usage.count("name"), 0);
        assert_eq!(usage.total(), 1);
    }

    #[test]
    fn test_single_line_query_has_no_matches_past_first_line() {
        // Only identifiers at the start of a line count; `user(` sits mid-line.
        let usage = count_fields(r#"query GetUser { user(id: "123") { name } }"#);
        assert!(usage.is_empty());
    }

    #[test]
    fn test_repeated_fields_accumulate() {
        let usage = count_fields("posts(first: 1)\n  posts (last: 2)\ncomments(x: 1)");
        assert_eq!(usage.count("posts"), 2);
        assert_eq!(usage.count("comments"), 1);
    }

    #[test]
    fn test_merge() {
        let mut a = count_fields("user(id: 1)");
        a.merge(&count_fields("user(id: 2)\nfriends(first: 3)"));
        assert_eq!(a.count("user"), 2);
        assert_eq!(a.count("friends"), 1);
    }
}
