use crate::ast::{Directive, Field};
use serde::Serialize;

/// Root of every parsed document.
///
/// A query has a name, optional directives and a selection set. It never
/// carries arguments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Query {
    /// Operation name (`GetUser` in `query GetUser { ... }`)
    pub name: String,

    /// Query-level directives, in source order
    pub directives: Vec<Directive>,

    /// Top-level fields, in source order
    pub selection_set: Vec<Field>,
}

impl Query {
    pub fn new(name: impl Into<String>) -> Self {
        Query {
            name: name.into(),
            directives: vec![],
            selection_set: vec![],
        }
    }

    /// Looks up a top-level field by name.
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.selection_set.iter().find(|f| f.name == name)
    }
}
