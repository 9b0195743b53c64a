use crate::ast::{Arguments, Directive};
use serde::Serialize;

/// A requested field.
///
/// # Example
/// ```text
/// user(id: "123") @cache { name }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Field {
    pub name: String,

    /// At most one entry; field argument lists hold a single argument
    pub arguments: Arguments,

    pub directives: Vec<Directive>,

    /// Empty for leaf fields
    pub selection_set: Vec<Field>,
}

impl Field {
    pub fn new(name: impl Into<String>) -> Self {
        Field {
            name: name.into(),
            arguments: Arguments::new(),
            directives: vec![],
            selection_set: vec![],
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.selection_set.is_empty()
    }

    /// Looks up a child field by name.
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.selection_set.iter().find(|f| f.name == name)
    }

    pub fn argument(&self, name: &str) -> Option<&str> {
        self.arguments.get(name).map(String::as_str)
    }
}
