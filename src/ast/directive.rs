use crate::ast::Arguments;
use serde::Serialize;

/// An `@name(...)` annotation on a query or field.
///
/// Directives do not nest and have no selection set.
///
/// # Examples
/// ```text
/// @cache
/// @cache(ttl: "300")
/// @cache(ttl: "300" scope: "private")
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Directive {
    pub name: String,
    pub arguments: Arguments,
}

impl Directive {
    pub fn new(name: impl Into<String>) -> Self {
        Directive {
            name: name.into(),
            arguments: Arguments::new(),
        }
    }

    pub fn argument(&self, name: &str) -> Option<&str> {
        self.arguments.get(name).map(String::as_str)
    }
}
