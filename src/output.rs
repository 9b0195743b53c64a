//! Human-readable and JSON renderings of the query AST.
//!
//! [`render()`] produces an indented, line-oriented outline of a node and its
//! descendants. It is a debugging aid: the output is not query syntax and
//! cannot be parsed back.
//!
//! ```text
//! Query: GetUser
//!   Directive: @trace
//!   Field: user
//!     Arg: id = 123
//!     Directive: @cache
//!       Arg: ttl = 300
//!     Field: name
//! ```
//!
//! Arguments are printed in source order, so output depends only on the
//! shape of the tree. Indentation is two spaces per depth level.
//!
//! # Examples
//!
//! ```
//! use graphql_insights::{parse, render};
//!
//! let query = parse(r#"query GetUser { user(id: "123") { name } }"#).unwrap();
//! assert_eq!(
//!     render(&query),
//!     "Query: GetUser\n  Field: user\n    Arg: id = 123\n    Field: name\n"
//! );
//! ```

use crate::ast::{Arguments, Directive, Field, Node, NodeKind, Query};

pub struct AstPrinter {
    out: String,
}

impl AstPrinter {
    pub fn new() -> Self {
        AstPrinter { out: String::new() }
    }

    pub fn print(mut self, node: Node<'_>) -> String {
        match node {
            Node::Query(q) => self.print_query(q, 0),
            Node::Field(f) => self.print_field(f, 0),
            Node::Directive(d) => self.print_directive_node(d, 0),
        }
        self.out
    }

    fn print_query(&mut self, query: &Query, indent: usize) {
        self.header(NodeKind::Query, &query.name, indent);
        self.print_directives(&query.directives, indent);
        for child in &query.selection_set {
            self.print_field(child, indent + 1);
        }
    }

    fn print_field(&mut self, field: &Field, indent: usize) {
        self.header(NodeKind::Field, &field.name, indent);
        self.print_arguments(&field.arguments, indent + 1);
        self.print_directives(&field.directives, indent);
        for child in &field.selection_set {
            self.print_field(child, indent + 1);
        }
    }

    fn print_directive_node(&mut self, directive: &Directive, indent: usize) {
        self.header(NodeKind::Directive, &directive.name, indent);
        self.print_arguments(&directive.arguments, indent + 1);
    }

    fn print_directives(&mut self, directives: &[Directive], indent: usize) {
        for directive in directives {
            self.line(indent + 1, &format!("Directive: @{}", directive.name));
            self.print_arguments(&directive.arguments, indent + 2);
        }
    }

    fn print_arguments(&mut self, arguments: &Arguments, indent: usize) {
        for (name, value) in arguments {
            self.line(indent, &format!("Arg: {} = {}", name, value));
        }
    }

    fn header(&mut self, kind: NodeKind, name: &str, indent: usize) {
        self.line(indent, &format!("{}: {}", kind, name));
    }

    fn line(&mut self, indent: usize, text: &str) {
        self.out.push_str(&"  ".repeat(indent));
        self.out.push_str(text);
        self.out.push('\n');
    }
}

impl Default for AstPrinter {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders a node and its descendants as an indented outline.
pub fn render<'a>(node: impl Into<Node<'a>>) -> String {
    AstPrinter::new().print(node.into())
}

/// Serializes a query tree to compact JSON.
pub fn to_json(query: &Query) -> serde_json::Result<String> {
    serde_json::to_string(query)
}

/// Serializes a query tree to JSON with 2-space indentation.
pub fn to_json_pretty(query: &Query) -> serde_json::Result<String> {
    serde_json::to_string_pretty(query)
}
