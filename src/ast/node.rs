use crate::ast::{Directive, Field, Query};
use serde::Serialize;
use std::fmt;

/// Which kind of AST node a [`Node`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum NodeKind {
    Query,
    Field,
    Directive,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeKind::Query => write!(f, "Query"),
            NodeKind::Field => write!(f, "Field"),
            NodeKind::Directive => write!(f, "Directive"),
        }
    }
}

/// Borrowed view over any AST node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Node<'a> {
    Query(&'a Query),
    Field(&'a Field),
    Directive(&'a Directive),
}

impl<'a> Node<'a> {
    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Query(_) => NodeKind::Query,
            Node::Field(_) => NodeKind::Field,
            Node::Directive(_) => NodeKind::Directive,
        }
    }

    pub fn name(&self) -> &'a str {
        match *self {
            Node::Query(q) => &q.name,
            Node::Field(f) => &f.name,
            Node::Directive(d) => &d.name,
        }
    }
}

impl<'a> From<&'a Query> for Node<'a> {
    fn from(q: &'a Query) -> Self {
        Node::Query(q)
    }
}

impl<'a> From<&'a Field> for Node<'a> {
    fn from(f: &'a Field) -> Self {
        Node::Field(f)
    }
}

impl<'a> From<&'a Directive> for Node<'a> {
    fn from(d: &'a Directive) -> Self {
        Node::Directive(d)
    }
}
