//! # Query Language - Abstract Syntax Tree
//!
//! This module defines the tree produced by [`crate::parser`] for a reduced
//! GraphQL-like query language.
//!
//! ## Architecture Overview
//!
//! - **[tokens]** - Lexical tokens produced by the lexer
//! - **[query]** - The root operation
//! - **[field]** - Requested fields, possibly nested
//! - **[directive]** - `@name(...)` annotations
//! - **[node]** - A borrowed view unifying the three node kinds
//!
//! ## Quick Start
//!
//! ```text
//! query GetUser @trace { user(id: "123") @cache(ttl: "300") { name } }
//! ```
//!
//! This parses to a [`Query`] named `GetUser` with one [`Directive`]
//! (`trace`) and one [`Field`] (`user`), which in turn carries the argument
//! `id = 123`, the directive `cache` and a leaf field `name`.
//!
//! ## Grammar
//!
//! ```text
//! Query              -> Ident Ident Directive* SelectionSet EOF
//! SelectionSet       -> '{' Field* '}'
//! Field              -> Ident Arguments? Directive* SelectionSet?
//! Directive          -> '@' Ident DirectiveArguments?
//! Arguments          -> '(' Ident ':' String ')'
//! DirectiveArguments -> '(' (Ident ':' String)* ')'
//! ```
//!
//! A field takes exactly one argument. Directive arguments are written back
//! to back with no separator; there is no comma token.
pub mod tokens;
pub mod query;
pub mod field;
pub mod directive;
pub mod node;

pub use tokens::{Token, TokenKind};
pub use query::Query;
pub use field::Field;
pub use directive::Directive;
pub use node::{Node, NodeKind};

/// Argument name to unquoted string value, in source order.
///
/// A repeated name keeps its first position and takes the last value.
pub type Arguments = indexmap::IndexMap<String, String>;
