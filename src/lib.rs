pub mod ast;
pub mod cli;
pub mod field_counter;
pub mod ingest;
pub mod lexer;
pub mod output;
pub mod parser;

pub use ast::{Arguments, Directive, Field, Node, NodeKind, Query, Token, TokenKind};
pub use field_counter::{count_fields, FieldUsage};
pub use ingest::{AnalyticsEvent, IngestError, PoolConfig, WorkerPool};
pub use lexer::{LexError, Lexer, Position};
pub use output::{render, to_json, to_json_pretty};
pub use parser::{parse, ParseError, Parser};
