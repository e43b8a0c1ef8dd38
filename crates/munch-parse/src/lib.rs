//! Rule-based tree building over a token sequence.
//!
//! A [`Grammar`] is a set of templates, each holding detector [`Rule`]s.
//! [`Parser::parse`] binds a root template to the whole token sequence and
//! repeatedly applies the detectors of every node to its own range, first
//! match wins, until the tree is complete.

mod grammar;
mod node;
mod parser;
pub mod render;
mod rule;

pub use grammar::{Grammar, Template, TemplateId};
pub use node::{Node, TokenRange};
pub use parser::{
    DEFAULT_DEPTH_LIMIT, DEFAULT_RECURSION_LIMIT, Parse, ParseError, Parser, Unmatched,
};
pub use rule::{Item, Rule, node, token};
