//! Front end for the Opal language: lexing and Pratt parsing.
//!
//! The pipeline is [`lexer::lexer::tokenize`] followed by
//! [`parser::parser::parse`]: source text becomes a token stream terminated
//! by a single EOF token, and the parser turns that stream into a
//! [`ast::ast::Program`] together with the ordered list of diagnostics
//! collected along the way. An empty diagnostic list is the caller's signal
//! that the tree is structurally trustworthy; a non-empty one means the tree
//! is partial.

#![allow(clippy::module_inception)]

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;
