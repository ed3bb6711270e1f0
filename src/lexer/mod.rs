//! Lexical analysis module for the Opal front end.
//!
//! This module contains the lexer (tokenizer) that converts source text
//! into a stream of tokens for parsing. It handles:
//!
//! - Tokenization of source text using regex patterns
//! - Recognition of keywords, identifiers, integer literals, and operators
//! - Whitespace skipping
//! - Unrecognized characters, which become `Illegal` tokens instead of
//!   aborting the scan

pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;
