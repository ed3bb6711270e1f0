use thiserror::Error;

use crate::lexer::tokens::TokenKind;

/// Diagnostics produced while parsing.
///
/// Parsing is best-effort: these accumulate on the parser rather than
/// aborting it, so a single pass can report several of them. The `Display`
/// renderings are the canonical human-readable messages.
///
/// An unrecognized character never shows up here directly: the lexer emits
/// it as an `Illegal` token, which the parser then reports as a missing
/// prefix rule.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("expected next token to be {expected}, got {got}")]
    ExpectedToken { expected: TokenKind, got: TokenKind },
    #[error("no prefix parse function for {kind}")]
    NoPrefixParseFn { kind: TokenKind },
    #[error("could not parse {literal:?} as integer")]
    IntegerOutOfRange { literal: String },
}
