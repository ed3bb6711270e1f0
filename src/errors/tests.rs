//! Unit tests for diagnostic formatting.
//!
//! The `Display` strings are the contract the parser's callers see, so each
//! variant's rendering is pinned down here.

use crate::lexer::tokens::TokenKind;

use super::errors::ParseError;

#[test]
fn test_expected_token_message() {
    let error = ParseError::ExpectedToken {
        expected: TokenKind::Assignment,
        got: TokenKind::Int,
    };

    assert_eq!(
        error.to_string(),
        "expected next token to be Assignment, got Int"
    );
}

#[test]
fn test_no_prefix_parse_fn_message() {
    let error = ParseError::NoPrefixParseFn {
        kind: TokenKind::Illegal,
    };

    assert_eq!(error.to_string(), "no prefix parse function for Illegal");
}

#[test]
fn test_integer_out_of_range_message() {
    let error = ParseError::IntegerOutOfRange {
        literal: "9999999999999999999999".to_string(),
    };

    assert_eq!(
        error.to_string(),
        "could not parse \"9999999999999999999999\" as integer"
    );
}
