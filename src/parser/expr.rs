use crate::{
    ast::{
        ast::Expression,
        expressions::{
            BooleanLiteral, Identifier, InfixExpression, IntegerLiteral, PrefixExpression,
        },
    },
    errors::errors::ParseError,
    lexer::tokens::TokenKind,
};

use super::{lookups::Precedence, parser::Parser};

/// Precedence-climbing core: parses one expression, absorbing trailing
/// operators whose table precedence is strictly greater than
/// `min_precedence`. Strict comparison plus each operator reparsing its
/// right side at its own level gives left associativity.
pub fn parse_expr(parser: &mut Parser, min_precedence: Precedence) -> Result<Expression, ParseError> {
    let kind = parser.current_kind();
    let prefix_fn = match parser.get_prefix_lookup().get(&kind) {
        Some(prefix_fn) => *prefix_fn,
        None => return Err(ParseError::NoPrefixParseFn { kind }),
    };

    let mut left = prefix_fn(parser)?;

    while parser.current_precedence() > min_precedence {
        let infix_fn = match parser.get_infix_lookup().get(&parser.current_kind()) {
            Some(infix_fn) => *infix_fn,
            // No infix rule: the expression ends here, leaving the token
            // for the caller.
            None => break,
        };

        let precedence = parser.current_precedence();
        left = infix_fn(parser, left, precedence)?;
    }

    Ok(left)
}

pub fn parse_primary_expr(parser: &mut Parser) -> Result<Expression, ParseError> {
    match parser.current_kind() {
        TokenKind::Identifier => {
            let token = parser.advance().clone();
            Ok(Expression::Identifier(Identifier {
                value: token.literal.clone(),
                token,
            }))
        }
        TokenKind::Int => {
            let result = parser.current_token().literal.parse();

            match result {
                Ok(value) => {
                    let token = parser.advance().clone();
                    Ok(Expression::Integer(IntegerLiteral { token, value }))
                }
                Err(_) => Err(ParseError::IntegerOutOfRange {
                    literal: parser.current_token().literal.clone(),
                }),
            }
        }
        TokenKind::True | TokenKind::False => {
            let token = parser.advance().clone();
            Ok(Expression::Boolean(BooleanLiteral {
                value: token.kind == TokenKind::True,
                token,
            }))
        }
        kind => Err(ParseError::NoPrefixParseFn { kind }),
    }
}

pub fn parse_prefix_expr(parser: &mut Parser) -> Result<Expression, ParseError> {
    let operator_token = parser.advance().clone();
    let right = parse_expr(parser, Precedence::Prefix)?;

    Ok(Expression::Prefix(PrefixExpression {
        operator: operator_token.literal.clone(),
        token: operator_token,
        right: Box::new(right),
    }))
}

pub fn parse_infix_expr(
    parser: &mut Parser,
    left: Expression,
    precedence: Precedence,
) -> Result<Expression, ParseError> {
    let operator_token = parser.advance().clone();
    let right = parse_expr(parser, precedence)?;

    Ok(Expression::Infix(InfixExpression {
        left: Box::new(left),
        operator: operator_token.literal.clone(),
        token: operator_token,
        right: Box::new(right),
    }))
}

pub fn parse_grouping_expr(parser: &mut Parser) -> Result<Expression, ParseError> {
    parser.advance();
    let expr = parse_expr(parser, Precedence::Lowest)?;
    parser.expect(TokenKind::CloseParen)?;

    Ok(expr)
}
