use std::collections::HashMap;

use crate::{
    ast::ast::{Expression, Statement},
    errors::errors::ParseError,
    lexer::tokens::TokenKind,
};

use super::{expr::*, parser::Parser, stmt::*};

/// Operator precedence, lowest binds loosest.
///
/// The derived ordering is the fixed total order the expression loop
/// compares against; kinds without a table entry default to `Lowest`.
#[derive(PartialEq, PartialOrd, Clone, Copy, Debug)]
pub enum Precedence {
    Lowest,
    Equals,
    LessGreater,
    Sum,
    Product,
    Prefix,
    Call,
}

pub type StmtHandler = fn(&mut Parser) -> Result<Statement, ParseError>;
pub type PrefixHandler = fn(&mut Parser) -> Result<Expression, ParseError>;
pub type InfixHandler = fn(&mut Parser, Expression, Precedence) -> Result<Expression, ParseError>;

pub fn create_token_lookups(parser: &mut Parser) {
    // Equality
    parser.infix(TokenKind::Equals, Precedence::Equals, parse_infix_expr);
    parser.infix(TokenKind::NotEquals, Precedence::Equals, parse_infix_expr);

    // Relational
    parser.infix(TokenKind::Less, Precedence::LessGreater, parse_infix_expr);
    parser.infix(TokenKind::Greater, Precedence::LessGreater, parse_infix_expr);

    // Additive and multiplicative
    parser.infix(TokenKind::Plus, Precedence::Sum, parse_infix_expr);
    parser.infix(TokenKind::Dash, Precedence::Sum, parse_infix_expr);
    parser.infix(TokenKind::Star, Precedence::Product, parse_infix_expr);
    parser.infix(TokenKind::Slash, Precedence::Product, parse_infix_expr);

    // Literals and symbols
    parser.prefix(TokenKind::Identifier, parse_primary_expr);
    parser.prefix(TokenKind::Int, parse_primary_expr);
    parser.prefix(TokenKind::True, parse_primary_expr);
    parser.prefix(TokenKind::False, parse_primary_expr);
    parser.prefix(TokenKind::Not, parse_prefix_expr);
    parser.prefix(TokenKind::Dash, parse_prefix_expr);
    parser.prefix(TokenKind::OpenParen, parse_grouping_expr);

    // Statements
    parser.stmt(TokenKind::Let, parse_let_stmt);
    parser.stmt(TokenKind::Return, parse_return_stmt);
}

// Lookup tables inside the parser struct, keyed by token kind
pub type StmtLookup = HashMap<TokenKind, StmtHandler>;
pub type PrefixLookup = HashMap<TokenKind, PrefixHandler>;
pub type InfixLookup = HashMap<TokenKind, InfixHandler>;
pub type PrecedenceLookup = HashMap<TokenKind, Precedence>;
