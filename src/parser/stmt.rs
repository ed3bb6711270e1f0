use crate::{
    ast::{
        ast::Statement,
        expressions::Identifier,
        statements::{ExpressionStatement, LetStatement, ReturnStatement},
    },
    errors::errors::ParseError,
    lexer::tokens::TokenKind,
    parser::{expr::parse_expr, lookups::Precedence},
};

use super::parser::Parser;

pub fn parse_stmt(parser: &mut Parser) -> Result<Statement, ParseError> {
    let stmt_fn = parser.get_stmt_lookup().get(&parser.current_kind()).copied();
    if let Some(stmt_fn) = stmt_fn {
        return stmt_fn(parser);
    }

    let token = parser.current_token().clone();
    let expression = parse_expr(parser, Precedence::Lowest)?;
    skip_terminator(parser);

    Ok(Statement::Expression(ExpressionStatement { token, expression }))
}

pub fn parse_let_stmt(parser: &mut Parser) -> Result<Statement, ParseError> {
    let token = parser.advance().clone();

    let name_token = parser.expect(TokenKind::Identifier)?;
    let name = Identifier {
        value: name_token.literal.clone(),
        token: name_token,
    };

    parser.expect(TokenKind::Assignment)?;

    // The grammar asks for a value after `=`, but the tree tolerates its
    // absence: `let x = ;` parses and renders back the same way.
    let value = if parser.current_kind() == TokenKind::Semicolon {
        None
    } else {
        Some(parse_expr(parser, Precedence::Lowest)?)
    };

    skip_terminator(parser);

    Ok(Statement::Let(LetStatement { token, name, value }))
}

pub fn parse_return_stmt(parser: &mut Parser) -> Result<Statement, ParseError> {
    let token = parser.advance().clone();

    let value = if parser.current_kind() == TokenKind::Semicolon {
        None
    } else {
        Some(parse_expr(parser, Precedence::Lowest)?)
    };

    skip_terminator(parser);

    Ok(Statement::Return(ReturnStatement { token, value }))
}

// The trailing semicolon is optional so the final statement of an input can
// omit it.
fn skip_terminator(parser: &mut Parser) {
    if parser.current_kind() == TokenKind::Semicolon {
        parser.advance();
    }
}
