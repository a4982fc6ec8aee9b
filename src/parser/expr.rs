use crate::{
    ast::{
        ast::Expr,
        expressions::{BinaryOperator, PrefixOperator},
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
};

use super::{lookups::BindingPower, parser::Parser};

pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Result<Expr, Error> {
    parser.descend()?;
    let expr = parse_nested_expr(parser, bp);
    parser.ascend();
    expr
}

fn parse_nested_expr(parser: &mut Parser, bp: BindingPower) -> Result<Expr, Error> {
    // First parse NUD
    let token = match parser.current_token() {
        Some(token) => token.clone(),
        None => {
            return Err(parser.error(ErrorImpl::UnexpectedEndOfInput {
                expected: String::from("expression"),
            }))
        }
    };

    let nud = match parser.get_nud_lookup().get(&token.kind).copied() {
        Some(nud) => nud,
        None => return Err(unexpected_token(token)),
    };

    let mut left = nud(parser)?;

    // While the next operator binds tighter than `bp`, it takes `left` as its lhs
    while let Some(kind) = parser.current_token_kind() {
        let next_bp = parser
            .get_bp_lookup()
            .get(&kind)
            .copied()
            .unwrap_or(BindingPower::Default);
        if next_bp <= bp {
            break;
        }

        let Some(led) = parser.get_led_lookup().get(&kind).copied() else {
            break;
        };
        left = led(parser, left, next_bp)?;
    }

    Ok(left)
}

pub fn parse_primary_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let token = parser.expect(TokenKind::Integer)?;

    match token.value.parse::<i64>() {
        Ok(value) => Ok(Expr::integer(value)),
        Err(_) => Err(Error::new(
            ErrorImpl::NumberParseError { token: token.value },
            token.position,
        )),
    }
}

/// Parses an identifier: a call when `(` follows it, a variable reference otherwise.
pub fn parse_symbol_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let token = parser.expect(TokenKind::Identifier)?;

    if parser.current_token_kind() == Some(TokenKind::OpenParen) {
        if !parser.scopes().has_function(&token.value) {
            return Err(Error::new(
                ErrorImpl::FunctionNotDeclared {
                    function: token.value,
                },
                token.position,
            ));
        }

        let arguments = parse_arguments(parser)?;
        return Ok(Expr::call(&token.value, arguments));
    }

    if !parser.scopes().has_variable(&token.value) {
        return Err(Error::new(
            ErrorImpl::VariableNotDeclared {
                variable: token.value,
            },
            token.position,
        ));
    }

    Ok(Expr::variable(&token.value))
}

pub fn parse_binary_expr(parser: &mut Parser, left: Expr, bp: BindingPower) -> Result<Expr, Error> {
    let operator_token = parser.advance()?;
    let operator = match BinaryOperator::from_token_kind(operator_token.kind) {
        Some(operator) => operator,
        None => return Err(unexpected_token(operator_token)),
    };

    let right = parse_expr(parser, bp)?;

    Ok(Expr::binary(operator, left, right))
}

pub fn parse_prefix_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let operator_token = parser.advance()?;
    let operator = match PrefixOperator::from_token_kind(operator_token.kind) {
        Some(operator) => operator,
        None => return Err(unexpected_token(operator_token)),
    };

    let operand = parse_expr(parser, BindingPower::Unary)?;

    Ok(Expr::unary(operator, operand))
}

pub fn parse_grouping_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parser.expect(TokenKind::OpenParen)?;
    let expr = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::CloseParen)?;

    Ok(expr)
}

/// Parses `( expr, ... )` after a function name.
fn parse_arguments(parser: &mut Parser) -> Result<Vec<Expr>, Error> {
    parser.expect(TokenKind::OpenParen)?;

    let mut args = vec![];
    if parser.current_token_kind() == Some(TokenKind::CloseParen) {
        parser.advance()?;
        return Ok(args);
    }

    loop {
        args.push(parse_expr(parser, BindingPower::Default)?);

        match parser.current_token_kind() {
            Some(TokenKind::Comma) => {
                parser.advance()?;
            }
            Some(TokenKind::CloseParen) => {
                parser.advance()?;
                break;
            }
            _ => return Err(parser.unexpected("',' or ')'")),
        }
    }

    Ok(args)
}

fn unexpected_token(token: Token) -> Error {
    Error::new(
        ErrorImpl::UnexpectedToken { token: token.value },
        token.position,
    )
}
