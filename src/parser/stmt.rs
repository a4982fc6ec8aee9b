use crate::{
    ast::{
        ast::Stmt,
        statements::{FnDeclStmt, ReturnStmt, VarDeclStmt},
        types::Parameter,
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
    parser::{expr::parse_expr, lookups::BindingPower},
};

use super::{
    parser::Parser,
    types::{parse_param_type, parse_return_type},
};

/// Parses one statement.
///
/// Returns `Ok(None)` for a stray `;`, which is consumed, and for a `}`,
/// which is left in place for the enclosing block to close.
pub fn parse_stmt(parser: &mut Parser) -> Result<Option<Stmt>, Error> {
    let token = match parser.current_token() {
        Some(token) => token.clone(),
        None => {
            return Err(parser.error(ErrorImpl::UnexpectedEndOfInput {
                expected: String::from("statement"),
            }))
        }
    };

    match token.kind {
        TokenKind::CloseCurly => Ok(None),
        TokenKind::Semicolon => {
            parser.advance()?;
            Ok(None)
        }
        TokenKind::Identifier => {
            if let Some(handler) = parser.get_stmt_lookup().get(token.value.as_str()).copied() {
                return handler(parser).map(Some);
            }

            let expr = parse_expr(parser, BindingPower::Default)?;
            Ok(Some(Stmt::Expression(expr)))
        }
        _ => Err(Error::new(
            ErrorImpl::UnexpectedToken { token: token.value },
            token.position,
        )),
    }
}

/// Parses `{ stmt* }` and returns the statements of the block.
pub fn parse_block(parser: &mut Parser) -> Result<Vec<Stmt>, Error> {
    parser.expect(TokenKind::OpenCurly)?;

    parser.descend()?;
    let statements = parse_block_body(parser);
    parser.ascend();

    let statements = statements?;
    parser.expect(TokenKind::CloseCurly)?;

    Ok(statements)
}

fn parse_block_body(parser: &mut Parser) -> Result<Vec<Stmt>, Error> {
    let mut statements = Vec::new();
    loop {
        match parser.current_token_kind() {
            Some(TokenKind::CloseCurly) => break,
            Some(_) => {
                if let Some(stmt) = parse_stmt(parser)? {
                    statements.push(stmt);
                }
            }
            None => return Err(parser.unexpected("'}'")),
        }
    }

    Ok(statements)
}

pub fn parse_var_decl_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start_token = parser.advance()?;
    let is_mutable = start_token.is_word("let");

    let name = parser.expect_described(TokenKind::Identifier, "variable name")?;
    if parser.scopes().has_local_variable(&name.value) {
        return Err(Error::new(
            ErrorImpl::VariableAlreadyDeclared {
                variable: name.value,
            },
            name.position,
        ));
    }

    parser.expect(TokenKind::Assignment)?;
    // The initializer is parsed before the name is declared, so it cannot see itself.
    let value = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::Semicolon)?;

    parser.declare_variable(&name.value, is_mutable)?;

    let declaration = VarDeclStmt {
        name: name.value,
        value,
    };

    if is_mutable {
        Ok(Stmt::MutableVariableAssignment(declaration))
    } else {
        Ok(Stmt::ImmutableVariableAssignment(declaration))
    }
}

pub fn parse_fn_decl_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.advance()?;

    let name = parser.expect_described(TokenKind::Identifier, "function name")?;
    if parser.scopes().has_local_function(&name.value) {
        return Err(Error::new(
            ErrorImpl::FunctionAlreadyDeclared {
                function: name.value,
            },
            name.position,
        ));
    }

    // Declared in the enclosing scope before the body scope is copied from it,
    // so the body may recurse but earlier statements cannot call it.
    parser.declare_function(&name.value)?;
    parser.enter_scope();

    let parameters = parse_parameters(parser)?;

    parser.expect(TokenKind::Colon)?;
    let return_type = parse_return_type(parser)?;

    let body = parse_block(parser)?;
    parser.expect(TokenKind::Semicolon)?;

    parser.exit_scope()?;

    Ok(Stmt::FunctionDeclaration(FnDeclStmt {
        name: name.value,
        parameters,
        return_type,
        body,
    }))
}

/// Parses `( name: type, ... )`, declaring each parameter as an immutable variable.
fn parse_parameters(parser: &mut Parser) -> Result<Vec<Parameter>, Error> {
    parser.expect(TokenKind::OpenParen)?;

    let mut parameters = Vec::new();
    if parser.current_token_kind() == Some(TokenKind::CloseParen) {
        parser.advance()?;
        return Ok(parameters);
    }

    loop {
        let name = parser.expect_described(TokenKind::Identifier, "parameter name")?;
        if parser.scopes().has_local_variable(&name.value) {
            return Err(Error::new(
                ErrorImpl::VariableAlreadyDeclared {
                    variable: name.value,
                },
                name.position,
            ));
        }

        parser.expect(TokenKind::Colon)?;
        let type_ = parse_param_type(parser)?;

        parser.declare_variable(&name.value, false)?;
        parameters.push(Parameter {
            name: name.value,
            type_,
        });

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

    Ok(parameters)
}

pub fn parse_return_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.advance()?;

    let value = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::Semicolon)?;

    Ok(Stmt::FunctionReturn(ReturnStmt { value }))
}
