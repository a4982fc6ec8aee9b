//! Type annotation parsing.
//!
//! Return types must name one of the known types. Parameter annotations
//! are taken as written.

use crate::{
    ast::types::ReturnType,
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::parser::Parser;

pub fn parse_return_type(parser: &mut Parser) -> Result<ReturnType, Error> {
    let token = parser.expect_described(TokenKind::Identifier, "return type")?;

    ReturnType::from_name(&token.value).ok_or_else(|| {
        Error::new(
            ErrorImpl::UnknownReturnType {
                type_: token.value.clone(),
            },
            token.position.clone(),
        )
    })
}

pub fn parse_param_type(parser: &mut Parser) -> Result<String, Error> {
    let token = parser.expect_described(TokenKind::Identifier, "parameter type")?;
    Ok(token.value)
}
