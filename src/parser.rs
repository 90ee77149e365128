//! Parser for type specs and type expressions
//!
//! Parses token streams into AST.

use chumsky::prelude::*;

use crate::ast::{TypeExpr, TypeSpec};
use crate::dimension::{Dimension, DimensionSize};
use crate::error::SpecError;
use crate::lexer::{lexer, Token};
use crate::value_type::ValueType;

/// Lex and parse `input` with the given token parser.
fn parse_tokens<T>(
    input: &str,
    parser: impl Parser<Token, T, Error = Simple<Token>>,
) -> Result<T, SpecError> {
    let tokens = lexer().parse(input).map_err(SpecError::Lex)?;
    let len = input.chars().count();

    parser
        .parse(chumsky::Stream::from_iter(len..len + 1, tokens.into_iter()))
        .map_err(SpecError::Parse)
}

/// Parse a complete type spec such as `tensor(x[3],y{})`.
pub fn parse_type_spec(input: &str) -> Result<TypeSpec, SpecError> {
    parse_tokens(input, type_spec().then_ignore(end()))
}

/// Parse a complete type expression such as `join(tensor(x[3]),double)`.
pub fn parse_type_expr(input: &str) -> Result<TypeExpr, SpecError> {
    parse_tokens(input, type_expr().then_ignore(end()))
}

impl ValueType {
    /// Parse a type spec. Malformed text yields the error type.
    pub fn from_spec(spec: &str) -> ValueType {
        match parse_type_spec(spec) {
            Ok(parsed) => parsed.to_value_type(),
            Err(err) => {
                tracing::trace!(spec, error = %err, "rejected type spec");
                ValueType::Error
            }
        }
    }
}

// ============================================================================
// Helpers
// ============================================================================

fn ident() -> impl Parser<Token, String, Error = Simple<Token>> + Clone {
    select! { Token::Ident(s) => s }.labelled("identifier")
}

fn keyword(word: &str) -> impl Parser<Token, (), Error = Simple<Token>> + Clone {
    just(Token::Ident(word.to_string())).ignored()
}

fn comma() -> impl Parser<Token, Token, Error = Simple<Token>> + Clone {
    just(Token::Comma)
}

// ============================================================================
// Type specs
// ============================================================================

/// `x[3]` or `x{}`
fn dimension() -> impl Parser<Token, Dimension, Error = Simple<Token>> + Clone {
    let indexed = select! { Token::Int(n) => n }
        .labelled("size")
        .delimited_by(just(Token::LBracket), just(Token::RBracket))
        .map(DimensionSize::Indexed);
    let mapped = just(Token::LBrace)
        .then(just(Token::RBrace))
        .to(DimensionSize::Mapped);

    ident()
        .then(indexed.or(mapped))
        .map(|(name, size)| Dimension { name, size })
}

/// `error`, `double` or `tensor(dim, ...)`
pub fn type_spec() -> impl Parser<Token, TypeSpec, Error = Simple<Token>> + Clone {
    let tensor = keyword("tensor")
        .ignore_then(
            dimension()
                .separated_by(comma())
                .delimited_by(just(Token::LParen), just(Token::RParen)),
        )
        .map(TypeSpec::Tensor);

    choice((
        keyword("error").to(TypeSpec::Error),
        keyword("double").to(TypeSpec::Double),
        tensor,
    ))
}

// ============================================================================
// Type expressions
// ============================================================================

/// A type literal or an operation over type expressions
pub fn type_expr() -> impl Parser<Token, TypeExpr, Error = Simple<Token>> + Clone {
    recursive(|expr| {
        // `x` or `(x, y, ...)`
        let names = ident().map(|name| vec![name]).or(ident()
            .separated_by(comma())
            .at_least(1)
            .delimited_by(just(Token::LParen), just(Token::RParen)));

        let pair = expr
            .clone()
            .then_ignore(comma())
            .then(expr.clone());

        let join = keyword("join")
            .ignore_then(
                pair.clone()
                    .delimited_by(just(Token::LParen), just(Token::RParen)),
            )
            .map(|(lhs, rhs)| TypeExpr::Join(Box::new(lhs), Box::new(rhs)));

        let either = keyword("either")
            .ignore_then(
                pair.clone()
                    .delimited_by(just(Token::LParen), just(Token::RParen)),
            )
            .map(|(lhs, rhs)| TypeExpr::Either(Box::new(lhs), Box::new(rhs)));

        let concat = keyword("concat")
            .ignore_then(
                pair.then_ignore(comma())
                    .then(ident())
                    .delimited_by(just(Token::LParen), just(Token::RParen)),
            )
            .map(|((lhs, rhs), dim)| TypeExpr::Concat(Box::new(lhs), Box::new(rhs), dim));

        let reduce = keyword("reduce")
            .ignore_then(
                expr.clone()
                    .then(comma().ignore_then(ident()).repeated())
                    .delimited_by(just(Token::LParen), just(Token::RParen)),
            )
            .map(|(inner, dims)| TypeExpr::Reduce(Box::new(inner), dims));

        let rename = keyword("rename")
            .ignore_then(
                expr.then_ignore(comma())
                    .then(names.clone())
                    .then_ignore(comma())
                    .then(names)
                    .delimited_by(just(Token::LParen), just(Token::RParen)),
            )
            .map(|((inner, from), to)| TypeExpr::Rename {
                inner: Box::new(inner),
                from,
                to,
            });

        choice((
            type_spec().map(TypeExpr::Type),
            join,
            concat,
            reduce,
            rename,
            either,
        ))
    })
}
