//! Lexer for type specs and type expressions
//!
//! Words such as `tensor`, `double` or `join` are lexed as identifiers and
//! recognized by the parser, so they remain usable as dimension names.

use chumsky::prelude::*;
use std::ops::Range;

/// Token types
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Token {
    // Identifiers and keywords
    Ident(String),

    // Dimension sizes
    Int(usize),

    // Punctuation
    LBrace,   // {
    RBrace,   // }
    LParen,   // (
    RParen,   // )
    LBracket, // [
    RBracket, // ]
    Comma,    // ,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Token::Ident(s) => write!(f, "{}", s),
            Token::Int(n) => write!(f, "{}", n),
            Token::LBrace => write!(f, "{{"),
            Token::RBrace => write!(f, "}}"),
            Token::LParen => write!(f, "("),
            Token::RParen => write!(f, ")"),
            Token::LBracket => write!(f, "["),
            Token::RBracket => write!(f, "]"),
            Token::Comma => write!(f, ","),
        }
    }
}

/// Type alias for spans
pub type Span = Range<usize>;

/// Create a lexer
pub fn lexer() -> impl Parser<char, Vec<(Token, Span)>, Error = Simple<char>> {
    let ident = text::ident().map(Token::Ident);

    let int = text::int(10).try_map(|digits: String, span: Span| {
        digits
            .parse::<usize>()
            .map(Token::Int)
            .map_err(|_| Simple::custom(span, format!("size '{}' is too large", digits)))
    });

    let punctuation = choice((
        just('{').to(Token::LBrace),
        just('}').to(Token::RBrace),
        just('(').to(Token::LParen),
        just(')').to(Token::RParen),
        just('[').to(Token::LBracket),
        just(']').to(Token::RBracket),
        just(',').to(Token::Comma),
    ));

    choice((ident, int, punctuation))
        .map_with_span(|tok, span| (tok, span))
        .padded()
        .repeated()
        .then_ignore(end())
}

/// Depth of unclosed `(`/`[`/`{` in `input`, used to detect incomplete
/// multi-line input. Negative if there are more closers than openers.
pub fn bracket_depth(input: &str) -> i32 {
    input.chars().fold(0, |depth, c| match c {
        '(' | '[' | '{' => depth + 1,
        ')' | ']' | '}' => depth - 1,
        _ => depth,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(input: &str) -> Vec<Token> {
        lexer()
            .parse(input)
            .unwrap()
            .into_iter()
            .map(|(tok, _)| tok)
            .collect()
    }

    #[test]
    fn test_lex_spec() {
        assert_eq!(
            tokens("tensor(x[3], y{})"),
            vec![
                Token::Ident("tensor".into()),
                Token::LParen,
                Token::Ident("x".into()),
                Token::LBracket,
                Token::Int(3),
                Token::RBracket,
                Token::Comma,
                Token::Ident("y".into()),
                Token::LBrace,
                Token::RBrace,
                Token::RParen,
            ]
        );
    }

    #[test]
    fn test_spans() {
        let spanned = lexer().parse("  abc [10]").unwrap();
        assert_eq!(spanned[0], (Token::Ident("abc".into()), 2..5));
        assert_eq!(spanned[2], (Token::Int(10), 7..9));
    }

    #[test]
    fn test_rejects_unknown_characters() {
        assert!(lexer().parse("tensor(x<3>)").is_err());
        assert!(lexer().parse("x[-1]").is_err());
    }

    #[test]
    fn test_rejects_oversized_int() {
        assert!(lexer().parse("x[99999999999999999999999999]").is_err());
    }

    #[test]
    fn test_bracket_depth() {
        assert_eq!(bracket_depth("join(tensor(x[3]),"), 1);
        assert_eq!(bracket_depth("tensor(x{})"), 0);
        assert_eq!(bracket_depth(")"), -1);
    }
}
