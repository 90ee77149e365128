//! Errors and error formatting
//!
//! The type algebra itself reports failures through the `ValueType::Error`
//! sentinel. The types here are for the layers around it: `TypeError` for
//! callers that want a Rust error once a type check fails, and `SpecError`
//! for malformed text, rendered with ariadne.

use ariadne::{Color, Config, Label, Report, ReportKind, Source};
use chumsky::error::SimpleReason;
use chumsky::prelude::Simple;
use std::ops::Range;
use thiserror::Error;

use crate::lexer::Token;

/// A type check that produced the error type.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum TypeError {
    /// The value already had the error type
    #[error("value has the error type")]
    ErrorType,

    /// A type literal that parsed but does not describe a valid type
    #[error("invalid type '{spec}'")]
    InvalidLiteral { spec: String },

    /// An operation over valid operands whose result is the error type
    #[error("{op} has no valid type for operands {}: {expr}", .operands.join(", "))]
    Operation {
        op: &'static str,
        expr: String,
        operands: Vec<String>,
    },
}

/// Malformed spec or expression text.
#[derive(Clone, Debug, Error)]
pub enum SpecError {
    #[error("lexical error: {}", summarize(.0.iter().map(format_lexer_error)))]
    Lex(Vec<Simple<char>>),

    #[error("parse error: {}", summarize(.0.iter().map(format_parser_error)))]
    Parse(Vec<Simple<Token>>),
}

impl SpecError {
    /// Render all diagnostics against the source text.
    pub fn report(&self, source: &str, color: bool) -> String {
        match self {
            SpecError::Lex(errors) => format_lexer_errors(source, errors, color),
            SpecError::Parse(errors) => format_parser_errors(source, errors, color),
        }
    }
}

fn summarize(messages: impl Iterator<Item = String>) -> String {
    let messages: Vec<String> = messages.collect();
    if messages.is_empty() {
        "malformed input".to_string()
    } else {
        messages.join("; ")
    }
}

/// Format lexer errors into a user-friendly string
pub fn format_lexer_errors(source: &str, errors: &[Simple<char>], color: bool) -> String {
    let labels = errors
        .iter()
        .map(|error| (clamp_span(source, error.span()), format_lexer_error(error)))
        .collect::<Vec<_>>();
    render(source, "Lexical error", labels, color)
}

/// Format parser errors into a user-friendly string
pub fn format_parser_errors(source: &str, errors: &[Simple<Token>], color: bool) -> String {
    let labels = errors
        .iter()
        .map(|error| (clamp_span(source, error.span()), format_parser_error(error)))
        .collect::<Vec<_>>();
    render(source, "Parse error", labels, color)
}

fn render(source: &str, title: &str, labels: Vec<(Range<usize>, String)>, color: bool) -> String {
    let mut output = Vec::new();

    for (span, message) in labels {
        let report = Report::build(ReportKind::Error, (), span.start)
            .with_config(Config::default().with_color(color))
            .with_message(title)
            .with_label(
                Label::new(span)
                    .with_message(message)
                    .with_color(Color::Red),
            );

        // Writing into a Vec cannot fail
        let _ = report.finish().write(Source::from(source), &mut output);
    }

    String::from_utf8(output).unwrap_or_else(|_| "Error formatting failed".to_string())
}

/// End-of-input errors point one past the end; keep spans inside the source.
/// Spans count characters, not bytes.
fn clamp_span(source: &str, span: Range<usize>) -> Range<usize> {
    let len = source.chars().count();
    let start = span.start.min(len);
    let end = span.end.min(len).max(start);
    start..end
}

/// Format a single lexer error into a readable message
fn format_lexer_error(error: &Simple<char>) -> String {
    if let SimpleReason::Custom(msg) = error.reason() {
        return msg.clone();
    }

    let found = error
        .found()
        .map(|c| format!("'{}'", c))
        .unwrap_or_else(|| "end of input".to_string());

    let expected: Vec<String> = error
        .expected()
        .filter_map(|opt| opt.as_ref())
        .map(|c| format!("'{}'", c))
        .collect();

    if expected.is_empty() {
        format!("Unexpected character {}", found)
    } else {
        format!("Unexpected {}, expected one of: {}", found, expected.join(", "))
    }
}

/// Format a single parser error into a readable message
fn format_parser_error(error: &Simple<Token>) -> String {
    let found = error
        .found()
        .map(|t| format!("'{}'", t))
        .unwrap_or_else(|| "end of input".to_string());

    match error.reason() {
        SimpleReason::Custom(msg) => return msg.clone(),
        SimpleReason::Unclosed { delimiter, .. } => {
            return format!("Unclosed delimiter '{}', found {}", delimiter, found);
        }
        SimpleReason::Unexpected => {}
    }

    let expected: Vec<String> = error
        .expected()
        .filter_map(|opt| opt.as_ref())
        .map(|t| format!("'{}'", t))
        .collect();

    if !expected.is_empty() {
        format!("Unexpected {}, expected one of: {}", found, expected.join(", "))
    } else if let Some(label) = error.label() {
        label.to_string()
    } else {
        format!("Unexpected token {}", found)
    }
}
