//! # linecalc
//!
//! linecalc is a line-oriented calculator engine written in Rust.
//! Each line is scanned, parsed into an expression tree and evaluated against
//! a variable environment that persists across lines. Values are `f64`
//! throughout; assignments, negation, the four arithmetic operators and a
//! fixed table of math functions are supported.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

pub use crate::{error::Error, interpreter::evaluator::core::Environment};
use crate::{ast::Expr, error::ParseError, interpreter::parser::core::Parser};

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` enum and its operators. The AST is built by
/// the parser and consumed by the evaluator; each tree is owned by the line it
/// came from.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while scanning, parsing,
/// or evaluating a line. Each error renders as the flat message shown to the
/// user.
///
/// # Responsibilities
/// - Defines error enums for every failure mode (lexer, parser, evaluator).
/// - Combines them into a single [`Error`](error::Error) for line evaluation.
pub mod error;
/// Orchestrates the processing of a single line.
///
/// This module ties together lexing, parsing, and evaluation, and holds the
/// variable environment and the builtin function table.
pub mod interpreter;
/// Drives the calculator over streams of lines.
///
/// Handles the `Ans` convention, `:` commands, file inclusion and reporting
/// of results and errors. The command-line binary is a thin wrapper around
/// it.
pub mod session;

/// Parses one line into an expression tree.
///
/// The whole line must form a single expression; anything after it is a
/// syntax error.
///
/// # Errors
/// Returns a lexical or syntax error describing the first problem found.
///
/// # Examples
/// ```
/// use linecalc::parse_line;
///
/// assert!(parse_line("x = sqrt(2) * (1 + y)").is_ok());
/// assert!(parse_line("2 +").is_err());
/// ```
pub fn parse_line(source: &str) -> Result<Expr, ParseError> {
    let expr = Parser::new(source)?.parse_line()?;
    log::debug!("parsed {source:?} as {expr}");
    Ok(expr)
}

/// Evaluates one line against the session's variables.
///
/// The line is parsed fresh and evaluated; the result is returned and any
/// assignments in it are applied to `env`. This function does not store the
/// result in `Ans`: interactive callers write their lines as `Ans = <line>`
/// to get that behaviour (see [`session`]).
///
/// # Errors
/// Returns an error if scanning, parsing or evaluation fails. Assignments that
/// completed before an evaluation failure remain applied.
///
/// # Examples
/// ```
/// use linecalc::{evaluate_line, interpreter::evaluator::core::Environment};
///
/// let mut env = Environment::new();
/// assert_eq!(evaluate_line("x = 4 + 1", &mut env).unwrap(), 5.0);
/// assert_eq!(evaluate_line("Ans = x * 2", &mut env).unwrap(), 10.0);
/// assert_eq!(env.get("Ans"), Some(10.0));
///
/// // Undefined variables are reported by name.
/// let err = evaluate_line("z + 1", &mut env).unwrap_err();
/// assert_eq!(err.to_string(), "Undefined variable: z");
/// ```
pub fn evaluate_line(source: &str, env: &mut Environment) -> Result<f64, Error> {
    let expr = parse_line(source)?;
    let value = env.eval(&expr)?;
    log::debug!("evaluated {source:?} to {value}");
    Ok(value)
}
