/// Core parser state and entry points.
///
/// Holds the [`core::Parser`] with its single token of lookahead, token
/// consumption, and the whole-line entry point.
pub mod core;

/// Binary operator parsing.
///
/// Implements the two left-associative precedence levels: additive
/// (`+`, `-`) and multiplicative (`*`, `/`).
pub mod binary;

/// Factor parsing.
///
/// Handles unary negation, number literals, variables, assignments,
/// function calls and parenthesized expressions.
pub mod unary;
