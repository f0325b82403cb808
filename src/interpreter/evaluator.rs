/// Core evaluation logic and the variable environment.
///
/// Contains [`core::Environment`], the session's variable store, and the tree
/// walk that evaluates an [`Expr`](crate::ast::Expr) against it.
pub mod core;

/// Built-in function table.
///
/// Maps a function name and argument count to a numeric operation.
pub mod function;
