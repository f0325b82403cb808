use std::collections::HashMap;

use crate::{
    ast::{BinaryOperator, Expr, UnaryOperator},
    error::RuntimeError,
    interpreter::evaluator::function::lookup,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Name of the variable that holds the last top-level result.
pub const ANSWER: &str = "Ans";

/// Stores the variables of a calculator session.
///
/// An environment lives for a whole session and is passed by mutable
/// reference into every evaluation. Names are case-sensitive; a variable
/// exists from its first assignment on, and reading one that was never
/// assigned is an error.
///
/// ## Usage
///
/// Evaluation is eager and left-to-right, so when a line fails part-way, the
/// assignments that completed before the failure stay in the environment.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Environment {
    variables: HashMap<String, f64>,
}

impl Environment {
    /// Creates an environment with no variables.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an environment where `Ans` is already defined as `0`.
    ///
    /// This is the starting state of an interactive session, so that `Ans`
    /// can be referenced before anything has been computed.
    #[must_use]
    pub fn with_answer() -> Self {
        let mut env = Self::new();
        env.assign(ANSWER, 0.0);
        env
    }

    /// Returns the value of a variable, if it has been assigned.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<f64> {
        self.variables.get(name).copied()
    }

    /// Stores `value` under `name`, overwriting any previous value.
    pub fn assign(&mut self, name: &str, value: f64) {
        if let Some(slot) = self.variables.get_mut(name) {
            *slot = value;
        } else {
            self.variables.insert(name.to_string(), value);
        }
    }

    /// Whether `name` has been assigned.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.variables.contains_key(name)
    }

    /// Number of defined variables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    /// Whether no variable has been assigned yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// Iterates over all variables in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.variables.iter().map(|(name, value)| (name.as_str(), *value))
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation. Children are
    /// evaluated before their parent, left operands before right operands,
    /// and function arguments in order. Assignments write to the environment
    /// as soon as they are reached.
    ///
    /// Division by zero and domain errors in functions are not failures: they
    /// produce infinities or NaN following IEEE 754.
    ///
    /// # Errors
    /// - [`RuntimeError::UndefinedVariable`] when reading an unassigned name.
    /// - [`RuntimeError::UnknownFunction`] when no builtin has the called name
    ///   and argument count.
    ///
    /// # Example
    /// ```
    /// use linecalc::{interpreter::evaluator::core::Environment, parse_line};
    ///
    /// let mut env = Environment::new();
    /// let expr = parse_line("2 * (y = 3)").unwrap();
    ///
    /// assert_eq!(env.eval(&expr).unwrap(), 6.0);
    /// assert_eq!(env.get("y"), Some(3.0));
    /// ```
    pub fn eval(&mut self, expr: &Expr) -> EvalResult<f64> {
        match expr {
            Expr::Literal { value } => Ok(*value),
            Expr::Variable { name } => {
                self.get(name)
                    .ok_or_else(|| RuntimeError::UndefinedVariable { name: name.clone() })
            },
            Expr::Assignment { name, value } => {
                let value = self.eval(value)?;
                self.assign(name, value);
                Ok(value)
            },
            Expr::UnaryOp { op, expr } => {
                let value = self.eval(expr)?;
                Ok(Self::eval_unary(*op, value))
            },
            Expr::BinaryOp { left, op, right } => {
                let lhs = self.eval(left)?;
                let rhs = self.eval(right)?;
                Ok(Self::eval_binary(*op, lhs, rhs))
            },
            Expr::FunctionCall { name, arguments } => self.eval_function_call(name, arguments),
        }
    }

    /// Applies a unary operator to an evaluated operand.
    ///
    /// # Example
    /// ```
    /// use linecalc::{ast::UnaryOperator, interpreter::evaluator::core::Environment};
    ///
    /// assert_eq!(Environment::eval_unary(UnaryOperator::Negate, 5.0), -5.0);
    /// ```
    #[must_use]
    pub fn eval_unary(op: UnaryOperator, value: f64) -> f64 {
        match op {
            UnaryOperator::Negate => -value,
        }
    }

    /// Applies a binary operator to two evaluated operands.
    ///
    /// # Example
    /// ```
    /// use linecalc::{ast::BinaryOperator, interpreter::evaluator::core::Environment};
    ///
    /// assert_eq!(Environment::eval_binary(BinaryOperator::Sub, 10.0, 3.0), 7.0);
    /// assert_eq!(Environment::eval_binary(BinaryOperator::Div, 1.0, 0.0), f64::INFINITY);
    /// ```
    #[must_use]
    pub fn eval_binary(op: BinaryOperator, lhs: f64, rhs: f64) -> f64 {
        match op {
            BinaryOperator::Add => lhs + rhs,
            BinaryOperator::Sub => lhs - rhs,
            BinaryOperator::Mul => lhs * rhs,
            BinaryOperator::Div => lhs / rhs,
        }
    }

    /// Evaluates a function call.
    ///
    /// All arguments are evaluated first, in order, and only then is the
    /// builtin looked up by name and argument count. An assignment inside the
    /// arguments of an unknown function therefore still takes effect.
    fn eval_function_call(&mut self, name: &str, arguments: &[Expr]) -> EvalResult<f64> {
        let args = arguments.iter()
                            .map(|argument| self.eval(argument))
                            .collect::<EvalResult<Vec<_>>>()?;

        lookup(name, args.len()).and_then(|builtin| builtin.apply(&args))
                                .ok_or_else(|| RuntimeError::UnknownFunction { name:  name.to_string(),
                                                                               arity: args.len(), })
    }
}
