#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// Tried to read a variable that was never assigned.
    UndefinedVariable {
        /// The name of the variable.
        name: String,
    },
    /// Called a function that is not in the function table with this many
    /// arguments.
    UnknownFunction {
        /// The name of the function.
        name:  String,
        /// The number of arguments supplied.
        arity: usize,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UndefinedVariable { name } => write!(f, "Undefined variable: {name}"),
            Self::UnknownFunction { name, .. } => write!(f, "Unknown function: {name}"),
        }
    }
}

impl std::error::Error for RuntimeError {}
