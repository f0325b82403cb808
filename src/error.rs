/// Parsing errors.
///
/// Defines the errors that can occur while scanning and parsing a line:
/// unexpected characters, unexpected tokens and malformed number literals.
pub mod parse_error;
/// Runtime errors.
///
/// Contains the errors raised while evaluating a parsed expression: reading
/// an undefined variable or calling an unknown function.
pub mod runtime_error;
/// Session command errors.
///
/// Errors of the line driver rather than of the expression language: bad
/// quoting in a `:` command and unreadable include files.
pub mod command_error;

pub use command_error::CommandError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Any failure of a single line, whichever phase raised it.
///
/// The `Display` output is the flat message shown to the user; it is the same
/// text as the wrapped error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Scanning or parsing failed.
    Parse(ParseError),
    /// Evaluation failed.
    Runtime(RuntimeError),
}

impl From<ParseError> for Error {
    fn from(value: ParseError) -> Self {
        Self::Parse(value)
    }
}

impl From<RuntimeError> for Error {
    fn from(value: RuntimeError) -> Self {
        Self::Runtime(value)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "{e}"),
            Self::Runtime(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}
