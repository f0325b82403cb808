#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents errors raised by `:` commands in a session.
pub enum CommandError {
    /// A quoted command argument was never closed.
    UnclosedQuote,
    /// A file named by `:file` or `--file` could not be opened.
    CannotOpenFile {
        /// The path as given.
        path: String,
    },
}

impl std::fmt::Display for CommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnclosedQuote => write!(f, "Unclosed quote in input string."),
            Self::CannotOpenFile { path } => write!(f, "Cannot open file {path}"),
        }
    }
}

impl std::error::Error for CommandError {}
