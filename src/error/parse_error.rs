#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during lexing or parsing.
pub enum ParseError {
    /// The scanner met a character that starts no token.
    UnexpectedCharacter {
        /// The offending character.
        character: char,
    },
    /// The parser found a token where the grammar expected something else.
    UnexpectedToken {
        /// Source text of the token encountered.
        token: String,
    },
    /// A number token could not be converted into a value, e.g. `1.2.3`.
    InvalidNumber {
        /// The literal text as scanned.
        literal: String,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedCharacter { character } => {
                write!(f, "Lexical Error: unexpected character '{character}'")
            },
            Self::UnexpectedToken { token } => {
                write!(f, "Syntax Error: unexpected token '{token}'")
            },
            Self::InvalidNumber { literal } => {
                write!(f, "Syntax Error: invalid number literal '{literal}'")
            },
        }
    }
}

impl std::error::Error for ParseError {}
