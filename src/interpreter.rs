/// The evaluator module walks AST nodes and computes results.
///
/// The evaluator traverses the AST, performs arithmetic, reads and writes the
/// session's variables, and dispatches calls to the builtin function table.
///
/// # Responsibilities
/// - Evaluates every AST node kind with a single exhaustive match.
/// - Owns the variable [`Environment`](evaluator::core::Environment).
/// - Reports undefined variables and unknown functions.
pub mod evaluator;
/// The lexer module tokenizes one line of input.
///
/// The scanner reads the raw text and produces tokens on demand: numbers,
/// identifiers, operators and punctuation. This is the first stage of
/// interpretation.
///
/// # Responsibilities
/// - Converts the input characters into tokens, skipping whitespace.
/// - Keeps number and identifier text for the parser.
/// - Reports lexical errors for characters that start no token.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser pulls tokens from the scanner with one token of lookahead and
/// builds an expression tree by recursive descent.
///
/// # Responsibilities
/// - Encodes operator precedence and associativity in the grammar levels.
/// - Recognizes assignments and function calls from the token after an
///   identifier.
/// - Converts number text into values and rejects malformed input.
pub mod parser;
