use std::{
    fs::File,
    io::{self, BufRead, BufReader, Write},
    path::Path,
};

use crate::{
    error::CommandError,
    evaluate_line,
    interpreter::evaluator::core::{ANSWER, Environment},
};

/// How deeply `:file` commands may include one another.
pub const MAX_INCLUDE_DEPTH: usize = 128;

/// Text printed by the `:help` command.
pub const HELP: &str = "\
Interactive commands:
  :e :exit          Exit interactive mode.
  :h :help          Display this information.
  :f <paths>
    :file <paths>   Execute commands from specified files.
  <expression>      Calculate expression. The result is stored in variable 'Ans'.
";

/// Whether the current stream should keep being read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// A calculator session over one variable environment.
///
/// A session reads lines from any [`BufRead`], evaluates them, and writes
/// results and error messages to its two writers. Every expression line is
/// evaluated as `Ans = <line>`, so the last successful result is always
/// available as `Ans`. Lines starting with `:` are commands.
///
/// Errors never stop the session; they are reported and the next line is
/// read.
///
/// # Example
/// ```
/// use linecalc::session::Session;
///
/// let mut out = Vec::new();
/// let mut err = Vec::new();
/// let mut session = Session::new(&mut out, &mut err);
/// session.process("x = 3\nAns * x\n1 +\n".as_bytes(), true).unwrap();
/// drop(session);
///
/// assert_eq!(String::from_utf8(out).unwrap(), "> Ans: 3\n> Ans: 9\n> > ");
/// assert_eq!(String::from_utf8(err).unwrap(),
///            "Error: Syntax Error: unexpected token 'end of input'\n");
/// ```
pub struct Session<O, E> {
    env:            Environment,
    once:           bool,
    colored_errors: bool,
    out:            O,
    err:            E,
}

impl<O: Write, E: Write> Session<O, E> {
    /// Creates a session whose environment holds only `Ans = 0`.
    pub fn new(out: O, err: E) -> Self {
        Self { env: Environment::with_answer(),
               once: false,
               colored_errors: false,
               out,
               err }
    }

    /// Stops interactive streams after their first line.
    #[must_use]
    pub fn once(mut self, once: bool) -> Self {
        self.once = once;
        self
    }

    /// Wraps error messages in red ANSI color codes.
    #[must_use]
    pub fn colored_errors(mut self, colored: bool) -> Self {
        self.colored_errors = colored;
        self
    }

    /// The session's variables.
    #[must_use]
    pub const fn environment(&self) -> &Environment {
        &self.env
    }

    /// Mutable access to the session's variables.
    pub fn environment_mut(&mut self) -> &mut Environment {
        &mut self.env
    }

    /// Processes every line of `input`.
    ///
    /// In interactive mode a `> ` prompt is written before each line and each
    /// result is written as `Ans: <value>`; otherwise results are computed
    /// silently. Errors are reported in both modes.
    ///
    /// # Errors
    /// Only I/O errors on the streams themselves are returned.
    pub fn process<R: BufRead>(&mut self, input: R, interactive: bool) -> io::Result<()> {
        self.process_at(input, interactive, 0)
    }

    /// Processes every line of the file at `path` silently.
    ///
    /// A file that cannot be opened is reported on the error stream.
    ///
    /// # Errors
    /// Only I/O errors while reading an opened file or writing output are
    /// returned.
    pub fn include(&mut self, path: &Path) -> io::Result<()> {
        self.include_at(path, 0)
    }

    fn include_at(&mut self, path: &Path, depth: usize) -> io::Result<()> {
        match File::open(path) {
            Ok(file) => {
                log::debug!("including {} at depth {depth}", path.display());
                self.process_at(BufReader::new(file), false, depth)
            },
            Err(e) => {
                log::debug!("cannot open {}: {e}", path.display());
                self.report(&CommandError::CannotOpenFile { path: path.display().to_string() })
            },
        }
    }

    fn process_at<R: BufRead>(&mut self, mut input: R, interactive: bool, depth: usize)
                              -> io::Result<()> {
        if depth > MAX_INCLUDE_DEPTH {
            log::warn!("file inclusion deeper than {MAX_INCLUDE_DEPTH} levels ignored");
            return Ok(());
        }

        let mut buf = Vec::new();
        loop {
            if interactive {
                write!(self.out, "> ")?;
                self.out.flush()?;
            }
            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            // Invalid UTF-8 becomes U+FFFD, which the scanner rejects like
            // any other stray character.
            let line = String::from_utf8_lossy(&buf);
            let line = line.strip_suffix('\n').unwrap_or(&line);
            let line = line.strip_suffix('\r').unwrap_or(line);
            if self.handle_line(line, interactive, depth)? == Flow::Exit {
                break;
            }
            if interactive && self.once {
                break;
            }
        }
        Ok(())
    }

    fn handle_line(&mut self, line: &str, interactive: bool, depth: usize) -> io::Result<Flow> {
        if line.is_empty() {
            return Ok(Flow::Continue);
        }
        if let Some(command) = line.strip_prefix(':') {
            return self.handle_command(command, interactive, depth);
        }

        match evaluate_line(&format!("{ANSWER} = {line}"), &mut self.env) {
            Ok(value) if interactive => writeln!(self.out, "{ANSWER}: {value}")?,
            Ok(_) => {},
            Err(e) => self.report(&e)?,
        }
        Ok(Flow::Continue)
    }

    fn handle_command(&mut self, command: &str, interactive: bool, depth: usize)
                      -> io::Result<Flow> {
        let terms = match split_command(command) {
            Ok(terms) => terms,
            Err(e) => {
                self.report(&e)?;
                return Ok(Flow::Continue);
            },
        };
        let Some((name, args)) = terms.split_first() else {
            return Ok(Flow::Continue);
        };

        match name.as_str() {
            "e" | "exit" => return Ok(Flow::Exit),
            "h" | "help" if interactive => write!(self.out, "{HELP}")?,
            "f" | "file" => {
                for path in args {
                    self.include_at(Path::new(path), depth + 1)?;
                }
            },
            other => log::debug!("ignoring command :{other}"),
        }
        Ok(Flow::Continue)
    }

    fn report(&mut self, error: &dyn std::error::Error) -> io::Result<()> {
        if self.colored_errors {
            writeln!(self.err, "\x1b[31mError: {error}\x1b[0m")
        } else {
            writeln!(self.err, "Error: {error}")
        }
    }
}

/// Splits the text of a `:` command into words.
///
/// Words are separated by spaces. Single or double quotes group spaces into a
/// word (the other quote character is literal inside them), and a backslash
/// makes the next character literal.
///
/// # Errors
/// Returns [`CommandError::UnclosedQuote`] if a quote is left open.
///
/// # Example
/// ```
/// use linecalc::session::split_command;
///
/// assert_eq!(split_command(r#"file a.calc "my file.calc" it\'s"#).unwrap(),
///            vec!["file", "a.calc", "my file.calc", "it's"]);
/// assert!(split_command("file 'open").is_err());
/// ```
pub fn split_command(command: &str) -> Result<Vec<String>, CommandError> {
    let mut terms = Vec::new();
    let mut term = String::new();
    let mut quote = None;
    let mut chars = command.chars();

    while let Some(c) = chars.next() {
        match (c, quote) {
            ('\\', _) => term.extend(chars.next()),
            ('"' | '\'', None) => quote = Some(c),
            (c, Some(q)) if c == q => quote = None,
            (' ', None) => {
                if !term.is_empty() {
                    terms.push(std::mem::take(&mut term));
                }
            },
            (c, _) => term.push(c),
        }
    }

    if quote.is_some() {
        return Err(CommandError::UnclosedQuote);
    }
    if !term.is_empty() {
        terms.push(term);
    }
    Ok(terms)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_on_runs_of_spaces() {
        assert_eq!(split_command("  f   a  b ").unwrap(), vec!["f", "a", "b"]);
        assert!(split_command("").unwrap().is_empty());
    }

    #[test]
    fn quotes_group_and_nest_the_other_kind() {
        assert_eq!(split_command(r#"f "it's here" 'say "hi"'"#).unwrap(),
                   vec!["f", "it's here", r#"say "hi""#]);
        assert_eq!(split_command("f ''").unwrap(), vec!["f"]);
        assert_eq!(split_command("f a'b c'd").unwrap(), vec!["f", "ab cd"]);
    }

    #[test]
    fn backslash_escapes_anything() {
        assert_eq!(split_command(r"f a\ b \\").unwrap(), vec!["f", "a b", "\\"]);
        assert_eq!(split_command(r#"f "a\"b""#).unwrap(), vec!["f", "a\"b"]);
    }

    #[test]
    fn unclosed_quotes_fail() {
        assert_eq!(split_command("f \"abc"), Err(CommandError::UnclosedQuote));
        assert_eq!(split_command("f 'abc\""), Err(CommandError::UnclosedQuote));
    }

    #[test]
    fn colored_errors_wrap_the_message() {
        let mut err = Vec::new();
        let mut session = Session::new(io::sink(), &mut err).colored_errors(true);
        session.process("y\n".as_bytes(), false).unwrap();
        drop(session);
        assert_eq!(String::from_utf8(err).unwrap(),
                   "\x1b[31mError: Undefined variable: y\x1b[0m\n");
    }
}
