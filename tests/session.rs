use std::{
    fs,
    path::{Path, PathBuf},
};

use linecalc::session::{HELP, MAX_INCLUDE_DEPTH, Session};

struct Run {
    out: String,
    err: String,
    ans: Option<f64>,
}

fn run(input: &str, interactive: bool, once: bool) -> Run {
    run_bytes(input.as_bytes(), interactive, once)
}

fn run_bytes(input: &[u8], interactive: bool, once: bool) -> Run {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let mut session = Session::new(&mut out, &mut err).once(once);
    session.process(input, interactive).unwrap();
    let ans = session.environment().get("Ans");
    drop(session);
    Run { out: String::from_utf8(out).unwrap(),
          err: String::from_utf8(err).unwrap(),
          ans }
}

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("linecalc-{name}-{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn ans_starts_at_zero_and_tracks_results() {
    let result = run("Ans + 1\nAns * 10\n", true, false);
    assert_eq!(result.out, "> Ans: 1\n> Ans: 10\n> ");
    assert_eq!(result.ans, Some(10.0));
}

#[test]
fn failed_lines_leave_ans_alone() {
    let result = run("5\nnope\n", true, false);
    assert_eq!(result.err, "Error: Undefined variable: nope\n");
    assert_eq!(result.ans, Some(5.0));
}

#[test]
fn errors_do_not_stop_the_session() {
    let result = run("1 +\n2 ^ 2\nfoo(1)\n3\n", true, false);
    assert_eq!(result.err,
               "Error: Syntax Error: unexpected token 'end of input'\n\
                Error: Lexical Error: unexpected character '^'\n\
                Error: Unknown function: foo\n");
    assert!(result.out.ends_with("> Ans: 3\n> "));
}

#[test]
fn invalid_utf8_lines_are_reported_and_skipped() {
    let result = run_bytes(b"1\n\xff\xfe\n2\n", true, false);
    assert_eq!(result.out, "> Ans: 1\n> > Ans: 2\n> ");
    assert_eq!(result.err, "Error: Lexical Error: unexpected character '\u{FFFD}'\n");
    assert_eq!(result.ans, Some(2.0));
}

#[test]
fn invalid_utf8_in_a_file_does_not_end_it() {
    let dir = scratch_dir("utf8");
    let path = dir.join("bad.calc");
    fs::write(&path, b"a = 1\nb = \xff\na + 2\n").unwrap();

    let result = run(&format!(":file {}\n", path.display()), false, false);

    assert_eq!(result.err.lines().count(), 1);
    assert!(result.err.starts_with("Error: Lexical Error"));
    assert_eq!(result.ans, Some(3.0));
    fs::remove_dir_all(dir).unwrap();
}

#[test]
fn carriage_returns_are_stripped() {
    let result = run("2 * 3\r\n:exit\r\n4\r\n", true, false);
    assert_eq!(result.out, "> Ans: 6\n> ");
    assert_eq!(result.err, "");
}

#[test]
fn silent_mode_prints_nothing_but_errors() {
    let result = run("x = 2\n:help\nx / 0\nx +\n", false, false);
    assert_eq!(result.out, "");
    assert_eq!(result.err, "Error: Syntax Error: unexpected token 'end of input'\n");
    assert_eq!(result.ans, Some(f64::INFINITY));
}

#[test]
fn empty_lines_are_skipped() {
    let result = run("\n\n7\n", true, false);
    assert_eq!(result.out, "> > > Ans: 7\n> ");
}

#[test]
fn exit_stops_reading() {
    let result = run("1\n:exit\n2\n", true, false);
    assert_eq!(result.ans, Some(1.0));
    assert_eq!(run(":e\n", true, false).out, "> ");
}

#[test]
fn help_is_interactive_only() {
    assert_eq!(run(":h\n", true, false).out, format!("> {HELP}> "));
    assert_eq!(run(":help\n", false, false).out, "");
}

#[test]
fn once_reads_a_single_interactive_line() {
    let result = run("2 * 21\n3\n", true, true);
    assert_eq!(result.out, "> Ans: 42\n");
    assert_eq!(result.ans, Some(42.0));
}

#[test]
fn once_does_not_limit_files() {
    let result = run("1\n2\n3\n", false, true);
    assert_eq!(result.ans, Some(3.0));
}

#[test]
fn unknown_commands_are_ignored() {
    let result = run(":frobnicate now\n4\n", true, false);
    assert_eq!(result.err, "");
    assert_eq!(result.ans, Some(4.0));
}

#[test]
fn unclosed_quotes_are_reported() {
    let result = run(":file \"oops\n", true, false);
    assert_eq!(result.err, "Error: Unclosed quote in input string.\n");
}

#[test]
fn example_script() {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let mut session = Session::new(&mut out, &mut err);
    session.include(Path::new("tests/example.calc")).unwrap();

    let env = session.environment();
    assert_eq!(env.get("r"), Some(2.0));
    assert_eq!(env.get("c"), Some(2.0));
    assert_eq!(env.get("Ans"), Some(3.0));
    assert_eq!(env.get("area"), Some(std::f64::consts::PI * 4.0));
    drop(session);

    assert!(out.is_empty());
    assert_eq!(String::from_utf8(err).unwrap(),
               "Error: Syntax Error: unexpected token 'line'\n");
}

#[test]
fn file_command_shares_variables() {
    let dir = scratch_dir("include");
    let path = dir.join("setup file.calc");
    fs::write(&path, "k = 6\nk * 7\n").unwrap();

    let input = format!(":f \"{}\"\nAns + k\n", path.display());
    let result = run(&input, true, false);

    assert_eq!(result.out, "> > Ans: 48\n> ");
    assert_eq!(result.ans, Some(48.0));
    fs::remove_dir_all(dir).unwrap();
}

#[test]
fn missing_files_are_reported() {
    let result = run(":file /definitely/not/here.calc\n", true, false);
    assert_eq!(result.err, "Error: Cannot open file /definitely/not/here.calc\n");
}

#[test]
fn self_inclusion_stops_at_the_depth_limit() {
    let dir = scratch_dir("recursive");
    let path = dir.join("loop.calc");
    fs::write(&path, format!("n = n + 1\n:file {}\n", path.display())).unwrap();

    let mut out = Vec::new();
    let mut err = Vec::new();
    let mut session = Session::new(&mut out, &mut err);
    session.environment_mut().assign("n", 0.0);
    session.process(format!(":file {}\n", path.display()).as_bytes(), false).unwrap();

    let included = MAX_INCLUDE_DEPTH as f64;
    assert_eq!(session.environment().get("n"), Some(included));
    drop(session);
    assert!(err.is_empty());
    fs::remove_dir_all(dir).unwrap();
}
