use std::{
    io::{self, IsTerminal},
    path::{Path, PathBuf},
};

use clap::{ArgAction, Parser};
use linecalc::session::Session;

/// File run at startup when present in the working directory.
const INIT_FILE: &str = "init.calc";

/// linecalc is a line-oriented calculator. Every line is an expression whose
/// result is stored in `Ans`; variables persist for the whole session.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None, disable_version_flag = true)]
struct Args {
    /// Print version.
    #[arg(short = 'v', long, action = ArgAction::Version)]
    version: Option<bool>,

    /// Run the calculation only once and then exit.
    #[arg(short, long)]
    once: bool,

    /// Execute commands from the specified file before reading standard
    /// input. May be given several times.
    #[arg(short, long = "file", value_name = "PATH")]
    files: Vec<PathBuf>,

    /// Skip the `init.calc` startup file.
    #[arg(long)]
    no_init: bool,
}

fn run(args: Args) -> io::Result<()> {
    let mut session = Session::new(io::stdout(), io::stderr()).once(args.once)
                                                              .colored_errors(io::stderr().is_terminal());

    let init = Path::new(INIT_FILE);
    if !args.no_init && init.is_file() {
        session.include(init)?;
    }
    for path in &args.files {
        session.include(path)?;
    }

    session.process(io::stdin().lock(), true)
}

fn main() {
    env_logger::init();

    if let Err(e) = run(Args::parse()) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
