//! Interactive root finder.
//!
//! ```text
//! radix bisection
//! radix newton --tol 1e-8 --plot
//! ```
//!
//! The formula and interval are read from standard input, with line editing
//! when it is a terminal. The iteration table and the root are written to
//! standard output.

mod args;
mod error;
mod prompt;
mod run;

use std::{
    env,
    io::{self, IsTerminal, Write},
    process::ExitCode,
};

use args::{Command, USAGE};
use error::CliError;
use prompt::{Piped, Prompt};
use rustyline::DefaultEditor;

fn main() -> ExitCode {
    match try_main() {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            println!("Error: {error}");
            ExitCode::FAILURE
        }
    }
}

fn try_main() -> Result<(), CliError> {
    let args = match Command::parse(env::args().skip(1))? {
        Command::Help => {
            writeln!(io::stdout(), "{USAGE}")?;
            return Ok(());
        }
        Command::Run(args) => args,
    };

    if io::stdin().is_terminal() {
        let editor = DefaultEditor::new()?;
        run::run(&args, &mut Prompt::new(editor, io::stdout()))
    } else {
        run::run(&args, &mut Prompt::new(Piped(io::stdin().lock()), io::stdout()))
    }
}
