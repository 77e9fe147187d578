use std::io::{BufRead, Write};

use rustyline::{DefaultEditor, error::ReadlineError};

use crate::error::CliError;

/// Somewhere to read interactive answers from.
pub trait LineSource {
    /// Shows `message` and reads one line, or `None` at end of input.
    ///
    /// `out` is the stream results are written to. It must be flushed before
    /// the message is shown so that output stays in order.
    fn read_line<W: Write>(
        &mut self,
        message: &str,
        out: &mut W,
    ) -> Result<Option<String>, CliError>;
}

/// Terminal input with line editing and history.
impl LineSource for DefaultEditor {
    fn read_line<W: Write>(
        &mut self,
        message: &str,
        out: &mut W,
    ) -> Result<Option<String>, CliError> {
        out.flush()?;
        match self.readline(message) {
            Ok(line) => {
                let _ = self.add_history_entry(&line);
                Ok(Some(line))
            }
            Err(ReadlineError::Eof | ReadlineError::Interrupted) => Ok(None),
            Err(e) => Err(CliError::Readline(e)),
        }
    }
}

/// Non-interactive input, such as a pipe or a file.
///
/// Prompts are echoed to the output so a transcript reads like a session.
pub struct Piped<R>(pub R);

impl<R: BufRead> LineSource for Piped<R> {
    fn read_line<W: Write>(
        &mut self,
        message: &str,
        out: &mut W,
    ) -> Result<Option<String>, CliError> {
        write!(out, "{message}")?;
        out.flush()?;

        let mut line = String::new();
        if self.0.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}

/// Line-oriented prompts over a line source and a writer.
pub struct Prompt<L, W> {
    input: L,
    output: W,
}

impl<L: LineSource, W: Write> Prompt<L, W> {
    pub fn new(input: L, output: W) -> Self {
        Self { input, output }
    }

    /// Prints `message` and reads one trimmed line.
    ///
    /// `label` names the value in the error raised at end of input.
    pub fn line(&mut self, message: &str, label: &str) -> Result<String, CliError> {
        match self.input.read_line(message, &mut self.output)? {
            Some(line) => Ok(line.trim().to_owned()),
            None => Err(CliError::UnexpectedEof(label.to_owned())),
        }
    }

    /// Prints `message` and reads one number.
    pub fn number(&mut self, message: &str, label: &str) -> Result<f64, CliError> {
        let line = self.line(message, label)?;
        line.parse().map_err(|_| CliError::InvalidNumber {
            label: label.to_owned(),
            input: line,
        })
    }

    /// Returns the output for writing results.
    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }
}
