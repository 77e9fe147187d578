//! Fixed-width iteration tables.
//!
//! [`Reporter`] prints rows while a solver runs. [`render`] prints a
//! completed [`Trace`] with the same layout.

use std::io::{self, Write};

use radix_core::Observer;
use radix_solvers::equation::{Event, Trace};

use crate::traits::{ITER_WIDTH, TableRow};

/// An observer that writes one table row per solver iteration.
///
/// The header and separator are written before the first row, so a run that
/// fails its precondition check prints nothing. The reporter never requests
/// an action.
///
/// Observers cannot return errors, so the first I/O failure is held and
/// later writes are skipped. Call [`finish`](Reporter::finish) after the
/// solve to surface it.
///
/// # Example
///
/// ```
/// use radix_observers::Reporter;
/// use radix_solvers::equation::{Config, bisection};
///
/// let mut reporter = Reporter::new(Vec::new());
/// let f = |x: f64| x * x - 2.0;
/// bisection::solve(&f, [1.0, 2.0], &Config::default(), &mut reporter).unwrap();
///
/// let table = String::from_utf8(reporter.finish().unwrap()).unwrap();
/// assert!(table.starts_with("Iteration Midpoint"));
/// ```
#[derive(Debug)]
pub struct Reporter<W: Write> {
    out: W,
    started: bool,
    error: Option<io::Error>,
}

impl<W: Write> Reporter<W> {
    /// Creates a reporter writing to `out`.
    pub fn new(out: W) -> Self {
        Self {
            out,
            started: false,
            error: None,
        }
    }

    /// Flushes the sink and returns it.
    ///
    /// # Errors
    ///
    /// Returns the first I/O error hit while reporting, or the flush error.
    pub fn finish(mut self) -> io::Result<W> {
        if let Some(error) = self.error {
            return Err(error);
        }
        self.out.flush()?;
        Ok(self.out)
    }

    fn write_row<R: TableRow>(&mut self, iter: usize, record: &R) {
        if self.error.is_some() {
            return;
        }

        let result = if self.started {
            write_row(&mut self.out, iter, record)
        } else {
            self.started = true;
            write_header::<R>(&mut self.out).and_then(|()| write_row(&mut self.out, iter, record))
        };

        if let Err(error) = result {
            self.error = Some(error);
        }
    }
}

impl<W, R, A> Observer<Event<'_, R>, A> for Reporter<W>
where
    W: Write,
    R: TableRow,
{
    fn observe(&mut self, event: &Event<'_, R>) -> Option<A> {
        self.write_row(event.iter, event.record);
        None
    }
}

/// Allows `&mut Reporter` to be passed to solvers that take an observer by
/// value, so [`Reporter::finish`] can be called after the solve completes.
impl<W, R, A> Observer<Event<'_, R>, A> for &mut Reporter<W>
where
    W: Write,
    R: TableRow,
{
    fn observe(&mut self, event: &Event<'_, R>) -> Option<A> {
        (*self).write_row(event.iter, event.record);
        None
    }
}

/// Writes a completed trace as a table.
///
/// An empty trace writes nothing.
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn render<R, W>(trace: &Trace<R>, mut out: W) -> io::Result<()>
where
    R: TableRow,
    W: Write,
{
    if trace.is_empty() {
        return Ok(());
    }

    write_header::<R>(&mut out)?;
    for iteration in trace {
        write_row(&mut out, iteration.iter, &iteration.record)?;
    }
    out.flush()
}

fn write_header<R: TableRow>(out: &mut impl Write) -> io::Result<()> {
    let mut width = ITER_WIDTH;
    write!(out, "{:<ITER_WIDTH$}", "Iteration")?;
    for &(title, column) in R::COLUMNS {
        write!(out, "{title:<column$}")?;
        width += column;
    }
    writeln!(out)?;
    writeln!(out, "{}", "-".repeat(width))
}

fn write_row<R: TableRow>(out: &mut impl Write, iter: usize, record: &R) -> io::Result<()> {
    writeln!(out, "{iter:<ITER_WIDTH$}{}", record.cells())
}

#[cfg(test)]
mod tests {
    use super::*;

    use radix_solvers::equation::{Action, Config, bisection, fixed_point, secant};

    fn square_minus_two(x: f64) -> f64 {
        x * x - 2.0
    }

    fn lines(bytes: Vec<u8>) -> Vec<String> {
        String::from_utf8(bytes)
            .expect("utf-8 output")
            .lines()
            .map(str::to_owned)
            .collect()
    }

    #[test]
    fn writes_header_separator_and_rows() {
        let mut reporter = Reporter::new(Vec::new());
        let solution = fixed_point::solve(&f64::cos, 1.0, &Config::fixed_point(), &mut reporter)
            .expect("should solve");

        let lines = lines(reporter.finish().expect("no io error"));
        assert_eq!(lines.len(), solution.iters + 2);
        assert_eq!(lines[0].trim_end(), "Iteration x                   g(x)");
        assert_eq!(lines[1], "-".repeat(50));
        assert!(lines[2].starts_with("1         1.0000000000        0.5403023059"));
    }

    #[test]
    fn failed_precondition_writes_nothing() {
        let mut reporter = Reporter::new(Vec::new());
        let result = bisection::solve(
            &square_minus_two,
            [2.0, 3.0],
            &Config::default(),
            &mut reporter,
        );

        assert!(result.is_err());
        assert!(reporter.finish().expect("no io error").is_empty());
    }

    #[test]
    fn render_matches_live_output() {
        let mut reporter = Reporter::new(Vec::new());
        let solution = secant::solve(
            &square_minus_two,
            [1.0, 2.0],
            &Config::default(),
            &mut reporter,
        )
        .expect("should solve");

        let mut rendered = Vec::new();
        render(&solution.trace, &mut rendered).expect("no io error");

        assert_eq!(reporter.finish().expect("no io error"), rendered);
    }

    #[test]
    fn reporter_never_stops_the_solver() {
        let mut reporter = Reporter::new(Vec::new());
        let event = Event {
            iter: 1,
            record: &fixed_point::Record { x: 1.0, gx: 2.0 },
        };
        let action: Option<Action> = reporter.observe(&event);
        assert!(action.is_none());
    }

    /// A sink that accepts a fixed number of bytes, then fails.
    #[derive(Debug)]
    struct Limited(usize);

    impl Write for Limited {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if buf.len() > self.0 {
                return Err(io::Error::other("sink full"));
            }
            self.0 -= buf.len();
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn io_errors_surface_from_finish() {
        let mut reporter = Reporter::new(Limited(64));
        let solution = bisection::solve(
            &square_minus_two,
            [1.0, 2.0],
            &Config::default(),
            &mut reporter,
        )
        .expect("solver is unaffected by sink errors");

        assert!(solution.iters > 1);
        let error = reporter.finish().expect_err("sink overflowed");
        assert_eq!(error.to_string(), "sink full");
    }
}
