use std::io::Write;

use radix_core::Function;
use radix_expr::Expression;
use radix_observers::{Figure, Reporter};
use radix_solvers::equation::{Config, ConfigError, Status, bisection, fixed_point, newton, secant};

use crate::{
    args::{Args, Solver},
    error::CliError,
    prompt::{LineSource, Prompt},
};

const FUNCTION_PROMPT: &str = "Enter the function (e.g., exp(x) - 2 - cos(exp(x) - 2)) \
                               OR (e.g., x**2 - 4*x + log(x)): ";

/// Runs one interactive session: prompt, solve, report, and optionally plot.
///
/// # Errors
///
/// Returns an error if input cannot be read or parsed, the options are
/// invalid, or the solver fails.
pub fn run<L, W>(args: &Args, prompt: &mut Prompt<L, W>) -> Result<(), CliError>
where
    L: LineSource,
    W: Write,
{
    if args.plot && !cfg!(feature = "plot") {
        return Err(CliError::PlotUnavailable);
    }

    match args.solver {
        Solver::Bisection => run_bisection(args, prompt),
        Solver::FixedPoint => run_fixed_point(args, prompt),
        Solver::Newton => run_newton(args, prompt),
        Solver::Secant => run_secant(args, prompt),
    }
}

fn run_bisection<L: LineSource, W: Write>(
    args: &Args,
    prompt: &mut Prompt<L, W>,
) -> Result<(), CliError> {
    let f = read_function(prompt, FUNCTION_PROMPT, "the function")?;
    let [a, b] = read_bracket(prompt)?;
    let config = config(args, Config::default())?;

    writeln!(prompt.output())?;
    let mut reporter = Reporter::new(prompt.output());
    let solution = bisection::solve(&f, [a, b], &config, &mut reporter)?;
    reporter.finish()?;
    conclude(prompt.output(), solution.x, solution.status, solution.iters)?;

    if args.plot {
        show(
            &Figure::new(format!("{} for f(x) = {f}", Solver::Bisection), &f)
                .label(format!("f(x) = {f}"))
                .bracket(a, b)
                .trace(&solution.trace)
                .root(solution.x),
        )?;
    }
    Ok(())
}

fn run_fixed_point<L: LineSource, W: Write>(
    args: &Args,
    prompt: &mut Prompt<L, W>,
) -> Result<(), CliError> {
    writeln!(
        prompt.output(),
        "Fixed-Point Iteration requires a function f(x) and a corresponding \
         rearranged form g(x) such that x = g(x)"
    )?;

    let f = prompt.line(
        "Enter the original function f(x) (e.g., exp(x) - x - 2), or leave blank: ",
        "f(x)",
    )?;
    let f = if f.is_empty() {
        None
    } else {
        Some(Expression::parse(&f)?)
    };
    let g = read_function(
        prompt,
        "Enter the rearranged form g(x) (e.g., exp(x) - 2): ",
        "g(x)",
    )?;
    let [a, b] = read_bracket(prompt)?;
    let x0 = prompt.number(
        &format!("Enter the initial guess (starting point within [{a}, {b}]): "),
        "the initial guess",
    )?;
    let config = config(args, Config::fixed_point())?;

    writeln!(prompt.output())?;
    let mut reporter = Reporter::new(prompt.output());
    let solution = fixed_point::solve(&g, x0, &config, &mut reporter)?;
    reporter.finish()?;
    conclude(prompt.output(), solution.x, solution.status, solution.iters)?;

    if let Some(f) = &f {
        writeln!(
            prompt.output(),
            "Residual: f({:.5}) = {:.10}",
            solution.x,
            f.call(solution.x)
        )?;
    }

    if args.plot {
        show(
            &Figure::new(format!("{} for g(x) = {g}", Solver::FixedPoint), &g)
                .label(format!("g(x) = {g}"))
                .y_label("g(x)")
                .trace(&solution.trace)
                .root(solution.x),
        )?;
    }
    Ok(())
}

fn run_newton<L: LineSource, W: Write>(
    args: &Args,
    prompt: &mut Prompt<L, W>,
) -> Result<(), CliError> {
    let f = read_function(prompt, FUNCTION_PROMPT, "the function")?;
    let df = f.derivative();
    let [a, b] = read_bracket(prompt)?;
    let config = config(args, Config::default())?;

    writeln!(prompt.output(), "\nf'(x) = {df}")?;
    let mut reporter = Reporter::new(prompt.output());
    let solution = newton::solve(&f, &df, [a, b], &config, &mut reporter)?;
    reporter.finish()?;
    conclude(prompt.output(), solution.x, solution.status, solution.iters)?;

    if args.plot {
        show(
            &Figure::new(format!("{} for f(x) = {f}", Solver::Newton), &f)
                .label(format!("f(x) = {f}"))
                .trace(&solution.trace)
                .root(solution.x),
        )?;
    }
    Ok(())
}

fn run_secant<L: LineSource, W: Write>(
    args: &Args,
    prompt: &mut Prompt<L, W>,
) -> Result<(), CliError> {
    let f = read_function(prompt, FUNCTION_PROMPT, "the function")?;
    let [a, b] = read_bracket(prompt)?;
    let config = config(args, Config::default())?;

    writeln!(prompt.output())?;
    let mut reporter = Reporter::new(prompt.output());
    let solution = secant::solve(&f, [a, b], &config, &mut reporter)?;
    reporter.finish()?;
    conclude(prompt.output(), solution.x, solution.status, solution.iters)?;

    if args.plot {
        show(
            &Figure::new(format!("{} for f(x) = {f}", Solver::Secant), &f)
                .label(format!("f(x) = {f}"))
                .trace(&solution.trace)
                .root(solution.x),
        )?;
    }
    Ok(())
}

fn read_function<L: LineSource, W: Write>(
    prompt: &mut Prompt<L, W>,
    message: &str,
    label: &str,
) -> Result<Expression, CliError> {
    Ok(Expression::parse(&prompt.line(message, label)?)?)
}

fn read_bracket<L: LineSource, W: Write>(prompt: &mut Prompt<L, W>) -> Result<[f64; 2], CliError> {
    let a = prompt.number("Enter the lower bound of the interval (a): ", "a")?;
    let b = prompt.number("Enter the upper bound of the interval (b): ", "b")?;
    Ok([a, b])
}

/// Applies command-line overrides to a method's default config.
fn config(args: &Args, defaults: Config) -> Result<Config, ConfigError> {
    Config::new(
        args.max_iters.unwrap_or(defaults.max_iters()),
        args.tol.unwrap_or(defaults.tol()),
    )
}

fn conclude(out: &mut impl Write, x: f64, status: Status, iters: usize) -> Result<(), CliError> {
    writeln!(out, "\nThe root is approximately at x = {x:.5}")?;
    if status == Status::Exhausted {
        writeln!(out, "Tolerance was not met within {iters} iterations.")?;
    }
    Ok(())
}

#[cfg(feature = "plot")]
fn show<F: Function + ?Sized>(figure: &Figure<'_, F>) -> Result<(), CliError> {
    figure.show().map_err(|e| CliError::Plot(e.to_string()))
}

#[cfg(not(feature = "plot"))]
fn show<F: Function + ?Sized>(_figure: &Figure<'_, F>) -> Result<(), CliError> {
    Err(CliError::PlotUnavailable)
}

#[cfg(test)]
mod tests {
    use super::*;

    use radix_solvers::equation::BracketError;

    use crate::prompt::Piped;

    fn args(solver: Solver) -> Args {
        Args {
            solver,
            tol: None,
            max_iters: None,
            plot: false,
        }
    }

    fn session(args: &Args, input: &str) -> (Result<(), CliError>, String) {
        let mut output = Vec::new();
        let result = run(args, &mut Prompt::new(Piped(input.as_bytes()), &mut output));
        (result, String::from_utf8(output).expect("utf-8 output"))
    }

    #[test]
    fn bisection_session() {
        let (result, output) = session(&args(Solver::Bisection), "x**2 - 2\n1\n2\n");

        assert!(result.is_ok());
        assert!(output.contains("Iteration Midpoint"));
        assert!(output.contains("\n1         1.5000000000"));
        assert!(output.ends_with("The root is approximately at x = 1.41422\n"));
    }

    #[test]
    fn fixed_point_session_reports_residual() {
        let input = "x**3 - x - 1\n(x + 1)**(1/3)\n1\n2\n1.5\n";
        let (result, output) = session(&args(Solver::FixedPoint), input);

        assert!(result.is_ok());
        assert!(output.contains("starting point within [1, 2]"));
        assert!(output.contains("Iteration x                   g(x)"));
        assert!(output.contains("The root is approximately at x = 1.32"));
        assert!(output.contains("Residual: f(1.32"));
    }

    #[test]
    fn fixed_point_without_original_function() {
        let (result, output) = session(&args(Solver::FixedPoint), "\ncos(x)\n0\n1\n1\n");

        assert!(result.is_ok());
        assert!(output.contains("The root is approximately at x = 0.7"));
        assert!(!output.contains("Residual"));
    }

    #[test]
    fn newton_session_prints_derivative() {
        let input = "x**2 - 4*x + 4 - ln(x)\n1\n2\n";
        let (result, output) = session(&args(Solver::Newton), input);

        assert!(result.is_ok());
        assert!(output.contains("\nf'(x) = "));
        assert!(output.contains("f'(x)               \n"));
        assert!(output.contains("The root is approximately at x = 1.41239"));
    }

    #[test]
    fn secant_session() {
        let (result, output) = session(&args(Solver::Secant), "x^2 - 2\n1\n2\n");

        assert!(result.is_ok());
        assert!(output.contains("f(x0)"));
        assert!(output.contains("The root is approximately at x = 1.41421"));
    }

    #[test]
    fn overrides_apply() {
        let args = Args {
            max_iters: Some(3),
            tol: Some(1e-12),
            ..args(Solver::Bisection)
        };
        let (result, output) = session(&args, "x**2 - 2\n1\n2\n");

        assert!(result.is_ok());
        assert!(output.contains("The root is approximately at x = 1.37500"));
        assert!(output.contains("Tolerance was not met within 3 iterations."));
    }

    #[test]
    fn invalid_bracket_is_an_error() {
        let (result, output) = session(&args(Solver::Bisection), "x**2 - 2\n2\n3\n");

        assert!(matches!(
            result,
            Err(CliError::Bisection(bisection::Error::InvalidBracket(
                BracketError::NoSignChange { .. }
            )))
        ));
        assert!(!output.contains("Iteration"));
    }

    #[test]
    fn zero_derivative_is_an_error() {
        let (result, _) = session(&args(Solver::Newton), "x**3\n-1\n1\n");
        let error = result.expect_err("derivative vanishes at the midpoint");
        assert!(error.to_string().starts_with("derivative is zero"));
    }

    #[test]
    fn bad_formula_is_an_error() {
        let (result, _) = session(&args(Solver::Secant), "x +\n1\n2\n");
        assert!(matches!(result, Err(CliError::Parse(_))));
    }

    #[test]
    fn deeply_nested_formula_is_an_error() {
        let input = format!("{}x\n1\n2\n", "-".repeat(5000));
        let (result, output) = session(&args(Solver::Newton), &input);
        assert!(matches!(result, Err(CliError::Parse(_))));
        assert!(!output.contains("Iteration"));
    }

    #[test]
    fn bad_tolerance_is_an_error() {
        let args = Args {
            tol: Some(-1.0),
            ..args(Solver::Secant)
        };
        let (result, _) = session(&args, "x - 1\n0\n2\n");
        assert!(matches!(result, Err(CliError::Config(ConfigError::Tolerance))));
    }

    #[cfg(not(feature = "plot"))]
    #[test]
    fn plot_requires_feature() {
        let args = Args {
            plot: true,
            ..args(Solver::Bisection)
        };
        let (result, output) = session(&args, "x - 1\n0\n2\n");
        assert!(matches!(result, Err(CliError::PlotUnavailable)));
        assert!(output.is_empty());
    }
}
