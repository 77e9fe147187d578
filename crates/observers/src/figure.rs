//! Plot data for a finished solver run.
//!
//! A [`Figure`] collects everything a chart of one run shows: the function
//! curve, a marker per iteration, vertical guides for bisection intervals,
//! and the solution point. It is plain data, so it can be inspected and
//! tested without a window. Rendering lives behind the `plot` feature.

use radix_core::Function;
use radix_solvers::equation::Trace;

use crate::traits::Plottable;

/// Number of curve samples.
pub const SAMPLES: usize = 1000;

/// Distance the curve extends past the outermost plotted point on each side.
pub const MARGIN: f64 = 1.0;

/// The data shown in a chart of one solver run.
///
/// Build with [`Figure::new`] and chain [`bracket`](Figure::bracket),
/// [`trace`](Figure::trace), and [`root`](Figure::root) as needed. The curve
/// spans every finite x value those calls supplied, widened by [`MARGIN`].
///
/// # Example
///
/// ```
/// use radix_observers::Figure;
/// use radix_solvers::equation::{Config, bisection};
///
/// let f = |x: f64| x * x - 2.0;
/// let solution = bisection::solve_unobserved(&f, [1.0, 2.0], &Config::default()).unwrap();
///
/// let figure = Figure::new("Bisection Method for f(x) = x^2 - 2", &f)
///     .bracket(1.0, 2.0)
///     .trace(&solution.trace)
///     .root(solution.x);
///
/// assert_eq!(figure.domain(), Some([0.0, 3.0]));
/// assert_eq!(figure.markers().len(), solution.iters);
/// ```
#[derive(Debug)]
pub struct Figure<'f, F: ?Sized> {
    title: String,
    label: String,
    y_label: String,
    f: &'f F,
    extent: Option<[f64; 2]>,
    markers: Vec<[f64; 2]>,
    marker_label: &'static str,
    guides: Vec<[f64; 2]>,
    solution: Option<[f64; 2]>,
}

impl<'f, F: Function + ?Sized> Figure<'f, F> {
    /// Creates an empty figure of `f`.
    pub fn new(title: impl Into<String>, f: &'f F) -> Self {
        Self {
            title: title.into(),
            label: "f(x)".to_owned(),
            y_label: "f(x)".to_owned(),
            f,
            extent: None,
            markers: Vec::new(),
            marker_label: "Iteration Points",
            guides: Vec::new(),
            solution: None,
        }
    }

    /// Sets the legend label of the curve.
    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Sets the y-axis label, `f(x)` by default.
    #[must_use]
    pub fn y_label(mut self, label: impl Into<String>) -> Self {
        self.y_label = label.into();
        self
    }

    /// Includes the interval `[a, b]` in the plotted domain.
    #[must_use]
    pub fn bracket(mut self, a: f64, b: f64) -> Self {
        self.include(a);
        self.include(b);
        self
    }

    /// Adds iteration markers and guides from a solver trace.
    #[must_use]
    pub fn trace<R: Plottable>(mut self, trace: &Trace<R>) -> Self {
        self.marker_label = R::MARKER_LABEL;

        if let Some(first) = trace.iter().next() {
            for seed in first.record.seeds() {
                self.mark(seed);
            }
        }

        for record in trace.records() {
            self.mark(record.marker());
            if let Some(guide) = record.guides() {
                self.guides.push(guide);
            }
        }
        self
    }

    /// Marks `x` as the solution.
    #[must_use]
    pub fn root(mut self, x: f64) -> Self {
        self.include(x);
        self.solution = Some([x, self.f.call(x)]);
        self
    }

    /// Returns the chart title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the legend label of the curve.
    #[must_use]
    pub fn curve_label(&self) -> &str {
        &self.label
    }

    /// Returns the y-axis label.
    #[must_use]
    pub fn axis_label(&self) -> &str {
        &self.y_label
    }

    /// Returns the legend label of the iteration markers.
    #[must_use]
    pub fn marker_label(&self) -> &str {
        self.marker_label
    }

    /// Returns the sampled interval, or `None` if nothing finite was added.
    #[must_use]
    pub fn domain(&self) -> Option<[f64; 2]> {
        self.extent.map(|[lo, hi]| [lo - MARGIN, hi + MARGIN])
    }

    /// Samples the curve at [`SAMPLES`] evenly spaced points over the domain.
    ///
    /// Points where `f` is undefined keep their NaN or infinite `y`.
    #[must_use]
    pub fn curve(&self) -> Vec<[f64; 2]> {
        let Some([lo, hi]) = self.domain() else {
            return Vec::new();
        };

        let step = (hi - lo) / (SAMPLES - 1) as f64;
        (0..SAMPLES)
            .map(|i| {
                let x = if i == SAMPLES - 1 {
                    hi
                } else {
                    lo + step * i as f64
                };
                [x, self.f.call(x)]
            })
            .collect()
    }

    /// Returns the iteration markers in order.
    #[must_use]
    pub fn markers(&self) -> &[[f64; 2]] {
        &self.markers
    }

    /// Returns the interval endpoints drawn as vertical guides.
    #[must_use]
    pub fn guides(&self) -> &[[f64; 2]] {
        &self.guides
    }

    /// Returns the solution point `(x, f(x))`, if one was marked.
    #[must_use]
    pub fn solution(&self) -> Option<[f64; 2]> {
        self.solution
    }

    fn mark(&mut self, point: [f64; 2]) {
        self.include(point[0]);
        self.markers.push(point);
    }

    fn include(&mut self, x: f64) {
        if !x.is_finite() {
            return;
        }
        self.extent = Some(match self.extent {
            Some([lo, hi]) => [lo.min(x), hi.max(x)],
            None => [x, x],
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use radix_solvers::equation::{Config, bisection, fixed_point, newton, secant};

    fn square_minus_two(x: f64) -> f64 {
        x * x - 2.0
    }

    #[test]
    fn empty_figure_has_no_curve() {
        let figure = Figure::new("empty", &square_minus_two);
        assert_eq!(figure.domain(), None);
        assert!(figure.curve().is_empty());
        assert!(figure.solution().is_none());
    }

    #[test]
    fn axis_label_defaults_to_f_and_can_be_set() {
        let figure = Figure::new("labels", &square_minus_two);
        assert_eq!(figure.axis_label(), "f(x)");

        let g = |x: f64| x.cos();
        let figure = Figure::new("labels", &g).label("g(x) = cos(x)").y_label("g(x)");
        assert_eq!(figure.axis_label(), "g(x)");
        assert_eq!(figure.curve_label(), "g(x) = cos(x)");
    }

    #[test]
    fn curve_spans_widened_domain() {
        let figure = Figure::new("bracket", &square_minus_two).bracket(1.0, 2.0);
        let curve = figure.curve();

        assert_eq!(curve.len(), SAMPLES);
        assert_relative_eq!(curve[0][0], 0.0);
        assert_relative_eq!(curve[0][1], -2.0);
        assert_relative_eq!(curve[SAMPLES - 1][0], 3.0);
        assert_relative_eq!(curve[SAMPLES - 1][1], 7.0);
        assert!(curve.windows(2).all(|pair| pair[0][0] < pair[1][0]));
    }

    #[test]
    fn bisection_marks_midpoints_and_intervals() {
        let solution =
            bisection::solve_unobserved(&square_minus_two, [1.0, 2.0], &Config::default())
                .expect("should solve");
        let figure = Figure::new("bisection", &square_minus_two)
            .bracket(1.0, 2.0)
            .trace(&solution.trace)
            .root(solution.x);

        assert_eq!(figure.marker_label(), "Midpoints");
        assert_eq!(figure.markers().len(), solution.iters);
        assert_eq!(figure.markers()[0], [1.5, 0.25]);
        assert_eq!(figure.guides().len(), solution.iters);
        assert_eq!(figure.guides()[0], [1.0, 2.0]);
        assert_eq!(figure.domain(), Some([0.0, 3.0]));

        let [x, y] = figure.solution().expect("solution marked");
        assert_relative_eq!(x, solution.x);
        assert!(y.abs() < 1e-5);
    }

    #[test]
    fn fixed_point_domain_follows_iterates() {
        let g = |x: f64| 0.5 * (x + 2.0 / x);
        let solution =
            fixed_point::solve_unobserved(&g, 4.0, &Config::default()).expect("should solve");
        let figure = Figure::new("fixed point", &g)
            .trace(&solution.trace)
            .root(solution.x);

        let [lo, hi] = figure.domain().expect("non-empty");
        assert_relative_eq!(lo, solution.x - MARGIN);
        assert_relative_eq!(hi, 4.0 + MARGIN);
        assert_eq!(figure.markers()[0], [4.0, 2.25]);
        assert!(figure.guides().is_empty());
    }

    #[test]
    fn newton_marks_each_iterate() {
        let df = |x: f64| 2.0 * x;
        let solution =
            newton::solve_unobserved(&square_minus_two, &df, [1.0, 2.0], &Config::default())
                .expect("should solve");
        let figure = Figure::new("newton", &square_minus_two).trace(&solution.trace);

        let xs: Vec<f64> = figure.markers().iter().map(|p| p[0]).collect();
        let expected: Vec<f64> = solution.trace.records().map(|r| r.x).collect();
        assert_eq!(xs, expected);
    }

    #[test]
    fn secant_includes_seeds_once() {
        let solution = secant::solve_unobserved(&square_minus_two, [1.0, 2.0], &Config::default())
            .expect("should solve");
        let figure = Figure::new("secant", &square_minus_two).trace(&solution.trace);

        assert_eq!(figure.markers().len(), solution.iters + 2);
        assert_eq!(figure.markers()[0], [1.0, -1.0]);
        assert_eq!(figure.markers()[1], [2.0, 2.0]);
    }

    #[test]
    fn non_finite_points_do_not_stretch_domain() {
        let g = |x: f64| 2.0 * x;
        let config = Config::new(2000, 1e-2).expect("valid config");
        let solution = fixed_point::solve_unobserved(&g, 1.0, &config).expect("should run");
        assert!(solution.x.is_infinite());

        let figure = Figure::new("divergent", &g).trace(&solution.trace).root(solution.x);
        let [lo, hi] = figure.domain().expect("finite iterates exist");
        assert!(lo.is_finite() && hi.is_finite());
    }
}
