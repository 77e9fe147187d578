//! Capability traits for cross-solver observers.
//!
//! Each solver defines its own record type. These traits describe what the
//! reporter and the figure need from a record, so both work with any solver.
//!
//! - [`TableRow`]: records that render as one row of a fixed-width table
//! - [`Plottable`]: records that contribute markers to a [`Figure`]
//!
//! All four solver records implement both.
//!
//! [`Figure`]: crate::Figure

use radix_solvers::equation::{bisection, fixed_point, newton, secant};

/// Width of the leading iteration column.
pub const ITER_WIDTH: usize = 10;

/// A record that renders as one row of a fixed-width table.
pub trait TableRow {
    /// Column titles and widths, excluding the leading iteration column.
    const COLUMNS: &'static [(&'static str, usize)];

    /// Formats the value cells of this record, excluding the iteration column.
    fn cells(&self) -> String;
}

/// A record that contributes points to a [`Figure`](crate::Figure).
pub trait Plottable {
    /// Legend label for the iteration markers.
    const MARKER_LABEL: &'static str = "Iteration Points";

    /// The point this iteration evaluated.
    fn marker(&self) -> [f64; 2];

    /// Points known before the first iteration.
    ///
    /// Only consulted for the first record of a trace.
    fn seeds(&self) -> Vec<[f64; 2]> {
        Vec::new()
    }

    /// Interval endpoints to draw as vertical guides, if any.
    fn guides(&self) -> Option<[f64; 2]> {
        None
    }
}

// --- bisection ---

impl TableRow for bisection::Record {
    const COLUMNS: &'static [(&'static str, usize)] = &[
        ("Midpoint", 20),
        ("Interval", 30),
        ("f(a)", 15),
        ("f(b)", 15),
        ("f(mid)", 15),
    ];

    fn cells(&self) -> String {
        let interval = format!("[{:<10.5}, {:<10.5}]", self.a, self.b);
        format!(
            "{:<20.10}{interval:<30}{:<15.8}{:<15.8}{:<15.10}",
            self.midpoint, self.fa, self.fb, self.f_mid
        )
    }
}

impl Plottable for bisection::Record {
    const MARKER_LABEL: &'static str = "Midpoints";

    fn marker(&self) -> [f64; 2] {
        [self.midpoint, self.f_mid]
    }

    fn guides(&self) -> Option<[f64; 2]> {
        Some([self.a, self.b])
    }
}

// --- fixed point ---

impl TableRow for fixed_point::Record {
    const COLUMNS: &'static [(&'static str, usize)] = &[("x", 20), ("g(x)", 20)];

    fn cells(&self) -> String {
        format!("{:<20.10}{:<20.10}", self.x, self.gx)
    }
}

impl Plottable for fixed_point::Record {
    fn marker(&self) -> [f64; 2] {
        [self.x, self.gx]
    }
}

// --- Newton-Raphson ---

impl TableRow for newton::Record {
    const COLUMNS: &'static [(&'static str, usize)] = &[("x", 20), ("f(x)", 20), ("f'(x)", 20)];

    fn cells(&self) -> String {
        format!("{:<20.10}{:<20.10}{:<20.10}", self.x, self.fx, self.dfx)
    }
}

impl Plottable for newton::Record {
    fn marker(&self) -> [f64; 2] {
        [self.x, self.fx]
    }
}

// --- secant ---

impl TableRow for secant::Record {
    const COLUMNS: &'static [(&'static str, usize)] =
        &[("x0", 20), ("x1", 20), ("f(x0)", 20), ("f(x1)", 20)];

    fn cells(&self) -> String {
        format!(
            "{:<20.10}{:<20.10}{:<20.10}{:<20.10}",
            self.x0, self.x1, self.f0, self.f1
        )
    }
}

impl Plottable for secant::Record {
    fn marker(&self) -> [f64; 2] {
        [self.x2, self.f2]
    }

    fn seeds(&self) -> Vec<[f64; 2]> {
        vec![[self.x0, self.f0], [self.x1, self.f1]]
    }
}
