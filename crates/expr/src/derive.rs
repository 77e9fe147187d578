//! Symbolic differentiation and light algebraic simplification.

use crate::{Expr, Func};

fn boxed(expr: Expr) -> Box<Expr> {
    Box::new(expr)
}

impl Expr {
    /// Returns the first derivative with respect to `x`, unsimplified.
    #[must_use]
    pub fn differentiate(&self) -> Expr {
        match self {
            Expr::Const(_) => Expr::Const(0.0),
            Expr::Var => Expr::Const(1.0),
            Expr::Neg(f) => Expr::Neg(boxed(f.differentiate())),
            Expr::Add(f, g) => Expr::Add(boxed(f.differentiate()), boxed(g.differentiate())),
            Expr::Sub(f, g) => Expr::Sub(boxed(f.differentiate()), boxed(g.differentiate())),

            // (fg)' = f'g + fg'
            Expr::Mul(f, g) => Expr::Add(
                boxed(Expr::Mul(boxed(f.differentiate()), g.clone())),
                boxed(Expr::Mul(f.clone(), boxed(g.differentiate()))),
            ),

            // (f/g)' = (f'g - fg') / g^2
            Expr::Div(f, g) => Expr::Div(
                boxed(Expr::Sub(
                    boxed(Expr::Mul(boxed(f.differentiate()), g.clone())),
                    boxed(Expr::Mul(f.clone(), boxed(g.differentiate()))),
                )),
                boxed(Expr::Pow(g.clone(), boxed(Expr::Const(2.0)))),
            ),

            Expr::Pow(f, g) => differentiate_pow(f, g),

            Expr::Call(func, f) => {
                let outer = match func {
                    Func::Sin => Expr::Call(Func::Cos, f.clone()),
                    Func::Cos => Expr::Neg(boxed(Expr::Call(Func::Sin, f.clone()))),
                    // tan' = 1 / cos^2
                    Func::Tan => Expr::Div(
                        boxed(Expr::Const(1.0)),
                        boxed(Expr::Pow(
                            boxed(Expr::Call(Func::Cos, f.clone())),
                            boxed(Expr::Const(2.0)),
                        )),
                    ),
                    Func::Exp => self.clone(),
                    Func::Ln => Expr::Div(boxed(Expr::Const(1.0)), f.clone()),
                    Func::Sqrt => Expr::Div(
                        boxed(Expr::Const(1.0)),
                        boxed(Expr::Mul(boxed(Expr::Const(2.0)), boxed(self.clone()))),
                    ),
                    // sign(f), undefined at zero
                    Func::Abs => Expr::Div(f.clone(), boxed(self.clone())),
                };
                Expr::Mul(boxed(outer), boxed(f.differentiate()))
            }
        }
    }

    /// Returns the simplified first derivative with respect to `x`.
    #[must_use]
    pub fn derivative(&self) -> Expr {
        self.differentiate().simplify()
    }

    /// Folds constants and removes additive and multiplicative identities.
    ///
    /// The result evaluates to the same value as `self` wherever `self` is
    /// defined. Folding is skipped when it would produce a non-finite constant.
    #[must_use]
    pub fn simplify(&self) -> Expr {
        match self {
            Expr::Const(_) | Expr::Var => self.clone(),

            Expr::Neg(a) => match a.simplify() {
                Expr::Const(c) => Expr::Const(-c),
                Expr::Neg(inner) => *inner,
                other => Expr::Neg(boxed(other)),
            },

            Expr::Add(a, b) => match (a.simplify(), b.simplify()) {
                (Expr::Const(x), Expr::Const(y)) => Expr::Const(x + y),
                (Expr::Const(z), other) | (other, Expr::Const(z)) if z == 0.0 => other,
                (lhs, Expr::Neg(rhs)) => Expr::Sub(boxed(lhs), rhs),
                (lhs, rhs) => Expr::Add(boxed(lhs), boxed(rhs)),
            },

            Expr::Sub(a, b) => match (a.simplify(), b.simplify()) {
                (Expr::Const(x), Expr::Const(y)) => Expr::Const(x - y),
                (other, Expr::Const(z)) if z == 0.0 => other,
                (Expr::Const(z), other) if z == 0.0 => Expr::Neg(boxed(other)).simplify(),
                (lhs, Expr::Neg(rhs)) => Expr::Add(boxed(lhs), rhs),
                (lhs, rhs) => Expr::Sub(boxed(lhs), boxed(rhs)),
            },

            Expr::Mul(a, b) => match (a.simplify(), b.simplify()) {
                (Expr::Const(x), Expr::Const(y)) => Expr::Const(x * y),
                (Expr::Const(z), _) | (_, Expr::Const(z)) if z == 0.0 => Expr::Const(0.0),
                (Expr::Const(one), other) | (other, Expr::Const(one)) if one == 1.0 => other,
                (Expr::Const(m), other) | (other, Expr::Const(m)) if m == -1.0 => {
                    Expr::Neg(boxed(other)).simplify()
                }
                (Expr::Neg(lhs), rhs) => Expr::Neg(boxed(Expr::Mul(lhs, boxed(rhs)))),
                (lhs, Expr::Neg(rhs)) => Expr::Neg(boxed(Expr::Mul(boxed(lhs), rhs))),
                (lhs, Expr::Const(c)) => Expr::Mul(boxed(Expr::Const(c)), boxed(lhs)),
                (lhs, rhs) => Expr::Mul(boxed(lhs), boxed(rhs)),
            },

            Expr::Div(a, b) => match (a.simplify(), b.simplify()) {
                (Expr::Const(x), Expr::Const(y)) if (x / y).is_finite() => Expr::Const(x / y),
                (other, Expr::Const(one)) if one == 1.0 => other,
                (Expr::Neg(lhs), rhs) => Expr::Neg(boxed(Expr::Div(lhs, boxed(rhs)))),
                (lhs, rhs) => Expr::Div(boxed(lhs), boxed(rhs)),
            },

            Expr::Pow(a, b) => match (a.simplify(), b.simplify()) {
                (base, exponent) if exponent.contains_var() || base.contains_var() => {
                    match exponent {
                        Expr::Const(z) if z == 0.0 => Expr::Const(1.0),
                        Expr::Const(one) if one == 1.0 => base,
                        exponent => Expr::Pow(boxed(base), boxed(exponent)),
                    }
                }
                (base, exponent) => {
                    let value = Expr::Pow(boxed(base.clone()), boxed(exponent.clone())).eval(0.0);
                    if value.is_finite() {
                        Expr::Const(value)
                    } else {
                        Expr::Pow(boxed(base), boxed(exponent))
                    }
                }
            },

            Expr::Call(func, a) => match a.simplify() {
                Expr::Const(c) if func.apply(c).is_finite() => Expr::Const(func.apply(c)),
                arg => Expr::Call(*func, boxed(arg)),
            },
        }
    }
}

/// Differentiates `f^g`, choosing the simplest applicable rule.
fn differentiate_pow(f: &Expr, g: &Expr) -> Expr {
    let pow = || Expr::Pow(boxed(f.clone()), boxed(g.clone()));

    if !g.contains_var() {
        // (f^n)' = n f^(n-1) f'
        let reduced = Expr::Sub(boxed(g.clone()), boxed(Expr::Const(1.0)));
        return Expr::Mul(
            boxed(Expr::Mul(
                boxed(g.clone()),
                boxed(Expr::Pow(boxed(f.clone()), boxed(reduced))),
            )),
            boxed(f.differentiate()),
        );
    }

    if !f.contains_var() {
        // (a^g)' = a^g ln(a) g'
        return Expr::Mul(
            boxed(Expr::Mul(
                boxed(pow()),
                boxed(Expr::Call(Func::Ln, boxed(f.clone()))),
            )),
            boxed(g.differentiate()),
        );
    }

    // (f^g)' = f^g (g' ln(f) + g f' / f)
    Expr::Mul(
        boxed(pow()),
        boxed(Expr::Add(
            boxed(Expr::Mul(
                boxed(g.differentiate()),
                boxed(Expr::Call(Func::Ln, boxed(f.clone()))),
            )),
            boxed(Expr::Div(
                boxed(Expr::Mul(boxed(g.clone()), boxed(f.differentiate()))),
                boxed(f.clone()),
            )),
        )),
    )
}
