use std::fmt;

/// A named function from the formula vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Func {
    Sin,
    Cos,
    Tan,
    Exp,
    /// Natural logarithm, spelled `log` or `ln`.
    Ln,
    Sqrt,
    Abs,
}

impl Func {
    /// Looks up a function by the name used in formulas.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "sin" => Some(Self::Sin),
            "cos" => Some(Self::Cos),
            "tan" => Some(Self::Tan),
            "exp" => Some(Self::Exp),
            "log" | "ln" => Some(Self::Ln),
            "sqrt" => Some(Self::Sqrt),
            "abs" => Some(Self::Abs),
            _ => None,
        }
    }

    /// Returns the canonical formula name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Exp => "exp",
            Self::Ln => "log",
            Self::Sqrt => "sqrt",
            Self::Abs => "abs",
        }
    }

    /// Applies the function to a value.
    #[must_use]
    pub fn apply(self, value: f64) -> f64 {
        match self {
            Self::Sin => value.sin(),
            Self::Cos => value.cos(),
            Self::Tan => value.tan(),
            Self::Exp => value.exp(),
            Self::Ln => value.ln(),
            Self::Sqrt => value.sqrt(),
            Self::Abs => value.abs(),
        }
    }
}

/// A symbolic expression in the single free variable `x`.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Const(f64),
    Var,
    Neg(Box<Expr>),
    Add(Box<Expr>, Box<Expr>),
    Sub(Box<Expr>, Box<Expr>),
    Mul(Box<Expr>, Box<Expr>),
    Div(Box<Expr>, Box<Expr>),
    Pow(Box<Expr>, Box<Expr>),
    Call(Func, Box<Expr>),
}

impl Expr {
    /// Evaluates the expression at `x`.
    ///
    /// Evaluation follows IEEE-754 semantics: division by zero or a logarithm
    /// of a negative number yields an infinity or NaN rather than an error.
    #[must_use]
    pub fn eval(&self, x: f64) -> f64 {
        match self {
            Self::Const(c) => *c,
            Self::Var => x,
            Self::Neg(a) => -a.eval(x),
            Self::Add(a, b) => a.eval(x) + b.eval(x),
            Self::Sub(a, b) => a.eval(x) - b.eval(x),
            Self::Mul(a, b) => a.eval(x) * b.eval(x),
            Self::Div(a, b) => a.eval(x) / b.eval(x),
            Self::Pow(a, b) => pow(a.eval(x), b.eval(x)),
            Self::Call(func, a) => func.apply(a.eval(x)),
        }
    }

    /// Returns true if the expression depends on `x`.
    #[must_use]
    pub fn contains_var(&self) -> bool {
        match self {
            Self::Const(_) => false,
            Self::Var => true,
            Self::Neg(a) | Self::Call(_, a) => a.contains_var(),
            Self::Add(a, b)
            | Self::Sub(a, b)
            | Self::Mul(a, b)
            | Self::Div(a, b)
            | Self::Pow(a, b) => a.contains_var() || b.contains_var(),
        }
    }

    /// Binding strength used when printing.
    fn precedence(&self) -> u8 {
        match self {
            Self::Add(..) | Self::Sub(..) => 1,
            Self::Mul(..) | Self::Div(..) => 2,
            Self::Neg(_) => 3,
            Self::Const(c) if c.is_sign_negative() => 3,
            Self::Pow(..) => 4,
            Self::Const(_) | Self::Var | Self::Call(..) => 5,
        }
    }
}

/// Raises `base` to `exponent`, using integer powers when the exponent allows.
///
/// `powf` returns NaN for a negative base even when the exponent is an
/// integer, so `(-2)^3` needs `powi`.
fn pow(base: f64, exponent: f64) -> f64 {
    #[allow(clippy::cast_possible_truncation, clippy::float_cmp)]
    if exponent.fract() == 0.0 && exponent.abs() <= f64::from(i32::MAX) {
        return base.powi(exponent as i32);
    }
    base.powf(exponent)
}

/// Writes `expr`, wrapped in parentheses when it binds looser than `min`.
fn write_operand(f: &mut fmt::Formatter<'_>, expr: &Expr, min: u8) -> fmt::Result {
    if expr.precedence() < min {
        write!(f, "({expr})")
    } else {
        write!(f, "{expr}")
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Const(c) => write!(f, "{c}"),
            Self::Var => write!(f, "x"),
            Self::Neg(a) => {
                write!(f, "-")?;
                write_operand(f, a, 3)
            }
            Self::Add(a, b) => {
                write_operand(f, a, 1)?;
                write!(f, " + ")?;
                write_operand(f, b, 1)
            }
            Self::Sub(a, b) => {
                write_operand(f, a, 1)?;
                write!(f, " - ")?;
                write_operand(f, b, 2)
            }
            Self::Mul(a, b) => {
                write_operand(f, a, 2)?;
                write!(f, "*")?;
                write_operand(f, b, 3)
            }
            Self::Div(a, b) => {
                write_operand(f, a, 2)?;
                write!(f, "/")?;
                write_operand(f, b, 4)
            }
            Self::Pow(a, b) => {
                write_operand(f, a, 5)?;
                write!(f, "^")?;
                write_operand(f, b, 4)
            }
            Self::Call(func, a) => write!(f, "{}({a})", func.name()),
        }
    }
}
