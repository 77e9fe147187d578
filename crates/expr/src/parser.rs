//! Shunting-yard parser that builds an [`Expr`] tree.

use std::f64::consts;

use crate::{
    Expr, Func, ParseError,
    lexer::{Lexer, Spanned, Token},
};

/// Name of the single free variable.
pub const VARIABLE: &str = "x";

/// Deepest expression tree the parser will build.
///
/// Evaluation, printing, and differentiation walk the tree recursively, so
/// the depth is bounded here rather than left to the stack.
pub const MAX_DEPTH: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Assoc {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Operator {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
    Neg,
    Pos,
}

impl Operator {
    fn binary(symbol: char) -> Self {
        match symbol {
            '+' => Self::Add,
            '-' => Self::Sub,
            '*' => Self::Mul,
            '/' => Self::Div,
            _ => Self::Pow,
        }
    }

    // Unary minus binds looser than `^` so that `-x^2` is `-(x^2)`.
    fn precedence(self) -> (u8, Assoc) {
        match self {
            Self::Add | Self::Sub => (2, Assoc::Left),
            Self::Mul | Self::Div => (3, Assoc::Left),
            Self::Neg | Self::Pos => (4, Assoc::Right),
            Self::Pow => (5, Assoc::Right),
        }
    }

    fn is_unary(self) -> bool {
        matches!(self, Self::Neg | Self::Pos)
    }
}

#[derive(Debug)]
enum Pending {
    OParen,
    Function { func: Func, name: String, arity: usize },
    Operator { op: Operator, pos: usize },
}

/// Parses formula text into an expression tree.
///
/// # Errors
///
/// Returns a [`ParseError`] describing the first problem found.
pub fn parse(source: &str) -> Result<Expr, ParseError> {
    let tokens = Lexer::new(source).tokenize()?;
    if tokens.is_empty() {
        return Err(ParseError::Empty);
    }
    Parser::default().run(tokens)
}

/// An operand together with the depth of its tree.
struct Operand {
    expr: Expr,
    depth: usize,
}

#[derive(Default)]
struct Parser {
    output: Vec<Operand>,
    stack: Vec<Pending>,
}

impl Parser {
    fn run(mut self, tokens: Vec<Spanned>) -> Result<Expr, ParseError> {
        let mut expect_operand = true;
        let mut end = 0;

        for Spanned { token, pos } in tokens {
            end = pos + 1;
            match token {
                Token::Number(value) => {
                    if !expect_operand {
                        return Err(ParseError::MissingOperator { pos });
                    }
                    self.push(Expr::Const(value), 1)?;
                    expect_operand = false;
                }
                Token::Ident(name) => {
                    if !expect_operand {
                        return Err(ParseError::MissingOperator { pos });
                    }
                    self.push(resolve_symbol(&name)?, 1)?;
                    expect_operand = false;
                }
                Token::Function(name) => {
                    if !expect_operand {
                        return Err(ParseError::MissingOperator { pos });
                    }
                    let func =
                        Func::from_name(&name).ok_or(ParseError::UnknownFunction(name.clone()))?;
                    self.stack.push(Pending::Function {
                        func,
                        name,
                        arity: 1,
                    });
                }
                Token::OParen => {
                    if !expect_operand {
                        return Err(ParseError::MissingOperator { pos });
                    }
                    self.stack.push(Pending::OParen);
                }
                Token::Comma => {
                    if expect_operand {
                        return Err(ParseError::MissingOperand { pos });
                    }
                    self.pop_until_paren()?;
                    // Count the argument if the group belongs to a function call.
                    match self.stack.iter_mut().rev().nth(1) {
                        Some(Pending::Function { arity, .. }) => *arity += 1,
                        _ => return Err(ParseError::UnexpectedChar { ch: ',', pos }),
                    }
                    expect_operand = true;
                }
                Token::CParen => {
                    if expect_operand {
                        return Err(ParseError::MissingOperand { pos });
                    }
                    self.pop_until_paren()?;
                    self.stack.pop(); // matching OParen
                    if matches!(self.stack.last(), Some(Pending::Function { .. }))
                        && let Some(Pending::Function { func, name, arity }) = self.stack.pop()
                    {
                        if arity != 1 {
                            return Err(ParseError::WrongArity { name, found: arity });
                        }
                        let arg = self.pop_operand(pos)?;
                        self.push(Expr::Call(func, Box::new(arg.expr)), arg.depth + 1)?;
                    }
                }
                Token::Op(symbol) => {
                    if expect_operand {
                        // Only a sign can start an operand.
                        let op = match symbol {
                            '-' => Operator::Neg,
                            '+' => Operator::Pos,
                            _ => return Err(ParseError::MissingOperand { pos }),
                        };
                        self.stack.push(Pending::Operator { op, pos });
                    } else {
                        let op = Operator::binary(symbol);
                        self.reduce_for(op)?;
                        self.stack.push(Pending::Operator { op, pos });
                        expect_operand = true;
                    }
                }
            }
        }

        if expect_operand {
            return Err(ParseError::MissingOperand { pos: end });
        }

        while let Some(pending) = self.stack.pop() {
            match pending {
                Pending::Operator { op, pos } => self.apply(op, pos)?,
                Pending::OParen | Pending::Function { .. } => {
                    return Err(ParseError::MissingClosingParen);
                }
            }
        }

        let operand = self.pop_operand(end)?;
        if self.output.is_empty() {
            Ok(operand.expr)
        } else {
            Err(ParseError::MissingOperator { pos: end })
        }
    }

    /// Applies stacked operators that bind at least as tightly as `incoming`.
    fn reduce_for(&mut self, incoming: Operator) -> Result<(), ParseError> {
        let (prec_rhs, assoc_rhs) = incoming.precedence();
        while let Some(Pending::Operator { op, pos }) = self.stack.last() {
            let (op, pos) = (*op, *pos);
            let (prec_lhs, _) = op.precedence();
            let applies = prec_lhs > prec_rhs || (prec_lhs == prec_rhs && assoc_rhs == Assoc::Left);
            if !applies {
                break;
            }
            self.stack.pop();
            self.apply(op, pos)?;
        }
        Ok(())
    }

    /// Applies operators down to the innermost open parenthesis.
    fn pop_until_paren(&mut self) -> Result<(), ParseError> {
        loop {
            match self.stack.last() {
                Some(Pending::OParen) => return Ok(()),
                Some(Pending::Operator { op, pos }) => {
                    let (op, pos) = (*op, *pos);
                    self.stack.pop();
                    self.apply(op, pos)?;
                }
                Some(Pending::Function { .. }) | None => {
                    return Err(ParseError::MissingOpeningParen);
                }
            }
        }
    }

    fn apply(&mut self, op: Operator, pos: usize) -> Result<(), ParseError> {
        if op.is_unary() {
            let Operand { expr, depth } = self.pop_operand(pos)?;
            return match op {
                Operator::Neg => self.push(Expr::Neg(Box::new(expr)), depth + 1),
                _ => self.push(expr, depth),
            };
        }

        let rhs = self.pop_operand(pos)?;
        let lhs = self.pop_operand(pos)?;
        let depth = lhs.depth.max(rhs.depth) + 1;
        let (lhs, rhs) = (Box::new(lhs.expr), Box::new(rhs.expr));
        let expr = match op {
            Operator::Add => Expr::Add(lhs, rhs),
            Operator::Sub => Expr::Sub(lhs, rhs),
            Operator::Mul => Expr::Mul(lhs, rhs),
            Operator::Div => Expr::Div(lhs, rhs),
            _ => Expr::Pow(lhs, rhs),
        };
        self.push(expr, depth)
    }

    fn push(&mut self, expr: Expr, depth: usize) -> Result<(), ParseError> {
        if depth > MAX_DEPTH {
            return Err(ParseError::TooDeep { limit: MAX_DEPTH });
        }
        self.output.push(Operand { expr, depth });
        Ok(())
    }

    fn pop_operand(&mut self, pos: usize) -> Result<Operand, ParseError> {
        self.output.pop().ok_or(ParseError::MissingOperand { pos })
    }
}

fn resolve_symbol(name: &str) -> Result<Expr, ParseError> {
    match name {
        VARIABLE => Ok(Expr::Var),
        "pi" => Ok(Expr::Const(consts::PI)),
        "e" | "E" => Ok(Expr::Const(consts::E)),
        _ => Err(ParseError::UnknownSymbol(name.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn eval(source: &str, x: f64) -> f64 {
        parse(source).expect("should parse").eval(x)
    }

    #[test]
    fn respects_precedence() {
        assert_relative_eq!(eval("3+4*2/-(1-5)^2^3", 0.0), 3.0 - 8.0 / 65536.0);
        assert_relative_eq!(eval("2*3^2", 0.0), 18.0);
        assert_relative_eq!(eval("(2*3)^2", 0.0), 36.0);
    }

    #[test]
    fn power_is_right_associative() {
        assert_relative_eq!(eval("2^3^2", 0.0), 512.0);
        assert_relative_eq!(eval("2**3**2", 0.0), 512.0);
    }

    #[test]
    fn unary_minus_binds_looser_than_power() {
        assert_relative_eq!(eval("-x^2", 3.0), -9.0);
        assert_relative_eq!(eval("2^-1", 0.0), 0.5);
        assert_relative_eq!(eval("-2*3", 0.0), -6.0);
        assert_relative_eq!(eval("x*-2", 4.0), -8.0);
        assert_relative_eq!(eval("--x", 4.0), 4.0);
        assert_relative_eq!(eval("+x", 4.0), 4.0);
    }

    #[test]
    fn subtraction_is_left_associative() {
        assert_relative_eq!(eval("10 - 4 - 3", 0.0), 3.0);
        assert_relative_eq!(eval("12 / 3 / 2", 0.0), 2.0);
    }

    #[test]
    fn evaluates_functions_and_constants() {
        assert_relative_eq!(eval("sin(0.345)^2 + cos(0.345)^2", 0.0), 1.0);
        assert_relative_eq!(eval("log(e)", 0.0), 1.0);
        assert_relative_eq!(eval("ln(exp(x))", 2.5), 2.5, epsilon = 1e-12);
        assert_relative_eq!(eval("tan(pi/4)", 0.0), 1.0, epsilon = 1e-12);
        assert_relative_eq!(eval("sqrt(abs(x))", -16.0), 4.0);
    }

    #[test]
    fn parses_source_script_formulas() {
        let x: f64 = 1.2;
        let expected = x.exp() - 2.0 - (x.exp() - 2.0).cos();
        assert_relative_eq!(eval("exp(x) - 2 - cos(exp(x) - 2)", x), expected);

        let expected = x * x - 4.0 * x + 4.0 - x.ln();
        assert_relative_eq!(eval("x**2 - 4*x + 4 - ln(x)", x), expected);
    }

    #[test]
    fn rejects_empty_input() {
        assert_eq!(parse("   "), Err(ParseError::Empty));
    }

    #[test]
    fn rejects_unbalanced_parens() {
        assert_eq!(parse("sqrt(-(1-x^2) / (1 + x^2)"), Err(ParseError::MissingClosingParen));
        assert_eq!(parse("-(1-x^2) / (1 + x^2))"), Err(ParseError::MissingOpeningParen));
    }

    #[test]
    fn rejects_unknown_names() {
        assert_eq!(parse("y + 1"), Err(ParseError::UnknownSymbol("y".into())));
        assert_eq!(parse("gamma(x)"), Err(ParseError::UnknownFunction("gamma".into())));
    }

    #[test]
    fn rejects_wrong_arity() {
        assert_eq!(
            parse("sin(x, 2)"),
            Err(ParseError::WrongArity {
                name: "sin".into(),
                found: 2
            })
        );
    }

    #[test]
    fn rejects_dangling_operators() {
        assert!(matches!(parse("x +"), Err(ParseError::MissingOperand { .. })));
        assert!(matches!(parse("* x"), Err(ParseError::MissingOperand { .. })));
        assert!(matches!(parse("sin()"), Err(ParseError::MissingOperand { .. })));
    }

    #[test]
    fn limits_nesting_depth() {
        let within = format!("{}x", "-".repeat(MAX_DEPTH - 1));
        assert_relative_eq!(eval(&within, 2.0), -2.0);

        let too_deep = format!("{}x", "-".repeat(5000));
        assert_eq!(parse(&too_deep), Err(ParseError::TooDeep { limit: MAX_DEPTH }));

        let long_sum = vec!["x"; MAX_DEPTH + 1].join(" + ");
        assert_eq!(parse(&long_sum), Err(ParseError::TooDeep { limit: MAX_DEPTH }));

        let nested_calls = format!("{}x{}", "sin(".repeat(MAX_DEPTH), ")".repeat(MAX_DEPTH));
        assert_eq!(parse(&nested_calls), Err(ParseError::TooDeep { limit: MAX_DEPTH }));
    }

    #[test]
    fn rejects_implicit_multiplication() {
        assert_eq!(parse("2 x"), Err(ParseError::MissingOperator { pos: 2 }));
        assert!(matches!(parse("x sin(x)"), Err(ParseError::MissingOperator { .. })));
    }
}
