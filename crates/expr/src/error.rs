use thiserror::Error;

/// Errors that can occur when parsing a formula.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ParseError {
    #[error("empty formula")]
    Empty,

    #[error("unexpected character '{ch}' at position {pos}")]
    UnexpectedChar { ch: char, pos: usize },

    #[error("malformed number: {0}")]
    MalformedNumber(String),

    #[error("unknown symbol '{0}' (the variable is 'x')")]
    UnknownSymbol(String),

    #[error("unknown function '{0}'")]
    UnknownFunction(String),

    #[error("function '{name}' takes 1 argument, got {found}")]
    WrongArity { name: String, found: usize },

    #[error("missing operand at position {pos}")]
    MissingOperand { pos: usize },

    #[error("missing operator at position {pos}")]
    MissingOperator { pos: usize },

    #[error("missing opening parenthesis")]
    MissingOpeningParen,

    #[error("missing closing parenthesis")]
    MissingClosingParen,

    #[error("formula nests deeper than {limit} levels")]
    TooDeep { limit: usize },
}
