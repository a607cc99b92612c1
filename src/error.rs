use std::num::ParseFloatError;
use thiserror::Error;

/// Malformed input detected while splitting an expression into tokens.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LexError {
    #[error("number literal '{0}' ends with a decimal point")]
    TrailingDecimalPoint(String),
    #[error("decimal point at position {position} is not part of a number")]
    MisplacedDecimalPoint { position: usize },
    #[error("second decimal point at position {position} in number literal '{literal}'")]
    DuplicateDecimalPoint { literal: String, position: usize },
    #[error("unexpected character '{character}' at position {position}")]
    UnexpectedCharacter { character: char, position: usize },
}

/// A token sequence that cannot be reduced to a single number.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("operator '{operator}' at token {index} is missing a numeric operand")]
    MissingOperand { operator: String, index: usize },
    #[error("'(' at token {index} has no matching ')'")]
    UnclosedParenthesis { index: usize },
    #[error("')' at token {index} has no matching '('")]
    UnexpectedClosingParenthesis { index: usize },
    #[error("empty expression")]
    Empty,
    #[error("expression reduced to {0} tokens instead of a single number")]
    Unreduced(usize),
    #[error("parentheses nested deeper than {limit} levels")]
    NestingTooDeep { limit: usize },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvalError {
    #[error("Lex error: {0}")]
    Lex(#[from] LexError),
    #[error("Undefined variable '{0}'")]
    UndefinedVariable(String),
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),
    #[error("Invalid number '{text}': {source}")]
    NumberFormat {
        text: String,
        #[source]
        source: ParseFloatError,
    },
}

pub type EvalResult<T> = Result<T, EvalError>;
