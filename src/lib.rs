pub mod batch;
pub mod error;
pub mod evaluator;
pub mod token;

pub use error::{EvalError, EvalResult, LexError, ParseError};
pub use evaluator::{Evaluator, Variables};
pub use token::{Operator, Token, TokenKind, Tokenizer};

pub fn evaluate_expression(expression: &str, variables: &Variables) -> EvalResult<f32> {
    Evaluator::new().evaluate_expression(expression, variables)
}

/// Lazily splits `input` into tokens.
pub fn tokenize(input: &str) -> Tokenizer<'_> {
    Tokenizer::new(input)
}
