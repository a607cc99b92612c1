use crate::error::{EvalError, EvalResult, ParseError};
use crate::token::{Operator, Token, TokenKind, Tokenizer};
use log::debug;
use std::collections::HashMap;

mod reduce;

use reduce::{matching_close, reduce_pass};

/// Caller-supplied values for the identifiers of an expression.
pub type Variables = HashMap<String, f32>;

pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Evaluates token sequences by repeated single-step collapse.
///
/// Identifiers are substituted first, then every parenthesized group is
/// evaluated recursively and replaced by its value, and finally the flat
/// sequence is reduced by a `*`/`/` pass followed by a `+`/`-` pass, each
/// left to right.
#[derive(Debug, Clone)]
pub struct Evaluator {
    max_depth: usize,
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new()
    }
}

impl Evaluator {
    pub fn new() -> Self {
        Self::with_max_depth(DEFAULT_MAX_DEPTH)
    }

    /// Creates an `Evaluator` that rejects parentheses nested deeper than
    /// `max_depth` levels.
    pub fn with_max_depth(max_depth: usize) -> Self {
        Self { max_depth }
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Evaluates an expression that contains no identifiers.
    pub fn evaluate(&self, expression: &str) -> EvalResult<f32> {
        self.evaluate_expression(expression, &Variables::new())
    }

    /// Evaluates a given expression string against a variable mapping.
    ///
    /// Tokenizing and substitution run as a single pass, so the first
    /// lexical error or undefined variable in input order is reported.
    pub fn evaluate_expression(&self, expression: &str, variables: &Variables) -> EvalResult<f32> {
        debug!("Evaluating expression: {}", expression);
        let tokens = substitute(
            Tokenizer::new(expression).map(|token| token.map_err(EvalError::from)),
            variables,
        )?;
        self.evaluate_substituted(tokens, 0)
    }

    /// Evaluates an already tokenized expression against a variable mapping.
    pub fn evaluate_tokens<I>(&self, tokens: I, variables: &Variables) -> EvalResult<f32>
    where
        I: IntoIterator<Item = Token>,
    {
        let tokens = substitute(tokens.into_iter().map(Ok), variables)?;
        self.evaluate_substituted(tokens, 0)
    }

    fn evaluate_substituted(&self, mut tokens: Vec<Token>, depth: usize) -> EvalResult<f32> {
        if depth > self.max_depth {
            return Err(ParseError::NestingTooDeep {
                limit: self.max_depth,
            }
            .into());
        }

        // A lone signed number, e.g. the inside of `(-5)`.
        if let [sign, value] = tokens.as_slice() {
            if sign.as_operator() == Some(Operator::Subtract) && value.is_number() {
                return Ok(-value.value()?);
            }
        }

        while let Some(open) = tokens.iter().position(Token::is_open_paren) {
            let close = matching_close(&tokens, open)?;
            let inner = tokens[open + 1..close].to_vec();
            let value = self.evaluate_substituted(inner, depth + 1)?;
            debug!("Collapsed group at {open}..={close} to {value}");
            tokens.splice(open..=close, [Token::number(value)]);
        }
        if let Some(index) = tokens.iter().position(Token::is_close_paren) {
            return Err(ParseError::UnexpectedClosingParenthesis { index }.into());
        }

        reduce_pass(&mut tokens, [Operator::Multiply, Operator::Divide])?;
        reduce_pass(&mut tokens, [Operator::Add, Operator::Subtract])?;

        match tokens.as_slice() {
            [token] if token.is_number() => {
                let result = token.value()?;
                debug!("Reduced to {result} at depth {depth}");
                Ok(result)
            }
            [] => Err(ParseError::Empty.into()),
            rest => Err(ParseError::Unreduced(rest.len()).into()),
        }
    }
}

/// Replaces every identifier with a number token holding its value.
fn substitute<I>(tokens: I, variables: &Variables) -> EvalResult<Vec<Token>>
where
    I: Iterator<Item = EvalResult<Token>>,
{
    tokens
        .map(|token| {
            let token = token?;
            if token.kind != TokenKind::Identifier {
                return Ok(token);
            }
            match variables.get(&token.text) {
                Some(value) => {
                    debug!("Substituted {} = {}", token.text, value);
                    Ok(Token::number(*value))
                }
                None => Err(EvalError::UndefinedVariable(token.text)),
            }
        })
        .collect()
}
