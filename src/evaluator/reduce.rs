use crate::error::{EvalResult, ParseError};
use crate::token::{Operator, Token};
use log::trace;

/// Finds the `)` closing the `(` at `open` using a nesting counter.
pub(super) fn matching_close(tokens: &[Token], open: usize) -> Result<usize, ParseError> {
    let mut depth = 1usize;
    for (index, token) in tokens.iter().enumerate().skip(open + 1) {
        if token.is_open_paren() {
            depth += 1;
        } else if token.is_close_paren() {
            depth -= 1;
            if depth == 0 {
                return Ok(index);
            }
        }
    }
    Err(ParseError::UnclosedParenthesis { index: open })
}

/// Repeatedly collapses the left-most `left OP right` window where `OP` is one
/// of `operators`, until none remain.
pub(super) fn reduce_pass(tokens: &mut Vec<Token>, operators: [Operator; 2]) -> EvalResult<()> {
    while let Some((index, operator)) = leftmost(tokens, &operators) {
        let left = index.checked_sub(1).and_then(|i| tokens.get(i));
        let right = tokens.get(index + 1);
        let (left, right) = match (left, right) {
            (Some(left), Some(right)) if left.is_number() && right.is_number() => {
                (left.value()?, right.value()?)
            }
            _ => {
                return Err(ParseError::MissingOperand {
                    operator: operator.symbol().to_string(),
                    index,
                }
                .into())
            }
        };

        let result = operator.apply(left, right);
        trace!("{left} {} {right} = {result}", operator.symbol());
        tokens.splice(index - 1..=index + 1, [Token::number(result)]);
    }
    Ok(())
}

fn leftmost(tokens: &[Token], operators: &[Operator]) -> Option<(usize, Operator)> {
    tokens.iter().enumerate().find_map(|(index, token)| {
        token
            .as_operator()
            .filter(|op| operators.contains(op))
            .map(|op| (index, op))
    })
}
