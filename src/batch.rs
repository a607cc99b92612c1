use crate::error::EvalResult;
use crate::evaluator::{Evaluator, Variables};
use crate::token::{Token, Tokenizer};
use log::debug;
use rayon::prelude::*;

impl Evaluator {
    /// Evaluates one expression against many variable mappings in parallel.
    ///
    /// The expression is tokenized once; a lexical error fails the whole
    /// batch. Otherwise each mapping gets its own result, in input order.
    pub fn evaluate_batch(
        &self,
        expression: &str,
        contexts: &[Variables],
    ) -> EvalResult<Vec<EvalResult<f32>>> {
        let tokens = Tokenizer::new(expression).collect::<Result<Vec<Token>, _>>()?;
        debug!(
            "Evaluating {} tokens against {} contexts",
            tokens.len(),
            contexts.len()
        );

        Ok(contexts
            .par_iter()
            .map(|variables| self.evaluate_tokens(tokens.iter().cloned(), variables))
            .collect())
    }
}
