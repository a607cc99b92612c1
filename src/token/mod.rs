use crate::error::{EvalError, EvalResult};
use std::fmt;

mod lexer;

pub use lexer::Tokenizer;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Number,
    Identifier,
    /// Arithmetic operators and both parentheses.
    Operator,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Number => "NUMBER",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::Operator => "OPERATOR",
        };
        f.write_str(name)
    }
}

/// A classified lexeme. Number tokens produced by the [`Tokenizer`] always
/// match `digit+ ('.' digit+)?`; tokens built from intermediate results may
/// carry a sign or a non-finite value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    /// Creates a number token holding the canonical text form of `value`.
    pub fn number(value: f32) -> Self {
        Self::new(TokenKind::Number, value.to_string())
    }

    pub fn identifier(name: impl Into<String>) -> Self {
        Self::new(TokenKind::Identifier, name)
    }

    pub fn operator(symbol: char) -> Self {
        Self::new(TokenKind::Operator, symbol.to_string())
    }

    pub fn is_number(&self) -> bool {
        self.kind == TokenKind::Number
    }

    pub fn is_open_paren(&self) -> bool {
        self.kind == TokenKind::Operator && self.text == "("
    }

    pub fn is_close_paren(&self) -> bool {
        self.kind == TokenKind::Operator && self.text == ")"
    }

    /// The arithmetic operator this token stands for, if any.
    pub fn as_operator(&self) -> Option<Operator> {
        if self.kind != TokenKind::Operator {
            return None;
        }
        Operator::try_from(self.text.as_str()).ok()
    }

    /// Parses the decimal value of a number token.
    pub fn value(&self) -> EvalResult<f32> {
        self.text
            .parse::<f32>()
            .map_err(|source| EvalError::NumberFormat {
                text: self.text.clone(),
                source,
            })
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.kind, self.text)
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// Division by zero is not guarded and yields infinity or NaN.
    pub fn apply(&self, left: f32, right: f32) -> f32 {
        match self {
            Operator::Add => left + right,
            Operator::Subtract => left - right,
            Operator::Multiply => left * right,
            Operator::Divide => left / right,
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '*',
            Operator::Divide => '/',
        }
    }
}

impl TryFrom<&str> for Operator {
    type Error = String;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "+" => Ok(Operator::Add),
            "-" => Ok(Operator::Subtract),
            "*" => Ok(Operator::Multiply),
            "/" => Ok(Operator::Divide),
            _ => Err(format!("Unknown operator: {}", value)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_display() {
        assert_eq!(Token::number(42.0).to_string(), "[NUMBER] 42");
        assert_eq!(Token::identifier("rate").to_string(), "[IDENTIFIER] rate");
        assert_eq!(Token::operator('(').to_string(), "[OPERATOR] (");
    }

    #[test]
    fn test_number_token_text_round_trips() {
        let token = Token::number(1.844);
        assert_eq!(token.text, "1.844");
        assert_eq!(token.value().unwrap(), 1.844);

        let negative = Token::number(-34.3);
        assert_eq!(negative.value().unwrap(), -34.3);
    }

    #[test]
    fn test_non_finite_values_survive_formatting() {
        assert_eq!(Token::number(f32::INFINITY).value().unwrap(), f32::INFINITY);
        assert!(Token::number(f32::NAN).value().unwrap().is_nan());
    }

    #[test]
    fn test_invalid_number_text() {
        let token = Token::new(TokenKind::Number, "٣");
        assert!(matches!(
            token.value(),
            Err(EvalError::NumberFormat { ref text, .. }) if text == "٣"
        ));
    }

    #[test]
    fn test_parentheses_are_not_arithmetic_operators() {
        assert_eq!(Token::operator('(').as_operator(), None);
        assert!(Token::operator('(').is_open_paren());
        assert!(Token::operator(')').is_close_paren());
        assert_eq!(Token::operator('/').as_operator(), Some(Operator::Divide));
        assert_eq!(Token::identifier("x").as_operator(), None);
    }

    #[test]
    fn test_operator_apply() {
        assert_eq!(Operator::Add.apply(2.0, 3.0), 5.0);
        assert_eq!(Operator::Subtract.apply(2.0, 3.0), -1.0);
        assert_eq!(Operator::Multiply.apply(2.0, 3.0), 6.0);
        assert_eq!(Operator::Divide.apply(3.0, 2.0), 1.5);
        assert_eq!(Operator::Divide.apply(1.0, 0.0), f32::INFINITY);
        assert!(Operator::Divide.apply(0.0, 0.0).is_nan());
    }

    #[test]
    fn test_operator_from_str() {
        for op in [
            Operator::Add,
            Operator::Subtract,
            Operator::Multiply,
            Operator::Divide,
        ] {
            let symbol = op.symbol().to_string();
            assert_eq!(Operator::try_from(symbol.as_str()), Ok(op));
        }
        assert!(Operator::try_from("^").is_err());
    }
}
