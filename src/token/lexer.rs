use crate::error::LexError;
use crate::token::{Token, TokenKind};
use log::debug;
use std::iter::{Enumerate, FusedIterator};
use std::str::Chars;

/// Lexeme being accumulated between flushes.
#[derive(Debug, Default)]
enum Pending {
    #[default]
    Empty,
    Number(String),
    Identifier(String),
}

/// An [`Iterator`] that converts a string of characters into [`Token`]s.
///
/// The input is consumed one character at a time. Digits, letters and
/// decimal points accumulate in a single pending buffer; operators,
/// parentheses and a change between digits and letters flush it. Whitespace
/// and control characters are skipped. The iterator stops after yielding the
/// first error.
pub struct Tokenizer<'a> {
    chars: Enumerate<Chars<'a>>,
    pending: Pending,
    queued: Option<Token>,
    done: bool,
}

impl<'a> Tokenizer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            chars: input.chars().enumerate(),
            pending: Pending::Empty,
            queued: None,
            done: false,
        }
    }

    fn consume(&mut self, position: usize, c: char) -> Result<Option<Token>, LexError> {
        match c {
            c if c.is_whitespace() || c.is_control() => Ok(None),
            '+' | '-' | '*' | '/' | '(' | ')' => {
                let operator = Token::operator(c);
                match self.flush()? {
                    Some(token) => {
                        self.queued = Some(operator);
                        Ok(Some(token))
                    }
                    None => Ok(Some(operator)),
                }
            }
            '.' => match &mut self.pending {
                Pending::Number(text) if text.contains('.') => Err(LexError::DuplicateDecimalPoint {
                    literal: format!("{text}."),
                    position,
                }),
                Pending::Number(text) => {
                    text.push(c);
                    Ok(None)
                }
                _ => Err(LexError::MisplacedDecimalPoint { position }),
            },
            c if c.is_ascii_digit() => {
                let flushed = match self.pending {
                    Pending::Identifier(_) => self.flush()?,
                    _ => None,
                };
                match &mut self.pending {
                    Pending::Number(text) => text.push(c),
                    _ => self.pending = Pending::Number(c.to_string()),
                }
                Ok(flushed)
            }
            c if c.is_alphabetic() => {
                let flushed = match self.pending {
                    Pending::Number(_) => self.flush()?,
                    _ => None,
                };
                match &mut self.pending {
                    Pending::Identifier(name) => name.push(c),
                    _ => self.pending = Pending::Identifier(c.to_string()),
                }
                Ok(flushed)
            }
            character => Err(LexError::UnexpectedCharacter {
                character,
                position,
            }),
        }
    }

    /// Finalizes the pending buffer, leaving it empty.
    fn flush(&mut self) -> Result<Option<Token>, LexError> {
        let token = match std::mem::take(&mut self.pending) {
            Pending::Empty => return Ok(None),
            Pending::Number(text) if text.ends_with('.') => {
                return Err(LexError::TrailingDecimalPoint(text))
            }
            Pending::Number(text) => Token::new(TokenKind::Number, text),
            Pending::Identifier(name) => Token::identifier(name),
        };
        debug!("Flushed token: {token}");
        Ok(Some(token))
    }
}

impl Iterator for Tokenizer<'_> {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(token) = self.queued.take() {
                return Some(Ok(token));
            }
            if self.done {
                return None;
            }

            let Some((position, c)) = self.chars.next() else {
                self.done = true;
                return self.flush().transpose();
            };

            match self.consume(position, c) {
                Ok(Some(token)) => return Some(Ok(token)),
                Ok(None) => continue,
                Err(err) => {
                    debug!("Tokenizer failed: {err}");
                    self.done = true;
                    return Some(Err(err));
                }
            }
        }
    }
}

impl FusedIterator for Tokenizer<'_> {}
