use crate::error::Error;
use crate::token::{Op, Token};
use std::iter::Peekable;
use std::str::CharIndices;

#[must_use]
/// Check if `ident` is a valid function or constant name
///
/// # Examples
///
/// ```
/// # use yardcalc::is_identifier;
///
/// assert_eq!(is_identifier("sqrt"), true);
/// assert_eq!(is_identifier("log2"), false);
/// ```
pub fn is_identifier(ident: &str) -> bool {
    !ident.is_empty() && ident.chars().all(is_identifier_part)
}

/// An helper struct for lexing the input
pub struct Lexer<'a> {
    source: &'a str,
    input: Peekable<CharIndices<'a>>,
}

impl<'a> Lexer<'a> {
    /// Create a lexer reading from `source`
    pub fn new(source: &'a str) -> Lexer<'a> {
        Lexer {
            source,
            input: source.char_indices().peekable(),
        }
    }

    /// Split the whole input into tokens, in order
    pub fn tokenize(&mut self) -> Result<Vec<Token>, Error> {
        let mut output = Vec::new();
        while let Some(token) = self.next_token()? {
            output.push(token);
        }
        Ok(output)
    }

    fn next_token(&mut self) -> Result<Option<Token>, Error> {
        while let Some(&(_, c)) = self.input.peek() {
            if c.is_whitespace() {
                self.input.next();
            } else {
                break;
            }
        }

        let (start, c) = match self.input.next() {
            Some(next) => next,
            None => return Ok(None),
        };

        let token = match c {
            c if is_number_start(c) => {
                let mut seen_dot = c == '.';
                let end = self.take_while(start + c.len_utf8(), |c| {
                    if c == '.' && !seen_dot {
                        seen_dot = true;
                        true
                    } else {
                        c.is_ascii_digit()
                    }
                });
                let literal = &self.source[start..end];
                let value: f64 = literal
                    .parse()
                    .map_err(|_| Error::InvalidNumber(literal.into()))?;
                // Overflow parses to infinity, underflow to zero
                let underflow = value == 0.0 && literal.bytes().any(|b| matches!(b, b'1'..=b'9'));
                if !value.is_finite() || underflow {
                    return Err(Error::InvalidNumber(literal.into()));
                }
                Token::Number(value)
            }
            c if is_identifier_part(c) => {
                let end = self.take_while(start + c.len_utf8(), is_identifier_part);
                Token::Function(self.source[start..end].into())
            }
            '(' => Token::LParen,
            ')' => Token::RParen,
            other => match Op::from_symbol(other) {
                Some(op) => Token::Op(op),
                None => {
                    return Err(Error::UnexpectedCharacter {
                        character: other,
                        position: start,
                    });
                }
            },
        };
        Ok(Some(token))
    }

    /// Consume characters while `accept` holds, and return the byte offset
    /// of the end of the run
    fn take_while<F>(&mut self, mut end: usize, mut accept: F) -> usize
    where
        F: FnMut(char) -> bool,
    {
        while let Some(&(i, c)) = self.input.peek() {
            if !accept(c) {
                break;
            }
            self.input.next();
            end = i + c.len_utf8();
        }
        end
    }
}

/// Check if `c` can appear at the first character of a number
fn is_number_start(c: char) -> bool {
    c == '.' || c.is_ascii_digit()
}

/// Check if `c` can appear inside an identifier
fn is_identifier_part(c: char) -> bool {
    c.is_ascii_alphabetic()
}
