#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(
    clippy::needless_return,
    clippy::missing_docs_in_private_items,
    clippy::non_ascii_literal,
    clippy::float_cmp
)]

//! Yardcalc, a crate for evaluating single-line arithmetic expressions.
//!
//! The easiest way to use this crate is with the
//! [`evaluate`](fn.evaluate.html) function:
//!
//! ```
//! assert_eq!(yardcalc::evaluate("2 + 3 * 4"), Ok(14.0));
//! assert_eq!(yardcalc::evaluate("2 ^ 3 ^ 2"), Ok(512.0));
//! ```
//!
//! It is also possible to separate the tokenization from the evaluation of
//! an expression with the [`Expr`](struct.Expr.html) type, and to change the
//! evaluator behaviour with [`Options`](struct.Options.html).
//!
//! ```
//! use yardcalc::{Expr, Options};
//!
//! let expr = Expr::parse("-sqrt(9)").unwrap();
//! assert_eq!(expr.eval(), Ok(-3.0));
//!
//! let strict = Options {
//!     unary_signs: false,
//!     ..Options::default()
//! };
//! assert!(expr.eval_with(&strict).is_err());
//! ```
//!
//! Failures are reported with [`Error`](enum.Error.html), and can be sorted
//! in broad categories with [`Error::kind`](enum.Error.html#method.kind):
//!
//! ```
//! use yardcalc::{evaluate, ErrorKind};
//!
//! assert_eq!(evaluate("1 / 0").unwrap_err().kind(), ErrorKind::Domain);
//! assert_eq!(evaluate("2 & 3").unwrap_err().kind(), ErrorKind::Lexical);
//! assert_eq!(evaluate("((1+2)").unwrap_err().kind(), ErrorKind::Structural);
//! ```
//!
//! # Language definition
//!
//! The language implemented by yardcalc can contain the following elements:
//!
//! - decimal literals: `12`, `0.5`, `.5`, `7.`. There is no exponent form;
//! - left and right parenthesis;
//! - mathematical operators: `+` for addition, `-` for subtraction,
//!   `*` for multiplication, `/` for division and `^` for exponentiation;
//! - prefix `+` and `-` signs, binding tighter than `^`: `-2^2` is `4`;
//! - constants: `pi`, `PI`, `e` and `E`;
//! - function call: `sin(a)`. The following functions are accessible:
//!   `sin`, `cos`, `tan`, `ctg`, `asin`, `acos`, `atan`, `sinh`, `cosh`,
//!   `tanh`, `sqrt`, `cbrt`, `log`, `ln`, `lg`, `exp`, `abs`, `floor`, `ceil`.
//!
//! Any other symbol is forbidden in the input.
//!
//! Division by zero, `sqrt` of a negative number, logarithms of non-positive
//! numbers and `tan`/`ctg` at their poles are errors. Poles are detected
//! after rounding the cosine (resp. sine) to 7 decimals, so `tan(pi / 2)`
//! fails.
//!
//! # Technical details
//!
//! yardcalc evaluates expressions directly with the Shunting-Yard
//! algorithm, using one stack of values and one stack of pending operators.
//! It works only with `f64` data.

#[macro_use]
extern crate lazy_static;

mod error;
mod expr;
mod functions;
mod lexer;
mod token;

pub use error::{Error, ErrorKind};
pub use expr::{evaluate, Expr, Options};
pub use functions::{is_function, Function, CONSTANTS, FUNCTIONS};
pub use lexer::{is_identifier, Lexer};
pub use token::{Op, Token};
