use thiserror::Error;

/// Error type for the yardcalc crate
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A character the lexer does not know about
    #[error("unexpected character '{character}' at position {position}")]
    UnexpectedCharacter {
        /// The offending character
        character: char,
        /// Byte offset of the character in the input
        position: usize,
    },
    /// A numeric literal that does not convert to a float, like a lone `.`
    #[error("invalid number literal '{0}'")]
    InvalidNumber(String),
    /// Unbalanced `(` or `)`
    #[error("mismatched parentheses")]
    MismatchedParentheses,
    /// An operator or a function without enough values to apply to
    #[error("missing operand for '{0}'")]
    MissingOperand(String),
    /// A function name not followed by `(`
    #[error("function '{0}' must be followed by '('")]
    MissingArguments(String),
    /// Nothing to evaluate
    #[error("empty expression")]
    EmptyExpression,
    /// `()` with nothing inside
    #[error("empty parentheses")]
    EmptyGroup,
    /// Values left over after all reductions, like in `2 3`
    #[error("malformed expression: {0} values without operator")]
    Malformed(usize),
    /// An identifier which is neither a function nor a constant
    #[error("unknown function '{0}'")]
    UnknownFunction(String),
    /// `x / 0`
    #[error("division by zero")]
    DivisionByZero,
    /// A function called outside of its domain
    #[error("{function}({argument}) is undefined")]
    Domain {
        /// Name of the function
        function: &'static str,
        /// The rejected argument
        argument: f64,
    },
}

/// The categories a reporter must tell apart
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Unrecognized character in the input
    Lexical,
    /// Parentheses, operands, empty input and leftovers
    Structural,
    /// Identifier absent from the registry
    UnknownFunction,
    /// Undefined mathematical operation
    Domain,
    /// Literal that cannot be converted to a float
    NumberParse,
}

impl Error {
    /// Get the category of this error
    pub fn kind(&self) -> ErrorKind {
        match *self {
            Self::UnexpectedCharacter { .. } => ErrorKind::Lexical,
            Self::InvalidNumber(_) => ErrorKind::NumberParse,
            Self::MismatchedParentheses
            | Self::MissingOperand(_)
            | Self::MissingArguments(_)
            | Self::EmptyExpression
            | Self::EmptyGroup
            | Self::Malformed(_) => ErrorKind::Structural,
            Self::UnknownFunction(_) => ErrorKind::UnknownFunction,
            Self::DivisionByZero | Self::Domain { .. } => ErrorKind::Domain,
        }
    }
}
