use std::fmt::{self, Display, Formatter};

/// Possible tokens to find in the input string
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// A numeric literal
    Number(f64),
    /// An arithmetic operator. The lexer does not know about unary signs,
    /// `+` and `-` always come out as `Op::Plus` and `Op::Minus`.
    Op(Op),
    /// An identifier, either a function name or a constant
    Function(String),
    /// Left parenthesis
    LParen,
    /// Right parenthesis
    RParen,
}

impl Display for Token {
    fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
        match *self {
            Self::Number(value) => write!(fmt, "{}", value),
            Self::Op(op) => write!(fmt, "{}", op),
            Self::Function(ref name) => write!(fmt, "{}", name),
            Self::LParen => write!(fmt, "("),
            Self::RParen => write!(fmt, ")"),
        }
    }
}

/// Allowed operators in the algorithm
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Op {
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `^`
    Exp,
    /// Prefix `-`, only produced by the evaluator
    Neg,
    /// Prefix `+`, only produced by the evaluator
    Pos,
}

impl Op {
    /// Get the operator precedence. Operators with higher precedence should be
    /// evaluated first.
    pub fn precedence(self) -> u8 {
        match self {
            Self::Plus | Self::Minus => 1,
            Self::Mul | Self::Div => 2,
            Self::Exp => 3,
            Self::Neg | Self::Pos => 4,
        }
    }

    /// Check if the operator is left associative
    pub fn is_left_associative(self) -> bool {
        match self {
            Self::Plus | Self::Minus | Self::Mul | Self::Div => true,
            Self::Exp | Self::Neg | Self::Pos => false,
        }
    }

    /// Check if the operator is right associative
    pub fn is_right_associative(self) -> bool {
        !self.is_left_associative()
    }

    /// Check if the operator takes a single operand
    pub fn is_unary(self) -> bool {
        matches!(self, Self::Neg | Self::Pos)
    }

    /// Get the prefix version of a sign operator, if there is one
    pub fn as_prefix(self) -> Option<Self> {
        match self {
            Self::Plus => Some(Self::Pos),
            Self::Minus => Some(Self::Neg),
            _ => None,
        }
    }

    /// The character this operator is written with
    pub fn symbol(self) -> char {
        match self {
            Self::Plus | Self::Pos => '+',
            Self::Minus | Self::Neg => '-',
            Self::Mul => '*',
            Self::Div => '/',
            Self::Exp => '^',
        }
    }

    /// Get the binary operator written with `c`
    pub fn from_symbol(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Plus),
            '-' => Some(Self::Minus),
            '*' => Some(Self::Mul),
            '/' => Some(Self::Div),
            '^' => Some(Self::Exp),
            _ => None,
        }
    }
}

impl Display for Op {
    fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
        write!(fmt, "{}", self.symbol())
    }
}
