use crate::error::Error;
use crate::functions::{Function, CONSTANTS, FUNCTIONS};
use crate::lexer::Lexer;
use crate::token::{Op, Token};
use log::{debug, trace};

/// Evaluate a single expression from `input`, with the default
/// [`Options`](struct.Options.html).
///
/// Returns `Ok(result)` if the evaluation is successful, or `Err(cause)` if
/// tokenizing or evaluating the expression failed.
///
/// # Example
///
/// ```
/// # use yardcalc::evaluate;
///
/// assert_eq!(evaluate("45 - 2^3"), Ok(37.0));
/// assert_eq!(evaluate("-2 * sqrt(16)"), Ok(-8.0));
/// assert!(evaluate("1 / 0").is_err());
/// ```
pub fn evaluate(input: &str) -> Result<f64, Error> {
    Expr::parse(input).and_then(|expr| expr.eval())
}

/// Knobs for the evaluator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    /// Accept `+` and `-` as prefix signs at the start of an expression,
    /// after an operator and after `(`. Signs bind tighter than `^`, so
    /// `-2^2` is `4`. When disabled, `0 - x` has to be written instead.
    pub unary_signs: bool,
    /// Resolve `pi`, `PI`, `e` and `E` to their values. When disabled they
    /// are unknown functions.
    pub constants: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            unary_signs: true,
            constants: true,
        }
    }
}

/// A tokenized mathematical expression.
///
/// # Examples
/// ```
/// # use yardcalc::{Expr, Options};
/// let expr = Expr::parse("3 + 5 * 2").unwrap();
/// assert_eq!(expr.eval(), Ok(13.0));
///
/// let expr = Expr::parse("-2 * 3").unwrap();
/// let strict = Options {
///     unary_signs: false,
///     ..Options::default()
/// };
/// assert!(expr.eval_with(&strict).is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Expr {
    tokens: Vec<Token>,
}

impl Expr {
    /// Tokenize the given mathematical `expression` into an `Expr`.
    ///
    /// Only lexical errors are reported here, the structure of the expression
    /// is checked during evaluation.
    ///
    /// # Examples
    /// ```
    /// # use yardcalc::Expr;
    /// // A valid expression
    /// assert!(Expr::parse("3 + 5 * 2").is_ok());
    /// // an invalid expression
    /// assert!(Expr::parse("3 # 2").is_err());
    /// ```
    pub fn parse(expression: &str) -> Result<Self, Error> {
        let tokens = Lexer::new(expression).tokenize()?;
        Ok(Self { tokens })
    }

    /// The tokens of this expression, in input order
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Evaluate the expression with the default options.
    pub fn eval(&self) -> Result<f64, Error> {
        self.eval_with(&Options::default())
    }

    /// Evaluate the expression with the given `options`.
    pub fn eval_with(&self, options: &Options) -> Result<f64, Error> {
        debug!("evaluating {} tokens with {:?}", self.tokens.len(), options);
        let result = Machine::new(self.tokens.len(), *options).run(&self.tokens);
        if let Err(ref error) = result {
            debug!("evaluation failed: {}", error);
        }
        result
    }
}

/// Entries of the pending stack
#[derive(Debug, Clone, Copy)]
enum Pending {
    Op(Op),
    Function(&'static str, Function),
    /// Barrier for a parenthesized group, holding the floor of the enclosing
    /// group
    LParen(usize),
}

/// Shunting-yard state for a single evaluation
struct Machine {
    values: Vec<f64>,
    pending: Vec<Pending>,
    /// Size of the value stack when the innermost open group started. Values
    /// below it belong to enclosing groups.
    floor: usize,
    options: Options,
}

impl Machine {
    fn new(capacity: usize, options: Options) -> Self {
        Self {
            values: Vec::with_capacity(capacity),
            pending: Vec::with_capacity(capacity),
            floor: 0,
            options,
        }
    }

    fn run(mut self, tokens: &[Token]) -> Result<f64, Error> {
        let mut expect_operand = true;
        let mut tokens = tokens.iter().peekable();

        while let Some(token) = tokens.next() {
            match *token {
                Token::Number(value) => {
                    self.values.push(value);
                    expect_operand = false;
                }
                Token::Function(ref name) => {
                    if let Some(value) = self.constant(name) {
                        self.values.push(value);
                        expect_operand = false;
                    } else {
                        let (&name, &function) = FUNCTIONS
                            .get_key_value(name.as_str())
                            .ok_or_else(|| Error::UnknownFunction(name.clone()))?;
                        if tokens.peek() != Some(&&Token::LParen) {
                            return Err(Error::MissingArguments(name.into()));
                        }
                        self.pending.push(Pending::Function(name, function));
                    }
                }
                Token::LParen => {
                    self.pending.push(Pending::LParen(self.floor));
                    self.floor = self.values.len();
                    expect_operand = true;
                }
                Token::RParen => {
                    self.close_group()?;
                    expect_operand = false;
                }
                Token::Op(op) => {
                    let prefix = op.as_prefix().filter(|_| expect_operand && self.options.unary_signs);
                    if let Some(prefix) = prefix {
                        self.pending.push(Pending::Op(prefix));
                    } else {
                        self.push_operator(op)?;
                    }
                    expect_operand = true;
                }
            }
        }

        self.finish()
    }

    fn constant(&self, name: &str) -> Option<f64> {
        if self.options.constants {
            CONSTANTS.get(name).copied()
        } else {
            None
        }
    }

    fn push_operator(&mut self, op: Op) -> Result<(), Error> {
        while let Some(&Pending::Op(top)) = self.pending.last() {
            let pop_me = top.precedence() > op.precedence()
                || (top.precedence() == op.precedence() && op.is_left_associative());
            if !pop_me {
                break;
            }
            self.reduce()?;
        }
        self.pending.push(Pending::Op(op));
        Ok(())
    }

    fn close_group(&mut self) -> Result<(), Error> {
        loop {
            match self.pending.last() {
                Some(Pending::LParen(_)) => break,
                Some(_) => self.reduce()?,
                None => return Err(Error::MismatchedParentheses),
            }
        }

        if let Some(Pending::LParen(outer)) = self.pending.pop() {
            let inside = self.values.len() - self.floor;
            match inside {
                0 => return Err(Error::EmptyGroup),
                1 => {}
                n => return Err(Error::Malformed(n)),
            }
            self.floor = outer;
        }

        if let Some(Pending::Function(..)) = self.pending.last() {
            self.reduce()?;
        }
        Ok(())
    }

    fn finish(mut self) -> Result<f64, Error> {
        while let Some(entry) = self.pending.last() {
            if let Pending::LParen(_) = entry {
                return Err(Error::MismatchedParentheses);
            }
            self.reduce()?;
        }

        match self.values.len() {
            0 => Err(Error::EmptyExpression),
            1 => Ok(self.values[0]),
            n => Err(Error::Malformed(n)),
        }
    }

    /// Apply the top of the pending stack to the top of the value stack
    fn reduce(&mut self) -> Result<(), Error> {
        let result = match self.pending.pop() {
            Some(Pending::Function(name, function)) => {
                let x = self.operand(name)?;
                let result = function(x)?;
                trace!("{}({}) = {}", name, x, result);
                result
            }
            Some(Pending::Op(op)) if op.is_unary() => {
                let x = self.operand(op.symbol())?;
                let result = if op == Op::Neg { -x } else { x };
                trace!("{}{} = {}", op, x, result);
                result
            }
            Some(Pending::Op(op)) => {
                if self.values.len() < self.floor + 2 {
                    return Err(Error::MissingOperand(op.to_string()));
                }
                let b = self.values.pop().unwrap_or_default();
                let a = self.values.pop().unwrap_or_default();
                let result = match op {
                    Op::Plus => a + b,
                    Op::Minus => a - b,
                    Op::Mul => a * b,
                    Op::Div if b == 0.0 => return Err(Error::DivisionByZero),
                    Op::Div => a / b,
                    Op::Exp => libm::pow(a, b),
                    Op::Neg | Op::Pos => unreachable!("prefix operators are handled above"),
                };
                trace!("{} {} {} = {}", a, op, b, result);
                result
            }
            Some(Pending::LParen(_)) | None => return Err(Error::MismatchedParentheses),
        };
        self.values.push(result);
        Ok(())
    }

    /// Pop the single operand of a function or prefix operator
    fn operand<N: ToString>(&mut self, name: N) -> Result<f64, Error> {
        if self.values.len() <= self.floor {
            return Err(Error::MissingOperand(name.to_string()));
        }
        self.values
            .pop()
            .ok_or_else(|| Error::MissingOperand(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::{evaluate, Expr, Options};
    use crate::error::{Error, ErrorKind};
    use test_case::test_case;

    const STRICT: Options = Options {
        unary_signs: false,
        constants: true,
    };

    #[test_case("3 + 5" => Ok(8.0) ; "addition")]
    #[test_case("2 - 5" => Ok(-3.0) ; "subtraction")]
    #[test_case("2 * 5" => Ok(10.0) ; "multiplication")]
    #[test_case("10 / 4" => Ok(2.5) ; "division")]
    #[test_case("2 ^ 3" => Ok(8.0) ; "power")]
    #[test_case("2 + 3 * 4" => Ok(14.0) ; "multiplication first")]
    #[test_case("(2 + 3) * 4" => Ok(20.0) ; "parentheses first")]
    #[test_case("2 ^ 3 ^ 2" => Ok(512.0) ; "power is right associative")]
    #[test_case("10 - 4 - 3" => Ok(3.0) ; "subtraction is left associative")]
    #[test_case("64 / 4 / 2" => Ok(8.0) ; "division is left associative")]
    #[test_case("2 * 3 ^ 2" => Ok(18.0) ; "power before multiplication")]
    #[test_case("42" => Ok(42.0) ; "bare number")]
    #[test_case("((((7))))" => Ok(7.0) ; "nested parentheses")]
    #[test_case("sqrt(9) + abs(-0)" => Ok(3.0) ; "functions and signed zero")]
    #[test_case("sqrt(3 * 3) * 2" => Ok(6.0) ; "expression as argument")]
    #[test_case("abs(2 - 7) ^ 2" => Ok(25.0) ; "function result as base")]
    #[test_case("sqrt(sqrt(16))" => Ok(2.0) ; "nested calls")]
    #[test_case("sin(0)" => Ok(0.0) ; "sine")]
    #[test_case("-3" => Ok(-3.0) ; "leading minus")]
    #[test_case("+3" => Ok(3.0) ; "leading plus")]
    #[test_case("25 + -3" => Ok(22.0) ; "minus after operator")]
    #[test_case("25 - -3" => Ok(28.0) ; "double minus")]
    #[test_case("2 * -3" => Ok(-6.0) ; "minus after multiplication")]
    #[test_case("- -3" => Ok(3.0) ; "stacked signs")]
    #[test_case("-(2 + 3)" => Ok(-5.0) ; "negated group")]
    #[test_case("(-2)" => Ok(-2.0) ; "minus after parenthesis")]
    #[test_case("-2 ^ 2" => Ok(4.0) ; "sign binds tighter than power")]
    #[test_case("2 ^ -1" => Ok(0.5) ; "negative exponent")]
    #[test_case("-sqrt(4)" => Ok(-2.0) ; "negated call")]
    fn eval(input: &str) -> Result<f64, Error> {
        evaluate(input)
    }

    #[test_case("" => Err(Error::EmptyExpression) ; "empty input")]
    #[test_case("   " => Err(Error::EmptyExpression) ; "blank input")]
    #[test_case("((1+2)" => Err(Error::MismatchedParentheses) ; "unclosed parenthesis")]
    #[test_case("(1+2))" => Err(Error::MismatchedParentheses) ; "extra closing parenthesis")]
    #[test_case(")" => Err(Error::MismatchedParentheses) ; "lonely closing parenthesis")]
    #[test_case("2 + " => Err(Error::MissingOperand("+".into())) ; "trailing operator")]
    #[test_case("* 2" => Err(Error::MissingOperand("*".into())) ; "leading operator")]
    #[test_case("2(*3)" => Err(Error::MissingOperand("*".into())) ; "operands do not cross parentheses")]
    #[test_case("-" => Err(Error::MissingOperand("-".into())) ; "lonely sign")]
    #[test_case("()" => Err(Error::EmptyGroup) ; "empty parentheses")]
    #[test_case("sqrt()" => Err(Error::EmptyGroup) ; "call without argument")]
    #[test_case("2 3" => Err(Error::Malformed(2)) ; "two numbers")]
    #[test_case("(1 2) + 3" => Err(Error::Malformed(2)) ; "two numbers in a group")]
    #[test_case("sqrt 9" => Err(Error::MissingArguments("sqrt".into())) ; "call without parentheses")]
    #[test_case("foo(1)" => Err(Error::UnknownFunction("foo".into())) ; "unknown function")]
    #[test_case("1 / 0" => Err(Error::DivisionByZero) ; "division by zero")]
    #[test_case("1 / (2 - 2)" => Err(Error::DivisionByZero) ; "division by computed zero")]
    #[test_case("log(0)" => Err(Error::Domain { function: "log", argument: 0.0 }) ; "logarithm of zero")]
    #[test_case("sqrt(-4)" => Err(Error::Domain { function: "sqrt", argument: -4.0 }) ; "square root of negative")]
    #[test_case("2 & 3" => Err(Error::UnexpectedCharacter { character: '&', position: 2 }) ; "unknown character")]
    #[test_case("." => Err(Error::InvalidNumber(".".into())) ; "lonely dot")]
    fn errors(input: &str) -> Result<f64, Error> {
        evaluate(input)
    }

    #[test_case("-3" => Err(Error::MissingOperand("-".into())) ; "leading minus")]
    #[test_case("2 * -3" => Err(Error::MissingOperand("*".into())) ; "minus after operator")]
    #[test_case("0 - 3" => Ok(-3.0) ; "explicit subtraction")]
    #[test_case("sqrt(9) + abs(0 - 0)" => Ok(3.0) ; "no sign needed")]
    fn eval_without_signs(input: &str) -> Result<f64, Error> {
        Expr::parse(input)?.eval_with(&STRICT)
    }

    #[test]
    fn constants() {
        assert_eq!(evaluate("pi"), Ok(std::f64::consts::PI));
        assert_eq!(evaluate("2 * PI"), Ok(2.0 * std::f64::consts::PI));
        assert!((evaluate("e").unwrap() - std::f64::consts::E).abs() < 1e-15);
        assert_eq!(evaluate("log(e)").map(f64::round), Ok(1.0));
        assert_eq!(evaluate("2pi"), Err(Error::Malformed(2)));

        let expr = Expr::parse("pi").unwrap();
        let options = Options {
            constants: false,
            ..Options::default()
        };
        assert_eq!(
            expr.eval_with(&options),
            Err(Error::UnknownFunction("pi".into()))
        );
    }

    #[test]
    fn trigonometry() {
        let result = evaluate("2 + 3 * sin(0.5) - sqrt(9)").unwrap();
        assert!((result - (2.0 + 3.0 * 0.5f64.sin() - 3.0)).abs() < 1e-12);

        let error = evaluate("tan(pi / 2)").unwrap_err();
        assert_eq!(error.kind(), ErrorKind::Domain);
        let error = evaluate("ctg(pi)").unwrap_err();
        assert_eq!(error.kind(), ErrorKind::Domain);

        let result = evaluate("tan(pi / 4)").unwrap();
        assert!((result - 1.0).abs() < 1e-12);
    }

    #[test]
    fn error_kinds() {
        let kind = |input: &str| evaluate(input).unwrap_err().kind();
        assert_eq!(kind("2 & 3"), ErrorKind::Lexical);
        assert_eq!(kind("((1+2)"), ErrorKind::Structural);
        assert_eq!(kind("2 + "), ErrorKind::Structural);
        assert_eq!(kind("bar(2)"), ErrorKind::UnknownFunction);
        assert_eq!(kind("1 / 0"), ErrorKind::Domain);
        assert_eq!(kind("1 + ."), ErrorKind::NumberParse);
        assert_eq!(kind(&format!("1 + {}", "9".repeat(400))), ErrorKind::NumberParse);
    }

    #[test]
    fn reuse() {
        let expr = Expr::parse("(1 + 2) * 3").unwrap();
        assert_eq!(expr.tokens().len(), 7);
        assert_eq!(expr.eval(), Ok(9.0));
        assert_eq!(expr.eval(), Ok(9.0));
    }

    #[test]
    fn deep_nesting() {
        let depth = 1000;
        let input = format!("{}1{}", "(".repeat(depth), ")".repeat(depth));
        assert_eq!(evaluate(&input), Ok(1.0));

        let input = format!("{}1{}", "-(".repeat(depth), ")".repeat(depth));
        assert_eq!(evaluate(&input), Ok(1.0));

        let input = format!("{}1{}", "sqrt(".repeat(depth), ")".repeat(depth));
        assert_eq!(evaluate(&input), Ok(1.0));
    }
}
