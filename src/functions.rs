use crate::error::Error;
use hashbrown::HashMap;

/// A built-in function: one argument, may fail with a domain error
pub type Function = fn(f64) -> Result<f64, Error>;

/// Number of decimals kept when checking trigonometric poles
const POLE_DIGITS: i32 = 7;

lazy_static! {
    /// Built-in functions, by name
    pub static ref FUNCTIONS: HashMap<&'static str, Function> = {
        let mut map = HashMap::<&'static str, Function>::new();
        map.insert("sin", |x| Ok(libm::sin(x)));
        map.insert("cos", |x| Ok(libm::cos(x)));
        map.insert("tan", |x| {
            if rounds_to_zero(libm::cos(x)) {
                return Err(domain("tan", x));
            }
            Ok(libm::tan(x))
        });
        map.insert("ctg", |x| {
            let sin = round_pole(libm::sin(x));
            if sin == 0.0 {
                return Err(domain("ctg", x));
            }
            Ok(round_pole(libm::cos(x)) / sin)
        });
        map.insert("asin", |x| {
            if !(-1.0..=1.0).contains(&x) {
                return Err(domain("asin", x));
            }
            Ok(libm::asin(x))
        });
        map.insert("acos", |x| {
            if !(-1.0..=1.0).contains(&x) {
                return Err(domain("acos", x));
            }
            Ok(libm::acos(x))
        });
        map.insert("atan", |x| Ok(libm::atan(x)));
        map.insert("sinh", |x| Ok(libm::sinh(x)));
        map.insert("cosh", |x| Ok(libm::cosh(x)));
        map.insert("tanh", |x| Ok(libm::tanh(x)));
        map.insert("sqrt", |x| {
            if x < 0.0 {
                return Err(domain("sqrt", x));
            }
            Ok(libm::sqrt(x))
        });
        map.insert("cbrt", |x| Ok(libm::cbrt(x)));
        map.insert("log", |x| {
            if x <= 0.0 {
                return Err(domain("log", x));
            }
            Ok(libm::log(x))
        });
        map.insert("ln", |x| {
            if x <= 0.0 {
                return Err(domain("ln", x));
            }
            Ok(libm::log(x))
        });
        map.insert("lg", |x| {
            if x <= 0.0 {
                return Err(domain("lg", x));
            }
            Ok(libm::log10(x))
        });
        map.insert("exp", |x| Ok(libm::exp(x)));
        map.insert("abs", |x| Ok(libm::fabs(x)));
        map.insert("floor", |x| Ok(libm::floor(x)));
        map.insert("ceil", |x| Ok(libm::ceil(x)));
        map.shrink_to_fit();
        map
    };

    /// Named constants, by name
    pub static ref CONSTANTS: HashMap<&'static str, f64> = {
        let pi = libm::acos(-1.0);
        let e = libm::exp(1.0);
        let mut map = HashMap::<&'static str, f64>::new();
        map.insert("pi", pi);
        map.insert("PI", pi);
        map.insert("e", e);
        map.insert("E", e);
        map.shrink_to_fit();
        map
    };
}

#[must_use]
/// Check if `name` is a built-in function
///
/// # Examples
///
/// ```
/// # use yardcalc::is_function;
///
/// assert_eq!(is_function("sqrt"), true);
/// assert_eq!(is_function("pi"), false);
/// ```
pub fn is_function(name: &str) -> bool {
    FUNCTIONS.contains_key(name)
}

fn domain(function: &'static str, argument: f64) -> Error {
    Error::Domain { function, argument }
}

/// Round `x` to `POLE_DIGITS` decimals
fn round_pole(x: f64) -> f64 {
    let scale = libm::pow(10.0, f64::from(POLE_DIGITS));
    libm::round(x * scale) / scale
}

fn rounds_to_zero(x: f64) -> bool {
    round_pole(x) == 0.0
}
