use crate::{EvalError, EvalResult};
use num::Float;

/// Factorial arguments above this would loop for no gain, the result does not
/// fit into an `f64` anyway.
const FACTORIAL_ARG_MAX: f64 = 170.0;

/// A named prefix function such as `sin` or `sqrt`. The parser applies it to
/// the factor that follows its name in the input.
#[derive(Copy, Clone, Debug)]
pub struct UnaryFunc<T: Copy> {
    /// Representation of the function in the string to be parsed, e.g., `sqrt`.
    pub repr: &'static str,
    /// Implementation of the function. Fallible, since the factorial rejects
    /// some arguments.
    pub apply: fn(T) -> EvalResult<T>,
}

fn factorial<T: Float>(x: T) -> EvalResult<T> {
    let fail = || EvalError::InvalidFactorialArgument {
        value: x.to_f64().unwrap_or(f64::NAN),
    };
    if x < T::zero() || x.fract() != T::zero() {
        return Err(fail());
    }
    if x.to_f64().map_or(true, |v| v > FACTORIAL_ARG_MAX) {
        return Err(fail());
    }
    let mut fact = T::one();
    let mut i = T::one();
    while i <= x {
        fact = fact * i;
        i = i + T::one();
    }
    Ok(fact)
}

/// Returns the functions the evaluator knows about. The trigonometric ones
/// interpret their argument in degrees, the hyperbolic ones do not.
pub fn make_default_functions<T: Float>() -> Vec<UnaryFunc<T>> {
    vec![
        UnaryFunc {
            repr: "sqrt",
            apply: |a: T| Ok(a.sqrt()),
        },
        UnaryFunc {
            repr: "log",
            apply: |a: T| Ok(a.log10()),
        },
        UnaryFunc {
            repr: "ln",
            apply: |a: T| Ok(a.ln()),
        },
        UnaryFunc {
            repr: "sin",
            apply: |a: T| Ok(a.to_radians().sin()),
        },
        UnaryFunc {
            repr: "cos",
            apply: |a: T| Ok(a.to_radians().cos()),
        },
        UnaryFunc {
            repr: "tan",
            apply: |a: T| Ok(a.to_radians().tan()),
        },
        UnaryFunc {
            repr: "cot",
            apply: |a: T| Ok(T::one() / a.to_radians().tan()),
        },
        UnaryFunc {
            repr: "sinh",
            apply: |a: T| Ok(a.sinh()),
        },
        UnaryFunc {
            repr: "cosh",
            apply: |a: T| Ok(a.cosh()),
        },
        UnaryFunc {
            repr: "tanh",
            apply: |a: T| Ok(a.tanh()),
        },
        UnaryFunc {
            repr: "!",
            apply: factorial,
        },
    ]
}
