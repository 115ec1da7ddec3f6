#![doc(html_root_url = "https://docs.rs/rdex/0.1.0")]
//! Rdex evaluates mathematical expressions given as strings in a single
//! recursive-descent pass. No syntax tree is built, the result is computed
//! while the cursor walks the input.
//!
//! ```rust
//! use rdex::eval;
//!
//! let result = eval::<f64>("sin(90) + 2 * 3")?;
//! assert!((result - 7.0).abs() < 1e-12);
//! # Ok::<(), rdex::EvalError>(())
//! ```
//!
//! Binary operators are `^` (highest priority), `*`, `/`, `+`, and `-`.
//! Unary `+` and `-` bind around whole power expressions, so `-2^2` is
//! `-(2^2)`, and `^` chains left to right, so `2^3^2` is `(2^3)^2`. These
//! bindings are part of the contract of [`eval`](eval).
//!
//! Functions are written in prefix notation and apply to the factor that
//! follows, with or without parentheses, `sqrt 16` and `sqrt(16)` are the
//! same. Available are
//! * `sqrt`, `log` (base 10), `ln`,
//! * `sin`, `cos`, `tan`, and `cot` taking their argument in degrees,
//! * `sinh`, `cosh`, and `tanh` taking their argument in natural units, and
//! * `!`, the factorial of a non-negative integral factor, e.g., `!5`.
//!
//! Failures are reported as [`EvalError`](EvalError) values instead of
//! panics, and the evaluator keeps no state between calls.
mod functions;
mod parse;
mod result;
mod util;
pub use parse::eval;
pub use result::{EvalError, EvalResult};
