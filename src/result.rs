use std::{
    error::Error,
    fmt::{self, Display, Formatter},
};

/// This will be thrown at you if an expression could not be evaluated. Ok,
/// obviously it is not an exception, so thrown needs to be understood
/// figuratively. Every variant names the grammar rule that gave up.
#[derive(Clone, PartialEq, Debug)]
pub enum EvalError {
    /// A character appeared where no grammar rule accepts it, e.g., a stray
    /// symbol or a parenthesis that does not close anything.
    UnexpectedCharacter {
        /// Byte position of the offending character.
        position: usize,
        /// The character itself.
        character: char,
    },
    /// The input ended while an operand was still expected, e.g., `2 + `.
    UnexpectedEndOfInput {
        /// Byte position one past the last character.
        position: usize,
    },
    /// A letter-sequence token did not match any recognized function name.
    UnknownFunction {
        /// The name as it appeared in the input.
        name: String,
    },
    /// The grammar matched a prefix of the input but non-space characters
    /// remained after it.
    TrailingInput {
        /// Byte position of the first unconsumed character.
        position: usize,
    },
    /// Factorial of a negative, non-integral, or too large argument.
    InvalidFactorialArgument {
        /// The offending argument, converted to `f64` for reporting.
        value: f64,
    },
    /// A numeric token could not be converted to a number, e.g., `3.4.5`.
    MalformedNumber {
        /// The token as it appeared in the input.
        text: String,
    },
}

impl Display for EvalError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            EvalError::UnexpectedCharacter {
                position,
                character,
            } => write!(f, "unexpected character '{character}' at position {position}"),
            EvalError::UnexpectedEndOfInput { position } => {
                write!(f, "unexpected end of input at position {position}")
            }
            EvalError::UnknownFunction { name } => write!(f, "unknown function '{name}'"),
            EvalError::TrailingInput { position } => {
                write!(f, "trailing input from position {position}")
            }
            EvalError::InvalidFactorialArgument { value } => {
                write!(f, "cannot compute the factorial of {value}")
            }
            EvalError::MalformedNumber { text } => write!(f, "malformed number '{text}'"),
        }
    }
}
impl Error for EvalError {}

/// Rdex' result type with [`EvalError`](EvalError) as error type.
pub type EvalResult<U> = Result<U, EvalError>;
