use crate::functions::{make_default_functions, UnaryFunc};
use crate::{EvalError, EvalResult};
use num::Float;
use std::str::FromStr;

/// Cursor over the input of one evaluation call. Created when [`eval`](eval)
/// is entered and dropped when it returns, never shared between calls.
///
/// `cur` always holds the character at byte position `pos`, or `None` once
/// the cursor has run past the end. Only [`advance`](ParserState::advance)
/// moves the cursor, so the two stay in sync.
struct ParserState<'a, T: Copy> {
    text: &'a str,
    pos: usize,
    cur: Option<char>,
    funcs: &'a [UnaryFunc<T>],
}

impl<'a, T: Float + FromStr> ParserState<'a, T> {
    fn new(text: &'a str, funcs: &'a [UnaryFunc<T>]) -> Self {
        Self {
            text,
            pos: 0,
            cur: text.as_bytes().first().map(|&b| b as char),
            funcs,
        }
    }

    fn advance(&mut self) {
        self.pos += 1;
        self.cur = self.text.as_bytes().get(self.pos).map(|&b| b as char);
    }

    /// Skips spaces, then consumes `expected` if it is the next character.
    /// Spaces are only ever skipped here, so they end number and
    /// function-name tokens but are harmless around operators.
    fn eat(&mut self, expected: char) -> bool {
        while self.cur == Some(' ') {
            self.advance();
        }
        if self.cur == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// `expression := term (('+' | '-') term)*`
    fn expression(&mut self) -> EvalResult<T> {
        let mut x = self.term()?;
        loop {
            if self.eat('+') {
                x = x + self.term()?;
            } else if self.eat('-') {
                x = x - self.term()?;
            } else {
                return Ok(x);
            }
        }
    }

    /// `term := power (('*' | '/') power)*`
    fn term(&mut self) -> EvalResult<T> {
        let mut x = self.power()?;
        loop {
            if self.eat('*') {
                x = x * self.power()?;
            } else if self.eat('/') {
                x = x / self.power()?;
            } else {
                return Ok(x);
            }
        }
    }

    /// `power := factor ('^' factor)*`
    ///
    /// The right operand is a factor, not a power, so repeated `^` chains
    /// left to right and `2^3^2` evaluates to `(2^3)^2`.
    fn power(&mut self) -> EvalResult<T> {
        let mut x = self.factor()?;
        while self.eat('^') {
            x = x.powf(self.factor()?);
        }
        Ok(x)
    }

    /// `factor := '+' power | '-' power | '(' expression ')' | NUMBER
    ///          | FUNCTION factor`
    ///
    /// Unary sign recurses into `power`, so it wraps the whole power
    /// expression and `-2^2` evaluates to `-(2^2)`.
    fn factor(&mut self) -> EvalResult<T> {
        if self.eat('+') {
            return self.power();
        }
        if self.eat('-') {
            return Ok(-self.power()?);
        }
        if self.eat('(') {
            let x = self.expression()?;
            if !self.eat(')') {
                return Err(self.unexpected());
            }
            return Ok(x);
        }
        match self.cur {
            Some(c) if c.is_ascii_digit() || c == '.' => self.number(),
            Some(c) if c.is_ascii_lowercase() || c == '!' => self.function(),
            _ => Err(self.unexpected()),
        }
    }

    /// Takes the maximal run of digits and dots and converts it. The token
    /// rule admits strings like `3.4.5` that no float can be made of, those
    /// surface as [`EvalError::MalformedNumber`](EvalError::MalformedNumber).
    fn number(&mut self) -> EvalResult<T> {
        let start = self.pos;
        while matches!(self.cur, Some(c) if c.is_ascii_digit() || c == '.') {
            self.advance();
        }
        let text = &self.text[start..self.pos];
        text.parse::<T>().map_err(|_| EvalError::MalformedNumber {
            text: text.to_string(),
        })
    }

    /// Takes the maximal run of letters and exclamation marks, looks it up in
    /// the function table, and applies the function to the factor that
    /// follows. Since the argument is a factor, functions stack without
    /// parentheses and `sin cos 0` evaluates to `sin(cos(0))`.
    fn function(&mut self) -> EvalResult<T> {
        let start = self.pos;
        while matches!(self.cur, Some(c) if c.is_ascii_lowercase() || c == '!') {
            self.advance();
        }
        let text = self.text;
        let name = &text[start..self.pos];
        match self.funcs.iter().find(|f| f.repr == name).copied() {
            Some(func) => {
                let arg = self.factor()?;
                (func.apply)(arg)
            }
            None => Err(EvalError::UnknownFunction {
                name: name.to_string(),
            }),
        }
    }

    fn unexpected(&self) -> EvalError {
        match self.cur {
            Some(character) => EvalError::UnexpectedCharacter {
                position: self.pos,
                character,
            },
            None => EvalError::UnexpectedEndOfInput { position: self.pos },
        }
    }
}

/// Evaluates a mathematical expression in a single recursive-descent pass
/// and returns the numeric result.
///
/// # Errors
///
/// An [`EvalError`](EvalError) is returned, if
///
/// * the input contains a non-ASCII character,
/// * a character appears where no grammar rule accepts it, e.g., `2 $ 3`
///   or a parenthesis that never closes,
/// * the input ends while an operand is still expected, e.g., `2 + `,
/// * a name does not match any known function, e.g., `tanx(1)`,
/// * non-space characters remain after the grammar has matched a prefix,
///   e.g., `2 + 3 foo`,
/// * the factorial is applied to a negative, non-integral, or huge
///   argument, or
/// * a numeric token cannot be converted to a float, e.g., `3.4.5`.
///
pub fn eval<T>(text: &str) -> EvalResult<T>
where
    T: Float + FromStr,
{
    // Byte-indexed cursor arithmetic is only exact on ASCII input.
    if let Some((position, character)) = text.chars().enumerate().find(|(_, c)| !c.is_ascii()) {
        return Err(EvalError::UnexpectedCharacter {
            position,
            character,
        });
    }
    let funcs = make_default_functions::<T>();
    let mut state = ParserState::new(text, &funcs);
    let x = state.expression()?;
    match state.cur {
        Some(_) => Err(EvalError::TrailingInput {
            position: state.pos,
        }),
        None => Ok(x),
    }
}
