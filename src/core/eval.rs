//! Arithmetic expression evaluator.
//!
//! Replaces the kind of "hand the string to a code evaluator" shortcut a
//! browser calculator might take with a small dedicated parser: tokenize
//! digits and operators, then recursive descent with standard precedence.
//! Arithmetic is f64, so `10/4` is 2.5 and division by zero produces a
//! non-finite value instead of an error (a non-finite result can never match
//! an integer target, so the round controller treats it as a plain miss).

use crate::types::Operator;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum EvalError {
    #[error("empty expression")]
    Empty,
    #[error("unexpected character '{0}'")]
    UnexpectedChar(char),
    #[error("expected a number")]
    ExpectedNumber,
    #[error("unexpected trailing input")]
    TrailingInput,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Token {
    Number(f64),
    Op(Operator),
}

fn tokenize(input: &str) -> Result<Vec<Token>, EvalError> {
    let mut tokens = Vec::new();
    let mut chars = input.chars().peekable();

    while let Some(&c) = chars.peek() {
        if c.is_ascii_digit() {
            let mut value = 0f64;
            while let Some(&d) = chars.peek() {
                match d.to_digit(10) {
                    Some(digit) => {
                        value = value * 10.0 + digit as f64;
                        chars.next();
                    }
                    None => break,
                }
            }
            tokens.push(Token::Number(value));
        } else if let Some(op) = Operator::from_char(c) {
            tokens.push(Token::Op(op));
            chars.next();
        } else if c.is_whitespace() {
            chars.next();
        } else {
            return Err(EvalError::UnexpectedChar(c));
        }
    }

    Ok(tokens)
}

struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> Parser<'a> {
    fn peek(&self) -> Option<Token> {
        self.tokens.get(self.pos).copied()
    }

    fn bump(&mut self) -> Option<Token> {
        let t = self.peek();
        if t.is_some() {
            self.pos += 1;
        }
        t
    }

    // expr := term (('+' | '-') term)*
    fn expr(&mut self) -> Result<f64, EvalError> {
        let mut acc = self.term()?;
        while let Some(Token::Op(op @ (Operator::Add | Operator::Sub))) = self.peek() {
            self.bump();
            let rhs = self.term()?;
            acc = match op {
                Operator::Add => acc + rhs,
                _ => acc - rhs,
            };
        }
        Ok(acc)
    }

    // term := factor (('*' | '/') factor)*
    fn term(&mut self) -> Result<f64, EvalError> {
        let mut acc = self.factor()?;
        while let Some(Token::Op(op @ (Operator::Mul | Operator::Div))) = self.peek() {
            self.bump();
            let rhs = self.factor()?;
            acc = match op {
                Operator::Mul => acc * rhs,
                _ => acc / rhs,
            };
        }
        Ok(acc)
    }

    // factor := NUMBER | '-' factor
    fn factor(&mut self) -> Result<f64, EvalError> {
        match self.bump() {
            Some(Token::Number(n)) => Ok(n),
            Some(Token::Op(Operator::Sub)) => Ok(-self.factor()?),
            _ => Err(EvalError::ExpectedNumber),
        }
    }
}

/// Evaluate an expression composed of integers and `+ - * /`.
pub fn evaluate(input: &str) -> Result<f64, EvalError> {
    let tokens = tokenize(input)?;
    if tokens.is_empty() {
        return Err(EvalError::Empty);
    }

    let mut parser = Parser {
        tokens: &tokens,
        pos: 0,
    };
    let value = parser.expr()?;
    if parser.pos != tokens.len() {
        return Err(EvalError::TrailingInput);
    }
    Ok(value)
}

/// Format a result for the status message: integral values print without a
/// fractional part, non-finite values as "inf"/"NaN".
pub fn format_number(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}
