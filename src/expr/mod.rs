use log::debug;

use crate::error::CalcError;

mod evaluator;
mod postfix;
mod tokenizer;
mod validate;

pub use evaluator::evaluate;
pub use postfix::to_postfix;
pub use tokenizer::tokenize;
pub use validate::{validate, validate_with_limit, MAX_EXPR_LEN};

/// One lexical element of an arithmetic expression.
///
/// Produced only by [`tokenize`] from input that already passed
/// [`validate`]; every later stage dispatches on these variants
/// exhaustively.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token {
    Number(f64),
    Operator(Op),
    LeftParen,
    RightParen,
}

/// The four binary operators, all left-associative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Op {
    /// Binding strength used by the shunting-yard conversion.
    pub fn precedence(self) -> u8 {
        match self {
            Op::Add | Op::Subtract => 1,
            Op::Multiply | Op::Divide => 2,
        }
    }

    /// Applies the operator to `left` and `right` operands.
    ///
    /// Division by zero is rejected before the division happens, so no
    /// infinities or NaNs leak out of the pipeline.
    pub fn apply(self, left: f64, right: f64) -> Result<f64, CalcError> {
        match self {
            Op::Add => Ok(left + right),
            Op::Subtract => Ok(left - right),
            Op::Multiply => Ok(left * right),
            Op::Divide => {
                if right == 0.0 {
                    Err(CalcError::DivisionByZero)
                } else {
                    Ok(left / right)
                }
            }
        }
    }

    /// Resolves the wire names used by the structured calculator endpoint.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "add" => Some(Op::Add),
            "sub" => Some(Op::Subtract),
            "mul" => Some(Op::Multiply),
            "div" => Some(Op::Divide),
            _ => None,
        }
    }
}

impl TryFrom<char> for Op {
    type Error = CalcError;

    fn try_from(symbol: char) -> Result<Self, Self::Error> {
        match symbol {
            '+' => Ok(Op::Add),
            '-' => Ok(Op::Subtract),
            '*' => Ok(Op::Multiply),
            '/' => Ok(Op::Divide),
            _ => Err(CalcError::InvalidCharacters),
        }
    }
}

/// Full pipeline: validate -> tokenize -> to postfix -> evaluate.
///
/// Strictly linear and synchronous; the first failing stage short-circuits
/// and its error is returned unchanged. A pure function of the input
/// string.
pub fn compute(expression: &str) -> Result<f64, CalcError> {
    debug!("Computing expression: {}", expression);
    validate(expression)?;
    let tokens = tokenize(expression)?;
    let rpn = to_postfix(tokens)?;
    evaluate(&rpn)
}
