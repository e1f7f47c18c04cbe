use log::debug;

use crate::error::CalcError;
use crate::expr::Token;

/// Reduces a postfix token sequence to a single value with one value
/// stack.
///
/// Operands pop in reverse push order: the most recent value is the right
/// operand. Exactly one value must remain once the scan finishes.
pub fn evaluate(rpn: &[Token]) -> Result<f64, CalcError> {
    let mut stack: Vec<f64> = Vec::new();

    for token in rpn {
        match token {
            Token::Number(value) => stack.push(*value),

            Token::Operator(op) => {
                let right = stack.pop().ok_or(CalcError::InsufficientOperands)?;
                let left = stack.pop().ok_or(CalcError::InsufficientOperands)?;
                stack.push(op.apply(left, right)?);
            }

            // The converter strips parentheses; one here means the caller
            // skipped it.
            Token::LeftParen | Token::RightParen => return Err(CalcError::MalformedExpression),
        }
    }

    let result = stack.pop().ok_or(CalcError::MalformedExpression)?;
    if !stack.is_empty() {
        debug!("Evaluation left {} extra operand(s) on the stack", stack.len());
        return Err(CalcError::MalformedExpression);
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expr::Op;

    #[test]
    fn test_single_number() {
        assert_eq!(evaluate(&[Token::Number(7.5)]).unwrap(), 7.5);
    }

    #[test]
    fn test_operand_order() {
        // 8 3 -  ->  8 - 3
        let rpn = [
            Token::Number(8.0),
            Token::Number(3.0),
            Token::Operator(Op::Subtract),
        ];
        assert_eq!(evaluate(&rpn).unwrap(), 5.0);

        // 8 4 /  ->  8 / 4
        let rpn = [
            Token::Number(8.0),
            Token::Number(4.0),
            Token::Operator(Op::Divide),
        ];
        assert_eq!(evaluate(&rpn).unwrap(), 2.0);
    }

    #[test]
    fn test_division_by_zero_is_checked_before_dividing() {
        let rpn = [
            Token::Number(10.0),
            Token::Number(0.0),
            Token::Operator(Op::Divide),
        ];
        assert_eq!(evaluate(&rpn), Err(CalcError::DivisionByZero));
    }

    #[test]
    fn test_operator_with_too_few_operands() {
        let rpn = [Token::Number(2.0), Token::Operator(Op::Add)];
        assert_eq!(evaluate(&rpn), Err(CalcError::InsufficientOperands));

        let rpn = [Token::Operator(Op::Multiply)];
        assert_eq!(evaluate(&rpn), Err(CalcError::InsufficientOperands));
    }

    #[test]
    fn test_leftover_operands_are_rejected() {
        let rpn = [Token::Number(1.0), Token::Number(2.0)];
        assert_eq!(evaluate(&rpn), Err(CalcError::MalformedExpression));
    }

    #[test]
    fn test_empty_sequence_is_rejected() {
        assert_eq!(evaluate(&[]), Err(CalcError::MalformedExpression));
    }

    #[test]
    fn test_parenthesis_token_is_rejected() {
        assert_eq!(
            evaluate(&[Token::LeftParen]),
            Err(CalcError::MalformedExpression)
        );
    }
}
