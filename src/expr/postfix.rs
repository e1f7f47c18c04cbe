use crate::error::CalcError;
use crate::expr::{Op, Token};

/// What the shunting-yard holding stack may contain. Right parens are
/// resolved on sight and never stored.
enum StackEntry {
    Op(Op),
    LeftParen,
}

/// Reorders infix tokens into postfix form via shunting-yard.
///
/// Popping while the stacked operator's precedence is greater *or equal*
/// is what makes equal-precedence chains group left to right, e.g.
/// `8-3-2` becomes `8 3 - 2 -`.
pub fn to_postfix(tokens: Vec<Token>) -> Result<Vec<Token>, CalcError> {
    let mut output: Vec<Token> = Vec::with_capacity(tokens.len());
    let mut stack: Vec<StackEntry> = Vec::new();

    for token in tokens {
        match token {
            Token::Number(_) => output.push(token),

            Token::Operator(op) => {
                while let Some(StackEntry::Op(top)) = stack.last() {
                    if top.precedence() < op.precedence() {
                        break;
                    }
                    output.push(Token::Operator(*top));
                    stack.pop();
                }
                stack.push(StackEntry::Op(op));
            }

            Token::LeftParen => stack.push(StackEntry::LeftParen),

            Token::RightParen => loop {
                match stack.pop() {
                    Some(StackEntry::Op(op)) => output.push(Token::Operator(op)),
                    Some(StackEntry::LeftParen) => break,
                    None => return Err(CalcError::MismatchedParentheses),
                }
            },
        }
    }

    while let Some(entry) = stack.pop() {
        match entry {
            StackEntry::Op(op) => output.push(Token::Operator(op)),
            StackEntry::LeftParen => return Err(CalcError::MismatchedParentheses),
        }
    }

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expr::tokenize;

    fn rpn(expression: &str) -> Result<Vec<Token>, CalcError> {
        to_postfix(tokenize(expression).unwrap())
    }

    #[test]
    fn test_precedence_ordering() {
        // 12 + 3*4  ->  12 3 4 * +
        assert_eq!(
            rpn("12+3*4").unwrap(),
            vec![
                Token::Number(12.0),
                Token::Number(3.0),
                Token::Number(4.0),
                Token::Operator(Op::Multiply),
                Token::Operator(Op::Add),
            ]
        );
    }

    #[test]
    fn test_equal_precedence_pops_left_to_right() {
        // 8-3-2  ->  8 3 - 2 -
        assert_eq!(
            rpn("8-3-2").unwrap(),
            vec![
                Token::Number(8.0),
                Token::Number(3.0),
                Token::Operator(Op::Subtract),
                Token::Number(2.0),
                Token::Operator(Op::Subtract),
            ]
        );
    }

    #[test]
    fn test_parentheses_are_resolved_and_dropped() {
        // (1+2)*3  ->  1 2 + 3 *
        let converted = rpn("(1+2)*3").unwrap();
        assert_eq!(
            converted,
            vec![
                Token::Number(1.0),
                Token::Number(2.0),
                Token::Operator(Op::Add),
                Token::Number(3.0),
                Token::Operator(Op::Multiply),
            ]
        );
        assert!(!converted
            .iter()
            .any(|t| matches!(t, Token::LeftParen | Token::RightParen)));
    }

    #[test]
    fn test_unclosed_left_paren() {
        assert_eq!(rpn("(1+2"), Err(CalcError::MismatchedParentheses));
    }

    #[test]
    fn test_unopened_right_paren() {
        assert_eq!(rpn("1+2)"), Err(CalcError::MismatchedParentheses));
    }

    #[test]
    fn test_lower_precedence_does_not_pop_higher() {
        // 2*3+4  ->  2 3 * 4 +
        assert_eq!(
            rpn("2*3+4").unwrap(),
            vec![
                Token::Number(2.0),
                Token::Number(3.0),
                Token::Operator(Op::Multiply),
                Token::Number(4.0),
                Token::Operator(Op::Add),
            ]
        );
        // 2+3*4  ->  2 3 4 * +
        assert_eq!(
            rpn("2+3*4").unwrap(),
            vec![
                Token::Number(2.0),
                Token::Number(3.0),
                Token::Number(4.0),
                Token::Operator(Op::Multiply),
                Token::Operator(Op::Add),
            ]
        );
    }
}
