use log::debug;

use crate::error::CalcError;
use crate::expr::{Op, Token};

/// Scans a validated expression into tokens, left to right, one pass.
///
/// A `+` or `-` in unary position (start of input, or right after an
/// operator or `(`) that is immediately followed by a digit or dot is
/// folded into the number literal it precedes. A consequence, kept on
/// purpose because the service has always behaved this way: chained signs
/// are absorbed one pair at a time, so `"2++3"` lexes as `[2, +, 3]` and
/// `"2+-3"` as `[2, +, -3]`.
pub fn tokenize(expression: &str) -> Result<Vec<Token>, CalcError> {
    let bytes = expression.as_bytes();
    let mut tokens: Vec<Token> = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        let ch = bytes[i];
        match ch {
            b' ' | b'\t' | b'\n' | b'\r' => i += 1,

            b'+' | b'-' => {
                let signed_number_follows = in_unary_position(&tokens)
                    && bytes
                        .get(i + 1)
                        .is_some_and(|&next| next.is_ascii_digit() || next == b'.');
                if signed_number_follows {
                    let (value, next) = scan_number(bytes, i + 1)?;
                    let sign = if ch == b'-' { -1.0 } else { 1.0 };
                    tokens.push(Token::Number(sign * value));
                    i = next;
                } else {
                    tokens.push(Token::Operator(Op::try_from(ch as char)?));
                    i += 1;
                }
            }

            b'*' | b'/' => {
                tokens.push(Token::Operator(Op::try_from(ch as char)?));
                i += 1;
            }

            b'(' => {
                tokens.push(Token::LeftParen);
                i += 1;
            }
            b')' => {
                tokens.push(Token::RightParen);
                i += 1;
            }

            b'0'..=b'9' | b'.' => {
                let (value, next) = scan_number(bytes, i)?;
                tokens.push(Token::Number(value));
                i = next;
            }

            // Unreachable after validation, but the scanner does not rely
            // on that.
            _ => return Err(CalcError::InvalidCharacters),
        }
    }

    debug!("Tokenized {:?} into {} tokens", expression, tokens.len());
    Ok(tokens)
}

/// Whether a sign at the current point would belong to a number rather
/// than act as a binary operator.
fn in_unary_position(tokens: &[Token]) -> bool {
    matches!(
        tokens.last(),
        None | Some(Token::Operator(_)) | Some(Token::LeftParen)
    )
}

/// Consumes the maximal run of digits and dots starting at `start`,
/// returning the parsed value and the index just past the literal.
fn scan_number(bytes: &[u8], start: usize) -> Result<(f64, usize), CalcError> {
    let mut end = start;
    let mut dot_seen = false;
    while end < bytes.len() && (bytes[end].is_ascii_digit() || bytes[end] == b'.') {
        if bytes[end] == b'.' {
            if dot_seen {
                return Err(CalcError::InvalidNumberFormat);
            }
            dot_seen = true;
        }
        end += 1;
    }

    let literal = &bytes[start..end];
    if literal.is_empty() || literal == b"." {
        return Err(CalcError::InvalidNumberFormat);
    }

    // The literal is ASCII digits and at most one dot, so both conversions
    // hold by construction.
    let value = std::str::from_utf8(literal)
        .map_err(|_| CalcError::InvalidNumberFormat)?
        .parse::<f64>()
        .map_err(|_| CalcError::InvalidNumberFormat)?;
    Ok((value, end))
}
