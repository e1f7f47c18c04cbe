use crate::error::CalcError;

/// Longest raw expression the pipeline will accept.
pub const MAX_EXPR_LEN: usize = 100;

/// Checks a raw expression against [`MAX_EXPR_LEN`].
pub fn validate(expression: &str) -> Result<(), CalcError> {
    validate_with_limit(expression, MAX_EXPR_LEN)
}

/// Pre-parse checks on the raw expression string.
///
/// Emptiness is judged on the trimmed string, the length bound on the raw
/// one. Pure; no stage after this one should ever see a character outside
/// the allowed set.
pub fn validate_with_limit(expression: &str, max_len: usize) -> Result<(), CalcError> {
    if expression.trim().is_empty() {
        return Err(CalcError::EmptyExpression);
    }
    if expression.len() > max_len {
        return Err(CalcError::TooLong);
    }
    if !expression.chars().all(is_allowed) {
        return Err(CalcError::InvalidCharacters);
    }
    Ok(())
}

fn is_allowed(ch: char) -> bool {
    ch.is_ascii_digit() || matches!(ch, '.' | '+' | '-' | '*' | '/' | '(' | ')' | ' ')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_well_formed_expression() {
        assert_eq!(validate("1 + 2.5 * (3 - 4) / 5"), Ok(()));
    }

    #[test]
    fn test_rejects_empty_and_blank() {
        assert_eq!(validate(""), Err(CalcError::EmptyExpression));
        assert_eq!(validate("     "), Err(CalcError::EmptyExpression));
    }

    #[test]
    fn test_rejects_over_length_input() {
        let expr = "9".repeat(101);
        assert_eq!(validate(&expr), Err(CalcError::TooLong));
        assert_eq!(validate(&"9".repeat(100)), Ok(()));
    }

    #[test]
    fn test_length_bound_counts_surrounding_whitespace() {
        // The raw length is what is checked, not the trimmed one.
        let expr = format!("{}  ", "9".repeat(99));
        assert_eq!(validate(&expr), Err(CalcError::TooLong));
    }

    #[test]
    fn test_rejects_characters_outside_allowed_set() {
        assert_eq!(validate("2+2a"), Err(CalcError::InvalidCharacters));
        assert_eq!(validate("2^3"), Err(CalcError::InvalidCharacters));
        assert_eq!(validate("1\t+ 2"), Err(CalcError::InvalidCharacters));
    }

    #[test]
    fn test_custom_limit() {
        assert_eq!(validate_with_limit("1+2", 3), Ok(()));
        assert_eq!(validate_with_limit("1+23", 3), Err(CalcError::TooLong));
    }
}
