use thiserror::Error;

/// Everything that can go wrong inside the evaluation pipeline.
///
/// The `Display` text of each variant is the message returned to callers at
/// the boundary, so it is part of the contract. `InsufficientOperands` and
/// `MalformedExpression` are distinct conditions that deliberately share the
/// same message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CalcError {
    /// The expression value was not textual. Unreachable inside the typed
    /// pipeline; surfaced only when a JSON body carries a non-string field.
    #[error("Invalid expression type")]
    InvalidType,
    #[error("Empty expression")]
    EmptyExpression,
    #[error("Expression too long")]
    TooLong,
    #[error("Invalid characters")]
    InvalidCharacters,
    /// A numeric literal was empty, a bare dot, or carried two dots.
    #[error("Invalid number format")]
    InvalidNumberFormat,
    #[error("Mismatched parentheses")]
    MismatchedParentheses,
    /// An operator was applied with fewer than two values on the stack.
    #[error("Invalid expression")]
    InsufficientOperands,
    /// More or fewer than one value remained after evaluation.
    #[error("Invalid expression")]
    MalformedExpression,
    #[error("Division by zero")]
    DivisionByZero,
}
