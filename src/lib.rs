pub mod api;
pub mod error;
pub mod expr;
pub mod service;
pub mod stats;

pub use error::CalcError;
pub use service::CalcService;
pub use stats::{InMemoryUsageStats, UsageStats};

/// Evaluates a free-text arithmetic expression in one call, without any
/// usage accounting.
pub fn compute_expression(expression: &str) -> Result<f64, CalcError> {
    expr::compute(expression)
}
