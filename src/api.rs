//! The request boundary, kept transport-free: handlers take raw JSON
//! bodies and produce HTTP-style status/body pairs. Routing and sockets
//! belong to whatever server embeds this crate.

use log::debug;
use serde_json::{json, Value};
use thiserror::Error;

use crate::error::CalcError;
use crate::expr::Op;
use crate::service::CalcService;
use crate::stats::UsageStats;

/// Errors that only exist at the JSON boundary, layered over the pipeline
/// taxonomy.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("Invalid JSON body")]
    InvalidRequestBody,
    #[error("'{0}' is required")]
    MissingField(&'static str),
    #[error("'{0}' must be a number")]
    NonNumericField(&'static str),
    #[error("Unknown operator: {0}")]
    UnknownOperator(String),
    #[error(transparent)]
    Calc(#[from] CalcError),
}

/// Status/body pair; 200 for success, 400 for every failure.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Value,
}

impl ApiResponse {
    fn ok(body: Value) -> Self {
        Self { status: 200, body }
    }

    fn bad_request(error: &ApiError) -> Self {
        Self {
            status: 400,
            body: json!({ "error": error.to_string() }),
        }
    }

    /// Failure attributed to one input field, e.g. dividing by a zero `b`.
    fn field_error(field: &str, error: &ApiError) -> Self {
        let mut bound = serde_json::Map::new();
        bound.insert(field.to_string(), Value::String(error.to_string()));
        Self {
            status: 400,
            body: json!({ "error": bound }),
        }
    }
}

/// Free-text compute: `{"expression": string}` in,
/// `{"expression", "result"}` out. The daily counter moves only on
/// success.
pub fn handle_compute<S: UsageStats>(service: &CalcService<S>, raw_body: &str) -> ApiResponse {
    match compute_from_body(service, raw_body) {
        Ok(response) => ApiResponse::ok(response),
        Err(error) => {
            debug!("Compute request rejected: {}", error);
            ApiResponse::bad_request(&error)
        }
    }
}

fn compute_from_body<S: UsageStats>(
    service: &CalcService<S>,
    raw_body: &str,
) -> Result<Value, ApiError> {
    let payload: Value = serde_json::from_str(raw_body).map_err(|_| ApiError::InvalidRequestBody)?;
    let expression = payload
        .get("expression")
        .ok_or(ApiError::MissingField("expression"))?
        .as_str()
        .ok_or(CalcError::InvalidType)?;

    let result = service.compute(expression)?;
    Ok(json!({ "expression": expression, "result": result }))
}

/// Structured two-operand compute: `{"a": number, "b": number, "op":
/// add|sub|mul|div}` in, `{"result"}` out. Division by a zero `b` is
/// rejected before any arithmetic, bound to field `b`. Never touches the
/// counter.
pub fn handle_calculate(raw_body: &str) -> ApiResponse {
    let payload: Value = match serde_json::from_str(raw_body) {
        Ok(payload) => payload,
        Err(_) => return ApiResponse::bad_request(&ApiError::InvalidRequestBody),
    };

    let (a, b, op) = match parse_operands(&payload) {
        Ok(parts) => parts,
        Err(error) => return ApiResponse::bad_request(&error),
    };

    if op == Op::Divide && b == 0.0 {
        return ApiResponse::field_error("b", &CalcError::DivisionByZero.into());
    }

    match op.apply(a, b) {
        Ok(result) => ApiResponse::ok(json!({ "result": result })),
        Err(error) => ApiResponse::bad_request(&error.into()),
    }
}

fn parse_operands(payload: &Value) -> Result<(f64, f64, Op), ApiError> {
    let a = numeric_field(payload, "a")?;
    let b = numeric_field(payload, "b")?;
    let op = payload
        .get("op")
        .ok_or(ApiError::MissingField("op"))?
        .as_str()
        .ok_or(ApiError::MissingField("op"))?;
    let op = Op::from_name(op).ok_or_else(|| ApiError::UnknownOperator(op.to_string()))?;
    Ok((a, b, op))
}

fn numeric_field(payload: &Value, field: &'static str) -> Result<f64, ApiError> {
    payload
        .get(field)
        .ok_or(ApiError::MissingField(field))?
        .as_f64()
        .ok_or(ApiError::NonNumericField(field))
}

/// Daily usage query: `{"date": ISO-8601, "today_count": integer}`.
pub fn handle_usage<S: UsageStats>(service: &CalcService<S>) -> ApiResponse {
    match serde_json::to_value(service.today_usage()) {
        Ok(body) => ApiResponse::ok(body),
        // Serializing a date and an integer cannot fail in practice.
        Err(_) => ApiResponse {
            status: 400,
            body: json!({ "error": "Invalid request" }),
        },
    }
}
