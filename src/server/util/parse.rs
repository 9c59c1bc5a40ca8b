use axum::extract::{rejection::PathRejection, Path};
use serde_json::Value;

use crate::server::error::AppError;

/// Parses a user id supplied as query text.
///
/// Returns `None` when the value is absent, is not an integer, or is zero. A zero
/// id never names a stored row, so it is treated the same as a missing one.
///
/// # Arguments
/// - `value` - Raw query parameter value
///
/// # Returns
/// - `Some(i32)` - Usable user id
/// - `None` - Treat the parameter as missing
pub fn parse_user_id(value: Option<&str>) -> Option<i32> {
    value
        .and_then(|raw| raw.trim().parse::<i32>().ok())
        .and_then(non_zero_id)
}

/// Discards a zero id.
pub fn non_zero_id(id: i32) -> Option<i32> {
    (id != 0).then_some(id)
}

/// Reads `user_id` from a JSON request body.
///
/// Accepts an integer or a numeric string. Anything else, a value outside the
/// `i32` range, or zero is treated as missing.
pub fn json_user_id(value: Option<&Value>) -> Option<i32> {
    match value? {
        Value::Number(number) => number
            .as_i64()
            .and_then(|id| i32::try_from(id).ok())
            .and_then(non_zero_id),
        Value::String(raw) => parse_user_id(Some(raw.as_str())),
        _ => None,
    }
}

/// Unwraps an integer path segment, answering `NotFound` when it does not parse.
///
/// A segment that is not an `i32` cannot name a stored row, so it is reported the
/// same way as an unknown id.
///
/// # Arguments
/// - `path` - Result of the `Path` extractor
/// - `not_found` - Message for the entity addressed by the route
pub fn path_id(path: Result<Path<i32>, PathRejection>, not_found: &str) -> Result<i32, AppError> {
    match path {
        Ok(Path(id)) => Ok(id),
        Err(rejection) => {
            tracing::debug!("Rejected path id: {}", rejection);
            Err(AppError::NotFound(not_found.to_string()))
        }
    }
}
