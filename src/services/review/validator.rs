use serde_json::Value;

use crate::modules::homework::model::{ApiResponse, HomeworkRecord};
use crate::services::review::ReviewError;

/// Decode a raw API body into an [`ApiResponse`].
///
/// The body must be an object whose `homeworks` key holds an array. Elements are
/// not inspected here. `current_date` is optional, but when present it must be an
/// integer. An empty `homeworks` array is accepted; see [`check_response`].
pub fn decode_response(body: &Value) -> Result<ApiResponse, ReviewError> {
    let object = body
        .as_object()
        .ok_or_else(|| ReviewError::MalformedResponse("body is not a JSON object".to_string()))?;

    let homeworks = object
        .get("homeworks")
        .ok_or_else(|| ReviewError::MalformedResponse("missing 'homeworks' key".to_string()))?
        .as_array()
        .ok_or_else(|| ReviewError::MalformedResponse("'homeworks' is not a list".to_string()))?
        .clone();

    let current_date = match object.get("current_date") {
        None | Some(Value::Null) => None,
        Some(value) => Some(value.as_i64().ok_or_else(|| {
            ReviewError::MalformedResponse(format!("'current_date' is not an integer: {}", value))
        })?),
    };

    Ok(ApiResponse {
        homeworks,
        current_date,
    })
}

/// Return the homework list, rejecting an empty one.
pub fn check_response(response: &ApiResponse) -> Result<&[Value], ReviewError> {
    if response.homeworks.is_empty() {
        return Err(ReviewError::EmptyHomeworkList);
    }
    Ok(&response.homeworks)
}

/// Interpret one raw record. Only a non-object value is rejected; field-level
/// problems are left for [`parse_status`](super::parse_status) to report.
pub fn parse_record(record: &Value) -> Result<HomeworkRecord, ReviewError> {
    if !record.is_object() {
        return Err(ReviewError::MalformedResponse(format!(
            "homework record is not an object: {}",
            record
        )));
    }
    serde_json::from_value(record.clone())
        .map_err(|e| ReviewError::MalformedResponse(format!("homework record: {}", e)))
}
