#![forbid(unsafe_code)]

use crate::ToolError;
use serde_json::Value;

/// Argument readers for `tools/call` payloads. Types are checked before any
/// I/O or network effect; the schemas advertise the same contract via
/// `additionalProperties: false`, but enforcement lives here.
pub(crate) fn require_string(
    args: &serde_json::Map<String, Value>,
    key: &str,
) -> Result<String, ToolError> {
    match args.get(key) {
        Some(Value::String(v)) => Ok(v.clone()),
        Some(_) => Err(ToolError::InvalidArgument(format!(
            "{key} must be a string"
        ))),
        None => Err(ToolError::InvalidArgument(format!("{key} is required"))),
    }
}

pub(crate) fn optional_string(
    args: &serde_json::Map<String, Value>,
    key: &str,
) -> Result<Option<String>, ToolError> {
    let Some(value) = args.get(key) else {
        return Ok(None);
    };
    match value {
        Value::Null => Ok(None),
        Value::String(v) => Ok(Some(v.to_string())),
        _ => Err(ToolError::InvalidArgument(format!(
            "{key} must be a string"
        ))),
    }
}

pub(crate) fn optional_bool(
    args: &serde_json::Map<String, Value>,
    key: &str,
) -> Result<Option<bool>, ToolError> {
    let Some(value) = args.get(key) else {
        return Ok(None);
    };
    match value {
        Value::Null => Ok(None),
        Value::Bool(v) => Ok(Some(*v)),
        _ => Err(ToolError::InvalidArgument(format!(
            "{key} must be a boolean"
        ))),
    }
}

pub(crate) fn optional_f64(
    args: &serde_json::Map<String, Value>,
    key: &str,
) -> Result<Option<f64>, ToolError> {
    let Some(value) = args.get(key) else {
        return Ok(None);
    };
    match value {
        Value::Null => Ok(None),
        Value::Number(n) => n
            .as_f64()
            .map(Some)
            .ok_or_else(|| ToolError::InvalidArgument(format!("{key} must be a number"))),
        _ => Err(ToolError::InvalidArgument(format!(
            "{key} must be a number"
        ))),
    }
}

pub(crate) fn reject_unknown_keys(
    args: &serde_json::Map<String, Value>,
    allowed: &[&str],
) -> Result<(), ToolError> {
    for key in args.keys() {
        if !allowed.contains(&key.as_str()) {
            return Err(ToolError::InvalidArgument(format!(
                "unknown argument: {key}"
            )));
        }
    }
    Ok(())
}
