#![forbid(unsafe_code)]

use crate::{
    McpServer, ToolError, ToolResult, optional_bool, optional_string, reject_unknown_keys,
    require_string,
};
use serde_json::Value;

pub(crate) fn read_file(
    server: &McpServer,
    args: &serde_json::Map<String, Value>,
) -> Result<ToolResult, ToolError> {
    reject_unknown_keys(args, &["path"])?;
    let path = require_string(args, "path")?;

    let resolved = server.sandbox.resolve(&path)?;
    let display = server.sandbox.relative_display(&resolved);
    match std::fs::read_to_string(&resolved) {
        Ok(contents) => Ok(ToolResult::text(contents)),
        Err(err) => Err(io_tool_error(err, &display)),
    }
}

pub(crate) fn write_file(
    server: &McpServer,
    args: &serde_json::Map<String, Value>,
) -> Result<ToolResult, ToolError> {
    reject_unknown_keys(args, &["path", "content", "create_parents"])?;
    let path = require_string(args, "path")?;
    let content = require_string(args, "content")?;
    let create_parents = optional_bool(args, "create_parents")?.unwrap_or(false);

    let resolved = server.sandbox.resolve(&path)?;
    let display = server.sandbox.relative_display(&resolved);
    if create_parents
        && let Some(parent) = resolved.parent()
    {
        std::fs::create_dir_all(parent).map_err(|err| io_tool_error(err, &display))?;
    }
    std::fs::write(&resolved, content.as_bytes()).map_err(|err| io_tool_error(err, &display))?;
    Ok(ToolResult::text(format!("Wrote {display}")))
}

pub(crate) fn list_dir(
    server: &McpServer,
    args: &serde_json::Map<String, Value>,
) -> Result<ToolResult, ToolError> {
    reject_unknown_keys(args, &["path"])?;
    let path = optional_string(args, "path")?.unwrap_or_else(|| ".".to_string());

    let resolved = server.sandbox.resolve(&path)?;
    let display = server.sandbox.relative_display(&resolved);
    let entries = std::fs::read_dir(&resolved).map_err(|err| io_tool_error(err, &display))?;

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|err| io_tool_error(err, &display))?;
        let file_type = entry
            .file_type()
            .map_err(|err| io_tool_error(err, &display))?;
        let mut name = entry.file_name().to_string_lossy().to_string();
        if file_type.is_dir() {
            name.push('/');
        }
        names.push(name);
    }
    names.sort();

    if names.is_empty() {
        Ok(ToolResult::text("(empty)"))
    } else {
        Ok(ToolResult::text(names.join("\n")))
    }
}

/// Map I/O failures into the tool taxonomy; anything without a dedicated
/// variant surfaces as a generic message carrying the original error text.
fn io_tool_error(err: std::io::Error, path: &str) -> ToolError {
    match err.kind() {
        std::io::ErrorKind::NotFound => ToolError::NotFound(path.to_string()),
        std::io::ErrorKind::IsADirectory => ToolError::IsADirectory(path.to_string()),
        _ => ToolError::Io(format!("{path}: {err}")),
    }
}
