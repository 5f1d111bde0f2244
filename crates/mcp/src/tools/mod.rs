#![forbid(unsafe_code)]

mod definitions;
mod fs;
mod generate;

pub(crate) use definitions::tool_definitions;

use crate::{McpServer, ToolError, ToolResult};
use serde_json::Value;

/// Registry dispatch. `None` means the tool name is unknown; the caller
/// turns that into a protocol-level error rather than a tool result.
pub(crate) fn dispatch_tool(
    server: &McpServer,
    name: &str,
    args: &serde_json::Map<String, Value>,
) -> Option<Result<ToolResult, ToolError>> {
    let outcome = match name {
        "read_file" => fs::read_file(server, args),
        "write_file" => fs::write_file(server, args),
        "list_dir" => fs::list_dir(server, args),
        "call_generate" => generate::call_generate(server, args),
        _ => return None,
    };
    Some(outcome)
}
