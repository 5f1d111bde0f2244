#![forbid(unsafe_code)]

use serde_json::{Value, json};

/// Advertised tool surface, in registration order. The schemas declare
/// `additionalProperties: false`; the handlers enforce the same contract.
pub(crate) fn tool_definitions() -> Vec<Value> {
    vec![
        json!({
            "name": "read_file",
            "description": "Read a UTF-8 text file from inside the sandbox root.",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "path": { "type": "string", "description": "Path relative to the sandbox root." }
                },
                "required": ["path"],
                "additionalProperties": false
            },
        }),
        json!({
            "name": "write_file",
            "description": "Write a UTF-8 text file inside the sandbox root, replacing any existing content.",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "path": { "type": "string", "description": "Path relative to the sandbox root." },
                    "content": { "type": "string", "description": "Full file content." },
                    "create_parents": { "type": "boolean", "description": "Create missing parent directories (default false)." }
                },
                "required": ["path", "content"],
                "additionalProperties": false
            },
        }),
        json!({
            "name": "list_dir",
            "description": "List the direct children of a directory inside the sandbox root. Directories carry a trailing '/'.",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "path": { "type": "string", "description": "Path relative to the sandbox root (default '.')." }
                },
                "required": [],
                "additionalProperties": false
            },
        }),
        json!({
            "name": "call_generate",
            "description": "Send a prompt to the configured generative model and return its text.",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "prompt": { "type": "string", "description": "User prompt." },
                    "system_prompt": { "type": "string", "description": "Optional system instruction." },
                    "temperature": { "type": "number", "description": "Optional sampling temperature." },
                    "top_p": { "type": "number", "description": "Optional nucleus sampling cutoff." }
                },
                "required": ["prompt"],
                "additionalProperties": false
            },
        }),
    ]
}
