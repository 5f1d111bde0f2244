#![forbid(unsafe_code)]

use crate::{
    McpServer, ToolError, ToolResult, optional_f64, optional_string, reject_unknown_keys,
    require_string,
};
use rb_gen::GenRequest;
use serde_json::Value;

pub(crate) fn call_generate(
    server: &McpServer,
    args: &serde_json::Map<String, Value>,
) -> Result<ToolResult, ToolError> {
    reject_unknown_keys(args, &["prompt", "system_prompt", "temperature", "top_p"])?;
    let prompt = require_string(args, "prompt")?;
    let system_prompt = optional_string(args, "system_prompt")?;
    let temperature = optional_f64(args, "temperature")?;
    let top_p = optional_f64(args, "top_p")?;

    // A missing credential is a per-call soft failure, not a startup crash.
    let Some(client) = server.r#gen.as_ref() else {
        return Err(ToolError::NotConfigured);
    };

    let request = GenRequest {
        prompt,
        system_prompt,
        temperature,
        top_p,
    };
    let text = client.generate(&request)?;
    Ok(ToolResult::text(text))
}
