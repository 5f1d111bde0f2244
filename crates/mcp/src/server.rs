#![forbid(unsafe_code)]

use crate::{DebugLog, JsonRpcRequest, McpServer, json_rpc_error, json_rpc_response};
use rb_core::sandbox::Sandbox;
use rb_gen::GenClient;
use serde_json::{Value, json};

impl McpServer {
    pub(crate) fn new(sandbox: Sandbox, r#gen: Option<GenClient>, log: DebugLog) -> Self {
        Self { sandbox, r#gen, log }
    }

    /// Request dispatch: every request produces exactly one response.
    pub(crate) fn handle_request(&self, request: JsonRpcRequest) -> Value {
        let method = request.method.as_str();
        self.log.line(&format!("request method={method}"));

        match method {
            "initialize" => json_rpc_response(
                request.id,
                json!({
                    "protocolVersion": crate::MCP_VERSION,
                    "serverInfo": { "name": crate::SERVER_NAME, "version": crate::SERVER_VERSION },
                    "capabilities": { "tools": {} }
                }),
            ),
            "tools/list" => json_rpc_response(
                request.id,
                json!({
                    "tools": crate::tools::tool_definitions(),
                    "nextCursor": null
                }),
            ),
            "tools/call" => self.handle_tools_call(request),
            "ping" => json_rpc_response(request.id, json!({})),
            "shutdown" => json_rpc_response(request.id, Value::Null),
            _ => json_rpc_error(
                request.id,
                -32601,
                &format!("Method not found: {method}"),
            ),
        }
    }

    fn handle_tools_call(&self, request: JsonRpcRequest) -> Value {
        let Some(params) = request.params else {
            return json_rpc_error(request.id, -32602, "params must be an object");
        };
        let Some(params_obj) = params.as_object() else {
            return json_rpc_error(request.id, -32602, "params must be an object");
        };
        let Some(tool_name) = params_obj.get("name").and_then(|v| v.as_str()) else {
            return json_rpc_error(request.id, -32602, "name must be a string");
        };

        let args = params_obj
            .get("arguments")
            .cloned()
            .unwrap_or_else(|| json!({}));
        let Some(args_obj) = args.as_object() else {
            return json_rpc_error(request.id, -32602, "arguments must be an object");
        };

        let Some(outcome) = crate::tools::dispatch_tool(self, tool_name, args_obj) else {
            return json_rpc_error(
                request.id,
                -32601,
                &format!("Tool not found: {tool_name}"),
            );
        };

        // Handler failures stay on the tool-result channel: the RPC itself
        // succeeds and carries the message with isError=true.
        let (text, is_error) = match outcome {
            Ok(result) => (result.text, false),
            Err(err) => {
                self.log.line(&format!("tool {tool_name} failed: {err}"));
                (err.to_string(), true)
            }
        };

        json_rpc_response(
            request.id,
            json!({
                "content": [ { "type": "text", "text": text } ],
                "isError": is_error
            }),
        )
    }

    /// Notification dispatch: never produces a response.
    pub(crate) fn handle_notification(&self, request: &JsonRpcRequest) {
        match request.method.as_str() {
            "initialized" | "notifications/initialized" => {
                self.log.line("client initialized");
            }
            "exit" => {
                self.log.line("exit notification; terminating");
                std::process::exit(0);
            }
            other => self.log.line(&format!("ignored notification method={other}")),
        }
    }
}
