#![forbid(unsafe_code)]

use crate::{JsonRpcRequest, McpServer, json_rpc_error};
use serde_json::Value;
use std::io::{BufRead, BufReader, Write};

/// Newline-delimited JSON loop: one line is fully parsed, routed and (for
/// requests) answered before the next line is read, so responses leave in
/// arrival order with no overlap between tool calls.
pub(crate) fn run_stdio(server: &McpServer) -> Result<(), Box<dyn std::error::Error>> {
    let stdin = std::io::stdin();
    let mut reader = BufReader::new(stdin.lock());
    let mut stdout = std::io::stdout().lock();

    loop {
        let mut line = String::new();
        let read = reader.read_line(&mut line)?;
        if read == 0 {
            break;
        }
        let raw = line.trim();
        if raw.is_empty() {
            continue;
        }
        handle_line(server, &mut stdout, raw)?;
    }

    Ok(())
}

fn handle_line(
    server: &McpServer,
    stdout: &mut std::io::StdoutLock<'_>,
    raw: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let data: Value = match serde_json::from_str(raw) {
        Ok(v) => v,
        Err(e) => {
            let resp = json_rpc_error(None, -32700, &format!("Parse error: {e}"));
            return write_newline_json(stdout, &resp);
        }
    };

    // Valid JSON that does not carry a method is dropped without a response:
    // it is neither a request nor a notification.
    let Some(obj) = data.as_object() else {
        return Ok(());
    };
    if !obj.contains_key("method") {
        return Ok(());
    }

    let request: JsonRpcRequest = match serde_json::from_value(data) {
        Ok(v) => v,
        Err(_) => return Ok(()),
    };

    if request.id.is_some() {
        let resp = server.handle_request(request);
        return write_newline_json(stdout, &resp);
    }

    server.handle_notification(&request);
    Ok(())
}

fn write_newline_json(
    stdout: &mut std::io::StdoutLock<'_>,
    resp: &Value,
) -> Result<(), Box<dyn std::error::Error>> {
    writeln!(stdout, "{}", serde_json::to_string(resp)?)?;
    stdout.flush()?;
    Ok(())
}
