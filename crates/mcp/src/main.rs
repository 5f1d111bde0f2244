#![forbid(unsafe_code)]

mod entry;
mod server;
mod support;
mod tools;

pub(crate) use support::*;

use rb_core::sandbox::Sandbox;
use rb_gen::GenClient;

// Protocol negotiation: kept at the widely deployed baseline.
const MCP_VERSION: &str = "2024-11-05";
const SERVER_NAME: &str = "rootbox-rust-mcp";
const SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");

pub(crate) struct McpServer {
    sandbox: Sandbox,
    r#gen: Option<GenClient>,
    log: DebugLog,
}

fn usage() -> &'static str {
    "rb_mcp — RootBox MCP server (sandboxed file tools + text generation, stdio)\n\n\
USAGE:\n\
  rb_mcp [--root DIR] [--model NAME] [--debug]\n\
\n\
FLAGS:\n\
  -h, --help       Print this help and exit\n\
  -V, --version    Print version and exit\n\
\n\
NOTES:\n\
  - All file tools are confined to the root directory (default: cwd)\n\
  - Credential: GEMINI_API_KEY env var; when it is missing the server still\n\
    starts and call_generate reports the problem per call\n\
  - Env fallbacks: ROOTBOX_ROOT, ROOTBOX_MODEL, ROOTBOX_DEBUG\n"
}

fn version_line() -> String {
    format!("rb_mcp {SERVER_VERSION}")
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = std::env::args().collect::<Vec<_>>();
    if args
        .iter()
        .any(|arg| matches!(arg.as_str(), "-h" | "--help"))
    {
        print!("{}", usage());
        return Ok(());
    }
    if args
        .iter()
        .any(|arg| matches!(arg.as_str(), "-V" | "--version"))
    {
        println!("{}", version_line());
        return Ok(());
    }

    let log = DebugLog::new(parse_debug());

    let root_raw = parse_root_dir();
    let root = std::fs::canonicalize(&root_raw)
        .map_err(|err| format!("root {} is not usable: {err}", root_raw.display()))?;
    if !root.is_dir() {
        return Err(format!("root {} is not a directory", root.display()).into());
    }

    let model = parse_model();
    let r#gen = match GenClient::new(&model, &parse_api_key()) {
        Ok(client) => Some(client),
        Err(err) => {
            log.line(&format!("generation disabled: {err}"));
            None
        }
    };

    log.line(&format!(
        "serving root={} model={model} generate={}",
        root.display(),
        if r#gen.is_some() { "on" } else { "off" }
    ));

    let server = McpServer::new(Sandbox::new(root), r#gen, log);
    entry::run_stdio(&server)
}
