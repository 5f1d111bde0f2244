#![forbid(unsafe_code)]

use rb_core::sandbox::SandboxError;
use rb_gen::GenError;

/// Successful tool output. Failures travel as [`ToolError`]; the dispatch
/// boundary renders either one into the `content`/`isError` envelope, keeping
/// the tool-result channel structurally separate from protocol errors.
pub(crate) struct ToolResult {
    pub(crate) text: String,
}

impl ToolResult {
    pub(crate) fn text(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

#[derive(Debug)]
pub(crate) enum ToolError {
    InvalidArgument(String),
    OutOfRoot(String),
    NotFound(String),
    IsADirectory(String),
    Io(String),
    NotConfigured,
    Upstream(String),
}

impl std::fmt::Display for ToolError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidArgument(message) => write!(f, "Invalid arguments: {message}"),
            Self::OutOfRoot(path) => write!(f, "Path escapes the sandbox root: {path}"),
            Self::NotFound(path) => write!(f, "Not found: {path}"),
            Self::IsADirectory(path) => write!(f, "Is a directory: {path}"),
            Self::Io(message) => write!(f, "IO error: {message}"),
            Self::NotConfigured => {
                write!(f, "Generation is not configured (GEMINI_API_KEY is missing)")
            }
            Self::Upstream(message) => write!(f, "Generation failed: {message}"),
        }
    }
}

impl std::error::Error for ToolError {}

impl From<SandboxError> for ToolError {
    fn from(value: SandboxError) -> Self {
        match value {
            SandboxError::OutOfRoot { path } => Self::OutOfRoot(path),
        }
    }
}

impl From<GenError> for ToolError {
    fn from(value: GenError) -> Self {
        match value {
            GenError::MissingApiKey => Self::NotConfigured,
            other => Self::Upstream(other.to_string()),
        }
    }
}
