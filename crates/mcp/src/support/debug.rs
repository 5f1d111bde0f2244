#![forbid(unsafe_code)]

/// Diagnostic lines go to stderr only; stdout carries nothing but protocol
/// frames.
#[derive(Clone, Debug)]
pub(crate) struct DebugLog {
    enabled: bool,
}

impl DebugLog {
    pub(crate) fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub(crate) fn line(&self, message: &str) {
        if !self.enabled {
            return;
        }
        eprintln!("[{}] {message}", crate::now_rfc3339());
    }
}
