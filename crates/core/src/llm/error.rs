use crate::llm::Provider;
use serde_json::Value;
use std::fmt;

/// Carries the raw upstream payload alongside the failure so the API layer
/// can report exactly what the provider returned.
#[derive(Debug, Clone)]
pub struct ChatDiagnosticsError {
    pub provider: Provider,
    pub stage: &'static str,
    pub detail: String,
    pub raw_output: Option<String>,
    pub raw_response_json: Option<Value>,
}

impl fmt::Display for ChatDiagnosticsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "chat proxy error (provider={:?}, stage={}): {}",
            self.provider, self.stage, self.detail
        )
    }
}

impl std::error::Error for ChatDiagnosticsError {}
