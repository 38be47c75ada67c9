pub mod context;
pub mod error;
pub mod openai;

use crate::domain::summary::DashboardSummary;
use serde::{Deserialize, Serialize};

/// One prior turn of the assistant conversation, passed through verbatim.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: String,
    pub content: String,
}

/// A chat request from the dashboard: the user's message, the optional
/// serialized dashboard used as conversational context, and the history so
/// far.
#[derive(Debug, Clone)]
pub struct ChatInput {
    pub message: String,
    pub context: Option<DashboardSummary>,
    pub history: Vec<ChatTurn>,
}

#[derive(Debug, Clone, Copy)]
pub enum Provider {
    OpenAi,
}

#[async_trait::async_trait]
pub trait ChatClient: Send + Sync {
    fn provider(&self) -> Provider;

    async fn chat(&self, input: ChatInput) -> anyhow::Result<String>;
}
