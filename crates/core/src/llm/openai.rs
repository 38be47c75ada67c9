use crate::config::Settings;
use crate::llm::context;
use crate::llm::error::ChatDiagnosticsError;
use crate::llm::{ChatClient, ChatInput, Provider};
use anyhow::Context as _;
use reqwest::header::{HeaderMap, HeaderValue};
use serde::{Deserialize, Serialize};
use std::time::Duration;

const DEFAULT_BASE_URL: &str = "https://api.openai.com";
const DEFAULT_MODEL: &str = "gpt-3.5-turbo";
const DEFAULT_MAX_TOKENS: u32 = 500;
const DEFAULT_TIMEOUT_SECS: u64 = 30;
const TEMPERATURE: f64 = 0.7;

/// One transport-level retry on top of the bounded request timeout.
const RETRIES: u32 = 2;

const FALLBACK_REPLY: &str = "I couldn't generate a response. Please try again.";

const SYSTEM_PROMPT: &str = "You are an expert business consultant AI specializing in ROI analysis and business strategy. \n\
You have access to the user's business metrics and data.\n\
Provide actionable, data-driven insights and recommendations.\n\
Be concise but thorough in your analysis.\n\
If asked about metrics in the dashboard data provided, reference specific numbers.\n\
Help the user understand their business performance and suggest improvements.\n\
Format responses clearly with bullet points when appropriate.";

#[derive(Debug, Clone)]
pub struct OpenAiChatClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
    model: String,
    max_tokens: u32,
}

impl OpenAiChatClient {
    pub fn from_settings(settings: &Settings) -> anyhow::Result<Self> {
        let api_key = settings.require_openai_api_key()?.to_string();
        let base_url =
            std::env::var("OPENAI_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let model = std::env::var("OPENAI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        let max_tokens = std::env::var("OPENAI_MAX_TOKENS")
            .ok()
            .and_then(|s| s.parse::<u32>().ok())
            .unwrap_or(DEFAULT_MAX_TOKENS);

        let timeout_secs = std::env::var("OPENAI_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .context("failed to build reqwest client")?;

        Ok(Self {
            http,
            api_key,
            base_url,
            model,
            max_tokens,
        })
    }

    fn build_messages(input: &ChatInput) -> Vec<ChatMessage> {
        let mut messages = Vec::with_capacity(input.history.len() + 2);
        messages.push(ChatMessage {
            role: "system".to_string(),
            content: SYSTEM_PROMPT.to_string(),
        });
        for turn in &input.history {
            messages.push(ChatMessage {
                role: turn.role.clone(),
                content: turn.content.clone(),
            });
        }

        // The dashboard context rides along inside the final user message.
        let mut content = input.message.clone();
        if let Some(summary) = &input.context {
            content.push_str(&context::render(summary));
        }
        messages.push(ChatMessage {
            role: "user".to_string(),
            content,
        });

        messages
    }

    async fn complete(&self, req: &ChatCompletionRequest) -> anyhow::Result<ChatCompletionResponse> {
        let mut headers = HeaderMap::new();
        headers.insert(
            "authorization",
            HeaderValue::from_str(&format!("Bearer {}", self.api_key))?,
        );

        let url = format!(
            "{}/v1/chat/completions",
            self.base_url.trim_end_matches('/')
        );
        let res = self
            .http
            .post(url)
            .headers(headers)
            .json(req)
            .send()
            .await
            .context("OpenAI request failed")?;

        let status = res.status();
        let text = res
            .text()
            .await
            .context("failed to read OpenAI response body")?;
        if !status.is_success() {
            let raw_response_json = serde_json::from_str::<serde_json::Value>(&text).ok();
            return Err(ChatDiagnosticsError {
                provider: Provider::OpenAi,
                stage: "http",
                detail: format!("status={status}"),
                raw_output: Some(text),
                raw_response_json,
            }
            .into());
        }

        serde_json::from_str::<ChatCompletionResponse>(&text)
            .with_context(|| format!("failed to decode OpenAI chat completion response: {text}"))
    }

    fn response_text(res: &ChatCompletionResponse) -> String {
        res.choices
            .first()
            .and_then(|choice| choice.message.as_ref())
            .map(|message| message.content.clone())
            .filter(|content| !content.is_empty())
            .unwrap_or_else(|| FALLBACK_REPLY.to_string())
    }
}

#[async_trait::async_trait]
impl ChatClient for OpenAiChatClient {
    fn provider(&self) -> Provider {
        Provider::OpenAi
    }

    async fn chat(&self, input: ChatInput) -> anyhow::Result<String> {
        let req = ChatCompletionRequest {
            model: self.model.clone(),
            messages: Self::build_messages(&input),
            max_tokens: self.max_tokens,
            temperature: TEMPERATURE,
        };

        let mut attempt: u32 = 0;
        loop {
            attempt += 1;
            match self.complete(&req).await {
                Ok(res) => return Ok(Self::response_text(&res)),
                Err(err) => {
                    if attempt >= RETRIES {
                        return Err(err);
                    }
                    let backoff = Duration::from_secs(1 << (attempt - 1));
                    tracing::warn!(attempt, ?backoff, error = %err, "chat completion failed; retrying");
                    tokio::time::sleep(backoff).await;
                }
            }
        }
    }
}

#[derive(Debug, Clone, Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
    max_tokens: u32,
    temperature: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Clone, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Clone, Deserialize)]
struct Choice {
    #[serde(default)]
    message: Option<ChoiceMessage>,
}

#[derive(Debug, Clone, Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard;
    use crate::domain::inputs::BusinessInputs;
    use serde_json::json;

    #[test]
    fn parses_chat_completion_response() {
        let v = json!({
            "id": "chatcmpl-1",
            "object": "chat.completion",
            "choices": [
                {
                    "index": 0,
                    "message": {"role": "assistant", "content": "Focus on margin."},
                    "finish_reason": "stop"
                }
            ]
        });
        let res: ChatCompletionResponse = serde_json::from_value(v).unwrap();
        assert_eq!(OpenAiChatClient::response_text(&res), "Focus on margin.");
    }

    #[test]
    fn empty_choices_fall_back_to_default_reply() {
        let res: ChatCompletionResponse = serde_json::from_value(json!({"choices": []})).unwrap();
        assert_eq!(OpenAiChatClient::response_text(&res), FALLBACK_REPLY);

        let res: ChatCompletionResponse =
            serde_json::from_value(json!({"choices": [{"index": 0}]})).unwrap();
        assert_eq!(OpenAiChatClient::response_text(&res), FALLBACK_REPLY);
    }

    #[test]
    fn message_assembly_keeps_system_history_user_order() {
        let summary = dashboard::summarize(&BusinessInputs::sample()).unwrap();
        let input = ChatInput {
            message: "How is my margin?".to_string(),
            context: Some(summary),
            history: vec![crate::llm::ChatTurn {
                role: "assistant".to_string(),
                content: "Hello!".to_string(),
            }],
        };

        let messages = OpenAiChatClient::build_messages(&input);
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[0].role, "system");
        assert_eq!(messages[1].role, "assistant");
        assert_eq!(messages[2].role, "user");
        assert!(messages[2].content.starts_with("How is my margin?"));
        assert!(messages[2].content.contains("Current Business Context"));
    }

    #[test]
    fn context_is_omitted_when_absent() {
        let input = ChatInput {
            message: "Hi".to_string(),
            context: None,
            history: Vec::new(),
        };
        let messages = OpenAiChatClient::build_messages(&input);
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[1].content, "Hi");
    }
}
