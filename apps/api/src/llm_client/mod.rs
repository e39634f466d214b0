/// LLM Client: the single point of entry for all AI completion calls.
///
/// ARCHITECTURAL RULE: No other module may talk to a completion provider directly.
/// Scoring, extraction and interview code depend only on `CompletionProvider`;
/// `OpenAiClient` is the one adapter that speaks HTTP.
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::config::LlmConfig;

pub mod prompts;

const MAX_RETRIES: u32 = 3;
const TEMPERATURE: f32 = 0.3;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Rate limited after {retries} retries")]
    RateLimited { retries: u32 },

    #[error("LLM returned empty content")]
    EmptyContent,

    #[error("LLM call timed out after {0:?}")]
    Timeout(Duration),

    #[error("No completion provider configured")]
    NotConfigured,
}

/// One `{role, content}` pair of a chat request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Structured completion capability: ordered messages in, raw assistant text out.
///
/// Carried in `AppState` as `Arc<dyn CompletionProvider>`.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    async fn complete(&self, messages: &[ChatMessage]) -> Result<String, LlmError>;
}

// ────────────────────────────────────────────────────────────────────────────
// Wire types for the chat-completions API
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    temperature: f32,
}

#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    pub choices: Vec<Choice>,
    #[serde(default)]
    pub usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
pub struct ChoiceMessage {
    #[serde(default)]
    pub content: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
}

impl ChatResponse {
    /// `choices[0].message.content`, if non-blank.
    pub fn text(&self) -> Option<&str> {
        self.choices
            .first()
            .and_then(|c| c.message.content.as_deref())
            .filter(|t| !t.trim().is_empty())
    }
}

#[derive(Debug, Deserialize)]
struct ApiError {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Adapters
// ────────────────────────────────────────────────────────────────────────────

/// Chat-completions adapter with retry and a hard deadline per call.
#[derive(Clone)]
pub struct OpenAiClient {
    client: Client,
    api_key: String,
    endpoint: String,
    model: String,
    timeout: Duration,
}

impl OpenAiClient {
    pub fn new(api_key: String, config: &LlmConfig) -> Result<Self, LlmError> {
        Ok(Self {
            client: Client::builder().timeout(config.timeout).build()?,
            api_key,
            endpoint: format!("{}/chat/completions", config.base_url.trim_end_matches('/')),
            model: config.model.clone(),
            timeout: config.timeout,
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Makes the HTTP call, retrying 429 and 5xx with exponential backoff.
    async fn call(&self, messages: &[ChatMessage]) -> Result<String, LlmError> {
        let request_body = ChatRequest {
            model: &self.model,
            messages,
            temperature: TEMPERATURE,
        };

        let mut last_error: Option<LlmError> = None;

        for attempt in 0..MAX_RETRIES {
            if attempt > 0 {
                // Exponential backoff: 1s, 2s
                let delay = Duration::from_millis(1000 * (1 << (attempt - 1)));
                warn!(
                    "LLM call attempt {} failed, retrying after {}ms...",
                    attempt,
                    delay.as_millis()
                );
                tokio::time::sleep(delay).await;
            }

            let response = self
                .client
                .post(&self.endpoint)
                .bearer_auth(&self.api_key)
                .json(&request_body)
                .send()
                .await;

            let response = match response {
                Ok(r) => r,
                Err(e) => {
                    last_error = Some(LlmError::Http(e));
                    continue;
                }
            };

            let status = response.status();

            if status.as_u16() == 429 || status.is_server_error() {
                let body = response.text().await.unwrap_or_default();
                warn!("LLM API returned {}: {}", status, body);
                last_error = Some(LlmError::Api {
                    status: status.as_u16(),
                    message: body,
                });
                continue;
            }

            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                let message = serde_json::from_str::<ApiError>(&body)
                    .map(|e| e.error.message)
                    .unwrap_or(body);
                return Err(LlmError::Api {
                    status: status.as_u16(),
                    message,
                });
            }

            let chat: ChatResponse = response.json().await?;

            if let Some(usage) = &chat.usage {
                debug!(
                    "LLM call succeeded: prompt_tokens={}, completion_tokens={}",
                    usage.prompt_tokens, usage.completion_tokens
                );
            }

            return chat
                .text()
                .map(str::to_string)
                .ok_or(LlmError::EmptyContent);
        }

        Err(last_error.unwrap_or(LlmError::RateLimited {
            retries: MAX_RETRIES,
        }))
    }
}

#[async_trait]
impl CompletionProvider for OpenAiClient {
    async fn complete(&self, messages: &[ChatMessage]) -> Result<String, LlmError> {
        // Deadline covers every retry, not just one request.
        let deadline = self.timeout * MAX_RETRIES;
        tokio::time::timeout(deadline, self.call(messages))
            .await
            .map_err(|_| LlmError::Timeout(deadline))?
    }
}

/// Stand-in used when no API key is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledProvider;

#[async_trait]
impl CompletionProvider for DisabledProvider {
    async fn complete(&self, _messages: &[ChatMessage]) -> Result<String, LlmError> {
        Err(LlmError::NotConfigured)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Structured output helpers
// ────────────────────────────────────────────────────────────────────────────

/// Sends `system` + `prompt` and returns the raw assistant text.
pub async fn complete_text(
    llm: &dyn CompletionProvider,
    system: &str,
    prompt: &str,
) -> Result<String, LlmError> {
    let messages = [ChatMessage::system(system), ChatMessage::user(prompt)];
    let text = llm.complete(&messages).await?;
    if text.trim().is_empty() {
        return Err(LlmError::EmptyContent);
    }
    Ok(text)
}

/// Calls the LLM and deserializes the text response as JSON.
/// The prompt must instruct the model to return valid JSON.
pub async fn complete_json<T: DeserializeOwned>(
    llm: &dyn CompletionProvider,
    system: &str,
    prompt: &str,
) -> Result<T, LlmError> {
    let text = complete_text(llm, system, prompt).await?;
    serde_json::from_str(strip_json_fences(&text)).map_err(LlmError::Parse)
}

/// Parses a JSON array out of model output, tolerating prose around it.
pub fn parse_json_array<T: DeserializeOwned>(text: &str) -> Result<Vec<T>, LlmError> {
    let text = strip_json_fences(text);
    match serde_json::from_str::<Vec<T>>(text) {
        Ok(items) => Ok(items),
        Err(e) => match extract_json_array(text) {
            Some(span) => serde_json::from_str(span).map_err(LlmError::Parse),
            None => Err(LlmError::Parse(e)),
        },
    }
}

/// Returns the span from the first `[` to the last `]`, if any.
pub fn extract_json_array(text: &str) -> Option<&str> {
    let start = text.find('[')?;
    let end = text.rfind(']')?;
    (end > start).then(|| &text[start..=end])
}

/// Strips ```json ... ``` or ``` ... ``` code fences from LLM output.
pub fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    if let Some(stripped) = text.strip_prefix("```json") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else if let Some(stripped) = text.strip_prefix("```") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else {
        text
    }
}

/// In-crate fakes for exercising AI-backed components without a network.
#[cfg(test)]
pub mod testing {
    use super::*;

    /// Answers every call with the closure's result.
    pub struct FnProvider<F>(F);

    impl<F> FnProvider<F>
    where
        F: Fn(&[ChatMessage]) -> Result<String, LlmError> + Send + Sync,
    {
        pub fn new(f: F) -> Self {
            Self(f)
        }
    }

    #[async_trait]
    impl<F> CompletionProvider for FnProvider<F>
    where
        F: Fn(&[ChatMessage]) -> Result<String, LlmError> + Send + Sync,
    {
        async fn complete(&self, messages: &[ChatMessage]) -> Result<String, LlmError> {
            (self.0)(messages)
        }
    }

    /// Text of the last user message.
    pub fn user_prompt(messages: &[ChatMessage]) -> &str {
        messages
            .iter()
            .rev()
            .find(|m| m.role == "user")
            .map(|m| m.content.as_str())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::testing::FnProvider;
    use super::*;

    #[test]
    fn test_strip_json_fences_with_json_tag() {
        let input = "```json\n{\"key\": \"value\"}\n```";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_strip_json_fences_without_tag() {
        let input = "```\n{\"key\": \"value\"}\n```";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_strip_json_fences_no_fences() {
        let input = "{\"key\": \"value\"}";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_extract_json_array_from_prose() {
        let input = "Sure! Here are the skills: [\"Rust\", \"SQL\"] Hope that helps.";
        assert_eq!(extract_json_array(input), Some("[\"Rust\", \"SQL\"]"));
    }

    #[test]
    fn test_extract_json_array_none_without_brackets() {
        assert_eq!(extract_json_array("no array here"), None);
        assert_eq!(extract_json_array("] backwards ["), None);
    }

    #[test]
    fn test_parse_json_array_embedded_in_prose() {
        let parsed: Vec<String> =
            parse_json_array("The titles are [\"Backend Engineer\"].").unwrap();
        assert_eq!(parsed, vec!["Backend Engineer".to_string()]);
    }

    #[test]
    fn test_parse_json_array_rejects_garbage() {
        assert!(parse_json_array::<String>("nothing useful").is_err());
    }

    #[test]
    fn test_chat_response_text_reads_first_choice() {
        let json = r#"{"choices":[{"message":{"role":"assistant","content":"hello"}}]}"#;
        let response: ChatResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.text(), Some("hello"));
    }

    #[test]
    fn test_chat_response_blank_content_is_none() {
        let json = r#"{"choices":[{"message":{"content":"   "}}]}"#;
        let response: ChatResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.text(), None);
    }

    #[tokio::test]
    async fn test_disabled_provider_fails_fast() {
        let err = complete_text(&DisabledProvider, "sys", "prompt").await;
        assert!(matches!(err, Err(LlmError::NotConfigured)));
    }

    #[tokio::test]
    async fn test_complete_json_strips_fences() {
        let llm = FnProvider::new(|_| Ok("```json\n{\"score\": 7}\n```".to_string()));
        let value: serde_json::Value = complete_json(&llm, "sys", "prompt").await.unwrap();
        assert_eq!(value["score"], 7);
    }

    #[tokio::test]
    async fn test_complete_json_non_json_is_parse_error() {
        let llm = FnProvider::new(|_| Ok("I cannot help with that.".to_string()));
        let result: Result<serde_json::Value, _> = complete_json(&llm, "sys", "prompt").await;
        assert!(matches!(result, Err(LlmError::Parse(_))));
    }

    #[tokio::test]
    async fn test_complete_text_sends_system_then_user() {
        let llm = FnProvider::new(|messages| {
            assert_eq!(messages.len(), 2);
            assert_eq!(messages[0].role, "system");
            assert_eq!(messages[1].role, "user");
            Ok(messages[1].content.clone())
        });
        assert_eq!(complete_text(&llm, "sys", "ping").await.unwrap(), "ping");
    }
}
