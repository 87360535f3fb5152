//! Chat collaborator: an OpenAI-compatible completion endpoint.

use std::fmt;
use std::time::Duration;

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use serde::{Deserialize, Serialize};
use session_logging::{session_info, session_warn};
use thiserror::Error;

pub const DEFAULT_CHAT_ENDPOINT: &str = "https://api.openai.com/v1/chat/completions";
pub const DEFAULT_CHAT_MODEL: &str = "gpt-4";

/// Interviewer persona sent ahead of every conversation.
pub const SYSTEM_PROMPT: &str = "You are an expert coding interviewer helping a candidate with a \
React/TypeScript calendar application challenge.

Your role:
- Provide helpful, specific guidance on React/TypeScript concepts
- Help debug code issues
- Suggest best practices and improvements
- Ask clarifying questions when needed
- Be encouraging but also point out areas for improvement

Keep responses concise but helpful. Focus on the specific coding challenge at hand.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    System,
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

impl ChatMessage {
    pub fn new(role: ChatRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChatSettings {
    pub endpoint: String,
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f32,
    /// Bearer token; requests fail with [`ChatFailureKind::MissingApiKey`] without one.
    pub api_key: Option<String>,
    pub timeout: Duration,
}

impl Default for ChatSettings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_CHAT_ENDPOINT.to_string(),
            model: DEFAULT_CHAT_MODEL.to_string(),
            max_tokens: 1000,
            temperature: 0.7,
            api_key: None,
            timeout: Duration::from_secs(30),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatFailureKind {
    MissingApiKey,
    InvalidEndpoint,
    HttpStatus(u16),
    Timeout,
    Network,
    EmptyReply,
    Decode,
}

impl fmt::Display for ChatFailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChatFailureKind::MissingApiKey => write!(f, "missing api key"),
            ChatFailureKind::InvalidEndpoint => write!(f, "invalid endpoint"),
            ChatFailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            ChatFailureKind::Timeout => write!(f, "timeout"),
            ChatFailureKind::Network => write!(f, "network error"),
            ChatFailureKind::EmptyReply => write!(f, "empty reply"),
            ChatFailureKind::Decode => write!(f, "undecodable reply"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {message}")]
pub struct ChatError {
    pub kind: ChatFailureKind,
    pub message: String,
}

impl ChatError {
    pub(crate) fn new(kind: ChatFailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[async_trait::async_trait]
pub trait ChatClient: Send + Sync {
    /// Sends the conversation and returns the assistant's reply text.
    async fn send(&self, history: &[ChatMessage]) -> Result<String, ChatError>;
}

#[derive(Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: Vec<&'a ChatMessage>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: Option<ReplyMessage>,
}

#[derive(Deserialize)]
struct ReplyMessage {
    content: Option<String>,
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: Option<ErrorBody>,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

#[derive(Debug, Clone)]
pub struct OpenAiChatClient {
    settings: ChatSettings,
}

impl OpenAiChatClient {
    pub fn new(settings: ChatSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &ChatSettings {
        &self.settings
    }

    fn build_client(&self) -> Result<reqwest::Client, ChatError> {
        reqwest::Client::builder()
            .timeout(self.settings.timeout)
            .build()
            .map_err(|err| ChatError::new(ChatFailureKind::Network, err.to_string()))
    }

    fn request_body(&self, history: &[ChatMessage]) -> Result<String, ChatError> {
        let system = ChatMessage::new(ChatRole::System, SYSTEM_PROMPT);
        let request = CompletionRequest {
            model: &self.settings.model,
            messages: std::iter::once(&system).chain(history).collect(),
            max_tokens: self.settings.max_tokens,
            temperature: self.settings.temperature,
        };
        serde_json::to_string(&request)
            .map_err(|err| ChatError::new(ChatFailureKind::Decode, err.to_string()))
    }
}

#[async_trait::async_trait]
impl ChatClient for OpenAiChatClient {
    async fn send(&self, history: &[ChatMessage]) -> Result<String, ChatError> {
        let api_key = self.settings.api_key.as_deref().ok_or_else(|| {
            ChatError::new(ChatFailureKind::MissingApiKey, "no api key configured")
        })?;
        let endpoint = url::Url::parse(&self.settings.endpoint)
            .map_err(|err| ChatError::new(ChatFailureKind::InvalidEndpoint, err.to_string()))?;
        let client = self.build_client()?;
        let body = self.request_body(history)?;

        session_info!(
            "Chat request to {} with {} messages",
            endpoint,
            history.len()
        );
        let response = client
            .post(endpoint)
            .header(CONTENT_TYPE, "application/json")
            .header(AUTHORIZATION, format!("Bearer {api_key}"))
            .body(body)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        let bytes = response.bytes().await.map_err(map_reqwest_error)?;
        if !status.is_success() {
            let message = serde_json::from_slice::<ErrorEnvelope>(&bytes)
                .ok()
                .and_then(|envelope| envelope.error)
                .and_then(|error| error.message)
                .unwrap_or_else(|| format!("HTTP error! status: {}", status.as_u16()));
            session_warn!("Chat request failed with {status}: {message}");
            return Err(ChatError::new(
                ChatFailureKind::HttpStatus(status.as_u16()),
                message,
            ));
        }

        let parsed: CompletionResponse = serde_json::from_slice(&bytes)
            .map_err(|err| ChatError::new(ChatFailureKind::Decode, err.to_string()))?;
        let content = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message)
            .and_then(|message| message.content)
            .filter(|content| !content.trim().is_empty())
            .ok_or_else(|| {
                ChatError::new(ChatFailureKind::EmptyReply, "no response content")
            })?;
        session_info!("Chat reply received ({} bytes)", content.len());
        Ok(content)
    }
}

fn map_reqwest_error(err: reqwest::Error) -> ChatError {
    if err.is_timeout() {
        return ChatError::new(ChatFailureKind::Timeout, err.to_string());
    }
    ChatError::new(ChatFailureKind::Network, err.to_string())
}
