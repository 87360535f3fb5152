//! Application configuration loaded from a RON file.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use interview_core::SessionSettings;
use interview_engine::{
    ChatSettings, SynthesizerConfig, DEFAULT_CHAT_ENDPOINT, DEFAULT_CHAT_MODEL,
};
use serde::{Deserialize, Serialize};
use session_logging::{session_info, session_warn};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub output_dir: PathBuf,
    pub debounce_ms: u64,
    pub auto_start: bool,
    pub proactive_feedback: bool,
    pub history_window: usize,
    pub chat: ChatConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("./preview"),
            debounce_ms: 750,
            auto_start: true,
            proactive_feedback: true,
            history_window: 10,
            chat: ChatConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    pub endpoint: String,
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f32,
    /// Environment variable holding the API key.
    pub api_key_env: String,
    pub timeout_secs: u64,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_CHAT_ENDPOINT.to_string(),
            model: DEFAULT_CHAT_MODEL.to_string(),
            max_tokens: 1000,
            temperature: 0.7,
            api_key_env: "OPENAI_API_KEY".to_string(),
            timeout_secs: 30,
        }
    }
}

impl AppConfig {
    pub fn session_settings(&self) -> SessionSettings {
        SessionSettings {
            debounce: Duration::from_millis(self.debounce_ms),
            auto_start: self.auto_start,
            proactive_feedback: self.proactive_feedback,
            history_window: self.history_window,
            ..SessionSettings::default()
        }
    }

    pub fn synthesizer_config(&self, entry_path: &str) -> SynthesizerConfig {
        SynthesizerConfig {
            entry_path: entry_path.to_string(),
            ..SynthesizerConfig::default()
        }
    }

    pub fn chat_settings(&self, api_key: Option<String>) -> ChatSettings {
        ChatSettings {
            endpoint: self.chat.endpoint.clone(),
            model: self.chat.model.clone(),
            max_tokens: self.chat.max_tokens,
            temperature: self.chat.temperature,
            api_key,
            timeout: Duration::from_secs(self.chat.timeout_secs),
        }
    }
}

/// Reads `path`; a missing or unreadable file yields the defaults.
pub fn load_config(path: &Path) -> AppConfig {
    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            session_info!("No config at {:?}; using defaults", path);
            return AppConfig::default();
        }
        Err(err) => {
            session_warn!("Failed to read config from {:?}: {}", path, err);
            return AppConfig::default();
        }
    };

    match ron::from_str(&content) {
        Ok(config) => {
            session_info!("Loaded config from {:?}", path);
            config
        }
        Err(err) => {
            session_warn!("Failed to parse config from {:?}: {}", path, err);
            AppConfig::default()
        }
    }
}
