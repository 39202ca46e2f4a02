//! Configuration types and loading

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Aggregation settings
    pub analysis: AnalysisSettings,
    /// Remote classifier settings
    pub remote: RemoteSettings,
    /// Logging settings
    pub logging: LoggingSettings,
}

/// Aggregation-related settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisSettings {
    /// Overall top-terms table size
    pub top_terms: usize,
    /// Per-sentiment-bucket table size
    pub top_bucket_terms: usize,
    /// Key-phrase table size
    pub top_phrases: usize,
    /// Minimum occurrences before a phrase is reported
    pub min_phrase_count: usize,
    /// Consistency-flag samples kept in the summary
    pub flag_samples: usize,
    /// Optional custom lexicon file (JSON); absence of the file is fatal
    pub lexicon_path: Option<PathBuf>,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            top_terms: 15,
            top_bucket_terms: 10,
            top_phrases: 5,
            min_phrase_count: 3,
            flag_samples: 10,
            lexicon_path: None,
        }
    }
}

/// Remote classifier settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RemoteSettings {
    /// Use the remote classifier (falls back to local rules on failure)
    pub enabled: bool,
    /// Base URL of the chat-completions API
    pub base_url: String,
    /// Model name
    pub model: String,
    /// API key (can be loaded from env)
    pub api_key: Option<String>,
    /// API key environment variable name
    pub api_key_env: String,
    /// Request timeout in milliseconds
    pub timeout_ms: u64,
    /// Review text is truncated to this many characters before sending
    pub max_chars: usize,
    /// Sampling temperature
    pub temperature: f64,
    /// Maximum tokens for the reply (a single label)
    pub max_tokens: usize,
}

impl Default for RemoteSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            base_url: "https://api.deepseek.com".to_string(),
            model: "deepseek-chat".to_string(),
            api_key: None,
            api_key_env: "DEEPSEEK_API_KEY".to_string(),
            timeout_ms: 10_000,
            max_chars: 500,
            temperature: 0.1,
            max_tokens: 10,
        }
    }
}

impl RemoteSettings {
    /// Get API key from config or environment
    pub fn get_api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .or_else(|| std::env::var(&self.api_key_env).ok())
    }
}

/// Logging settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// Load configuration from a JSON, TOML, or YAML file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path.as_ref())?;

    let ext = path
        .as_ref()
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("");

    match ext {
        "json" => serde_json::from_str(&content).map_err(Error::from),
        "toml" => toml::from_str(&content).map_err(|e| Error::ConfigError(e.to_string())),
        "yaml" | "yml" => {
            serde_yaml::from_str(&content).map_err(|e| Error::ConfigError(e.to_string()))
        }
        _ => Err(Error::UnsupportedFormat(ext.to_string())),
    }
}
