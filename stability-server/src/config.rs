//! Configuration module

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use stability_core::constants;
use stability_core::{ModelConfig, NewsConfig};

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Server port
    pub port: u16,

    /// Directory containing model.onnx and tokenizer.json
    pub model_dir: PathBuf,

    /// Token limit per input text
    pub max_sequence_length: usize,

    /// News provider API key (never hardcoded)
    pub news_api_key: Option<String>,

    /// News provider base URL
    pub news_api_url: String,

    /// News request timeout in seconds
    pub news_timeout_secs: u64,

    /// Articles requested per live prediction
    pub news_max_articles: u32,

    /// Country used when the request names none
    pub default_country: String,

    /// Directory serving index.html and script.js
    pub static_dir: PathBuf,

    /// Environment (development, production)
    pub environment: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(5000),

            model_dir: env::var("MODEL_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(constants::DEFAULT_MODEL_DIR)),

            max_sequence_length: env::var("MAX_SEQUENCE_LENGTH")
                .ok()
                .and_then(|n| n.parse().ok())
                .unwrap_or(constants::MAX_SEQUENCE_LENGTH),

            news_api_key: env::var("GNEWS_API_KEY").ok().filter(|k| !k.is_empty()),

            news_api_url: env::var("NEWS_API_URL")
                .unwrap_or_else(|_| constants::DEFAULT_NEWS_API_URL.to_string()),

            news_timeout_secs: env::var("NEWS_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(constants::DEFAULT_NEWS_TIMEOUT_SECS),

            news_max_articles: env::var("NEWS_MAX_ARTICLES")
                .ok()
                .and_then(|n| n.parse().ok())
                .unwrap_or(constants::DEFAULT_MAX_ARTICLES),

            default_country: env::var("DEFAULT_COUNTRY")
                .unwrap_or_else(|_| constants::DEFAULT_COUNTRY.to_string()),

            static_dir: env::var("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("frontend")),

            environment: env::var("ENVIRONMENT")
                .unwrap_or_else(|_| "development".to_string()),
        }
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn model_config(&self) -> ModelConfig {
        ModelConfig {
            model_dir: self.model_dir.clone(),
            max_sequence_length: self.max_sequence_length,
            ..Default::default()
        }
    }

    pub fn news_config(&self) -> NewsConfig {
        NewsConfig {
            base_url: self.news_api_url.clone(),
            api_key: self.news_api_key.clone(),
            timeout: Duration::from_secs(self.news_timeout_secs),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 5000,
            model_dir: PathBuf::from(constants::DEFAULT_MODEL_DIR),
            max_sequence_length: constants::MAX_SEQUENCE_LENGTH,
            news_api_key: None,
            news_api_url: constants::DEFAULT_NEWS_API_URL.to_string(),
            news_timeout_secs: constants::DEFAULT_NEWS_TIMEOUT_SECS,
            news_max_articles: constants::DEFAULT_MAX_ARTICLES,
            default_country: constants::DEFAULT_COUNTRY.to_string(),
            static_dir: PathBuf::from("frontend"),
            environment: "development".to_string(),
        }
    }
}
