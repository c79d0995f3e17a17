use anyhow::{Context, Result};
use serde::Deserialize;
use std::env;
use std::path::PathBuf;

use crate::llm::groq::GROQ_API_BASE;

pub const DEFAULT_MODEL: &str = "llama-3.1-8b-instant";
pub const DEFAULT_TEMPERATURE: f32 = 0.6;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub llm: LLMConfig,
    pub storage: StorageConfig,
    pub ocr: OcrConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub port: u16,
    pub host: String,
    pub cors_allowed_origins: Vec<String>,
}

#[derive(Clone, Deserialize)]
pub struct LLMConfig {
    pub groq_api_key: String,
    pub api_base: String,
    pub model: String,
    pub temperature: f32,
}

// Keeps the key out of the startup log line.
impl std::fmt::Debug for LLMConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LLMConfig")
            .field("groq_api_key", &"<redacted>")
            .field("api_base", &self.api_base)
            .field("model", &self.model)
            .field("temperature", &self.temperature)
            .finish()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    pub upload_dir: PathBuf,
    pub max_upload_bytes: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OcrConfig {
    pub tesseract_cmd: String,
    pub languages: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let groq_api_key = env::var("GROQ_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty())
            .context("GROQ_API_KEY must be set (environment or .env file)")?;

        Ok(Self {
            server: ServerConfig {
                port: env::var("PORT")
                    .unwrap_or_else(|_| "5000".to_string())
                    .parse()
                    .context("PORT must be a valid port number")?,
                host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                cors_allowed_origins: env::var("ALLOWED_ORIGINS")
                    .unwrap_or_else(|_| "*".to_string())
                    .split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect(),
            },
            llm: LLMConfig {
                groq_api_key,
                api_base: env::var("GROQ_API_BASE")
                    .unwrap_or_else(|_| GROQ_API_BASE.to_string()),
                model: env::var("JARVIS_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
                temperature: env::var("JARVIS_TEMPERATURE")
                    .unwrap_or_else(|_| DEFAULT_TEMPERATURE.to_string())
                    .parse()
                    .context("JARVIS_TEMPERATURE must be a number")?,
            },
            storage: StorageConfig {
                upload_dir: PathBuf::from(
                    env::var("UPLOAD_DIR").unwrap_or_else(|_| "uploads".to_string()),
                ),
                max_upload_bytes: env::var("MAX_UPLOAD_BYTES")
                    .unwrap_or_else(|_| (50 * 1024 * 1024).to_string())
                    .parse()
                    .context("MAX_UPLOAD_BYTES must be a byte count")?,
            },
            ocr: OcrConfig {
                tesseract_cmd: env::var("TESSERACT_CMD")
                    .unwrap_or_else(|_| "tesseract".to_string()),
                languages: env::var("OCR_LANGUAGES").unwrap_or_else(|_| "eng+por".to_string()),
            },
        })
    }

    /// Configuration for tests and embedding: defaults everywhere except the
    /// credential and the upload directory.
    pub fn with_defaults(groq_api_key: impl Into<String>, upload_dir: impl Into<PathBuf>) -> Self {
        Self {
            server: ServerConfig {
                port: 5000,
                host: "127.0.0.1".to_string(),
                cors_allowed_origins: vec!["*".to_string()],
            },
            llm: LLMConfig {
                groq_api_key: groq_api_key.into(),
                api_base: GROQ_API_BASE.to_string(),
                model: DEFAULT_MODEL.to_string(),
                temperature: DEFAULT_TEMPERATURE,
            },
            storage: StorageConfig {
                upload_dir: upload_dir.into(),
                max_upload_bytes: 50 * 1024 * 1024,
            },
            ocr: OcrConfig {
                tesseract_cmd: "tesseract".to_string(),
                languages: "eng+por".to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_hosted_model() {
        let config = Config::with_defaults("key", "uploads");
        assert_eq!(config.llm.model, "llama-3.1-8b-instant");
        assert!((config.llm.temperature - 0.6).abs() < f32::EPSILON);
        assert_eq!(config.ocr.languages, "eng+por");
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let config = Config::with_defaults("super-secret", "uploads");
        let rendered = format!("{:?}", config.llm);
        assert!(!rendered.contains("super-secret"));
        assert!(rendered.contains("<redacted>"));
    }
}
