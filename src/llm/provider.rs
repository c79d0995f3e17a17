use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn};

use crate::config::LLMConfig;
use crate::types::{AppResult, LLMMessage, LLMRequest, LLMResponse};

#[async_trait]
pub trait LLMAdapter: Send + Sync {
    async fn create_chat_completion(&self, request: &LLMRequest) -> AppResult<LLMResponse>;
}

/// Result of asking the model a question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    Text(String),
    Failed { reason: String },
}

impl Answer {
    /// Displayable text; failures carry the provider error inline.
    pub fn into_text(self) -> String {
        match self {
            Answer::Text(text) => text,
            Answer::Failed { reason } => format!("[Erro ao chamar Groq: {}]", reason),
        }
    }
}

/// Single-turn question answering with a fixed model and temperature.
#[derive(Clone)]
pub struct Assistant {
    adapter: Arc<dyn LLMAdapter>,
    model: String,
    temperature: f32,
}

impl Assistant {
    pub fn new(adapter: Arc<dyn LLMAdapter>, model: impl Into<String>, temperature: f32) -> Self {
        Self {
            adapter,
            model: model.into(),
            temperature,
        }
    }

    /// Groq-backed assistant built from configuration.
    pub fn groq(config: &LLMConfig) -> Self {
        let adapter = crate::llm::groq::GroqAdapter::with_api_base(
            &config.groq_api_key,
            &config.api_base,
        );
        Self::new(Arc::new(adapter), &config.model, config.temperature)
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub async fn ask(&self, prompt: &str) -> Answer {
        let request = LLMRequest {
            model: self.model.clone(),
            messages: vec![LLMMessage::user(prompt)],
            max_tokens: None,
            temperature: Some(self.temperature),
        };

        match self.adapter.create_chat_completion(&request).await {
            Ok(response) => {
                info!(
                    model = %self.model,
                    prompt_tokens = response.usage.prompt_tokens,
                    completion_tokens = response.usage.completion_tokens,
                    "LLM answered"
                );
                Answer::Text(response.content.trim().to_string())
            }
            Err(e) => {
                warn!(model = %self.model, error = %e, "LLM call failed");
                Answer::Failed {
                    reason: e.to_string(),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{AppError, TokenUsage};
    use std::sync::Mutex;

    struct RecordingAdapter {
        reply: AppResult<String>,
        seen: Mutex<Vec<LLMRequest>>,
    }

    #[async_trait]
    impl LLMAdapter for RecordingAdapter {
        async fn create_chat_completion(&self, request: &LLMRequest) -> AppResult<LLMResponse> {
            self.seen.lock().unwrap().push(request.clone());
            match &self.reply {
                Ok(content) => Ok(LLMResponse {
                    content: content.clone(),
                    finish_reason: "stop".to_string(),
                    usage: TokenUsage::default(),
                }),
                Err(e) => Err(AppError::LLMApi(e.to_string())),
            }
        }
    }

    #[tokio::test]
    async fn test_ask_sends_single_user_turn() {
        let adapter = Arc::new(RecordingAdapter {
            reply: Ok("  resposta  \n".to_string()),
            seen: Mutex::new(Vec::new()),
        });
        let assistant = Assistant::new(adapter.clone(), "llama-3.1-8b-instant", 0.6);

        let answer = assistant.ask("Qual é a capital?").await;
        assert_eq!(answer, Answer::Text("resposta".to_string()));

        let seen = adapter.seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].model, "llama-3.1-8b-instant");
        assert_eq!(seen[0].temperature, Some(0.6));
        assert_eq!(seen[0].messages, vec![LLMMessage::user("Qual é a capital?")]);
    }

    #[tokio::test]
    async fn test_adapter_error_becomes_marker() {
        let adapter = Arc::new(RecordingAdapter {
            reply: Err(AppError::LLMApi("rate limited".to_string())),
            seen: Mutex::new(Vec::new()),
        });
        let assistant = Assistant::new(adapter, "m", 0.0);

        let text = assistant.ask("hi").await.into_text();
        assert!(text.starts_with("[Erro ao chamar Groq: "));
        assert!(text.contains("rate limited"));
    }
}
