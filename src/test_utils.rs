//! Test helpers: a router wired with an echoing LLM and a canned OCR engine

use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use axum_test::TestServer;
use tempfile::TempDir;

use crate::config::Config;
use crate::extract::{Extraction, OcrEngine};
use crate::llm::{Assistant, LLMAdapter};
use crate::models::AppState;
use crate::routes::create_router;
use crate::types::{AppError, AppResult, LLMRequest, LLMResponse, TokenUsage};

pub const STUB_OCR_TEXT: &str = "texto reconhecido na imagem";

/// Answers every request with the content of its last message.
pub struct EchoAdapter;

#[async_trait]
impl LLMAdapter for EchoAdapter {
    async fn create_chat_completion(&self, request: &LLMRequest) -> AppResult<LLMResponse> {
        let content = request
            .messages
            .last()
            .map(|m| m.content.clone())
            .unwrap_or_default();
        Ok(LLMResponse {
            content,
            finish_reason: "stop".to_string(),
            usage: TokenUsage::default(),
        })
    }
}

pub struct FailingAdapter;

#[async_trait]
impl LLMAdapter for FailingAdapter {
    async fn create_chat_completion(&self, _request: &LLMRequest) -> AppResult<LLMResponse> {
        Err(AppError::LLMApi("connection refused".to_string()))
    }
}

pub struct StubOcr;

#[async_trait]
impl OcrEngine for StubOcr {
    async fn recognize(&self, _path: &Path) -> Extraction {
        Extraction::Text(STUB_OCR_TEXT.to_string())
    }
}

pub struct TestApp {
    pub server: TestServer,
    pub state: AppState,
    _dir: TempDir,
}

impl TestApp {
    pub fn upload_dir(&self) -> &Path {
        &self.state.config.storage.upload_dir
    }
}

pub fn create_test_app() -> TestApp {
    create_test_app_with_adapter(Arc::new(EchoAdapter))
}

pub fn create_test_app_with_adapter(adapter: Arc<dyn LLMAdapter>) -> TestApp {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::with_defaults("test-key", dir.path().join("uploads"));
    let assistant = Assistant::new(adapter, &config.llm.model, config.llm.temperature);
    let state = AppState::new(config, assistant, Arc::new(StubOcr));
    let server = TestServer::new(create_router(state.clone())).unwrap();

    TestApp {
        server,
        state,
        _dir: dir,
    }
}
