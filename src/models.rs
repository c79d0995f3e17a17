use std::sync::Arc;

use crate::config::Config;
use crate::extract::{OcrEngine, TesseractOcr};
use crate::llm::Assistant;
use crate::store::ExtractionStore;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub store: ExtractionStore,
    pub assistant: Assistant,
    pub ocr: Arc<dyn OcrEngine>,
}

impl AppState {
    /// Production wiring: Groq for answers, tesseract for images, empty store.
    pub fn from_config(config: Config) -> Self {
        let assistant = Assistant::groq(&config.llm);
        let ocr = Arc::new(TesseractOcr::from_config(&config.ocr));
        Self::new(config, assistant, ocr)
    }

    pub fn new(config: Config, assistant: Assistant, ocr: Arc<dyn OcrEngine>) -> Self {
        Self {
            config,
            store: ExtractionStore::new(),
            assistant,
            ocr,
        }
    }
}

#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct AskRequest {
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct AskResponse {
    pub answer: String,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    pub model: String,
    pub upload_dir: String,
}
