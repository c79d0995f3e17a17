// Optical character recognition for uploaded images via the tesseract CLI.

use std::path::Path;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::{debug, warn};

use crate::config::OcrConfig;
use crate::extract::Extraction;

#[async_trait]
pub trait OcrEngine: Send + Sync {
    /// Recognize the text in an image. Failures are returned as
    /// [`Extraction::Failed`], never as an error.
    async fn recognize(&self, path: &Path) -> Extraction;
}

pub struct TesseractOcr {
    command: String,
    languages: String,
}

impl TesseractOcr {
    pub fn new(command: impl Into<String>, languages: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            languages: languages.into(),
        }
    }

    pub fn from_config(config: &OcrConfig) -> Self {
        Self::new(&config.tesseract_cmd, &config.languages)
    }
}

#[async_trait]
impl OcrEngine for TesseractOcr {
    async fn recognize(&self, path: &Path) -> Extraction {
        if !path.is_file() {
            return Extraction::failed(format!("image not found: {}", path.display()));
        }

        let output = Command::new(&self.command)
            .arg(path)
            .arg("stdout")
            .arg("-l")
            .arg(&self.languages)
            .output()
            .await;

        let output = match output {
            Ok(output) => output,
            Err(e) => {
                warn!(command = %self.command, error = %e, "Failed to run tesseract");
                return Extraction::failed(format!("failed to run {}: {}", self.command, e));
            }
        };

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            warn!(path = %path.display(), status = %output.status, "Tesseract exited with an error");
            return Extraction::failed(format!("{} ({})", stderr.trim(), output.status));
        }

        let text = String::from_utf8_lossy(&output.stdout).trim().to_string();
        debug!(path = %path.display(), chars = text.len(), "OCR complete");
        Extraction::Text(text)
    }
}
