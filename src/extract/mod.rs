//! Text extraction
//!
//! Turns an uploaded file into plain text. Documents go through [`extract`],
//! which dispatches on the extension; raster images go through an
//! [`OcrEngine`]. Neither path returns an error: failures come back as
//! [`Extraction::Failed`] so the caller always has something to display.

pub mod docx;
pub mod ocr;
pub mod pdf;
pub mod text;

use std::path::Path;

use tracing::{debug, warn};

pub use ocr::{OcrEngine, TesseractOcr};

/// Extensions read as UTF-8 text.
pub const TEXT_EXTENSIONS: &[&str] = &[".txt", ".md", ".py", ".csv", ".json", ".log"];

/// Extensions routed to OCR.
pub const IMAGE_EXTENSIONS: &[&str] = &[".png", ".jpg", ".jpeg", ".gif", ".bmp"];

/// Every extension the upload endpoint accepts.
pub const ALLOWED_EXTENSIONS: &[&str] = &[
    ".txt", ".md", ".py", ".csv", ".json", ".log", ".pdf", ".docx", ".png", ".jpg", ".jpeg",
    ".gif", ".bmp",
];

/// How an upload is turned into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Text,
    Pdf,
    Docx,
    Image,
    Unsupported,
}

impl FileKind {
    /// Classify a lowercase extension including its leading dot (".pdf").
    pub fn from_extension(extension: &str) -> Self {
        match extension {
            ".pdf" => FileKind::Pdf,
            ".docx" => FileKind::Docx,
            ext if TEXT_EXTENSIONS.contains(&ext) => FileKind::Text,
            ext if IMAGE_EXTENSIONS.contains(&ext) => FileKind::Image,
            _ => FileKind::Unsupported,
        }
    }

    pub fn is_image(self) -> bool {
        self == FileKind::Image
    }
}

pub fn is_allowed_extension(extension: &str) -> bool {
    ALLOWED_EXTENSIONS.contains(&extension)
}

/// Lowercase extension of a file name with its leading dot, or an empty
/// string when there is none.
pub fn extension_of(filename: &str) -> String {
    Path::new(filename)
        .extension()
        .map(|ext| format!(".{}", ext.to_string_lossy().to_lowercase()))
        .unwrap_or_default()
}

/// Outcome of turning a file into text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Extraction {
    Text(String),
    Unsupported { extension: String },
    Failed { reason: String },
}

impl Extraction {
    pub fn failed(reason: impl std::fmt::Display) -> Self {
        Extraction::Failed {
            reason: reason.to_string(),
        }
    }

    /// Displayable text for a document extraction.
    pub fn into_text(self) -> String {
        match self {
            Extraction::Text(text) => text,
            Extraction::Unsupported { extension } => format!("[Formato {} não suportado]", extension),
            Extraction::Failed { reason } => format!("[Falha ao extrair texto: {}]", reason),
        }
    }

    /// Displayable text for an OCR result.
    pub fn into_ocr_text(self) -> String {
        match self {
            Extraction::Failed { reason } => format!("[OCR falhou: {}]", reason),
            other => other.into_text(),
        }
    }
}

/// Extract the text of a non-image document.
///
/// Parsing runs on the blocking pool since PDF and DOCX decoding is CPU bound.
pub async fn extract(path: &Path, extension: &str) -> Extraction {
    let kind = FileKind::from_extension(extension);
    let owned = path.to_path_buf();

    let outcome = match kind {
        FileKind::Text => text::read_lossy(&owned).await,
        FileKind::Pdf => run_blocking(move || pdf::extract_pages(&owned)).await,
        FileKind::Docx => run_blocking(move || docx::extract_paragraphs(&owned)).await,
        FileKind::Image | FileKind::Unsupported => {
            return Extraction::Unsupported {
                extension: extension.to_string(),
            }
        }
    };

    match outcome {
        Ok(text) => {
            debug!(path = %path.display(), chars = text.len(), "Extracted document text");
            Extraction::Text(text)
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Document extraction failed");
            Extraction::failed(format!("{:#}", e))
        }
    }
}

async fn run_blocking<F>(job: F) -> anyhow::Result<String>
where
    F: FnOnce() -> anyhow::Result<String> + Send + 'static,
{
    tokio::task::spawn_blocking(job)
        .await
        .map_err(|e| anyhow::anyhow!("extraction task panicked: {}", e))?
}
