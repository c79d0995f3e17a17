use std::path::Path;

use anyhow::{Context, Result};
use lopdf::Document;
use tracing::debug;

/// Extract every page of a PDF, each under a "--- Página N ---" header.
///
/// A page whose text cannot be decoded contributes an empty body; only a
/// document that fails to load is an error.
pub fn extract_pages(path: &Path) -> Result<String> {
    let doc = Document::load(path)
        .with_context(|| format!("failed to load PDF {}", path.display()))?;

    let pages: Vec<String> = doc
        .get_pages()
        .into_keys()
        .enumerate()
        .map(|(index, page_num)| {
            let text = doc.extract_text(&[page_num]).unwrap_or_else(|e| {
                debug!(page = page_num, error = %e, "No text on PDF page");
                String::new()
            });
            format!("--- Página {} ---\n{}\n", index + 1, text)
        })
        .collect();

    Ok(pages.join("\n"))
}
