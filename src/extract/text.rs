use std::path::Path;

use anyhow::Result;

/// Read a file as UTF-8, replacing invalid sequences with U+FFFD.
pub async fn read_lossy(path: &Path) -> Result<String> {
    let bytes = tokio::fs::read(path).await?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
