use std::path::Path;

use axum::{
    extract::{Multipart, State},
    response::{IntoResponse, Redirect, Response},
    routing::post,
    Router,
};
use tokio::fs;
use tower_http::services::ServeDir;
use tracing::{debug, info};

use crate::extract::{self, extension_of, is_allowed_extension, FileKind};
use crate::models::AppState;
use crate::types::{AppError, AppResult};
use crate::utils::secure_filename;

pub fn router(upload_dir: &Path) -> Router<AppState> {
    Router::new()
        .route("/upload", post(upload_file))
        .nest_service("/uploads", ServeDir::new(upload_dir))
}

/// Name and bytes of the `file` part, if one with a file name was sent.
async fn read_file_field(multipart: &mut Multipart) -> AppResult<Option<(String, Vec<u8>)>> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::InvalidRequest(format!("Failed to read multipart: {}", e)))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let filename = field.file_name().unwrap_or_default().to_string();
        if filename.is_empty() {
            return Ok(None);
        }

        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::InvalidRequest(format!("Failed to read upload: {}", e)))?;
        return Ok(Some((filename, data.to_vec())));
    }

    Ok(None)
}

async fn upload_file(State(state): State<AppState>, mut multipart: Multipart) -> AppResult<Response> {
    let Some((original_name, data)) = read_file_field(&mut multipart).await? else {
        debug!("Upload without a file part");
        return Ok(Redirect::to("/").into_response());
    };

    let filename = secure_filename(&original_name);
    let extension = extension_of(&filename);
    if !is_allowed_extension(&extension) {
        return Err(AppError::UnsupportedExtension(extension));
    }

    let upload_dir = &state.config.storage.upload_dir;
    fs::create_dir_all(upload_dir).await?;
    let dest = upload_dir.join(&filename);
    fs::write(&dest, &data).await?;
    info!(filename = %filename, bytes = data.len(), "File uploaded");

    if FileKind::from_extension(&extension).is_image() {
        let text = state.ocr.recognize(&dest).await.into_ocr_text();
        state.store.set_image(text, &filename).await;
    } else {
        let text = extract::extract(&dest, &extension).await.into_text();
        state.store.set_document(text, &filename).await;
    }

    Ok(Redirect::to("/").into_response())
}
