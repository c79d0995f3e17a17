use axum::{
    extract::{rejection::JsonRejection, State},
    routing::post,
    Json, Router,
};
use tracing::{debug, info};

use crate::models::{AppState, AskRequest, AskResponse};
use crate::store::Slot;
use crate::types::{AppError, AppResult};

pub fn router() -> Router<AppState> {
    Router::new().route("/ask", post(ask))
}

/// Prompt for a question, grounded in the active extraction when there is one.
pub fn build_prompt(active: Option<&Slot>, question: &str) -> String {
    match active {
        Some(slot) => format!(
            "Você é o Jarvis. Documento: {}\nConteúdo:\n{}\n\nUsuário perguntou: {}\nResponda de forma direta e clara.",
            slot.name, slot.text, question
        ),
        None => format!(
            "Você é o Jarvis, um assistente que responde de forma simples e direta. Pergunta: {}",
            question
        ),
    }
}

pub async fn ask(
    State(state): State<AppState>,
    payload: Result<Json<Option<AskRequest>>, JsonRejection>,
) -> AppResult<Json<AskResponse>> {
    // A body that is not a JSON object counts as an empty question.
    let request = match payload {
        Ok(Json(request)) => request.unwrap_or_default(),
        Err(rejection) => {
            debug!(error = %rejection, "Unreadable ask body");
            AskRequest::default()
        }
    };
    let question = request.text.as_deref().unwrap_or_default().trim();
    if question.is_empty() {
        return Err(AppError::InvalidRequest("Nenhuma pergunta enviada".to_string()));
    }

    let active = state.store.active().await;
    info!(
        document = active.as_ref().map(|slot| slot.name.as_str()).unwrap_or("<none>"),
        "Question received"
    );

    let prompt = build_prompt(active.as_ref(), question);
    let answer = state.assistant.ask(&prompt).await.into_text();

    Ok(Json(AskResponse { answer }))
}
