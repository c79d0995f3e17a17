use askama::Template;
use axum::{extract::State, response::Html, routing::get, Router};

use crate::models::AppState;
use crate::store::{Slot, StoreSnapshot};
use crate::types::{AppError, AppResult};

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(index))
}

async fn index(State(state): State<AppState>) -> AppResult<Html<String>> {
    let snapshot = state.store.snapshot().await;
    Ok(Html(render_page(&snapshot)?))
}

struct Section<'a> {
    title: &'static str,
    slot: Option<&'a Slot>,
}

/// Home page: upload form, question box and the last extraction per category.
#[derive(Template)]
#[template(path = "index.html")]
struct IndexTemplate<'a> {
    sections: [Section<'a>; 2],
}

impl<'a> IndexTemplate<'a> {
    fn new(snapshot: &'a StoreSnapshot) -> Self {
        Self {
            sections: [
                Section {
                    title: "Último documento",
                    slot: snapshot.document.as_ref(),
                },
                Section {
                    title: "Última imagem",
                    slot: snapshot.image.as_ref(),
                },
            ],
        }
    }
}

pub fn render_page(snapshot: &StoreSnapshot) -> AppResult<String> {
    IndexTemplate::new(snapshot)
        .render()
        .map_err(|e| AppError::Internal(format!("Failed to render home page: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::create_test_app;

    #[test]
    fn test_empty_state_renders_placeholders() {
        let page = render_page(&StoreSnapshot::default()).unwrap();
        assert_eq!(page.matches("Nenhum arquivo enviado.").count(), 2);
        assert!(page.contains(r#"action="/upload""#));
    }

    #[test]
    fn test_state_values_are_escaped() {
        let snapshot = StoreSnapshot {
            document: Some(Slot {
                text: "<b>bold</b> & more".to_string(),
                name: "page.md".to_string(),
            }),
            image: Some(Slot {
                text: "<script>alert(1)</script>".to_string(),
                name: "shot.png".to_string(),
            }),
        };
        let page = render_page(&snapshot).unwrap();
        assert!(page.contains("&lt;b&gt;bold"));
        assert!(page.contains(" &amp; more"));
        assert!(!page.contains("<b>bold"));
        assert!(page.contains(r#"<a href="/uploads/page.md">page.md</a>"#));
        assert!(page.contains("&lt;script&gt;alert(1)"));
        assert!(!page.contains("<script>alert(1)"));
        assert!(!page.contains("Nenhum arquivo enviado."));
    }

    #[tokio::test]
    async fn test_home_page_reflects_store() {
        let app = create_test_app();
        app.state.store.set_document("conteúdo do relatório", "relatorio.txt").await;
        app.state.store.set_image("texto da foto", "foto.png").await;

        let response = app.server.get("/").await;

        response.assert_status_ok();
        let body = response.text();
        assert!(body.contains("relatorio.txt"));
        assert!(body.contains("conteúdo do relatório"));
        assert!(body.contains("foto.png"));
        assert!(body.contains("texto da foto"));
    }
}
