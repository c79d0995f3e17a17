// Jarvis - ask an LLM about the last document or image you uploaded

pub mod config;
pub mod extract;
pub mod llm;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod store;
pub mod types;
pub mod utils;

#[cfg(test)]
pub(crate) mod test_utils;

// Re-exports for convenience
pub use config::Config;
pub use models::AppState;

pub fn create_router(state: AppState) -> axum::Router {
    routes::create_router(state)
}
