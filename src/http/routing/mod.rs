pub mod todos;

use axum::{routing::get, Router};

async fn health() -> &'static str { "ok" }

pub fn app(todos: Router) -> Router {
    Router::new()
        .route("/health", get(health))
        .merge(todos)
}
