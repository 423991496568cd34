pub mod health;

use axum::{routing::get, Router};

use crate::render::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Document generation
        .route(
            "/api/v1/resumes/:id/source",
            get(handlers::handle_get_source),
        )
        .route("/api/v1/resumes/:id/pdf", get(handlers::handle_get_pdf))
        .with_state(state)
}
