use sqlx::PgPool;

use crate::config::Config;
use crate::render::client::PdfClient;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    /// Client for the external LaTeX compilation sink.
    pub pdf: PdfClient,
    /// Kept on the state so handlers added later can reach settings.
    #[allow(dead_code)]
    pub config: Config,
}
