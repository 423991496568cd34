//! PDF Client — the single point of entry for the external LaTeX
//! compilation service.
//!
//! ARCHITECTURAL RULE: no other module may talk to the compile service
//! directly. The service contract is `POST {base_url}/generate-pdf` with a
//! JSON body `{"tex": "..."}`, answering with raw PDF bytes on success or a
//! plain-text error body otherwise. No retry: a failed compile is surfaced
//! to the caller as-is.

use bytes::Bytes;
use reqwest::Client;
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

const COMPILE_TIMEOUT_SECS: u64 = 60;

#[derive(Debug, Error)]
pub enum PdfError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Compile service error (status {status}): {message}")]
    Service { status: u16, message: String },
}

#[derive(Debug, Serialize)]
struct CompileRequest<'a> {
    tex: &'a str,
}

/// Client for the LaTeX-to-PDF compilation sink.
#[derive(Clone)]
pub struct PdfClient {
    client: Client,
    base_url: String,
}

impl PdfClient {
    pub fn new(base_url: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(COMPILE_TIMEOUT_SECS))
                .build()
                .expect("Failed to build HTTP client"),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Submits assembled LaTeX source and returns the compiled PDF bytes.
    pub async fn compile(&self, tex: &str) -> Result<Bytes, PdfError> {
        let url = format!("{}/generate-pdf", self.base_url);
        let response = self
            .client
            .post(&url)
            .json(&CompileRequest { tex })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(PdfError::Service {
                status: status.as_u16(),
                message,
            });
        }

        let pdf = response.bytes().await?;
        debug!("compile service returned {} bytes", pdf.len());
        Ok(pdf)
    }
}
