//! Document endpoints: load the resume aggregate, compose the LaTeX source,
//! and either return it directly or hand it to the compile sink for a PDF.

use axum::{
    extract::{Path, State},
    http::header,
    response::{IntoResponse, Response},
};
use tracing::info;

use crate::errors::AppError;
use crate::latex::compose;
use crate::state::AppState;
use crate::store::load_resume_bundle;

/// GET /api/v1/resumes/:id/source
///
/// Returns the assembled `.tex` source as an attachment — useful for users
/// who want to tweak the document by hand, and for debugging compile errors.
pub async fn handle_get_source(
    State(state): State<AppState>,
    Path(resume_id): Path<i64>,
) -> Result<Response, AppError> {
    let bundle = load_resume_bundle(&state.db, resume_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Resume {resume_id} not found")))?;

    let tex = compose(&bundle);
    info!(resume_id, bytes = tex.len(), "composed LaTeX source");

    Ok((
        [
            (header::CONTENT_TYPE, "application/x-tex".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"cv-{resume_id}.tex\""),
            ),
        ],
        tex,
    )
        .into_response())
}

/// GET /api/v1/resumes/:id/pdf
///
/// Composes the document and submits it to the external compile service.
/// A sink failure maps to `AppError::Compile` → "could not generate".
pub async fn handle_get_pdf(
    State(state): State<AppState>,
    Path(resume_id): Path<i64>,
) -> Result<Response, AppError> {
    let bundle = load_resume_bundle(&state.db, resume_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Resume {resume_id} not found")))?;

    let tex = compose(&bundle);
    let pdf = state
        .pdf
        .compile(&tex)
        .await
        .map_err(|e| AppError::Compile(e.to_string()))?;

    info!(resume_id, bytes = pdf.len(), "document compiled");

    Ok((
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"cv-{resume_id}.pdf\""),
            ),
        ],
        pdf,
    )
        .into_response())
}
