//! Axum route handlers for the resume analysis API.

use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    Json,
};
use tracing::{info, warn};

use crate::errors::AppError;
use crate::models::resume::AnalysisReport;
use crate::resume::pipeline::analyze_document;
use crate::resume::upload::read_resume_upload;
use crate::state::AppState;

/// POST /analyze
///
/// Multipart field `resume` (PDF). The scratch copy is removed only once every stage
/// has succeeded; on failure it stays in the upload directory.
pub async fn handle_analyze(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<AnalysisReport>, AppError> {
    // A request that is not multipart at all carries no file.
    let multipart =
        multipart.map_err(|_| AppError::Validation("No file uploaded".to_string()))?;

    let upload = read_resume_upload(multipart).await?;
    let scratch = upload.persist(&state.config.upload_dir).await?;

    let report = match analyze_document(state.ocr.as_ref(), state.llm.as_ref(), &scratch).await {
        Ok(report) => report,
        Err(e) => {
            warn!("Leaving scratch file {} after failure", scratch.display());
            return Err(e);
        }
    };

    tokio::fs::remove_file(&scratch).await?;
    info!("Temporary file removed");

    Ok(Json(report))
}
