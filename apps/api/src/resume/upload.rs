//! Upload handler: pulls the `resume` file out of a multipart form and writes it to scratch.

use std::path::{Path, PathBuf};

use axum::extract::Multipart;
use bytes::Bytes;
use tracing::{debug, info};

use crate::errors::AppError;

pub const RESUME_FIELD: &str = "resume";
const FALLBACK_FILENAME: &str = "resume.pdf";

/// The uploaded PDF, held in memory until it is persisted.
#[derive(Debug)]
pub struct UploadedDocument {
    pub filename: String,
    pub data: Bytes,
}

impl UploadedDocument {
    /// Writes the document under `dir` using its sanitized name and returns the path.
    /// An existing file with the same name is overwritten.
    pub async fn persist(&self, dir: &Path) -> Result<PathBuf, std::io::Error> {
        let path = dir.join(sanitize_filename(&self.filename));
        tokio::fs::write(&path, &self.data).await?;
        info!("File saved successfully: {}", path.display());
        Ok(path)
    }
}

/// Reads the first `resume` file part and validates its name.
///
/// Parts without a filename are plain form values, not files, and are skipped.
pub async fn read_resume_upload(mut multipart: Multipart) -> Result<UploadedDocument, AppError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(RESUME_FIELD) {
            continue;
        }
        let Some(filename) = field.file_name().map(str::to_owned) else {
            continue;
        };

        validate_filename(&filename)?;
        let data = field.bytes().await?;
        debug!("Received {filename} ({} bytes)", data.len());
        return Ok(UploadedDocument { filename, data });
    }

    Err(AppError::Validation("No file uploaded".to_string()))
}

/// Empty name, then a case-sensitive `.pdf` suffix. Content is not inspected.
pub fn validate_filename(filename: &str) -> Result<(), AppError> {
    if filename.is_empty() {
        return Err(AppError::Validation("No file selected".to_string()));
    }
    if !filename.ends_with(".pdf") {
        return Err(AppError::Validation(
            "Only PDF files are supported".to_string(),
        ));
    }
    Ok(())
}

/// Reduces a client-supplied filename to a safe single path component:
/// whitespace becomes `_`, anything but ASCII alphanumerics, `.`, `_`, `-` is dropped,
/// and leading/trailing dots and underscores are stripped.
pub fn sanitize_filename(filename: &str) -> String {
    let base = filename.rsplit(['/', '\\']).next().unwrap_or(filename);
    let cleaned: String = base
        .chars()
        .map(|c| if c.is_whitespace() { '_' } else { c })
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'))
        .collect();
    let cleaned = cleaned.trim_matches(|c: char| c == '.' || c == '_');

    if cleaned.is_empty() {
        FALLBACK_FILENAME.to_string()
    } else {
        cleaned.to_string()
    }
}
