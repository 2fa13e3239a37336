//! Text extraction: rasterizes PDF pages and runs them through an OCR engine.
//!
//! `AppState` holds an `Arc<dyn OcrEngine>` built once at startup.
//! Default backend: `TesseractEngine` (Poppler `pdftoppm` + `tesseract` CLI).

use std::path::Path;

use async_trait::async_trait;
use thiserror::Error;
use tracing::debug;

pub mod rasterizer;
pub mod tesseract;

pub use tesseract::TesseractEngine;

#[derive(Debug, Error)]
pub enum OcrError {
    #[error("Failed to run {program}: {source}")]
    Spawn {
        program: &'static str,
        #[source]
        source: std::io::Error,
    },

    #[error("{program} failed ({status}): {stderr}")]
    ProcessFailed {
        program: &'static str,
        status: String,
        stderr: String,
    },

    #[error("{0} produced no page images")]
    NoPages(&'static str),

    #[error("I/O error during OCR: {0}")]
    Io(#[from] std::io::Error),

    #[error("No text could be extracted from the PDF")]
    NoText,
}

/// Lines recognized on one page, in the engine's own order.
pub type PageLines = Vec<String>;

/// The OCR engine trait. Implement this to swap backends without touching the pipeline.
#[async_trait]
pub trait OcrEngine: Send + Sync {
    /// Engine identifier for logs, e.g. "tesseract".
    fn name(&self) -> &'static str;

    /// Renders every page of the PDF at `pdf_path` and recognizes it, one entry per page.
    async fn recognize_pdf(&self, pdf_path: &Path) -> Result<Vec<PageLines>, OcrError>;
}

/// Extracts the full text of a PDF: every recognized line followed by `\n`, pages in order.
///
/// Fails with `OcrError::NoText` when the result is blank after trimming.
pub async fn extract_text(engine: &dyn OcrEngine, pdf_path: &Path) -> Result<String, OcrError> {
    let pages = engine.recognize_pdf(pdf_path).await?;
    debug!("{} recognized {} page(s)", engine.name(), pages.len());

    let text = join_pages(&pages);
    if text.trim().is_empty() {
        return Err(OcrError::NoText);
    }
    Ok(text)
}

fn join_pages(pages: &[PageLines]) -> String {
    let mut text = String::new();
    for line in pages.iter().flatten() {
        text.push_str(line);
        text.push('\n');
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedEngine(Vec<PageLines>);

    #[async_trait]
    impl OcrEngine for FixedEngine {
        fn name(&self) -> &'static str {
            "fixed"
        }

        async fn recognize_pdf(&self, _pdf_path: &Path) -> Result<Vec<PageLines>, OcrError> {
            Ok(self.0.clone())
        }
    }

    fn lines(items: &[&str]) -> PageLines {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[tokio::test]
    async fn test_lines_are_joined_across_pages() {
        let engine = FixedEngine(vec![
            lines(&["Jane Doe", "jane@example.com"]),
            lines(&[]),
            lines(&["Experience"]),
        ]);
        let text = extract_text(&engine, Path::new("cv.pdf")).await.unwrap();
        assert_eq!(text, "Jane Doe\njane@example.com\nExperience\n");
    }

    #[tokio::test]
    async fn test_whitespace_only_text_is_rejected() {
        let engine = FixedEngine(vec![lines(&["   ", "\t"])]);
        let err = extract_text(&engine, Path::new("cv.pdf")).await.unwrap_err();
        assert!(matches!(err, OcrError::NoText));
    }

    #[tokio::test]
    async fn test_document_without_pages_is_rejected() {
        let engine = FixedEngine(vec![]);
        let err = extract_text(&engine, Path::new("cv.pdf")).await.unwrap_err();
        assert_eq!(err.to_string(), "No text could be extracted from the PDF");
    }
}
