use std::path::Path;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::{debug, info};

use super::rasterizer::rasterize_pages;
use super::{OcrEngine, OcrError, PageLines};

const TESSERACT: &str = "tesseract";
/// Automatic page segmentation with orientation and script detection.
const PAGE_SEG_MODE: &str = "1";

/// Tesseract-backed OCR engine: one fixed language, orientation detection on.
#[derive(Debug, Clone)]
pub struct TesseractEngine {
    language: String,
    dpi: u32,
}

impl TesseractEngine {
    pub fn new(language: String, dpi: u32) -> Self {
        Self { language, dpi }
    }

    /// Checks that `tesseract` and `pdftoppm` can be launched.
    pub async fn verify(&self) -> Result<(), OcrError> {
        for (program, flag) in [(TESSERACT, "--version"), (super::rasterizer::PDFTOPPM, "-v")] {
            Command::new(program)
                .arg(flag)
                .output()
                .await
                .map_err(|source| OcrError::Spawn { program, source })?;
        }
        info!(
            "Tesseract OCR ready (lang={}, dpi={})",
            self.language, self.dpi
        );
        Ok(())
    }

    async fn recognize_page(&self, image: &Path) -> Result<PageLines, OcrError> {
        let output = Command::new(TESSERACT)
            .arg(image)
            .arg("stdout")
            .arg("-l")
            .arg(&self.language)
            .arg("--psm")
            .arg(PAGE_SEG_MODE)
            .output()
            .await
            .map_err(|source| OcrError::Spawn {
                program: TESSERACT,
                source,
            })?;

        if !output.status.success() {
            return Err(OcrError::ProcessFailed {
                program: TESSERACT,
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(recognized_lines(&String::from_utf8_lossy(&output.stdout)))
    }
}

#[async_trait]
impl OcrEngine for TesseractEngine {
    fn name(&self) -> &'static str {
        TESSERACT
    }

    async fn recognize_pdf(&self, pdf_path: &Path) -> Result<Vec<PageLines>, OcrError> {
        let rendered = rasterize_pages(pdf_path, self.dpi).await?;
        let total = rendered.pages.len();

        let mut pages = Vec::with_capacity(total);
        for (i, image) in rendered.pages.iter().enumerate() {
            let lines = self.recognize_page(image).await?;
            debug!("OCR page {}/{}: {} line(s)", i + 1, total, lines.len());
            pages.push(lines);
        }
        Ok(pages)
    }
}

/// Splits tesseract's plain-text output into recognized lines.
/// Paragraph gaps and the trailing form feed are layout, not lines.
fn recognized_lines(stdout: &str) -> PageLines {
    stdout
        .lines()
        .map(|line| line.trim_end_matches(['\u{c}', ' ', '\t', '\r']))
        .filter(|line| !line.trim().is_empty())
        .map(str::to_string)
        .collect()
}
