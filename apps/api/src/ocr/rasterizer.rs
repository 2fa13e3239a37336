use std::path::{Path, PathBuf};

use tempfile::TempDir;
use tokio::process::Command;
use tracing::debug;

use super::OcrError;

pub(super) const PDFTOPPM: &str = "pdftoppm";

/// Page images rendered from one PDF. The backing directory is removed on drop.
pub struct RasterizedPages {
    _dir: TempDir,
    pub pages: Vec<PathBuf>,
}

/// Renders every page of `pdf_path` to a PNG at `dpi` using Poppler's `pdftoppm`.
pub async fn rasterize_pages(pdf_path: &Path, dpi: u32) -> Result<RasterizedPages, OcrError> {
    let dir = tempfile::tempdir()?;
    let prefix = dir.path().join("page");

    let output = Command::new(PDFTOPPM)
        .arg("-png")
        .arg("-r")
        .arg(dpi.to_string())
        .arg(pdf_path)
        .arg(&prefix)
        .output()
        .await
        .map_err(|source| OcrError::Spawn {
            program: PDFTOPPM,
            source,
        })?;

    if !output.status.success() {
        return Err(OcrError::ProcessFailed {
            program: PDFTOPPM,
            status: output.status.to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    let pages = collect_page_images(dir.path())?;
    if pages.is_empty() {
        return Err(OcrError::NoPages(PDFTOPPM));
    }
    debug!("Rendered {} page(s) at {dpi} DPI", pages.len());

    Ok(RasterizedPages { _dir: dir, pages })
}

/// PNG files in `dir`, sorted by name. `pdftoppm` zero-pads page numbers per document,
/// so name order is page order.
fn collect_page_images(dir: &Path) -> Result<Vec<PathBuf>, OcrError> {
    let mut pages: Vec<PathBuf> = std::fs::read_dir(dir)?
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.extension().map(|ext| ext == "png").unwrap_or(false))
        .collect();
    pages.sort();
    Ok(pages)
}
