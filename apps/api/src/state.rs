use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::TextGenerator;
use crate::ocr::OcrEngine;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// The OCR engine and LLM client are built once at startup and shared read-only.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable OCR backend. Default: TesseractEngine.
    pub ocr: Arc<dyn OcrEngine>,
    /// Pluggable text generator. Default: GeminiClient.
    pub llm: Arc<dyn TextGenerator>,
    pub config: Config,
}
