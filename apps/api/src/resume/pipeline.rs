//! Response assembler: runs every stage in order on one scratch PDF.

use std::path::Path;

use tracing::info;

use crate::errors::AppError;
use crate::llm_client::TextGenerator;
use crate::models::resume::AnalysisReport;
use crate::ocr::{extract_text, OcrEngine};
use crate::resume::contact::extract_contact_info;
use crate::resume::courses::recommend_courses;
use crate::resume::review::{analyze_resume, extract_score};

/// OCR → contact parse → analysis → score → recommendations. Fail-fast, no retries.
pub async fn analyze_document(
    ocr: &dyn OcrEngine,
    llm: &dyn TextGenerator,
    pdf_path: &Path,
) -> Result<AnalysisReport, AppError> {
    info!("Starting text extraction from PDF ({})", ocr.name());
    let text = extract_text(ocr, pdf_path).await?;
    info!("Extracted text length: {}", text.len());

    let contact = extract_contact_info(&text);
    info!(
        "Contact info extracted: name={:?} email={:?} phone={:?}",
        contact.name, contact.email, contact.phone
    );

    info!("Starting resume analysis");
    let analysis = analyze_resume(llm, &text).await?;
    let score = extract_score(&analysis);
    info!("Resume analysis completed, score: {score}");

    info!("Getting course recommendations");
    let recommendations = recommend_courses(llm, &analysis).await?;
    info!("{} course recommendation(s) generated", recommendations.len());

    Ok(AnalysisReport {
        contact,
        score,
        analysis,
        recommendations,
    })
}
