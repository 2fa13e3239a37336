use serde::{Deserialize, Serialize};

/// Contact details recovered from the OCR text. Every field is best-effort.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

/// One suggested course. None of the fields are validated; `link` may not be a URL.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseRecommendation {
    pub title: String,
    pub description: String,
    pub link: String,
}

/// Body of a successful `POST /analyze`.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    #[serde(flatten)]
    pub contact: ContactInfo,
    pub score: u32,
    /// Raw model reply, score line included.
    pub analysis: String,
    pub recommendations: Vec<CourseRecommendation>,
}
