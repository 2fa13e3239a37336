//! Analysis client and score extractor.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::AppError;
use crate::llm_client::TextGenerator;
use crate::resume::prompts::ANALYSIS_PROMPT_TEMPLATE;

static SCORE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Score:\s*(\d+)").expect("valid score regex"));

/// Asks the model to score and critique the resume. Returns the raw reply.
pub async fn analyze_resume(llm: &dyn TextGenerator, resume_text: &str) -> Result<String, AppError> {
    let prompt = ANALYSIS_PROMPT_TEMPLATE.replace("{resume_text}", resume_text);
    Ok(llm.generate(&prompt).await?)
}

/// First `Score: <digits>` in the analysis, or 0. Not clamped to 0–100.
pub fn extract_score(analysis: &str) -> u32 {
    SCORE_RE
        .captures(analysis)
        .and_then(|c| c.get(1))
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::LlmError;
    use async_trait::async_trait;
    use std::sync::Mutex;

    #[test]
    fn test_score_found() {
        assert_eq!(extract_score("Score: 87\nAnalysis: good"), 87);
    }

    #[test]
    fn test_score_without_space() {
        assert_eq!(extract_score("Score:64"), 64);
    }

    #[test]
    fn test_first_score_wins() {
        assert_eq!(extract_score("Score: 70\n...\nScore: 90"), 70);
    }

    #[test]
    fn test_missing_score_is_zero() {
        assert_eq!(extract_score("Analysis: no number given"), 0);
        assert_eq!(extract_score("Score: N/A"), 0);
        assert_eq!(extract_score(""), 0);
    }

    #[test]
    fn test_score_is_case_sensitive() {
        assert_eq!(extract_score("score: 55"), 0);
    }

    #[test]
    fn test_score_not_clamped() {
        assert_eq!(extract_score("Score: 250"), 250);
    }

    #[test]
    fn test_overflowing_score_is_zero() {
        assert_eq!(extract_score("Score: 99999999999999999999"), 0);
    }

    struct RecordingGenerator {
        prompts: Mutex<Vec<String>>,
        reply: Result<String, ()>,
    }

    #[async_trait]
    impl TextGenerator for RecordingGenerator {
        async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            self.reply.clone().map_err(|_| LlmError::EmptyContent)
        }
    }

    #[tokio::test]
    async fn test_prompt_embeds_resume_text() {
        let llm = RecordingGenerator {
            prompts: Mutex::new(Vec::new()),
            reply: Ok("Score: 80".to_string()),
        };
        let analysis = analyze_resume(&llm, "Rust developer, 5 years").await.unwrap();
        assert_eq!(analysis, "Score: 80");

        let prompts = llm.prompts.lock().unwrap();
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].contains("Resume text:\nRust developer, 5 years"));
        assert!(!prompts[0].contains("{resume_text}"));
    }

    #[tokio::test]
    async fn test_llm_failure_propagates() {
        let llm = RecordingGenerator {
            prompts: Mutex::new(Vec::new()),
            reply: Err(()),
        };
        let err = analyze_resume(&llm, "text").await.unwrap_err();
        assert!(matches!(err, AppError::Llm(LlmError::EmptyContent)));
    }
}
