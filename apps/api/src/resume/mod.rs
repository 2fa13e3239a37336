// Resume analysis: upload → OCR text → contact parse → LLM review → course recommendations.
// All LLM calls go through llm_client; all OCR goes through the ocr module.

pub mod contact;
pub mod courses;
pub mod handlers;
pub mod pipeline;
pub mod prompts;
pub mod review;
pub mod upload;
