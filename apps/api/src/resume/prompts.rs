// Resume analysis LLM prompt templates.
// Placeholders are substituted with `str::replace`.

pub const ANALYSIS_PROMPT_TEMPLATE: &str = "\
Analyze the following resume text and provide:
1. A score out of 100 based on:
   - Content completeness
   - Professional presentation
   - Skills and experience relevance
   - Grammar and formatting
2. Detailed analysis of strengths and weaknesses
3. Areas for improvement

Resume text:
{resume_text}

Provide the response in the following format:
Score: [number]
Analysis: [detailed analysis]
Areas for Improvement: [specific areas]";

pub const RECOMMENDATION_PROMPT_TEMPLATE: &str = "\
Based on the following resume analysis, recommend 3 specific online courses that would help \
improve the candidate's skills and address their areas for improvement.

Analysis:
{analysis}

Provide the recommendations in the following format:
Course 1:
Title: [course title]
Description: [brief description]
Link: [course URL]

Course 2:
Title: [course title]
Description: [brief description]
Link: [course URL]

Course 3:
Title: [course title]
Description: [brief description]
Link: [course URL]";
