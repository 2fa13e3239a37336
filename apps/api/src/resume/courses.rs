//! Recommendation client: asks for three courses and parses the line-prefixed reply.
//!
//! Parsing never fails: an unusable reply degrades to `fallback_courses()`.

use tracing::warn;

use crate::errors::AppError;
use crate::llm_client::TextGenerator;
use crate::models::resume::CourseRecommendation;
use crate::resume::prompts::RECOMMENDATION_PROMPT_TEMPLATE;

pub const MAX_RECOMMENDATIONS: usize = 3;

/// Requests course suggestions for the given analysis. Fails only if the model call fails.
pub async fn recommend_courses(
    llm: &dyn TextGenerator,
    analysis: &str,
) -> Result<Vec<CourseRecommendation>, AppError> {
    let prompt = RECOMMENDATION_PROMPT_TEMPLATE.replace("{analysis}", analysis);
    let reply = llm.generate(&prompt).await?;
    Ok(parse_recommendations(&reply))
}

/// Fields seen so far for the entry under construction.
#[derive(Default)]
struct PendingCourse {
    title: Option<String>,
    description: Option<String>,
    link: Option<String>,
}

impl PendingCourse {
    fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.link.is_none()
    }

    fn flush_into(&mut self, out: &mut Vec<CourseRecommendation>) {
        let pending = std::mem::take(self);
        if !pending.is_empty() {
            out.push(CourseRecommendation {
                title: pending.title.unwrap_or_default(),
                description: pending.description.unwrap_or_default(),
                link: pending.link.unwrap_or_default(),
            });
        }
    }
}

/// Maps a raw model reply to at most three courses.
///
/// A line starting with `Course` opens a new entry; `Title:`, `Description:` and `Link:`
/// lines fill the open one. Zero entries yields the fallback list.
pub fn parse_recommendations(reply: &str) -> Vec<CourseRecommendation> {
    let mut courses = Vec::new();
    let mut current = PendingCourse::default();

    for line in reply.lines().map(str::trim) {
        if line.starts_with("Course") {
            current.flush_into(&mut courses);
        } else if line.starts_with("Title:") {
            current.title = Some(strip_label(line, "Title:"));
        } else if line.starts_with("Description:") {
            current.description = Some(strip_label(line, "Description:"));
        } else if line.starts_with("Link:") {
            current.link = Some(strip_label(line, "Link:"));
        }
    }
    current.flush_into(&mut courses);

    if courses.is_empty() {
        warn!("Could not parse course recommendations, using fallback list");
        return fallback_courses();
    }

    courses.truncate(MAX_RECOMMENDATIONS);
    courses
}

/// Removes every occurrence of the label, then trims.
fn strip_label(line: &str, label: &str) -> String {
    line.replace(label, "").trim().to_string()
}

pub fn fallback_courses() -> Vec<CourseRecommendation> {
    [
        (
            "Professional Development Course",
            "Enhance your professional skills with this comprehensive course.",
            "https://www.coursera.org/learn/professional-development",
        ),
        (
            "Technical Skills Training",
            "Improve your technical expertise with hands-on projects.",
            "https://www.udemy.com/courses/development/",
        ),
        (
            "Soft Skills Workshop",
            "Develop essential soft skills for career growth.",
            "https://www.linkedin.com/learning/",
        ),
    ]
    .into_iter()
    .map(|(title, description, link)| CourseRecommendation {
        title: title.to_string(),
        description: description.to_string(),
        link: link.to_string(),
    })
    .collect()
}
