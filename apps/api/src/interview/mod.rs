//! Interview Question Engine: personalized questions from an extracted profile.
//!
//! Flow: extract profile → (nothing specific? fallback) → one AI call →
//! personalization gate → pad to `MIN_QUESTIONS` with non-overlapping fallback
//! questions → truncate to `MAX_QUESTIONS`.

pub mod fallback;
pub mod handlers;
pub mod personalization;
pub mod prompts;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::extraction::{extract_profile, is_placeholder, ExtractedProfile};
use crate::interview::fallback::fallback_questions;
use crate::interview::personalization::{
    merge_with_fallback, personalization_ratio, personalization_terms, MIN_PERSONALIZATION_RATIO,
};
use crate::interview::prompts::{INTERVIEW_PROMPT_TEMPLATE, INTERVIEW_ROLE};
use crate::llm_client::prompts::{system_prompt, JSON_ARRAY_ONLY};
use crate::llm_client::{complete_text, parse_json_array, CompletionProvider};

pub const MIN_QUESTIONS: usize = 10;
pub const MAX_QUESTIONS: usize = 15;
/// Assigned to AI questions that come back without a category.
pub const DEFAULT_CATEGORY: &str = "General";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterviewQuestion {
    #[serde(default)]
    pub category: String,
    pub question: String,
    #[serde(default)]
    pub tips: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resume_context: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuestionSet {
    pub questions: Vec<InterviewQuestion>,
    /// True when the AI result passed the personalization gate.
    pub personalized: bool,
}

pub async fn generate_questions(
    llm: &dyn CompletionProvider,
    resume_text: &str,
    job_title: Option<&str>,
) -> QuestionSet {
    let profile = extract_profile(llm, resume_text).await;
    let fallback = fallback_questions(&profile, job_title);

    if !profile.has_specific_details() {
        info!("No resume-specific details extracted, using template questions");
        return QuestionSet {
            questions: fallback,
            personalized: false,
        };
    }

    let Some(ai_questions) = ai_questions(llm, &profile, resume_text, job_title).await else {
        return QuestionSet {
            questions: fallback,
            personalized: false,
        };
    };

    let terms = personalization_terms(&profile);
    let ratio = personalization_ratio(&ai_questions, &terms);
    if ratio < MIN_PERSONALIZATION_RATIO {
        warn!(
            "AI interview questions too generic ({ratio:.2} < {MIN_PERSONALIZATION_RATIO}), using template questions"
        );
        return QuestionSet {
            questions: fallback,
            personalized: false,
        };
    }

    let questions = merge_with_fallback(ai_questions, fallback, MIN_QUESTIONS, MAX_QUESTIONS);
    info!(
        "Generated {} interview questions (personalization ratio {:.2})",
        questions.len(),
        ratio
    );
    QuestionSet {
        questions,
        personalized: true,
    }
}

/// One AI call; `None` on any failure or an empty result.
async fn ai_questions(
    llm: &dyn CompletionProvider,
    profile: &ExtractedProfile,
    resume_text: &str,
    job_title: Option<&str>,
) -> Option<Vec<InterviewQuestion>> {
    let target_role = job_title
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .or_else(|| profile.job_titles.first().map(String::as_str))
        .unwrap_or("the candidate's next role");

    let system = system_prompt(INTERVIEW_ROLE, JSON_ARRAY_ONLY);
    let prompt = INTERVIEW_PROMPT_TEMPLATE
        .replace("{target_role}", target_role)
        .replace("{job_titles}", &listing(&profile.job_titles))
        .replace("{companies}", &listing(&profile.companies))
        .replace("{skills}", &listing(&profile.skills))
        .replace("{projects}", &listing(&profile.projects))
        .replace("{achievements}", &listing(&profile.achievements))
        .replace("{resume_text}", resume_text);

    let raw = match complete_text(llm, &system, &prompt).await {
        Ok(raw) => raw,
        Err(e) => {
            warn!("Interview AI call failed, using template questions: {e}");
            return None;
        }
    };

    match parse_json_array::<InterviewQuestion>(&raw) {
        Ok(questions) => {
            let questions: Vec<InterviewQuestion> = questions
                .into_iter()
                .filter(|q| !q.question.trim().is_empty())
                .map(|mut q| {
                    if q.category.trim().is_empty() {
                        q.category = DEFAULT_CATEGORY.to_string();
                    }
                    q
                })
                .collect();
            if questions.is_empty() {
                warn!("Interview AI call returned no questions, using template questions");
                return None;
            }
            debug!("AI returned {} interview questions", questions.len());
            Some(questions)
        }
        Err(e) => {
            warn!("Interview AI output unparsable, using template questions: {e}");
            None
        }
    }
}

/// Comma-joined specific values, or "none" when only placeholders remain.
fn listing(values: &[String]) -> String {
    let specific: Vec<&str> = values
        .iter()
        .map(String::as_str)
        .filter(|v| !is_placeholder(v))
        .collect();
    if specific.is_empty() {
        "none".to_string()
    } else {
        specific.join(", ")
    }
}
