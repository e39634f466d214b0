//! Entity Extraction: job titles, companies, skills, achievements and projects.
//!
//! Every extractor is AI-primary with a section-aware heuristic fallback, and
//! every extractor returns a non-empty list: when nothing is found it returns
//! its placeholder default, so consumers never branch on empty lists.
//! The five extractors are independent and run concurrently in `extract_profile`.

pub mod handlers;
pub mod heuristics;
pub mod projects;
pub mod prompts;
pub mod sections;
pub mod vocab;

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::extraction::prompts::{
    ACHIEVEMENTS_INSTRUCTION, COMPANIES_INSTRUCTION, EXTRACT_PROMPT_TEMPLATE, EXTRACT_ROLE,
    JOB_TITLES_INSTRUCTION, PROJECTS_INSTRUCTION, SKILLS_INSTRUCTION,
};
use crate::llm_client::prompts::{system_prompt, JSON_ARRAY_ONLY};
use crate::llm_client::{complete_text, parse_json_array, CompletionProvider};

pub const DEFAULT_JOB_TITLE: &str = "Software Engineer";
pub const DEFAULT_COMPANY: &str = "previous company";
pub const DEFAULT_SKILL: &str = "problem solving";
pub const DEFAULT_ACHIEVEMENT: &str = "delivered assigned projects";
pub const DEFAULT_PROJECT: &str = "recent project";

/// Placeholders that must never count as résumé-specific detail.
pub const PLACEHOLDERS: &[&str] = &[
    DEFAULT_JOB_TITLE,
    DEFAULT_COMPANY,
    DEFAULT_SKILL,
    DEFAULT_ACHIEVEMENT,
    DEFAULT_PROJECT,
    "No specific company identified",
];

pub fn is_placeholder(value: &str) -> bool {
    PLACEHOLDERS.iter().any(|p| p.eq_ignore_ascii_case(value.trim()))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    JobTitles,
    Companies,
    Skills,
    Achievements,
    Projects,
}

impl EntityKind {
    fn instruction(self) -> &'static str {
        match self {
            EntityKind::JobTitles => JOB_TITLES_INSTRUCTION,
            EntityKind::Companies => COMPANIES_INSTRUCTION,
            EntityKind::Skills => SKILLS_INSTRUCTION,
            EntityKind::Achievements => ACHIEVEMENTS_INSTRUCTION,
            EntityKind::Projects => PROJECTS_INSTRUCTION,
        }
    }

    /// Inclusive character-length bounds for a single entity.
    pub fn length_bounds(self) -> (usize, usize) {
        match self {
            EntityKind::JobTitles => (3, 60),
            EntityKind::Companies => (2, 80),
            EntityKind::Skills => (1, 50),
            EntityKind::Achievements => (15, 200),
            EntityKind::Projects => (3, 100),
        }
    }

    pub fn default_value(self) -> &'static str {
        match self {
            EntityKind::JobTitles => DEFAULT_JOB_TITLE,
            EntityKind::Companies => DEFAULT_COMPANY,
            EntityKind::Skills => DEFAULT_SKILL,
            EntityKind::Achievements => DEFAULT_ACHIEVEMENT,
            EntityKind::Projects => DEFAULT_PROJECT,
        }
    }

    fn fallback(self, text: &str) -> Vec<String> {
        match self {
            EntityKind::JobTitles => heuristics::job_titles(text),
            EntityKind::Companies => heuristics::companies(text),
            EntityKind::Skills => heuristics::skills(text),
            EntityKind::Achievements => heuristics::achievements(text),
            EntityKind::Projects => projects::projects(text),
        }
    }
}

/// Everything extracted from one résumé. Lists are deduplicated in first-seen order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedProfile {
    pub job_titles: Vec<String>,
    pub companies: Vec<String>,
    pub skills: Vec<String>,
    pub achievements: Vec<String>,
    pub projects: Vec<String>,
}

impl ExtractedProfile {
    /// True when titles, companies, skills or projects hold anything besides placeholders.
    pub fn has_specific_details(&self) -> bool {
        [&self.job_titles, &self.companies, &self.skills, &self.projects]
            .iter()
            .any(|list| list.iter().any(|v| !is_placeholder(v)))
    }
}

pub async fn extract_job_titles(llm: &dyn CompletionProvider, text: &str) -> Vec<String> {
    extract(llm, EntityKind::JobTitles, text).await
}

pub async fn extract_companies(llm: &dyn CompletionProvider, text: &str) -> Vec<String> {
    extract(llm, EntityKind::Companies, text).await
}

pub async fn extract_skills(llm: &dyn CompletionProvider, text: &str) -> Vec<String> {
    extract(llm, EntityKind::Skills, text).await
}

pub async fn extract_achievements(llm: &dyn CompletionProvider, text: &str) -> Vec<String> {
    extract(llm, EntityKind::Achievements, text).await
}

pub async fn extract_projects(llm: &dyn CompletionProvider, text: &str) -> Vec<String> {
    extract(llm, EntityKind::Projects, text).await
}

/// Runs all five extractors concurrently; each one owns its own fallback.
pub async fn extract_profile(llm: &dyn CompletionProvider, text: &str) -> ExtractedProfile {
    let (job_titles, companies, skills, achievements, projects) = tokio::join!(
        extract_job_titles(llm, text),
        extract_companies(llm, text),
        extract_skills(llm, text),
        extract_achievements(llm, text),
        extract_projects(llm, text),
    );

    ExtractedProfile {
        job_titles,
        companies,
        skills,
        achievements,
        projects,
    }
}

async fn extract(llm: &dyn CompletionProvider, kind: EntityKind, text: &str) -> Vec<String> {
    let system = system_prompt(EXTRACT_ROLE, JSON_ARRAY_ONLY);
    let prompt = EXTRACT_PROMPT_TEMPLATE
        .replace("{instruction}", kind.instruction())
        .replace("{resume_text}", text);

    let from_ai = match complete_text(llm, &system, &prompt).await {
        Ok(raw) => match parse_json_array::<String>(&raw) {
            Ok(items) => finalize(kind, items),
            Err(e) => {
                warn!("{kind:?} extraction returned unparsable output, using heuristics: {e}");
                Vec::new()
            }
        },
        Err(e) => {
            warn!("{kind:?} extraction AI call failed, using heuristics: {e}");
            Vec::new()
        }
    };

    if !from_ai.is_empty() {
        debug!("{kind:?}: {} entities from AI", from_ai.len());
        return from_ai;
    }

    let from_heuristics = finalize(kind, kind.fallback(text));
    if from_heuristics.is_empty() {
        vec![kind.default_value().to_string()]
    } else {
        from_heuristics
    }
}

/// Trims, applies the length bounds and drops placeholders and duplicates.
pub fn finalize(kind: EntityKind, items: Vec<String>) -> Vec<String> {
    let (min, max) = kind.length_bounds();
    dedup_preserving_order(
        items
            .into_iter()
            .map(|item| item.trim().to_string())
            .filter(|item| (min..=max).contains(&item.chars().count()))
            .filter(|item| !is_placeholder(item)),
    )
}

/// Case-sensitive dedup keeping first-seen order.
pub fn dedup_preserving_order(items: impl IntoIterator<Item = String>) -> Vec<String> {
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .collect()
}
