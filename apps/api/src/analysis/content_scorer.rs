//! Content Scorer: AI-primary, heuristic-fallback measure of writing quality.
//!
//! Any AI failure (transport, status, non-JSON, wrong shape) drops to
//! `heuristic_content_report`, so callers always receive a complete report.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::analysis::models::{
    clamp_score, ContentReport, Improvement, Priority, SectionState, SectionStatus,
};
use crate::analysis::prompts::{CONTENT_SCORE_PROMPT_TEMPLATE, CONTENT_SCORE_ROLE};
use crate::analysis::text_features::TextFeatures;
use crate::llm_client::prompts::{system_prompt, JSON_OBJECT_ONLY};
use crate::llm_client::{complete_json, CompletionProvider};

const BASE_SCORE: f64 = 60.0;

static QUANTIFIED: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\d+%|\d+\+|\b(?:increased|improved|reduced|decreased|grew|saved)\b[^.\n]{0,60}?\d+|\b(?:led|managed)\s+\d+",
    )
    .expect("Invalid quantified-achievement regex")
});

static SUMMARY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:summary|profile|objective|about me)\b").expect("Invalid summary regex")
});

static EXPERIENCE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:experience|employment|work history)\b")
        .expect("Invalid experience regex")
});

static EDUCATION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:education|university|college|degree|b\.s\.|bachelor|master)")
        .expect("Invalid education regex")
});

static SKILLS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:skills|technologies|technical proficiencies|competencies)\b")
        .expect("Invalid skills regex")
});

/// Raw AI response; arrays default to empty when the model omits them.
#[derive(Debug, Deserialize)]
struct AiContentResponse {
    score: f64,
    #[serde(default)]
    improvements: Vec<Improvement>,
    #[serde(default)]
    sections: Vec<SectionStatus>,
}

pub async fn score_content(llm: &dyn CompletionProvider, resume_text: &str) -> ContentReport {
    let system = system_prompt(CONTENT_SCORE_ROLE, JSON_OBJECT_ONLY);
    let prompt = CONTENT_SCORE_PROMPT_TEMPLATE.replace("{resume_text}", resume_text);

    match complete_json::<AiContentResponse>(llm, &system, &prompt).await {
        Ok(response) => {
            debug!("Content scored by AI: {}", response.score);
            ContentReport {
                score: clamp_score(response.score),
                improvements: response.improvements,
                sections: response.sections,
            }
        }
        Err(e) => {
            warn!("Content scoring AI call failed, using heuristic scorer: {e}");
            heuristic_content_report(resume_text)
        }
    }
}

/// Signals the heuristic scorer reads from the text.
#[derive(Debug, Clone)]
struct ContentSignals {
    quantified: bool,
    bullet_count: usize,
    word_count: usize,
    has_email: bool,
    has_phone: bool,
    has_summary: bool,
    has_experience: bool,
    has_education: bool,
    has_skills: bool,
}

impl ContentSignals {
    fn read(text: &str) -> Self {
        let features = TextFeatures::extract(text);
        Self {
            quantified: QUANTIFIED.is_match(text),
            bullet_count: features.bullet_count,
            word_count: features.word_count,
            has_email: features.has_email,
            has_phone: features.has_phone,
            has_summary: SUMMARY.is_match(text),
            has_experience: EXPERIENCE.is_match(text),
            has_education: EDUCATION.is_match(text),
            has_skills: SKILLS.is_match(text),
        }
    }
}

/// Deterministic scorer: base 60, +15 quantified, +10 bullets, +10 length, -5 overlong.
pub fn heuristic_content_report(text: &str) -> ContentReport {
    let signals = ContentSignals::read(text);

    let mut score = BASE_SCORE;
    if signals.quantified {
        score += 15.0;
    }
    if signals.bullet_count >= 5 {
        score += 10.0;
    }
    if signals.word_count >= 300 {
        score += 10.0;
    }
    if signals.word_count > 800 {
        score -= 5.0;
    }

    ContentReport {
        score: clamp_score(score),
        improvements: heuristic_improvements(&signals),
        sections: heuristic_sections(&signals),
    }
}

fn heuristic_improvements(signals: &ContentSignals) -> Vec<Improvement> {
    let mut improvements = Vec::new();

    if !signals.quantified {
        improvements.push(Improvement {
            priority: Priority::High,
            category: "Content".to_string(),
            title: "Add Quantified Achievements".to_string(),
            description: "Your bullets describe duties but rarely show measurable outcomes."
                .to_string(),
            suggestions: vec![
                "Add numbers: percentages, revenue, users or time saved".to_string(),
                "Start bullets with results, e.g. 'Reduced costs by 20%'".to_string(),
            ],
        });
    }

    if signals.bullet_count < 5 {
        improvements.push(Improvement {
            priority: Priority::Medium,
            category: "Format".to_string(),
            title: "Use More Bullet Points".to_string(),
            description: "Dense paragraphs are harder for recruiters and ATS parsers to scan."
                .to_string(),
            suggestions: vec![
                "Break each role into 3-5 bullet points".to_string(),
                "Keep each bullet to one or two lines".to_string(),
            ],
        });
    }

    if !signals.has_summary {
        improvements.push(Improvement {
            priority: Priority::High,
            category: "Structure".to_string(),
            title: "Add Professional Summary".to_string(),
            description: "A short summary tells the reader who you are before they read details."
                .to_string(),
            suggestions: vec![
                "Write 2-3 sentences covering your role, experience and strengths".to_string(),
            ],
        });
    }

    if signals.word_count < 200 {
        improvements.push(Improvement {
            priority: Priority::Medium,
            category: "Content".to_string(),
            title: "Expand Content".to_string(),
            description: "The resume is too brief to show the depth of your experience."
                .to_string(),
            suggestions: vec![
                "Describe responsibilities and outcomes for each role".to_string(),
                "Add relevant projects, certifications or coursework".to_string(),
            ],
        });
    }

    improvements
}

fn heuristic_sections(signals: &ContentSignals) -> Vec<SectionStatus> {
    let contact = match (signals.has_email, signals.has_phone) {
        (true, true) => SectionState::Complete,
        (false, false) => SectionState::Missing,
        _ => SectionState::Incomplete,
    };

    vec![
        section(
            "Contact Information",
            contact,
            "Include a professional email address and phone number",
        ),
        section(
            "Professional Experience",
            present(signals.has_experience),
            "Add your work history with company, title, dates and achievements",
        ),
        section(
            "Education",
            present(signals.has_education),
            "Add your degree, institution and graduation year",
        ),
        section(
            "Skills",
            present(signals.has_skills),
            "Add a skills section listing relevant technical and soft skills",
        ),
        section(
            "Summary/Profile",
            present(signals.has_summary),
            "Add a 2-3 sentence professional summary at the top",
        ),
    ]
}

fn present(found: bool) -> SectionState {
    if found {
        SectionState::Complete
    } else {
        SectionState::Missing
    }
}

fn section(name: &str, status: SectionState, suggestion: &str) -> SectionStatus {
    SectionStatus {
        section: name.to_string(),
        status,
        suggestions: (status != SectionState::Complete).then(|| vec![suggestion.to_string()]),
    }
}
