//! Keyword Match Engine: compares résumé vocabulary against a job description.
//!
//! Candidates come from the AI (compare-and-extract prompt) or, on any failure,
//! from `fallback_keywords`. Classification is always local:
//! 1. case-insensitive substring containment → `matches`, otherwise `missing`
//! 2. score = round(matches / (matches + missing) × 100)
//! 3. missing keywords whose stem or constituent words appear are flagged
//!    `partial`; they stay in `missing` and never change the score.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::analysis::models::{clamp_score, KeywordCandidate, KeywordReport, MatchStatus};
use crate::analysis::prompts::{KEYWORD_EXTRACT_PROMPT_TEMPLATE, KEYWORD_EXTRACT_ROLE};
use crate::extraction::vocab::contains_term;
use crate::llm_client::prompts::{system_prompt, JSON_OBJECT_ONLY};
use crate::llm_client::{complete_json, CompletionProvider};

pub const MAX_CANDIDATES: usize = 20;

/// Used only when no candidate could be classified and the AI gave no score.
pub const DEFAULT_KEYWORD_SCORE: u8 = 50;

const MIN_STEM_LEN: usize = 4;
const MAX_MISSING_SUGGESTIONS: usize = 5;

/// Technical and soft-skill terms screened for in every job description.
const KEYWORD_TERMS: &[&str] = &[
    "python",
    "java",
    "javascript",
    "typescript",
    "react",
    "node.js",
    "sql",
    "aws",
    "azure",
    "docker",
    "kubernetes",
    "git",
    "agile",
    "scrum",
    "rest api",
    "graphql",
    "mongodb",
    "postgresql",
    "machine learning",
    "data analysis",
    "ci/cd",
    "linux",
    "html",
    "css",
    "microservices",
    "devops",
    "cloud",
    "testing",
    "security",
    "communication",
    "leadership",
    "teamwork",
    "problem solving",
    "project management",
    "collaboration",
];

/// Frequent job-description words that carry no screening signal.
const STOPWORDS: &[&str] = &[
    "the", "and", "for", "with", "that", "this", "will", "your", "you", "our", "are", "have",
    "from", "they", "their", "about", "into", "able", "must", "should", "would", "also", "such",
    "work", "working", "team", "teams", "role", "join", "who", "what", "when", "where", "which",
    "while", "other", "more", "most", "well", "including", "include", "includes", "years",
    "year", "experience", "strong", "ability", "skills", "knowledge", "understanding",
    "responsibilities", "requirements", "required", "preferred", "plus", "bonus", "candidate",
    "position", "company", "we", "us", "an", "a", "to", "of", "in", "on", "or", "is", "as",
    "be", "at", "by", "it", "new", "good", "great", "excellent", "help", "using", "within",
];

static PHRASE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b[a-z][a-z-]+\s+(?:development|management|design|engineering|analysis|analytics|architecture|testing|learning|systems|services|integration|delivery|computing|optimization)\b",
    )
    .expect("Invalid phrase regex")
});

#[derive(Debug, Deserialize)]
struct AiKeywordResponse {
    #[serde(default)]
    keywords: Vec<String>,
    #[serde(default)]
    score: Option<f64>,
}

/// Matches a résumé against a job description.
///
/// `vocabulary` is extra signal from entity extraction (the résumé's skills);
/// entries that also appear in the job description lead the fallback list.
pub async fn match_keywords(
    llm: &dyn CompletionProvider,
    resume_text: &str,
    job_description: &str,
    vocabulary: &[String],
) -> KeywordReport {
    let system = system_prompt(KEYWORD_EXTRACT_ROLE, JSON_OBJECT_ONLY);
    let prompt = KEYWORD_EXTRACT_PROMPT_TEMPLATE
        .replace("{job_description}", job_description)
        .replace("{resume_text}", resume_text);

    let (candidates, ai_score) =
        match complete_json::<AiKeywordResponse>(llm, &system, &prompt).await {
            Ok(response) if response.keywords.iter().any(|k| !k.trim().is_empty()) => {
                debug!("AI extracted {} keyword candidates", response.keywords.len());
                (response.keywords, response.score)
            }
            Ok(_) => {
                warn!("Keyword AI call returned no keywords, using fallback extractor");
                (fallback_keywords(job_description, vocabulary), None)
            }
            Err(e) => {
                warn!("Keyword AI call failed, using fallback extractor: {e}");
                (fallback_keywords(job_description, vocabulary), None)
            }
        };

    classify_keywords(resume_text, &candidates, ai_score)
}

/// Deterministic candidate extraction from the job description alone.
///
/// Order: résumé vocabulary present in the JD, dictionary terms, multi-word
/// phrases, capitalized words, then remaining long words. Deduplicated
/// case-insensitively and capped at `MAX_CANDIDATES`.
pub fn fallback_keywords(job_description: &str, vocabulary: &[String]) -> Vec<String> {
    let jd_lower = job_description.to_lowercase();
    let mut seen = HashSet::new();
    let mut keywords = Vec::new();

    let mut push = |keyword: &str| {
        let keyword = keyword.trim();
        if keyword.is_empty() || keywords.len() >= MAX_CANDIDATES {
            return;
        }
        if seen.insert(keyword.to_lowercase()) {
            keywords.push(keyword.to_string());
        }
    };

    for term in vocabulary {
        if contains_term(&jd_lower, &term.to_lowercase()) {
            push(term);
        }
    }

    for term in KEYWORD_TERMS {
        if contains_term(&jd_lower, term) {
            push(term);
        }
    }

    for phrase in PHRASE.find_iter(job_description) {
        let phrase = phrase.as_str().to_lowercase();
        let first = phrase.split_whitespace().next().unwrap_or_default();
        if !STOPWORDS.contains(&first) {
            push(&phrase);
        }
    }

    for word in job_description.split_whitespace() {
        let word = trim_token(word);
        let capitalized = word.chars().next().map_or(false, char::is_uppercase);
        if capitalized && word.len() > 1 && !STOPWORDS.contains(&word.to_lowercase().as_str()) {
            push(word);
        }
    }

    for word in job_description.split_whitespace() {
        let word = trim_token(word).to_lowercase();
        if word.chars().count() > 3 && !STOPWORDS.contains(&word.as_str()) {
            push(&word);
        }
    }

    keywords
}

/// Classifies candidates against the résumé and computes the keyword score.
pub fn classify_keywords(
    resume_text: &str,
    candidates: &[String],
    ai_score: Option<f64>,
) -> KeywordReport {
    let resume_lower = resume_text.to_lowercase();
    let resume_words = word_set(&resume_lower);

    let mut seen = HashSet::new();
    let mut matches = Vec::new();
    let mut missing = Vec::new();
    let mut classified = Vec::new();

    for candidate in candidates {
        let text = candidate.trim();
        if text.is_empty() || !seen.insert(text.to_lowercase()) {
            continue;
        }

        let status = if resume_lower.contains(&text.to_lowercase()) {
            matches.push(text.to_string());
            MatchStatus::Found
        } else {
            missing.push(text.to_string());
            if is_partial_match(text, &resume_words) {
                MatchStatus::Partial
            } else {
                MatchStatus::Missing
            }
        };

        classified.push(KeywordCandidate {
            text: text.to_string(),
            status,
            weight: status.weight(),
        });
    }

    let total = matches.len() + missing.len();
    let score = if total > 0 {
        clamp_score(matches.len() as f64 / total as f64 * 100.0)
    } else {
        ai_score.map(clamp_score).unwrap_or(DEFAULT_KEYWORD_SCORE)
    };

    let suggestions = build_suggestions(score, &classified);

    KeywordReport {
        matches,
        missing,
        score,
        suggestions,
        candidates: classified,
    }
}

/// Partial-match refinement for a keyword that failed exact containment.
///
/// Multi-word: any constituent word longer than 3 chars appears as a whole word.
/// Single word: its stem (trailing `ing`/`ed`/`s` removed) is at least 4 chars
/// and starts some résumé word.
pub fn is_partial_match(keyword: &str, resume_words: &HashSet<String>) -> bool {
    let lower = keyword.to_lowercase();
    let parts: Vec<&str> = lower.split_whitespace().collect();

    if parts.len() > 1 {
        return parts
            .iter()
            .map(|part| trim_token(part))
            .filter(|part| part.chars().count() > 3)
            .any(|part| resume_words.contains(part));
    }

    let stem = stem(trim_token(&lower));
    stem.chars().count() >= MIN_STEM_LEN && resume_words.iter().any(|w| w.starts_with(stem))
}

/// Strips one trailing `ing`, `ed` or `s`.
pub fn stem(word: &str) -> &str {
    word.strip_suffix("ing")
        .or_else(|| word.strip_suffix("ed"))
        .or_else(|| word.strip_suffix('s'))
        .unwrap_or(word)
}

/// Lowercase alphanumeric tokens of `text`.
fn word_set(text: &str) -> HashSet<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .map(str::to_lowercase)
        .collect()
}

fn trim_token(token: &str) -> &str {
    token.trim_matches(|c: char| !c.is_alphanumeric() && c != '+' && c != '#')
}

fn build_suggestions(score: u8, candidates: &[KeywordCandidate]) -> Vec<String> {
    let mut suggestions: Vec<String> = candidates
        .iter()
        .filter(|c| c.status == MatchStatus::Partial)
        .map(|c| {
            format!(
                "Use the exact term \"{}\": your resume mentions a related form that ATS filters may not match",
                c.text
            )
        })
        .collect();

    suggestions.extend(
        candidates
            .iter()
            .filter(|c| c.status == MatchStatus::Missing)
            .take(MAX_MISSING_SUGGESTIONS)
            .map(|c| format!("Consider adding \"{}\" if it reflects your experience", c.text)),
    );

    if score < 50 {
        suggestions.push(
            "Tailor your resume to this job description: mirror its key skills and terminology"
                .to_string(),
        );
    }

    suggestions
}
