//! Report types produced by the scoring engine.
//!
//! Field names of the API-facing types are camelCase on the wire: UI and API
//! consumers key off them directly.

use serde::{Deserialize, Serialize};

/// Clamps any intermediate score into the 0–100 range used by every report.
pub fn clamp_score(score: f64) -> u8 {
    if score.is_nan() {
        return 0;
    }
    score.round().clamp(0.0, 100.0) as u8
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormatReport {
    pub score: u8,
    pub issues: Vec<String>,
    pub suggestions: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Improvement {
    pub priority: Priority,
    pub category: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub suggestions: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionState {
    Complete,
    Incomplete,
    Missing,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionStatus {
    pub section: String,
    pub status: SectionState,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestions: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentReport {
    pub score: u8,
    pub improvements: Vec<Improvement>,
    pub sections: Vec<SectionStatus>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchStatus {
    Found,
    Partial,
    Missing,
}

impl MatchStatus {
    /// Suggested display weight: partial matches count for half.
    pub fn weight(self) -> f32 {
        match self {
            MatchStatus::Found => 1.0,
            MatchStatus::Partial => 0.5,
            MatchStatus::Missing => 0.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordCandidate {
    pub text: String,
    pub status: MatchStatus,
    pub weight: f32,
}

/// `matches` and `missing` partition the candidates; partial candidates stay in
/// `missing` and are flagged only through `candidates`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordReport {
    pub matches: Vec<String>,
    pub missing: Vec<String>,
    pub score: u8,
    pub suggestions: Vec<String>,
    pub candidates: Vec<KeywordCandidate>,
}

impl KeywordReport {
    /// Fraction of candidates found verbatim; `None` when nothing was considered.
    pub fn match_ratio(&self) -> Option<f64> {
        let total = self.matches.len() + self.missing.len();
        (total > 0).then(|| self.matches.len() as f64 / total as f64)
    }

    pub fn partial_keywords(&self) -> Vec<String> {
        self.candidates
            .iter()
            .filter(|c| c.status == MatchStatus::Partial)
            .map(|c| c.text.clone())
            .collect()
    }
}

/// The single result of one analysis. `ats_score` is derived, never set directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreReport {
    pub ats_score: u8,
    pub format_score: u8,
    pub keyword_score: u8,
    pub content_score: u8,
    pub keyword_matches: Vec<String>,
    pub missing_keywords: Vec<String>,
    pub improvements: Vec<Improvement>,
    pub sections: Vec<SectionStatus>,
}
