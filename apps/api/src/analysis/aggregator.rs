//! Score Aggregator: folds format, content and keyword scores into one ATS score.
//!
//! Without a job description:  ats = 0.30·format + 0.40·content + 0.30·keyword,
//!   keyword synthesized as clamp(content, 40, 85).
//! With a job description:     ats = 0.25·format + 0.35·content + 0.40·keyword,
//!   plus 5 (capped at 100) when at least 80% of candidate keywords matched.

use serde::{Deserialize, Serialize};

use crate::analysis::models::{ContentReport, FormatReport, KeywordReport, ScoreReport};

/// Component weights in hundredths; each set sums to 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub format: u32,
    pub content: u32,
    pub keyword: u32,
}

impl ScoringWeights {
    pub const WITHOUT_JOB: ScoringWeights = ScoringWeights {
        format: 30,
        content: 40,
        keyword: 30,
    };

    pub const WITH_JOB: ScoringWeights = ScoringWeights {
        format: 25,
        content: 35,
        keyword: 40,
    };

    /// Weighted sum rounded half up. Integer math keeps x.5 results exact.
    pub fn combine(&self, format: u8, content: u8, keyword: u8) -> u8 {
        let total = self.format * u32::from(format.min(100))
            + self.content * u32::from(content.min(100))
            + self.keyword * u32::from(keyword.min(100));
        let rounded = (total + 50) / 100;
        rounded.min(100) as u8
    }
}

const SYNTHETIC_KEYWORD_FLOOR: u8 = 40;
const SYNTHETIC_KEYWORD_CEILING: u8 = 85;
const MATCH_BONUS_RATIO: f64 = 0.80;
const MATCH_BONUS: u8 = 5;

/// Keyword score used when no job description was supplied.
pub fn synthetic_keyword_score(content_score: u8) -> u8 {
    content_score.clamp(SYNTHETIC_KEYWORD_FLOOR, SYNTHETIC_KEYWORD_CEILING)
}

/// Builds the final report. `keywords` is `None` in no-job mode.
pub fn aggregate(
    format: &FormatReport,
    content: ContentReport,
    keywords: Option<&KeywordReport>,
) -> ScoreReport {
    let format_score = format.score.min(100);
    let content_score = content.score.min(100);

    let (ats_score, keyword_score, keyword_matches, missing_keywords) = match keywords {
        None => {
            let keyword_score = synthetic_keyword_score(content_score);
            let ats = ScoringWeights::WITHOUT_JOB.combine(format_score, content_score, keyword_score);
            (ats, keyword_score, Vec::new(), Vec::new())
        }
        Some(report) => {
            let keyword_score = report.score.min(100);
            let mut ats =
                ScoringWeights::WITH_JOB.combine(format_score, content_score, keyword_score);
            if report.match_ratio().is_some_and(|r| r >= MATCH_BONUS_RATIO) {
                ats = ats.saturating_add(MATCH_BONUS).min(100);
            }
            (
                ats,
                keyword_score,
                report.matches.clone(),
                report.missing.clone(),
            )
        }
    };

    ScoreReport {
        ats_score,
        format_score,
        keyword_score,
        content_score,
        keyword_matches,
        missing_keywords,
        improvements: content.improvements,
        sections: content.sections,
    }
}
