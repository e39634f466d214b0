//! Format Scorer: deterministic rule engine over `TextFeatures`.
//!
//! Starts at 100 and applies deductions in a fixed order:
//! sections (-20), bullets (-15), email (-10), phone (-10), length (-15 short / -10 long).
//! The schedule is load-bearing: aggregation weights assume it.

use crate::analysis::models::FormatReport;
use crate::analysis::text_features::TextFeatures;

const MIN_SECTIONS: usize = 3;
const MIN_BULLETS: usize = 5;
const MIN_WORDS: usize = 200;
const MAX_WORDS: usize = 800;

const SECTION_PENALTY: i32 = 20;
const BULLET_PENALTY: i32 = 15;
const EMAIL_PENALTY: i32 = 10;
const PHONE_PENALTY: i32 = 10;
const SHORT_PENALTY: i32 = 15;
const LONG_PENALTY: i32 = 10;

pub fn score_format(text: &str) -> FormatReport {
    score_features(&TextFeatures::extract(text))
}

pub fn score_features(features: &TextFeatures) -> FormatReport {
    let mut score: i32 = 100;
    let mut issues = Vec::new();
    let mut suggestions = Vec::new();

    let mut deduct = |points: i32, issue: &str, suggestion: &str| {
        score -= points;
        issues.push(issue.to_string());
        suggestions.push(suggestion.to_string());
    };

    if features.sections_found.len() < MIN_SECTIONS {
        deduct(
            SECTION_PENALTY,
            "Missing essential sections",
            "Add clearly labeled sections such as Summary, Experience, Education and Skills",
        );
    }

    if features.bullet_count < MIN_BULLETS {
        deduct(
            BULLET_PENALTY,
            "Too few bullet points",
            "Use bullet points to list responsibilities and achievements",
        );
    }

    if !features.has_email {
        deduct(
            EMAIL_PENALTY,
            "No email address found",
            "Add a professional email address to your contact details",
        );
    }

    if !features.has_phone {
        deduct(
            PHONE_PENALTY,
            "No phone number found",
            "Add a phone number to your contact details",
        );
    }

    if features.word_count < MIN_WORDS {
        deduct(
            SHORT_PENALTY,
            "Resume is too short",
            "Expand your experience and skills to at least 200 words",
        );
    } else if features.word_count > MAX_WORDS {
        deduct(
            LONG_PENALTY,
            "Resume is too long",
            "Condense your resume to under 800 words, focusing on recent and relevant roles",
        );
    }

    FormatReport {
        score: score.clamp(0, 100) as u8,
        issues,
        suggestions,
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Summary/Experience/Skills/Education, 6 bullets, contact details, ~260 words.
    pub(crate) fn well_formed_resume() -> String {
        let mut text = String::from(
            "Jane Doe\njane.doe@example.com | 555-123-4567\n\nSUMMARY\n\
             Backend engineer with eight years of experience building reliable services.\n\n\
             EXPERIENCE\nSenior Software Engineer at Acme Corp\n\
             • Increased API throughput by 40% through caching\n\
             • Led 6 engineers through a platform migration\n\
             • Reduced deployment time from hours to minutes\n\
             • Managed 3 production databases\n\
             • Designed event-driven billing pipeline\n\
             • Mentored junior developers\n\n\
             SKILLS\nRust, Python, PostgreSQL, Docker, Kubernetes, AWS\n\n\
             EDUCATION\nB.S. Computer Science, State University\n\n",
        );
        while text.split_whitespace().count() < 260 {
            text.push_str("Collaborated with product teams to deliver features customers rely on daily. ");
        }
        text
    }

    #[test]
    fn test_well_formed_resume_scores_100() {
        let report = score_format(&well_formed_resume());
        assert_eq!(report.score, 100, "issues: {:?}", report.issues);
        assert!(report.issues.is_empty());
        assert!(report.suggestions.is_empty());
    }

    #[test]
    fn test_sparse_resume_applies_every_short_deduction() {
        let text = "word ".repeat(50);
        let report = score_format(&text);
        // 100 - (20 + 15 + 10 + 10 + 15)
        assert_eq!(report.score, 30);
        assert_eq!(
            report.issues,
            vec![
                "Missing essential sections",
                "Too few bullet points",
                "No email address found",
                "No phone number found",
                "Resume is too short",
            ]
        );
        assert_eq!(report.issues.len(), report.suggestions.len());
    }

    #[test]
    fn test_long_resume_costs_ten() {
        let mut text = well_formed_resume();
        while text.split_whitespace().count() <= 800 {
            text.push_str("Additional detail about prior responsibilities. ");
        }
        let report = score_format(&text);
        assert_eq!(report.score, 90);
        assert_eq!(report.issues, vec!["Resume is too long"]);
    }

    #[test]
    fn test_missing_phone_only() {
        let text = well_formed_resume().replace("555-123-4567", "");
        let report = score_format(&text);
        assert_eq!(report.score, 90);
        assert_eq!(report.issues, vec!["No phone number found"]);
    }

    #[test]
    fn test_format_scoring_is_deterministic() {
        let text = "Experience\n- one\n- two\nme@x.io";
        assert_eq!(score_format(text), score_format(text));
    }
}
