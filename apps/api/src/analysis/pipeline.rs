//! One analysis run: format → (content ∥ skills → keywords) → aggregate.

use tracing::info;

use crate::analysis::aggregator::aggregate;
use crate::analysis::content_scorer::score_content;
use crate::analysis::format_scorer::score_format;
use crate::analysis::keyword_match::match_keywords;
use crate::analysis::models::{FormatReport, KeywordReport, ScoreReport};
use crate::errors::AppError;
use crate::extraction::{extract_skills, is_placeholder};
use crate::llm_client::CompletionProvider;

/// Full result of one run; `keywords` is `None` in no-job mode.
#[derive(Debug, Clone)]
pub struct Analysis {
    pub report: ScoreReport,
    pub format: FormatReport,
    pub keywords: Option<KeywordReport>,
}

/// Scores one résumé, optionally against a job description.
///
/// Only an empty document is an error; every AI failure is absorbed by the
/// component that observed it. A blank job description counts as none.
pub async fn analyze_resume(
    llm: &dyn CompletionProvider,
    resume_text: &str,
    job_description: Option<&str>,
) -> Result<Analysis, AppError> {
    if resume_text.trim().is_empty() {
        return Err(AppError::Validation(
            "Cannot analyze an empty document".to_string(),
        ));
    }
    let job_description = job_description.map(str::trim).filter(|jd| !jd.is_empty());

    let format = score_format(resume_text);

    let keyword_task = async {
        let jd = job_description?;
        let vocabulary: Vec<String> = extract_skills(llm, resume_text)
            .await
            .into_iter()
            .filter(|skill| !is_placeholder(skill))
            .collect();
        Some(match_keywords(llm, resume_text, jd, &vocabulary).await)
    };
    let (content, keywords) = tokio::join!(score_content(llm, resume_text), keyword_task);

    let report = aggregate(&format, content, keywords.as_ref());
    info!(
        "Analysis complete: ats={} format={} content={} keyword={} (job description: {})",
        report.ats_score,
        report.format_score,
        report.content_score,
        report.keyword_score,
        job_description.is_some()
    );

    Ok(Analysis {
        report,
        format,
        keywords,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::aggregator::ScoringWeights;
    use crate::analysis::format_scorer::tests::well_formed_resume;
    use crate::extraction::tests::SAMPLE_RESUME;
    use crate::llm_client::testing::{user_prompt, FnProvider};
    use crate::llm_client::DisabledProvider;

    #[tokio::test]
    async fn test_empty_document_is_rejected() {
        let err = analyze_resume(&DisabledProvider, "  \n\t ", None)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(msg) if msg == "Cannot analyze an empty document"));
    }

    #[tokio::test]
    async fn test_no_job_mode_without_ai() {
        let analysis = analyze_resume(&DisabledProvider, &well_formed_resume(), None)
            .await
            .unwrap();
        let report = analysis.report;
        assert_eq!(report.format_score, 100);
        assert_eq!(report.content_score, 85);
        assert_eq!(report.keyword_score, 85);
        // 30 + 34 + 25.5
        assert_eq!(report.ats_score, 90);
        assert!(analysis.keywords.is_none());
        assert_eq!(report.sections.len(), 5);
    }

    #[tokio::test]
    async fn test_blank_job_description_means_no_job_mode() {
        let analysis = analyze_resume(&DisabledProvider, &well_formed_resume(), Some("   "))
            .await
            .unwrap();
        assert!(analysis.keywords.is_none());
        assert!(analysis.report.keyword_matches.is_empty());
    }

    #[tokio::test]
    async fn test_job_mode_with_ai_keywords() {
        let llm = FnProvider::new(|messages| {
            let prompt = user_prompt(messages);
            if prompt.contains("Extract the important keywords") {
                Ok(r#"{"keywords": ["Rust", "Kafka", "Terraform"], "score": 90}"#.to_string())
            } else if prompt.contains("Evaluate the content quality") {
                Ok(r#"{"score": 70}"#.to_string())
            } else {
                Ok("[]".to_string())
            }
        });

        let analysis = analyze_resume(&llm, SAMPLE_RESUME, Some("Rust, Kafka and Terraform"))
            .await
            .unwrap();
        let report = analysis.report;

        assert_eq!(report.content_score, 70);
        assert_eq!(report.keyword_matches, vec!["Rust", "Kafka"]);
        assert_eq!(report.missing_keywords, vec!["Terraform"]);
        assert_eq!(report.keyword_score, 67);
        assert_eq!(
            report.ats_score,
            ScoringWeights::WITH_JOB.combine(report.format_score, 70, 67)
        );
    }

    #[tokio::test]
    async fn test_job_mode_falls_back_without_ai() {
        let jd = "We need a Rust engineer comfortable with Kafka and Terraform.";
        let analysis = analyze_resume(&DisabledProvider, SAMPLE_RESUME, Some(jd))
            .await
            .unwrap();
        let keywords = analysis.keywords.unwrap();

        assert!(keywords.matches.contains(&"Rust".to_string()));
        assert!(keywords.matches.contains(&"Kafka".to_string()));
        assert!(keywords.missing.iter().any(|k| k.eq_ignore_ascii_case("terraform")));
        assert!(analysis.report.ats_score <= 100);
    }
}
