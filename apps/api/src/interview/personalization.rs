//! Personalization gate and question-overlap dedup.

use std::collections::HashSet;

use crate::extraction::vocab::contains_term;
use crate::extraction::{is_placeholder, ExtractedProfile};
use crate::interview::InterviewQuestion;

/// AI results below this share of résumé-specific questions are discarded.
pub const MIN_PERSONALIZATION_RATIO: f64 = 0.70;

/// Fallback questions sharing more than this share of significant words with an
/// included question are skipped.
pub const MAX_WORD_OVERLAP: f64 = 0.40;

/// Terms shorter than this ("Go", "C") must appear as whole words, as written.
const MIN_SUBSTRING_CHARS: usize = 3;
const MIN_SIGNIFICANT_CHARS: usize = 4;

/// Companies, titles, skills and projects that prove a question is specific.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PersonalizationTerms {
    /// Lowercased; matched as case-insensitive substrings.
    phrases: Vec<String>,
    /// As extracted; matched case-sensitively at word boundaries so "Go" the
    /// language does not match "go" the verb.
    short: Vec<String>,
}

impl PersonalizationTerms {
    pub fn matches(&self, text: &str) -> bool {
        let lower = text.to_lowercase();
        self.phrases.iter().any(|p| lower.contains(p.as_str()))
            || self.short.iter().any(|s| contains_term(text, s))
    }

    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty() && self.short.is_empty()
    }
}

pub fn personalization_terms(profile: &ExtractedProfile) -> PersonalizationTerms {
    let mut seen = HashSet::new();
    let mut terms = PersonalizationTerms::default();
    for value in [
        &profile.companies,
        &profile.job_titles,
        &profile.skills,
        &profile.projects,
    ]
    .into_iter()
    .flatten()
    {
        let value = value.trim();
        if value.is_empty() || is_placeholder(value) || !seen.insert(value.to_lowercase()) {
            continue;
        }
        if value.chars().count() >= MIN_SUBSTRING_CHARS {
            terms.phrases.push(value.to_lowercase());
        } else {
            terms.short.push(value.to_string());
        }
    }
    terms
}

pub fn is_personalized(question: &InterviewQuestion, terms: &PersonalizationTerms) -> bool {
    terms.matches(&question.question)
}

/// Share of `questions` that mention at least one term; 0.0 for an empty list.
pub fn personalization_ratio(questions: &[InterviewQuestion], terms: &PersonalizationTerms) -> f64 {
    if questions.is_empty() {
        return 0.0;
    }
    let personalized = questions
        .iter()
        .filter(|q| is_personalized(q, terms))
        .count();
    personalized as f64 / questions.len() as f64
}

fn significant_words(text: &str) -> HashSet<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|word| word.chars().count() >= MIN_SIGNIFICANT_CHARS)
        .map(str::to_lowercase)
        .collect()
}

/// Shared significant words relative to the smaller of the two word sets.
pub fn word_overlap(a: &str, b: &str) -> f64 {
    let a = significant_words(a);
    let b = significant_words(b);
    let smaller = a.len().min(b.len());
    if smaller == 0 {
        return 0.0;
    }
    a.intersection(&b).count() as f64 / smaller as f64
}

pub fn is_near_duplicate(candidate: &InterviewQuestion, included: &[InterviewQuestion]) -> bool {
    included
        .iter()
        .any(|q| word_overlap(&candidate.question, &q.question) > MAX_WORD_OVERLAP)
}

/// Pads `questions` up to `min` with non-overlapping fallback questions, then
/// truncates to `max`.
pub fn merge_with_fallback(
    mut questions: Vec<InterviewQuestion>,
    fallback: Vec<InterviewQuestion>,
    min: usize,
    max: usize,
) -> Vec<InterviewQuestion> {
    for candidate in fallback {
        if questions.len() >= min {
            break;
        }
        if !is_near_duplicate(&candidate, &questions) {
            questions.push(candidate);
        }
    }
    questions.truncate(max);
    questions
}

#[cfg(test)]
mod tests {
    use super::*;

    fn q(text: &str) -> InterviewQuestion {
        InterviewQuestion {
            category: "Technical".to_string(),
            question: text.to_string(),
            tips: vec![],
            resume_context: None,
        }
    }

    fn profile() -> ExtractedProfile {
        ExtractedProfile {
            job_titles: vec!["Software Engineer".to_string(), "Data Engineer".to_string()],
            companies: vec!["Acme Corp".to_string()],
            skills: vec!["Go".to_string(), "Kafka".to_string()],
            achievements: vec!["Cut latency by 40% across services".to_string()],
            projects: vec!["recent project".to_string()],
        }
    }

    #[test]
    fn test_terms_skip_placeholders_and_split_short_names() {
        let terms = personalization_terms(&profile());
        assert_eq!(
            terms,
            PersonalizationTerms {
                phrases: vec![
                    "acme corp".to_string(),
                    "data engineer".to_string(),
                    "kafka".to_string(),
                ],
                short: vec!["Go".to_string()],
            }
        );
        assert!(!terms.is_empty());
    }

    #[test]
    fn test_ratio_counts_case_insensitive_mentions() {
        let terms = personalization_terms(&profile());
        let questions = vec![
            q("How did you size KAFKA partitions?"),
            q("What did you ship at Acme Corp?"),
            q("Tell me about a good day."),
            q("Where do you want to grow?"),
        ];
        assert!((personalization_ratio(&questions, &terms) - 0.5).abs() < f64::EPSILON);
        assert_eq!(personalization_ratio(&[], &terms), 0.0);
    }

    #[test]
    fn test_short_skill_matches_as_whole_word() {
        let terms = personalization_terms(&profile());
        assert!(is_personalized(&q("Why did you pick Go for the ingestion service?"), &terms));
        assert!(!is_personalized(&q("What is a good way to go about it?"), &terms));
        assert!(!is_personalized(&q("Which Google tools do you use?"), &terms));
    }

    #[test]
    fn test_short_only_profile_can_pass_gate() {
        let profile = ExtractedProfile {
            job_titles: vec!["Software Engineer".to_string()],
            companies: vec!["previous company".to_string()],
            skills: vec!["R".to_string()],
            achievements: vec![],
            projects: vec!["recent project".to_string()],
        };
        assert!(profile.has_specific_details());
        let terms = personalization_terms(&profile);
        let questions = vec![
            q("How have you used R for statistical modelling?"),
            q("Which R packages do you rely on?"),
        ];
        assert_eq!(personalization_ratio(&questions, &terms), 1.0);
    }

    #[test]
    fn test_word_overlap_relative_to_shorter() {
        let overlap = word_overlap(
            "Describe a difficult production incident",
            "Describe a difficult production incident you resolved under heavy pressure",
        );
        assert!((overlap - 1.0).abs() < f64::EPSILON);
        assert_eq!(word_overlap("a an of", "Describe everything"), 0.0);
    }

    #[test]
    fn test_merge_pads_skips_overlap_and_truncates() {
        let ai = vec![q("Describe a difficult production incident at Acme Corp")];
        let fallback = vec![
            q("Describe a difficult production incident"),
            q("Why does this role interest you?"),
            q("How do you keep your skills current?"),
        ];
        let merged = merge_with_fallback(ai, fallback, 3, 15);
        let texts: Vec<&str> = merged.iter().map(|q| q.question.as_str()).collect();
        assert_eq!(
            texts,
            vec![
                "Describe a difficult production incident at Acme Corp",
                "Why does this role interest you?",
                "How do you keep your skills current?",
            ]
        );

        let many = (0..20).map(|i| q(&format!("Question number {i}"))).collect();
        assert_eq!(merge_with_fallback(many, vec![], 10, 15).len(), 15);
    }
}
