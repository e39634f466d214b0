//! Section locator: finds the line span of a named résumé section.
//!
//! A section starts at the first header line carrying one of its keywords and
//! ends at the next header belonging to a different section.

use crate::analysis::text_features::is_bullet_line;
use crate::extraction::vocab::{contains_term, TITLE_KEYWORDS};

/// Headers are short lines; anything longer is body text.
const MAX_HEADER_CHARS: usize = 40;
const MAX_HEADER_WORDS: usize = 4;
const MAX_QUALIFIER_WORDS: usize = 1;

/// Qualifiers that turn a header keyword into a link label ("LinkedIn Profile").
const LABEL_QUALIFIERS: &[&str] = &["linkedin", "github", "gitlab", "portfolio", "website"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    Summary,
    Experience,
    Education,
    Skills,
    Projects,
    Certifications,
    Achievements,
}

impl SectionKind {
    pub const ALL: [SectionKind; 7] = [
        SectionKind::Summary,
        SectionKind::Experience,
        SectionKind::Education,
        SectionKind::Skills,
        SectionKind::Projects,
        SectionKind::Certifications,
        SectionKind::Achievements,
    ];

    /// Lowercase keywords that identify the section's header.
    pub fn header_keywords(self) -> &'static [&'static str] {
        match self {
            SectionKind::Summary => &["summary", "profile", "objective", "about me"],
            SectionKind::Experience => &[
                "experience",
                "employment",
                "work history",
                "career history",
            ],
            SectionKind::Education => &["education", "academic"],
            SectionKind::Skills => &["skills", "technologies", "competencies", "tech stack"],
            SectionKind::Projects => &["project"],
            SectionKind::Certifications => &["certification", "licenses"],
            SectionKind::Achievements => &["achievements", "awards", "accomplishments", "honors"],
        }
    }

    /// True when `line` looks like this section's header.
    ///
    /// A header is the keyword phrase plus at most one qualifier word
    /// ("Technical Skills"), optionally ending in a bare `:`. Labels with
    /// content after the colon ("Technologies: Rust, Go") are body lines.
    pub fn is_header(self, line: &str) -> bool {
        let trimmed = line.trim();
        let head = match trimmed.split_once(':') {
            Some((head, rest)) if rest.trim().is_empty() => head.trim(),
            Some(_) => return false,
            None => trimmed,
        };
        if head.is_empty()
            || head.chars().count() > MAX_HEADER_CHARS
            || head.split_whitespace().count() > MAX_HEADER_WORDS
            || is_bullet_line(head)
            || head.contains(|c: char| c.is_ascii_digit() || c == '|' || c == '@')
        {
            return false;
        }
        let lower = head.to_lowercase();
        // "Project Manager" is a title line, not a projects header.
        if lower.contains(" at ") || TITLE_KEYWORDS.iter().any(|t| contains_term(&lower, t)) {
            return false;
        }

        let words = header_words(&lower);
        if words.iter().any(|w| LABEL_QUALIFIERS.contains(w)) {
            return false;
        }
        self.header_keywords()
            .iter()
            .any(|keyword| matches_phrase(&words, keyword))
    }
}

/// Lowercase words of a header candidate, without connectors ("&", "and", "/").
fn header_words(lower: &str) -> Vec<&str> {
    lower
        .split_whitespace()
        .map(|w| w.trim_matches(|c: char| !c.is_alphanumeric()))
        .filter(|w| !w.is_empty() && *w != "and")
        .collect()
}

/// "projects" answers to "project", "certifications" to "certification".
fn word_matches(word: &str, keyword: &str) -> bool {
    word == keyword || (word.starts_with(keyword) && word.len() <= keyword.len() + 2)
}

/// `keyword` appears as consecutive words, leaving at most one qualifier.
fn matches_phrase(words: &[&str], keyword: &str) -> bool {
    let phrase: Vec<&str> = keyword.split_whitespace().collect();
    if phrase.len() > words.len() || words.len() - phrase.len() > MAX_QUALIFIER_WORDS {
        return false;
    }
    (0..=words.len() - phrase.len()).any(|start| {
        phrase
            .iter()
            .zip(&words[start..])
            .all(|(keyword, word)| word_matches(word, keyword))
    })
}

/// Which section, if any, `line` is a header for.
pub fn header_kind(line: &str) -> Option<SectionKind> {
    SectionKind::ALL.into_iter().find(|kind| kind.is_header(line))
}

/// Body lines of the first `kind` section, excluding the header itself and blanks.
/// `None` when the résumé has no header for that section.
pub fn section_lines(text: &str, kind: SectionKind) -> Option<Vec<&str>> {
    let lines: Vec<&str> = text.lines().collect();
    let start = lines.iter().position(|line| kind.is_header(line))?;

    let body = lines[start + 1..]
        .iter()
        .take_while(|line| header_kind(line).map_or(true, |other| other == kind))
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .collect();

    Some(body)
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESUME: &str = "Jane Doe\n\
        SUMMARY\n\
        Engineer focused on data platforms.\n\
        WORK EXPERIENCE\n\
        Senior Data Engineer | Acme Corp\n\
        • Built ingestion pipelines\n\
        \n\
        Data Engineer at Globex Inc\n\
        • Maintained warehouse\n\
        Education:\n\
        B.S. Computer Science\n\
        Skills\n\
        Python, SQL, Airflow";

    #[test]
    fn test_experience_section_stops_at_education() {
        let lines = section_lines(RESUME, SectionKind::Experience).unwrap();
        assert_eq!(
            lines,
            vec![
                "Senior Data Engineer | Acme Corp",
                "• Built ingestion pipelines",
                "Data Engineer at Globex Inc",
                "• Maintained warehouse",
            ]
        );
    }

    #[test]
    fn test_last_section_runs_to_end() {
        let lines = section_lines(RESUME, SectionKind::Skills).unwrap();
        assert_eq!(lines, vec!["Python, SQL, Airflow"]);
    }

    #[test]
    fn test_missing_section_is_none() {
        assert!(section_lines(RESUME, SectionKind::Projects).is_none());
    }

    #[test]
    fn test_long_lines_are_not_headers() {
        assert!(!SectionKind::Experience
            .is_header("Five years of experience building distributed data systems"));
        assert!(!SectionKind::Skills.is_header("• Skills workshop organiser"));
        assert!(SectionKind::Education.is_header("  EDUCATION:  "));
        assert!(!SectionKind::Projects.is_header("Project Manager"));
        assert!(SectionKind::Experience.is_header("Leadership Experience"));
    }

    #[test]
    fn test_inline_labels_are_not_headers() {
        assert!(!SectionKind::Skills.is_header("Technologies: Rust, Go"));
        assert!(!SectionKind::Skills.is_header("Tech Stack: React, Node"));
        assert!(!SectionKind::Summary.is_header("LinkedIn Profile"));
        assert!(SectionKind::Skills.is_header("Technical Skills"));
        assert!(SectionKind::Skills.is_header("Technologies:"));
        assert!(SectionKind::Certifications.is_header("Licenses & Certifications"));
        assert!(!SectionKind::Experience.is_header("Relevant Prior Work Experience"));
    }

    #[test]
    fn test_experience_runs_past_technologies_label() {
        let text = "EXPERIENCE\n\
            Senior Backend Engineer | Stripe Inc\n\
            • Built payment APIs\n\
            Technologies: Rust, Go\n\
            Data Engineer | Initech LLC\n\
            • Maintained warehouse\n\
            EDUCATION\n\
            B.S. Computer Science";
        let lines = section_lines(text, SectionKind::Experience).unwrap();
        assert_eq!(
            lines,
            vec![
                "Senior Backend Engineer | Stripe Inc",
                "• Built payment APIs",
                "Technologies: Rust, Go",
                "Data Engineer | Initech LLC",
                "• Maintained warehouse",
            ]
        );
        assert!(section_lines(text, SectionKind::Skills).is_none());
    }

    #[test]
    fn test_header_kind() {
        assert_eq!(header_kind("Personal Projects"), Some(SectionKind::Projects));
        assert_eq!(header_kind("Acme Corp"), None);
    }
}
