//! Structural signals read straight off résumé text. Pure, recomputed per call.

use std::collections::BTreeSet;

use once_cell::sync::Lazy;
use regex::Regex;

/// Glyphs counted as bullet markers. `-` is counted wherever it appears.
pub const BULLET_GLYPHS: &[char] = &['•', '·', '-'];

/// Section names the format rules look for, as lowercase substrings.
pub const ESSENTIAL_SECTIONS: &[&str] = &["experience", "education", "skills", "summary", "contact"];

static EMAIL: Lazy<Regex> = Lazy::new(|| Regex::new(r"\S+@\S+\.\S+").expect("Invalid email regex"));

static PHONE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b\d{3}[-.]?\d{3}[-.]?\d{4}\b").expect("Invalid phone regex")
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextFeatures {
    pub word_count: usize,
    pub bullet_count: usize,
    pub has_email: bool,
    pub has_phone: bool,
    pub sections_found: BTreeSet<String>,
}

impl TextFeatures {
    pub fn extract(text: &str) -> Self {
        let lower = text.to_lowercase();

        let sections_found = ESSENTIAL_SECTIONS
            .iter()
            .filter(|section| lower.contains(*section))
            .map(|section| section.to_string())
            .collect();

        Self {
            word_count: text.split_whitespace().count(),
            bullet_count: text.chars().filter(|c| BULLET_GLYPHS.contains(c)).count(),
            has_email: EMAIL.is_match(text),
            has_phone: PHONE.is_match(text),
            sections_found,
        }
    }
}

/// True when the trimmed line opens with a bullet glyph or `*`.
pub fn is_bullet_line(line: &str) -> bool {
    line.trim_start()
        .chars()
        .next()
        .map(|c| BULLET_GLYPHS.contains(&c) || c == '*' || c == '▪' || c == '◦')
        .unwrap_or(false)
}

/// Removes a leading bullet glyph and surrounding whitespace.
pub fn strip_bullet(line: &str) -> &str {
    let trimmed = line.trim();
    if is_bullet_line(trimmed) {
        let mut chars = trimmed.chars();
        chars.next();
        chars.as_str().trim()
    } else {
        trimmed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_words_and_bullets() {
        let features = TextFeatures::extract("• Built APIs\n· Wrote docs\n- Shipped code");
        assert_eq!(features.word_count, 9);
        assert_eq!(features.bullet_count, 3);
    }

    #[test]
    fn test_detects_email_and_dotted_phone() {
        let features = TextFeatures::extract("jane.doe@example.com | 555.123.4567");
        assert!(features.has_email);
        assert!(features.has_phone);
    }

    #[test]
    fn test_phone_without_separators() {
        assert!(TextFeatures::extract("Call 5551234567").has_phone);
        assert!(!TextFeatures::extract("Call 555-1234").has_phone);
    }

    #[test]
    fn test_sections_case_insensitive() {
        let features = TextFeatures::extract("PROFESSIONAL EXPERIENCE\nEducation\nSkills");
        let expected: BTreeSet<String> = ["education", "experience", "skills"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(features.sections_found, expected);
    }

    #[test]
    fn test_strip_bullet() {
        assert_eq!(strip_bullet("  • Led team of 5"), "Led team of 5");
        assert_eq!(strip_bullet("* Wrote tests"), "Wrote tests");
        assert_eq!(strip_bullet("Plain line"), "Plain line");
    }
}
