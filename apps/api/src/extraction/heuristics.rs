//! Section-aware fallback extractors for titles, companies, skills and achievements.
//!
//! Each one reads its own section first and only then scans the whole document
//! against a fixed vocabulary. Length bounds, placeholder filtering and dedup are
//! applied by the caller (`extraction::finalize`).

use once_cell::sync::Lazy;
use regex::Regex;

use crate::analysis::text_features::{is_bullet_line, strip_bullet};
use crate::extraction::dedup_preserving_order;
use crate::extraction::sections::{section_lines, SectionKind};
use crate::extraction::vocab::{
    canonical_skill, contains_term, find_skills, COMPANY_SUFFIXES, TITLE_KEYWORDS,
};

const MAX_TITLE_WORDS: usize = 6;
const MAX_SKILL_WORDS: usize = 4;
const MAX_ACHIEVEMENTS: usize = 10;
const MIN_ACHIEVEMENT_WORDS: usize = 4;

/// Titles recognised anywhere in the document when the experience section yields none.
const COMMON_TITLES: &[&str] = &[
    "Software Engineer",
    "Software Developer",
    "Senior Software Engineer",
    "Staff Engineer",
    "Principal Engineer",
    "Backend Engineer",
    "Backend Developer",
    "Frontend Engineer",
    "Frontend Developer",
    "Full Stack Developer",
    "Full Stack Engineer",
    "Web Developer",
    "Mobile Developer",
    "iOS Developer",
    "Android Developer",
    "DevOps Engineer",
    "Site Reliability Engineer",
    "Cloud Engineer",
    "Data Engineer",
    "Data Scientist",
    "Data Analyst",
    "Machine Learning Engineer",
    "QA Engineer",
    "Test Engineer",
    "Security Engineer",
    "Solutions Architect",
    "Software Architect",
    "Engineering Manager",
    "Product Manager",
    "Project Manager",
    "Program Manager",
    "Technical Lead",
    "Tech Lead",
    "Team Lead",
    "Business Analyst",
    "Systems Administrator",
    "Database Administrator",
    "UX Designer",
    "UI Designer",
    "Product Designer",
    "Graphic Designer",
    "Marketing Manager",
    "Sales Manager",
    "Account Manager",
    "Operations Manager",
    "Consultant",
    "Research Scientist",
    "Intern",
    "CTO",
    "Director of Engineering",
];

static AT_COMPANY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\bat\s+([A-Z][\w&'.-]*(?:\s+[A-Z&][\w&'.-]*){0,4})")
        .expect("Invalid at-company regex")
});

static SUFFIXED_COMPANY: Lazy<Regex> = Lazy::new(|| {
    let suffixes = COMPANY_SUFFIXES
        .iter()
        .map(|s| regex::escape(s.trim_end_matches('.')))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(
        r"\b([A-Z][\w&'-]*(?:\s+[A-Z][\w&'-]*){{0,3}}\s+(?:{suffixes})\.?)(?:\W|$)"
    ))
    .expect("Invalid suffixed-company regex")
});

static ACHIEVEMENT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\d+%|\$\s?\d|\b\d+\+|\b(?:increased|improved|reduced|decreased|grew|saved|generated|launched|delivered|won|awarded|achieved|led|built|designed|optimized|automated|spearheaded)\b",
    )
    .expect("Invalid achievement regex")
});

/// Separators between title, company, location and dates on one line.
fn segments(line: &str) -> Vec<&str> {
    line.split(['|', ',', '—', '–', '(', ')'])
        .flat_map(|part| part.split(" at "))
        .flat_map(|part| part.split(" - "))
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect()
}

fn is_title_segment(segment: &str) -> bool {
    let lower = segment.to_lowercase();
    segment.split_whitespace().count() <= MAX_TITLE_WORDS
        && !segment.chars().any(|c| c.is_ascii_digit())
        && !segment.contains('@')
        && TITLE_KEYWORDS.iter().any(|k| contains_term(&lower, k))
}

fn has_company_suffix(segment: &str) -> bool {
    segment
        .split_whitespace()
        .last()
        .map(|last| COMPANY_SUFFIXES.iter().any(|s| s.eq_ignore_ascii_case(last)))
        .unwrap_or(false)
}

/// Non-bullet lines of the experience section.
fn experience_headlines(text: &str) -> Vec<&str> {
    section_lines(text, SectionKind::Experience)
        .unwrap_or_default()
        .into_iter()
        .filter(|line| !is_bullet_line(line))
        .collect()
}

pub fn job_titles(text: &str) -> Vec<String> {
    let mut titles: Vec<String> = experience_headlines(text)
        .into_iter()
        .flat_map(segments)
        .filter(|segment| is_title_segment(segment))
        .map(str::to_string)
        .collect();

    // Safety net: dictionary scan outside the section.
    if titles.is_empty() {
        let lower = text.to_lowercase();
        titles.extend(
            COMMON_TITLES
                .iter()
                .filter(|title| contains_term(&lower, &title.to_lowercase()))
                .map(|title| title.to_string()),
        );
    }

    dedup_preserving_order(titles)
}

pub fn companies(text: &str) -> Vec<String> {
    let mut companies = Vec::new();

    for line in experience_headlines(text) {
        if let Some(caps) = AT_COMPANY.captures(line) {
            companies.push(clean_company(&caps[1]));
        }

        let parts = segments(line);
        let line_has_title = parts.iter().any(|p| is_title_segment(p));
        for part in parts {
            let starts_upper = part.chars().next().map_or(false, char::is_uppercase);
            if !starts_upper
                || is_title_segment(part)
                || part.chars().any(|c| c.is_ascii_digit())
                || part.contains('@')
            {
                continue;
            }
            if has_company_suffix(part) || (line_has_title && part.split_whitespace().count() <= 5) {
                companies.push(clean_company(part));
            }
        }
    }

    // Safety net: suffix and "at X" patterns across the whole document.
    if companies.is_empty() {
        for line in text.lines() {
            for caps in SUFFIXED_COMPANY.captures_iter(line) {
                companies.push(clean_company(&caps[1]));
            }
            if let Some(caps) = AT_COMPANY.captures(line) {
                companies.push(clean_company(&caps[1]));
            }
        }
    }

    dedup_preserving_order(
        companies
            .into_iter()
            .filter(|c| !TITLE_KEYWORDS.iter().any(|k| contains_term(&c.to_lowercase(), k)))
            .filter(|c| !looks_like_location(c)),
    )
}

fn clean_company(raw: &str) -> String {
    raw.trim()
        .trim_end_matches(|c: char| c == ',' || c == ';' || c == ':')
        .trim()
        .to_string()
}

/// "Remote", "Berlin, Germany" style segments that trail a title line.
fn looks_like_location(segment: &str) -> bool {
    let lower = segment.to_lowercase();
    ["remote", "hybrid", "on-site", "onsite", "present", "current"]
        .iter()
        .any(|w| lower == *w)
        || (segment.len() == 2 && segment.chars().all(|c| c.is_ascii_uppercase()))
}

pub fn skills(text: &str) -> Vec<String> {
    let mut skills = Vec::new();

    for line in section_lines(text, SectionKind::Skills).unwrap_or_default() {
        let line = strip_bullet(line);
        // "Languages: Rust, Go": drop the label
        let line = line.split_once(':').map_or(line, |(_, rest)| rest);
        for token in line.split([',', '|', ';', '•', '·', '/']) {
            let token = token.trim().trim_end_matches('.');
            if token.is_empty() || token.split_whitespace().count() > MAX_SKILL_WORDS {
                continue;
            }
            let name = canonical_skill(token).map_or_else(|| token.to_string(), str::to_string);
            skills.push(name);
        }
    }

    // Secondary whole-document dictionary scan.
    skills.extend(find_skills(text).into_iter().map(str::to_string));
    dedup_preserving_order(skills)
}

pub fn achievements(text: &str) -> Vec<String> {
    let mut lines: Vec<&str> = Vec::new();
    lines.extend(section_lines(text, SectionKind::Achievements).unwrap_or_default());
    lines.extend(
        section_lines(text, SectionKind::Experience)
            .unwrap_or_default()
            .into_iter()
            .filter(|line| is_bullet_line(line)),
    );
    lines.extend(text.lines().filter(|line| is_bullet_line(line)));

    let mut achievements: Vec<String> = Vec::new();
    for line in lines {
        let line = strip_bullet(line);
        if line.split_whitespace().count() < MIN_ACHIEVEMENT_WORDS || !ACHIEVEMENT.is_match(line) {
            continue;
        }
        if !achievements.iter().any(|a| a == line) {
            achievements.push(line.to_string());
        }
        if achievements.len() >= MAX_ACHIEVEMENTS {
            break;
        }
    }
    achievements
}
