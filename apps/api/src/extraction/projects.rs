//! Project-name fallback: project section titles, bullet-derived names and
//! repository links anywhere in the document.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::analysis::text_features::{is_bullet_line, strip_bullet};
use crate::extraction::dedup_preserving_order;
use crate::extraction::sections::{section_lines, SectionKind};

const MAX_NAME_WORDS: usize = 8;

static REPO_LINK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:https?://)?(?:www\.)?(?:github\.com|gitlab\.com|bitbucket\.org)/[\w.-]+/([\w.-]+)")
        .expect("Invalid repo link regex")
});

static BUILT_THING: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(?:built|developed|created|designed|implemented|launched)\s+(?:an?\s+|the\s+)?(.{3,60}?)(?:\s+(?:using|with|in|for|that|to|on)\b|[.,;]|$)",
    )
    .expect("Invalid built-thing regex")
});

static PROJECT_LABEL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\bproject\s*[:\-–]\s*(.{3,80})").expect("Invalid project label regex")
});

fn is_link_line(line: &str) -> bool {
    line.contains("://") || line.starts_with("www.") || REPO_LINK.is_match(line)
}

/// "LedgerLite | Rust, Postgres" -> "LedgerLite"
fn title_of(line: &str) -> &str {
    line.split(['|', '—', '–', ':', '('])
        .next()
        .and_then(|head| head.split(" - ").next())
        .unwrap_or(line)
        .trim()
}

/// "rate-limiter.git" -> "Rate Limiter"
fn humanize_repo(slug: &str) -> String {
    slug.trim_end_matches(".git")
        .split(['-', '_', '.'])
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn projects(text: &str) -> Vec<String> {
    let mut names = Vec::new();

    // A short non-bullet line names a project; bullets under it are its details.
    let mut has_context = false;
    for line in section_lines(text, SectionKind::Projects).unwrap_or_default() {
        if is_link_line(line) {
            continue;
        }
        if is_bullet_line(line) {
            if has_context {
                continue;
            }
            if let Some(caps) = BUILT_THING.captures(strip_bullet(line)) {
                names.push(caps[1].trim().to_string());
            }
            continue;
        }

        let title = title_of(line);
        let words = title.split_whitespace().count();
        if words > 0 && words <= MAX_NAME_WORDS {
            names.push(title.to_string());
            has_context = true;
        }
    }

    for caps in REPO_LINK.captures_iter(text) {
        let name = humanize_repo(&caps[1]);
        if !name.is_empty() {
            names.push(name);
        }
    }

    if names.is_empty() {
        for line in text.lines() {
            if let Some(caps) = PROJECT_LABEL.captures(line) {
                names.push(caps[1].trim().trim_end_matches('.').to_string());
            }
        }
    }

    dedup_preserving_order(names)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extraction::tests::SAMPLE_RESUME;

    #[test]
    fn test_section_titles_and_repo_links() {
        assert_eq!(projects(SAMPLE_RESUME), vec!["LedgerLite", "Rate Limiter"]);
    }

    #[test]
    fn test_title_line_with_stack() {
        let text = "Projects\nOpenMetrics | Rust, Prometheus\n• Exposed 40 custom gauges";
        assert_eq!(projects(text), vec!["OpenMetrics"]);
    }

    #[test]
    fn test_name_from_bullet_without_title() {
        let text = "Projects\n• Developed a realtime chat app using WebSockets";
        assert_eq!(projects(text), vec!["realtime chat app"]);
    }

    #[test]
    fn test_repo_link_anywhere() {
        let text = "Links: https://gitlab.com/jdoe/tiny_kv_store.git";
        assert_eq!(projects(text), vec!["Tiny Kv Store"]);
    }

    #[test]
    fn test_project_label_safety_net() {
        let text = "Jane Doe\nSide project: Budget tracker for families.";
        assert_eq!(projects(text), vec!["Budget tracker for families"]);
    }

    #[test]
    fn test_nothing_found() {
        assert!(projects("Jane Doe\nAccountant").is_empty());
    }
}
