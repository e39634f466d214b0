//! Template-filled interview questions built straight from an `ExtractedProfile`.
//!
//! Used when the profile has nothing specific to personalize with, when the AI
//! call fails, or when the AI result does not pass the personalization gate.

use crate::extraction::vocab::{contains_term, SkillCategory, SENIORITY_KEYWORDS};
use crate::extraction::{is_placeholder, ExtractedProfile};
use crate::interview::InterviewQuestion;

pub const MAX_FALLBACK_QUESTIONS: usize = 10;
const MAX_PER_LIST: usize = 2;

fn question(
    category: &str,
    text: String,
    tips: &[&str],
    resume_context: Option<String>,
) -> InterviewQuestion {
    InterviewQuestion {
        category: category.to_string(),
        question: text,
        tips: tips.iter().map(|t| t.to_string()).collect(),
        resume_context,
    }
}

fn specific(values: &[String]) -> Vec<&str> {
    values
        .iter()
        .map(|v| v.trim())
        .filter(|v| !v.is_empty() && !is_placeholder(v))
        .collect()
}

fn is_senior(title: &str) -> bool {
    let lower = title.to_lowercase();
    SENIORITY_KEYWORDS.iter().any(|k| contains_term(&lower, k))
}

fn technical_question(category: SkillCategory, skill: &str) -> InterviewQuestion {
    let text = match category {
        SkillCategory::Language => format!(
            "What kinds of problems have you solved with {skill}, and where has it fallen short for you?"
        ),
        SkillCategory::Framework => format!(
            "How did you structure a large application built with {skill} to keep it maintainable?"
        ),
        SkillCategory::Database => format!(
            "How do you approach schema design and query tuning in {skill}?"
        ),
        SkillCategory::Cloud => format!(
            "Describe a system you deployed with {skill}. How did you handle reliability and cost?"
        ),
    };
    question(
        "Technical",
        text,
        &[
            "Anchor the answer in a concrete system you worked on",
            "Mention trade-offs and what you would do differently",
        ],
        Some(skill.to_string()),
    )
}

pub fn fallback_questions(
    profile: &ExtractedProfile,
    job_title: Option<&str>,
) -> Vec<InterviewQuestion> {
    let companies = specific(&profile.companies);
    let titles = specific(&profile.job_titles);
    let skills = specific(&profile.skills);
    let projects = specific(&profile.projects);

    let mut questions = Vec::new();

    for company in companies.iter().take(MAX_PER_LIST) {
        questions.push(question(
            "Behavioral",
            format!("Tell me about a challenging situation you faced at {company} and how you handled it."),
            &[
                "Use the STAR method: situation, task, action, result",
                "Quantify the outcome where you can",
            ],
            Some(company.to_string()),
        ));
    }

    if let [first, second, ..] = companies.as_slice() {
        questions.push(question(
            "Behavioral",
            format!(
                "How did the way you led and collaborated at {first} change when you moved to {second}?"
            ),
            &[
                "Contrast team size, pace and ownership",
                "Say what you carried forward",
            ],
            Some(format!("{first}, {second}")),
        ));
    }

    for title in titles.iter().take(MAX_PER_LIST) {
        let q = if is_senior(title) {
            question(
                "Leadership",
                format!(
                    "As a {title}, how did you mentor others and set technical direction for the team?"
                ),
                &[
                    "Give an example of a decision you drove",
                    "Describe how you grew someone on the team",
                ],
                Some(title.to_string()),
            )
        } else {
            question(
                "Role-specific",
                format!(
                    "What were your core responsibilities as a {title}, and which result are you proudest of?"
                ),
                &[
                    "Pick one responsibility and go deep",
                    "Tie the result to business impact",
                ],
                Some(title.to_string()),
            )
        };
        questions.push(q);
    }

    for category in SkillCategory::ALL {
        if let Some(skill) = skills
            .iter()
            .find(|s| SkillCategory::of(s) == Some(category))
        {
            questions.push(technical_question(category, skill));
        }
    }

    for project in projects.iter().take(MAX_PER_LIST) {
        questions.push(question(
            "Project-based",
            format!("Walk me through {project}: what problem did it solve and what was your part in it?"),
            &[
                "Start with the problem, then the design",
                "Call out one hard technical decision",
            ],
            Some(project.to_string()),
        ));
    }

    questions.push(question(
        "Problem Solving",
        "Describe a production issue you debugged under pressure. How did you find the root cause?"
            .to_string(),
        &["Walk through your reasoning step by step", "Explain what you changed afterwards"],
        None,
    ));
    questions.push(question(
        "Problem Solving",
        "Tell me about a time requirements were unclear. How did you decide what to build?"
            .to_string(),
        &["Show how you gathered information", "Explain how you validated the result"],
        None,
    ));

    let target = job_title.map(str::trim).filter(|t| !t.is_empty());
    let transition = match (target, titles.first()) {
        (Some(target), Some(current)) => format!(
            "What from your time as a {current} prepares you to step into a {target} role?"
        ),
        (Some(target), None) => {
            format!("What from your experience so far prepares you for a {target} role?")
        }
        (None, Some(current)) => {
            format!("How has your work as a {current} shaped the next step you want to take?")
        }
        (None, None) => "How has your career progressed, and what do you want to take on next?"
            .to_string(),
    };
    questions.push(question(
        "Experience",
        transition,
        &["Connect past work to the new scope", "Be honest about gaps you are closing"],
        titles.first().map(|t| t.to_string()),
    ));

    questions.push(question(
        "Role-specific",
        match target {
            Some(target) => format!("Why do you want this {target} role, and why now?"),
            None => "Why are you interested in this role, and why now?".to_string(),
        },
        &["Show you researched the team", "Link your motivation to concrete experience"],
        None,
    ));

    questions.truncate(MAX_FALLBACK_QUESTIONS);
    questions
}
