// LLM prompt constants for entity extraction.
// Each extractor sends one narrowly scoped prompt and expects a JSON array of strings.

/// Role line shared by all five extractors; joined with `JSON_ARRAY_ONLY`.
pub const EXTRACT_ROLE: &str = "You are a precise resume parser. \
    Extract exactly one kind of entity from a resume and nothing else. \
    Never invent entities that are not written in the resume.";

/// Replace `{instruction}` and `{resume_text}` before sending.
pub const EXTRACT_PROMPT_TEMPLATE: &str = r#"{instruction}

Return a JSON array of strings, for example: ["first item", "second item"].
Return [] if none are present. Copy each item as written in the resume.

RESUME:
{resume_text}"#;

pub const JOB_TITLES_INSTRUCTION: &str = "List every job title the candidate has held \
    (e.g. \"Senior Software Engineer\"). Exclude company names and dates.";

pub const COMPANIES_INSTRUCTION: &str = "List every company or organization the candidate \
    has worked for. Exclude schools, job titles and locations.";

pub const SKILLS_INSTRUCTION: &str = "List the technical and soft skills the candidate \
    claims: languages, frameworks, databases, cloud platforms, tools and methodologies.";

pub const ACHIEVEMENTS_INSTRUCTION: &str = "List the candidate's concrete achievements, \
    preferring those with measurable outcomes. One sentence per achievement.";

pub const PROJECTS_INSTRUCTION: &str = "List the names of projects the candidate built or \
    led, including personal and open-source projects. Use short project names, not descriptions.";
