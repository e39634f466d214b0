// All LLM prompt constants for the analysis module.

/// Role line for content scoring; joined with `JSON_OBJECT_ONLY`.
pub const CONTENT_SCORE_ROLE: &str = "You are an expert resume reviewer and ATS specialist. \
    Evaluate the writing quality and completeness of a resume.";

/// Content scoring prompt. Replace `{resume_text}` before sending.
pub const CONTENT_SCORE_PROMPT_TEMPLATE: &str = r#"Evaluate the content quality of the resume below.

Return a JSON object with this EXACT schema:
{
  "score": 72,
  "improvements": [
    {
      "priority": "high",
      "category": "Content",
      "title": "Add Quantified Achievements",
      "description": "Most bullets describe duties rather than outcomes.",
      "suggestions": ["Add metrics such as percentages, revenue or time saved"]
    }
  ],
  "sections": [
    {"section": "Contact Information", "status": "complete"},
    {"section": "Professional Experience", "status": "incomplete", "suggestions": ["List dates for each role"]},
    {"section": "Education", "status": "complete"},
    {"section": "Skills", "status": "missing", "suggestions": ["Add a dedicated skills section"]},
    {"section": "Summary/Profile", "status": "complete"}
  ]
}

Rules:
- "score" is an integer from 0 to 100 measuring achievements, clarity and completeness.
- "priority" is one of "high", "medium", "low".
- "status" is one of "complete", "incomplete", "missing".
- "sections" MUST contain exactly the five sections shown, in that order.

RESUME:
{resume_text}"#;

/// Role line for keyword extraction; joined with `JSON_OBJECT_ONLY`.
pub const KEYWORD_EXTRACT_ROLE: &str = "You are an ATS keyword analyst. \
    Compare a resume against a job description and extract the keywords an ATS would screen for.";

/// Keyword prompt. Replace `{job_description}` and `{resume_text}` before sending.
pub const KEYWORD_EXTRACT_PROMPT_TEMPLATE: &str = r#"Extract the important keywords from the job description below: skills, technologies, tools, certifications and domain phrases.

Return a JSON object with this EXACT schema:
{
  "keywords": ["Kubernetes", "distributed systems", "Go"],
  "score": 64
}

Rules:
- "keywords" lists at most 20 keywords exactly as written in the job description.
- "score" is your 0-100 estimate of how well the resume covers those keywords.
- Do NOT include generic words such as "experience", "team" or "work".

JOB DESCRIPTION:
{job_description}

RESUME:
{resume_text}"#;
