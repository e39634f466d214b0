// LLM prompt constants for interview question generation.

/// Role line for question generation; joined with `JSON_ARRAY_ONLY`.
pub const INTERVIEW_ROLE: &str = "You are a senior technical interviewer preparing a \
    candidate-specific interview. Every question must be grounded in the candidate's resume.";

/// Replace `{target_role}`, `{job_titles}`, `{companies}`, `{skills}`, `{projects}`,
/// `{achievements}` and `{resume_text}` before sending.
pub const INTERVIEW_PROMPT_TEMPLATE: &str = r#"Write at least 10 interview questions for a candidate applying for: {target_role}

Details extracted from the resume:
- Job titles: {job_titles}
- Companies: {companies}
- Skills: {skills}
- Projects: {projects}
- Achievements: {achievements}

Return a JSON array with this EXACT schema:
[
  {
    "category": "Technical",
    "question": "You used Kafka at Stripe Inc. How did you handle consumer lag during peak load?",
    "tips": ["Describe the metrics you watched", "Explain the trade-offs you made"],
    "resumeContext": "Kafka, Stripe Inc"
  }
]

Rules:
- Spread the questions across these categories: Technical, Behavioral, Project-based, Experience, Role-specific.
- EVERY question MUST name a specific company, job title, skill or project from the list above, spelled exactly as listed.
- "resumeContext" names the resume detail the question refers to.
- Give 2-3 short tips per question.

RESUME:
{resume_text}"#;
