// Shared prompt fragments.
// Each component that calls the LLM keeps its own prompts.rs alongside it;
// this file holds the cross-cutting pieces.

/// Appended to every system prompt that expects a JSON object back.
pub const JSON_OBJECT_ONLY: &str = "You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Appended to every system prompt that expects a JSON array back.
pub const JSON_ARRAY_ONLY: &str = "You MUST respond with a valid JSON array only. \
    Do NOT include any text outside the JSON array. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Joins a role description with one of the JSON-only fragments.
pub fn system_prompt(role: &str, json_rule: &str) -> String {
    format!("{role} {json_rule}")
}
