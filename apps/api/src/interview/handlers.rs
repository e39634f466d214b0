use axum::{extract::State, Json};
use serde::Deserialize;

use crate::errors::AppError;
use crate::interview::{generate_questions, QuestionSet};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct InterviewRequest {
    pub resume_text: String,
    pub job_title: Option<String>,
}

/// POST /api/v1/interview/questions
pub async fn handle_generate_questions(
    State(state): State<AppState>,
    Json(req): Json<InterviewRequest>,
) -> Result<Json<QuestionSet>, AppError> {
    if req.resume_text.trim().is_empty() {
        return Err(AppError::Validation(
            "Cannot generate questions for an empty document".to_string(),
        ));
    }
    let set = generate_questions(
        state.llm.as_ref(),
        &req.resume_text,
        req.job_title.as_deref(),
    )
    .await;
    Ok(Json(set))
}
