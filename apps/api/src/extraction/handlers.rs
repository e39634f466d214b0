use axum::{extract::State, Json};
use serde::Deserialize;

use crate::errors::AppError;
use crate::extraction::{extract_profile, ExtractedProfile};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct ExtractionRequest {
    pub resume_text: String,
}

/// POST /api/v1/extraction
pub async fn handle_extract(
    State(state): State<AppState>,
    Json(req): Json<ExtractionRequest>,
) -> Result<Json<ExtractedProfile>, AppError> {
    if req.resume_text.trim().is_empty() {
        return Err(AppError::Validation(
            "Cannot extract from an empty document".to_string(),
        ));
    }
    let profile = extract_profile(state.llm.as_ref(), &req.resume_text).await;
    Ok(Json(profile))
}
