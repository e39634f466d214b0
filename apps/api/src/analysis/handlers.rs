use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::analysis::models::{FormatReport, ScoreReport};
use crate::analysis::pipeline::analyze_resume;
use crate::db::{latest_report, replace_reports};
use crate::errors::AppError;
use crate::models::report::AtsReportRow;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct AnalysisRequest {
    pub resume_text: String,
    pub job_description: Option<String>,
    pub resume_id: Option<Uuid>,
}

#[derive(Serialize)]
pub struct AnalysisResponse {
    pub resume_id: Uuid,
    /// False when no database is configured.
    pub stored: bool,
    pub report: ScoreReport,
    pub format: FormatReport,
    pub keyword_suggestions: Vec<String>,
    pub partial_keywords: Vec<String>,
}

/// POST /api/v1/analysis
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(req): Json<AnalysisRequest>,
) -> Result<Json<AnalysisResponse>, AppError> {
    let analysis = analyze_resume(
        state.llm.as_ref(),
        &req.resume_text,
        req.job_description.as_deref(),
    )
    .await?;

    let resume_id = req.resume_id.unwrap_or_else(Uuid::new_v4);
    let stored = match &state.db {
        Some(pool) => {
            replace_reports(pool, resume_id, &analysis.report, analysis.keywords.is_some())
                .await?;
            true
        }
        None => false,
    };

    let (keyword_suggestions, partial_keywords) = analysis
        .keywords
        .as_ref()
        .map(|k| (k.suggestions.clone(), k.partial_keywords()))
        .unwrap_or_default();

    Ok(Json(AnalysisResponse {
        resume_id,
        stored,
        report: analysis.report,
        format: analysis.format,
        keyword_suggestions,
        partial_keywords,
    }))
}

/// GET /api/v1/analysis/:resume_id
pub async fn handle_get_report(
    State(state): State<AppState>,
    Path(resume_id): Path<Uuid>,
) -> Result<Json<AtsReportRow>, AppError> {
    let pool = state.db.as_ref().ok_or(AppError::PersistenceDisabled)?;
    let row = latest_report(pool, resume_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("No report for resume {resume_id}")))?;
    Ok(Json(row))
}
