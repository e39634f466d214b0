use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

/// One stored analysis. `report` holds the serialized `ScoreReport`.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AtsReportRow {
    pub id: Uuid,
    pub resume_id: Uuid,
    pub ats_score: i32,
    pub format_score: i32,
    pub keyword_score: i32,
    pub content_score: i32,
    pub has_job_description: bool,
    pub report: Value,
    pub created_at: DateTime<Utc>,
}
