use anyhow::Result;
use sqlx::postgres::PgPoolOptions;
use sqlx::types::Json;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::analysis::models::ScoreReport;
use crate::models::report::AtsReportRow;

/// Creates and returns a PostgreSQL connection pool.
pub async fn create_pool(database_url: &str) -> Result<PgPool> {
    info!("Connecting to PostgreSQL...");

    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect(database_url)
        .await?;

    info!("PostgreSQL connection pool established");
    Ok(pool)
}

/// Replaces every stored report for `resume_id` with `report`, atomically.
/// Returns the id of the inserted row.
pub async fn replace_reports(
    pool: &PgPool,
    resume_id: Uuid,
    report: &ScoreReport,
    has_job_description: bool,
) -> Result<Uuid, sqlx::Error> {
    let id = Uuid::new_v4();

    let mut tx = pool.begin().await?;

    let removed = sqlx::query("DELETE FROM ats_reports WHERE resume_id = $1")
        .bind(resume_id)
        .execute(&mut *tx)
        .await?
        .rows_affected();

    sqlx::query(
        r#"
        INSERT INTO ats_reports
            (id, resume_id, ats_score, format_score, keyword_score, content_score,
             has_job_description, report)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        "#,
    )
    .bind(id)
    .bind(resume_id)
    .bind(i32::from(report.ats_score))
    .bind(i32::from(report.format_score))
    .bind(i32::from(report.keyword_score))
    .bind(i32::from(report.content_score))
    .bind(has_job_description)
    .bind(Json(report))
    .execute(&mut *tx)
    .await?;

    tx.commit().await?;

    info!("Stored ATS report {id} for resume {resume_id} (replaced {removed})");
    Ok(id)
}

/// Newest stored report for `resume_id`, if any.
pub async fn latest_report(
    pool: &PgPool,
    resume_id: Uuid,
) -> Result<Option<AtsReportRow>, sqlx::Error> {
    sqlx::query_as::<_, AtsReportRow>(
        "SELECT * FROM ats_reports WHERE resume_id = $1 ORDER BY created_at DESC LIMIT 1",
    )
    .bind(resume_id)
    .fetch_optional(pool)
    .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_column_payload_matches_wire_shape() {
        let report = ScoreReport {
            ats_score: 73,
            format_score: 80,
            keyword_score: 67,
            content_score: 70,
            keyword_matches: vec!["Rust".to_string(), "Kafka".to_string()],
            missing_keywords: vec!["Terraform".to_string()],
            improvements: vec![],
            sections: vec![],
        };

        // What `replace_reports` binds into the JSONB column.
        let payload = serde_json::to_value(Json(&report)).unwrap();

        assert_eq!(payload, serde_json::to_value(&report).unwrap());
        assert_eq!(payload["atsScore"], 73);
        assert_eq!(payload["keywordMatches"][1], "Kafka");
        assert_eq!(payload["missingKeywords"][0], "Terraform");
    }
}
