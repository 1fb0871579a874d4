//! Axum route handlers for the Feedback API.

use axum::{
    extract::{multipart::MultipartError, Multipart, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::extract::{extract, Document, DocumentKind, ExtractError};
use crate::feedback::{FeedbackReport, ScoreBand};
use crate::render::{render, REPORT_FILE_NAME};
use crate::state::AppState;

/// Multipart field carrying the resume.
const FILE_FIELD: &str = "file";

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub analysis_id: Uuid,
    pub file_name: String,
    pub analyzed_at: DateTime<Utc>,
    pub score_band: ScoreBand,
    pub headline: &'static str,
    pub score_color: &'static str,
    pub report: FeedbackReport,
}

/// POST /api/v1/feedback
///
/// Accepts a multipart upload (`file` field, `.pdf` or `.docx`) and returns the
/// structured feedback report.
pub async fn handle_analyze(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let analysis = run_analysis(&state, multipart).await?;
    let band = ScoreBand::from_score(analysis.report.scores.overall_score);

    Ok(Json(AnalyzeResponse {
        analysis_id: analysis.id,
        file_name: analysis.file_name,
        analyzed_at: Utc::now(),
        score_band: band,
        headline: band.headline(),
        score_color: band.color(),
        report: analysis.report,
    }))
}

/// POST /api/v1/feedback/report
///
/// Same upload as `handle_analyze`, answered with the plain-text report as a download.
pub async fn handle_report(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let analysis = run_analysis(&state, multipart).await?;

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{REPORT_FILE_NAME}\""),
            ),
        ],
        render(&analysis.report),
    ))
}

struct Analysis {
    id: Uuid,
    file_name: String,
    report: FeedbackReport,
}

/// Upload → extraction → feedback. The upload buffer is dropped inside the blocking
/// task as soon as text has been pulled out of it.
async fn run_analysis(state: &AppState, multipart: Multipart) -> Result<Analysis, AppError> {
    let document = read_upload(multipart, state.config.max_upload_bytes).await?;
    let id = Uuid::new_v4();
    let file_name = document.file_name.clone();

    info!(
        analysis_id = %id,
        file_name = %file_name,
        kind = %document.kind,
        bytes = document.len(),
        "Analyzing resume upload"
    );

    let text = tokio::task::spawn_blocking(move || extract(document))
        .await
        .map_err(anyhow::Error::from)??;

    let report = state.engine.analyze(&text).await?;
    info!(
        analysis_id = %id,
        overall_score = report.scores.overall_score,
        "Analysis complete"
    );

    Ok(Analysis {
        id,
        file_name,
        report,
    })
}

/// Streams the `file` field into scoped storage, enforcing the byte cap.
/// Unsupported extensions are rejected before the body is read.
async fn read_upload(mut multipart: Multipart, max_bytes: usize) -> Result<Document, AppError> {
    while let Some(mut field) = multipart
        .next_field()
        .await
        .map_err(|e| multipart_error(e, max_bytes))?
    {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let file_name = field
            .file_name()
            .map(str::to_string)
            .ok_or_else(|| AppError::Validation("the 'file' field has no file name".to_string()))?;

        let mut document = Document::new(file_name);
        if document.kind == DocumentKind::Unsupported {
            return Err(ExtractError::UnsupportedFormat(document.file_name).into());
        }

        while let Some(chunk) = field
            .chunk()
            .await
            .map_err(|e| multipart_error(e, max_bytes))?
        {
            if document.len() + chunk.len() > max_bytes {
                return Err(AppError::PayloadTooLarge(max_bytes));
            }
            document.append(&chunk)?;
        }

        if document.is_empty() {
            return Err(AppError::Validation("the uploaded file is empty".to_string()));
        }
        return Ok(document);
    }

    Err(AppError::Validation(
        "multipart form is missing the 'file' field".to_string(),
    ))
}

fn multipart_error(err: MultipartError, max_bytes: usize) -> AppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(max_bytes)
    } else {
        AppError::Validation(err.body_text())
    }
}
