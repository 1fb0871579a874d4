use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::extract::ExtractError;
use crate::feedback::FeedbackError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Upload exceeds {0} bytes")]
    PayloadTooLarge(usize),

    #[error("{0}")]
    UnsupportedFormat(String),

    #[error("{0}")]
    Extraction(String),

    #[error("No readable text found in the uploaded file.")]
    EmptyDocument,

    #[error("Grammar checker unavailable: {0}")]
    CheckerUnavailable(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<ExtractError> for AppError {
    fn from(err: ExtractError) -> Self {
        let message = err.to_string();
        match err {
            ExtractError::UnsupportedFormat(_) => AppError::UnsupportedFormat(message),
            ExtractError::Extraction { .. } => AppError::Extraction(message),
            ExtractError::Io(e) => AppError::Internal(e.into()),
        }
    }
}

impl From<FeedbackError> for AppError {
    fn from(err: FeedbackError) -> Self {
        match err {
            FeedbackError::EmptyDocument => AppError::EmptyDocument,
            FeedbackError::CheckerUnavailable(e) => AppError::CheckerUnavailable(e.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::PayloadTooLarge(_) => (
                StatusCode::PAYLOAD_TOO_LARGE,
                "PAYLOAD_TOO_LARGE",
                self.to_string(),
            ),
            AppError::UnsupportedFormat(msg) => (
                StatusCode::UNSUPPORTED_MEDIA_TYPE,
                "UNSUPPORTED_FORMAT",
                msg.clone(),
            ),
            AppError::Extraction(msg) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "EXTRACTION_ERROR",
                msg.clone(),
            ),
            AppError::EmptyDocument => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "EMPTY_DOCUMENT",
                self.to_string(),
            ),
            AppError::CheckerUnavailable(msg) => {
                tracing::error!("Grammar checker error: {msg}");
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    "CHECKER_UNAVAILABLE",
                    "The grammar checking service is unavailable. Please try again later."
                        .to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::DocumentKind;
    use crate::grammar::GrammarError;

    #[test]
    fn test_extract_errors_map_to_user_facing_variants() {
        let unsupported: AppError = ExtractError::UnsupportedFormat("cv.txt".into()).into();
        assert!(matches!(unsupported, AppError::UnsupportedFormat(ref m) if m.contains("cv.txt")));

        let corrupt: AppError = ExtractError::Extraction {
            kind: DocumentKind::Pdf,
            reason: "bad xref".into(),
        }
        .into();
        assert!(matches!(corrupt, AppError::Extraction(ref m) if m.contains("bad xref")));
    }

    #[test]
    fn test_status_codes() {
        let cases = [
            (AppError::EmptyDocument, StatusCode::UNPROCESSABLE_ENTITY),
            (
                AppError::UnsupportedFormat("x".into()),
                StatusCode::UNSUPPORTED_MEDIA_TYPE,
            ),
            (
                FeedbackError::CheckerUnavailable(GrammarError::Timeout(30)).into(),
                StatusCode::SERVICE_UNAVAILABLE,
            ),
            (AppError::PayloadTooLarge(10), StatusCode::PAYLOAD_TOO_LARGE),
        ];
        for (err, expected) in cases {
            assert_eq!(err.into_response().status(), expected);
        }
    }
}
