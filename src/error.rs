use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use crate::youtube::TranscriptError;

/// Failures surfaced by the extraction pipeline. Invalid request shapes map
/// to 400; everything downstream of routing is reported as a 500 with the
/// failure message, matching the caller contract.
#[derive(Debug, thiserror::Error)]
pub enum ExtractionError {
    #[error("Missing required fields: type and url")]
    MissingFields,
    #[error("Invalid type. Use \"youtube\" or \"web\"")]
    InvalidType,
    #[error("Invalid YouTube URL")]
    InvalidVideoUrl,
    #[error(transparent)]
    Transcript(#[from] TranscriptError),
    #[error("Failed to extract web text: {0}")]
    Fetch(String),
}

impl IntoResponse for ExtractionError {
    fn into_response(self) -> Response {
        let status = match &self {
            ExtractionError::MissingFields | ExtractionError::InvalidType => {
                StatusCode::BAD_REQUEST
            }
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(error = %self, "extraction failed");
        }

        (status, axum::Json(json!({ "error": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_message() {
        assert_eq!(
            ExtractionError::MissingFields.to_string(),
            "Missing required fields: type and url"
        );
    }

    #[test]
    fn test_invalid_type_message() {
        assert_eq!(
            ExtractionError::InvalidType.to_string(),
            "Invalid type. Use \"youtube\" or \"web\""
        );
    }

    #[test]
    fn test_transcript_error_passthrough() {
        let err = ExtractionError::from(TranscriptError::Disabled);
        assert_eq!(err.to_string(), "Transcript is disabled for this video");
    }

    #[test]
    fn test_fetch_error_wraps_cause() {
        let err = ExtractionError::Fetch("connection refused".to_string());
        assert_eq!(
            err.to_string(),
            "Failed to extract web text: connection refused"
        );
    }
}
