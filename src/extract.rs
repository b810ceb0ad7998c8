use crate::error::ExtractionError;
use crate::models::{ExtractRequest, ExtractResponse, ExternalExtractResponse};
use crate::{web, youtube};

// ── Source type ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceType {
    Youtube,
    Web,
}

impl SourceType {
    fn parse(raw: &str) -> Option<Self> {
        match raw {
            "youtube" => Some(SourceType::Youtube),
            "web" => Some(SourceType::Web),
            _ => None,
        }
    }
}

// ── Extracted content ────────────────────────────────────────────────────────

/// Result of one extraction. Lives for the duration of a single
/// request/response cycle and is shaped into one of the two envelopes below.
#[derive(Debug)]
pub struct ExtractedContent {
    pub source_type: SourceType,
    pub url: String,
    pub body: String,
}

impl ExtractedContent {
    pub fn into_raw(self) -> ExtractResponse {
        match self.source_type {
            SourceType::Youtube => ExtractResponse::Youtube {
                url: self.url,
                transcript: self.body,
            },
            SourceType::Web => ExtractResponse::Web {
                url: self.url,
                text: self.body,
            },
        }
    }

    pub fn into_external(self) -> ExternalExtractResponse {
        let title = match self.source_type {
            SourceType::Youtube => format!("YouTube Transcript: {}", self.url),
            SourceType::Web => format!("Web Content: {}", self.url),
        };
        ExternalExtractResponse {
            title,
            content: self.body,
        }
    }
}

// ── Dispatcher ───────────────────────────────────────────────────────────────

/// Validate a request and route it down the matching extraction path.
///
/// Field presence is checked before type validity; both fail before any
/// network traffic. Downstream failures propagate without retries.
pub async fn extract(
    client: &reqwest::Client,
    request: &ExtractRequest,
) -> Result<ExtractedContent, ExtractionError> {
    let kind = request.source_type.as_deref().filter(|s| !s.is_empty());
    let url = request.url.as_deref().filter(|s| !s.is_empty());
    let (Some(kind), Some(url)) = (kind, url) else {
        return Err(ExtractionError::MissingFields);
    };

    let source_type = SourceType::parse(kind).ok_or(ExtractionError::InvalidType)?;

    let body = match source_type {
        SourceType::Youtube => {
            let video_id =
                youtube::parse_video_id(url).ok_or(ExtractionError::InvalidVideoUrl)?;
            tracing::debug!(%video_id, "routing to transcript retriever");
            youtube::fetch_transcript(client, &video_id).await?
        }
        SourceType::Web => {
            tracing::debug!(%url, "routing to web text extractor");
            web::fetch_page_text(client, url).await?
        }
    };

    Ok(ExtractedContent {
        source_type,
        url: url.to_string(),
        body,
    })
}
