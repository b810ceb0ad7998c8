use serde::{Deserialize, Serialize};

/// Inbound extraction request. Both fields are optional at the serde layer so
/// presence is validated by the dispatcher, which reports missing fields as a
/// 400 instead of a deserialization rejection.
#[derive(Debug, Deserialize)]
pub struct ExtractRequest {
    #[serde(rename = "type", default)]
    pub source_type: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

/// Raw response envelope: `{type, url, transcript}` or `{type, url, text}`.
#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ExtractResponse {
    Youtube { url: String, transcript: String },
    Web { url: String, text: String },
}

/// Normalized envelope for external automation consumers.
#[derive(Debug, Serialize)]
pub struct ExternalExtractResponse {
    pub title: String,
    pub content: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CredentialsResponse {
    pub api_key: String,
    pub webhook_url: String,
    pub test_url: String,
}
