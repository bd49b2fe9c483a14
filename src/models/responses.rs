use serde::{Deserialize, Serialize};
use crate::models::domain::{ScoredMatch, TeaserProfile};

/// Response for find matches endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FindMatchesResponse {
    pub matches: Vec<ScoredMatch>,
    pub total_candidates: usize,
}

/// Response for the teaser endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeaserResponse {
    #[serde(rename = "memberId")]
    pub member_id: String,
    pub teaser: TeaserProfile,
}

/// Response for the consent check endpoint
///
/// `degraded` is set when the suppression store could not be reached and the
/// answer fell back to the closed default.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsentCheckResponse {
    pub suppressed: bool,
    #[serde(rename = "emailHash")]
    pub email_hash: String,
    #[serde(default)]
    pub degraded: bool,
}

/// Response for the opt-out endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptOutResponse {
    pub success: bool,
    #[serde(rename = "receiptId")]
    pub receipt_id: String,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
