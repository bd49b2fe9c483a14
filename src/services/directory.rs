use crate::models::MemberProfile;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when interacting with the member directory
#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("API returned error: {0}")]
    ApiError(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Unauthorized: invalid API key")]
    Unauthorized,

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

/// Member directory client
///
/// The directory owns profile storage; this service only reads from it:
/// - fetching a single member profile
/// - fetching the activated candidate pool for matching
pub struct DirectoryClient {
    base_url: String,
    api_key: String,
    client: Client,
}

impl DirectoryClient {
    /// Create a new directory client
    pub fn new(base_url: String, api_key: String) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url,
            api_key,
            client,
        }
    }

    /// Fetch a single member profile by ID
    pub async fn get_member(&self, member_id: &str) -> Result<MemberProfile, DirectoryError> {
        let url = format!(
            "{}/members/{}",
            self.base_url.trim_end_matches('/'),
            urlencoding::encode(member_id)
        );

        tracing::debug!("Fetching member profile: {}", member_id);

        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.api_key)
            .send()
            .await?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(DirectoryError::NotFound(format!(
                "Member {} not found",
                member_id
            )));
        }
        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(DirectoryError::Unauthorized);
        }
        if !status.is_success() {
            return Err(DirectoryError::ApiError(format!(
                "Failed to fetch member: {}",
                status
            )));
        }

        let json: Value = response.json().await?;

        // The directory wraps single results in a "member" envelope
        let data = json.get("member").unwrap_or(&json);

        serde_json::from_value(data.clone())
            .map_err(|e| DirectoryError::InvalidResponse(format!("Failed to parse member: {}", e)))
    }

    /// Fetch the activated candidate pool for a member
    ///
    /// The directory already excludes deactivated accounts; self-exclusion is
    /// requested here and enforced again locally in case the directory
    /// ignores the parameter.
    pub async fn list_candidates(
        &self,
        exclude_member_id: &str,
        limit: usize,
    ) -> Result<Vec<MemberProfile>, DirectoryError> {
        let url = format!(
            "{}/members?activated=true&exclude={}&limit={}",
            self.base_url.trim_end_matches('/'),
            urlencoding::encode(exclude_member_id),
            limit
        );

        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.api_key)
            .send()
            .await?;

        let status = response.status();
        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(DirectoryError::Unauthorized);
        }
        if !status.is_success() {
            return Err(DirectoryError::ApiError(format!(
                "Failed to query candidates: {}",
                status
            )));
        }

        let json: Value = response.json().await?;

        let total = json.get("total").and_then(|t| t.as_u64()).unwrap_or(0);

        let members = json
            .get("members")
            .and_then(|m| m.as_array())
            .ok_or_else(|| DirectoryError::InvalidResponse("Missing members array".into()))?;

        let profiles: Vec<MemberProfile> = members
            .iter()
            .filter_map(|doc| serde_json::from_value(doc.clone()).ok())
            .filter(|p: &MemberProfile| p.member_id != exclude_member_id && p.is_activated)
            .collect();

        tracing::debug!("Queried {} candidates (total: {})", profiles.len(), total);

        Ok(profiles)
    }
}
