use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::core::DEFAULT_MATCH_LIMIT;

/// Request to generate compatibility matches
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct FindMatchesRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "member_id", rename = "memberId")]
    pub member_id: String,
    #[serde(default = "default_limit")]
    pub limit: u16,
}

fn default_limit() -> u16 {
    DEFAULT_MATCH_LIMIT as u16
}

/// Request to check whether a contact may still be messaged
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ConsentCheckRequest {
    #[validate(email)]
    pub email: String,
}

/// Request to opt a contact out of further messaging
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct OptOutRequest {
    #[validate(email)]
    pub email: String,
}
