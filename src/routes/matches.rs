use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::config::MatchingSettings;
use crate::core::MatchGenerator;
use crate::models::{ErrorResponse, FindMatchesRequest, FindMatchesResponse, HealthResponse};
use crate::services::{DirectoryClient, DirectoryError, SuppressionGate, SuppressionStore};
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub directory: Arc<DirectoryClient>,
    pub store: Arc<dyn SuppressionStore>,
    pub gate: Arc<SuppressionGate>,
    pub matcher: MatchGenerator,
    pub matching: MatchingSettings,
}

/// Configure match-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/matches/find", web::post().to(find_matches));
}

/// Sentinel key for the health probe; the lookup only needs to prove the
/// suppression store answers.
const HEALTH_PROBE_HASH: &str =
    "0000000000000000000000000000000000000000000000000000000000000000";

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let store_healthy = state.store.exists(HEALTH_PROBE_HASH).await.is_ok();

    let status = if store_healthy { "healthy" } else { "degraded" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Find matches endpoint
///
/// POST /api/v1/matches/find
///
/// Request body:
/// ```json
/// {
///   "memberId": "string",
///   "limit": 5
/// }
/// ```
async fn find_matches(
    state: web::Data<AppState>,
    req: web::Json<FindMatchesRequest>,
) -> impl Responder {
    // Validate request
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for find_matches request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let member_id = &req.member_id;
    let limit = req.limit.min(state.matching.max_limit) as usize;

    tracing::info!("Finding matches for member: {}, limit: {}", member_id, limit);

    // Fetch the seed profile
    let profile = match state.directory.get_member(member_id).await {
        Ok(profile) => profile,
        Err(DirectoryError::NotFound(message)) => {
            return HttpResponse::NotFound().json(ErrorResponse {
                error: "Member not found".to_string(),
                message,
                status_code: 404,
            });
        }
        Err(e) => {
            tracing::error!("Failed to fetch member {}: {}", member_id, e);
            return HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to fetch member".to_string(),
                message: e.to_string(),
                status_code: 500,
            });
        }
    };

    // Fetch the candidate pool, oversampled so ranking has room to work
    let candidates = match state.directory.list_candidates(member_id, limit * 5).await {
        Ok(candidates) => candidates,
        Err(e) => {
            tracing::error!("Failed to query candidates for {}: {}", member_id, e);
            return HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to query candidates".to_string(),
                message: e.to_string(),
                status_code: 500,
            });
        }
    };

    tracing::debug!("Found {} candidates for {}", candidates.len(), member_id);

    // Run the ranking algorithm
    let result = state.matcher.generate(&profile, candidates, limit);

    let response = FindMatchesResponse {
        matches: result.matches,
        total_candidates: result.total_candidates,
    };

    tracing::info!(
        "Returning {} matches for member {} (from {} candidates)",
        response.matches.len(),
        member_id,
        response.total_candidates
    );

    HttpResponse::Ok().json(response)
}
