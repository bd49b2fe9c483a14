use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::core::anonymize_profile;
use crate::models::{
    ConsentCheckRequest, ConsentCheckResponse, ErrorResponse, OptOutRequest, OptOutResponse,
    TeaserResponse,
};
use crate::routes::matches::AppState;
use crate::services::DirectoryError;

/// Configure privacy-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/profiles/teaser", web::get().to(get_teaser))
        .route("/consent/check", web::post().to(check_consent))
        .route("/consent/opt-out", web::post().to(opt_out));
}

/// Teaser profile endpoint
///
/// GET /api/v1/profiles/teaser?memberId={memberId}
///
/// Returns the privacy-reduced projection of a profile for pre-consent
/// preview surfaces.
async fn get_teaser(
    state: web::Data<AppState>,
    query: web::Query<std::collections::HashMap<String, String>>,
) -> impl Responder {
    let member_id = match query.get("memberId") {
        Some(id) => id,
        None => {
            return HttpResponse::BadRequest().json(ErrorResponse {
                error: "Missing memberId parameter".to_string(),
                message: "memberId query parameter is required".to_string(),
                status_code: 400,
            });
        }
    };

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

    let teaser = anonymize_profile(&profile);

    HttpResponse::Ok().json(TeaserResponse {
        member_id: member_id.clone(),
        teaser,
    })
}

/// Consent check endpoint
///
/// POST /api/v1/consent/check
///
/// Request body:
/// ```json
/// {
///   "email": "string"
/// }
/// ```
///
/// When the suppression store cannot be reached the answer fails closed:
/// the contact is reported suppressed and the response is marked degraded.
async fn check_consent(
    state: web::Data<AppState>,
    req: web::Json<ConsentCheckRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let email_hash = state.gate.hash_email(&req.email);

    match state.gate.is_suppressed(&email_hash).await {
        Ok(suppressed) => HttpResponse::Ok().json(ConsentCheckResponse {
            suppressed,
            email_hash,
            degraded: false,
        }),
        Err(e) => {
            tracing::error!("Suppression lookup failed, failing closed: {}", e);
            HttpResponse::Ok().json(ConsentCheckResponse {
                suppressed: true,
                email_hash,
                degraded: true,
            })
        }
    }
}

/// Opt-out endpoint
///
/// POST /api/v1/consent/opt-out
///
/// Records a suppression entry keyed by the email hash. The raw address is
/// hashed here and never stored.
async fn opt_out(
    state: web::Data<AppState>,
    req: web::Json<OptOutRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let email_hash = state.gate.hash_email(&req.email);

    match state.store.record(&email_hash).await {
        Ok(()) => {
            tracing::info!("Recorded opt-out for hash {}", email_hash);
            HttpResponse::Ok().json(OptOutResponse {
                success: true,
                receipt_id: uuid::Uuid::new_v4().to_string(),
            })
        }
        Err(e) => {
            tracing::error!("Failed to record opt-out: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to record opt-out".to_string(),
                message: e.to_string(),
                status_code: 500,
            })
        }
    }
}
