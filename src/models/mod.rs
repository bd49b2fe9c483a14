// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{ProfileAttributes, Goals, Persona, MemberProfile, ExperienceLevel, TeaserProfile, ScoredMatch};
pub use requests::{FindMatchesRequest, ConsentCheckRequest, OptOutRequest};
pub use responses::{FindMatchesResponse, TeaserResponse, ConsentCheckResponse, OptOutResponse, HealthResponse, ErrorResponse};
