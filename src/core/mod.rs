// Core algorithm exports
pub mod anonymizer;
pub mod consent;
pub mod experience;
pub mod matcher;
pub mod scoring;

pub use anonymizer::anonymize_profile;
pub use consent::{ConsentHasher, DEFAULT_SALT};
pub use experience::classify_experience;
pub use matcher::{MatchGenerator, MatchResult, DEFAULT_MATCH_LIMIT};
pub use scoring::compatibility_score;
