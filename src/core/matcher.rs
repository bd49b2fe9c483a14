use crate::core::scoring::compatibility_score;
use crate::models::{MemberProfile, ScoredMatch};

/// Matches returned when the caller does not ask for a specific limit.
pub const DEFAULT_MATCH_LIMIT: usize = 5;

/// Result of the match generation process
#[derive(Debug)]
pub struct MatchResult {
    pub matches: Vec<ScoredMatch>,
    pub total_candidates: usize,
}

/// Ranks a candidate pool against a seed profile.
///
/// # Pipeline
/// 1. Drop the seed member itself (identity match on `member_id`)
/// 2. Score every surviving candidate
/// 3. Stable sort descending by score, truncate to the limit
///
/// Scoring is pure per candidate; the sort runs once after all scores are
/// computed, so the ranked order is deterministic for identical input and
/// equal scores keep their pool order.
#[derive(Debug, Clone, Copy, Default)]
pub struct MatchGenerator;

impl MatchGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Generate ranked matches for a member from a candidate pool.
    ///
    /// # Arguments
    /// * `profile` - The seed member profile
    /// * `pool` - Candidate profiles fetched from the directory
    /// * `limit` - Maximum number of matches to return
    pub fn generate(
        &self,
        profile: &MemberProfile,
        pool: Vec<MemberProfile>,
        limit: usize,
    ) -> MatchResult {
        let total_candidates = pool.len();

        let mut matches: Vec<ScoredMatch> = pool
            .into_iter()
            // Never match a member with themselves
            .filter(|candidate| candidate.member_id != profile.member_id)
            .map(|candidate| {
                let score = compatibility_score(&profile.attributes, &candidate.attributes);

                ScoredMatch {
                    member_id: candidate.member_id,
                    display_name: candidate.display_name,
                    attributes: candidate.attributes,
                    match_score: score,
                }
            })
            .collect();

        // sort_by is stable: equal scores keep pool order
        matches.sort_by(|a, b| b.match_score.cmp(&a.match_score));
        matches.truncate(limit);

        MatchResult {
            matches,
            total_candidates,
        }
    }
}
