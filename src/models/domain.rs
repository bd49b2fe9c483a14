use serde::{Deserialize, Serialize};

/// Free-form matching attributes attached to a member profile.
///
/// Every field is optional on the wire. A missing field never fails
/// deserialization; it simply contributes nothing to the compatibility score.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileAttributes {
    #[serde(default)]
    pub industry: Option<String>,
    #[serde(default)]
    pub industries: Vec<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub goals: Option<Goals>,
    #[serde(default)]
    pub seeking: Vec<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(rename = "cityRegion", default)]
    pub city_region: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
}

impl ProfileAttributes {
    /// Effective goal list: explicit objectives win, `seeking` is the fallback.
    pub fn effective_goals(&self) -> &[String] {
        match &self.goals {
            Some(goals) if !goals.objectives.is_empty() => &goals.objectives,
            _ => &self.seeking,
        }
    }
}

/// Structured goals block as stored by the member directory.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Goals {
    #[serde(default)]
    pub objectives: Vec<String>,
}

/// Persona tags produced by the profile builder.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Persona {
    #[serde(default)]
    pub primary: Option<String>,
}

/// Member profile as served by the directory, with stable identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberProfile {
    #[serde(rename = "memberId")]
    pub member_id: String,
    #[serde(rename = "displayName", default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub persona: Option<Persona>,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(rename = "isActivated", default = "default_true")]
    pub is_activated: bool,
    #[serde(flatten)]
    pub attributes: ProfileAttributes,
}

fn default_true() -> bool { true }

/// Coarse seniority band derived from a member's free-text title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExperienceLevel {
    Senior,
    Junior,
    #[serde(rename = "Mid-level")]
    MidLevel,
    Executive,
    #[serde(rename = "Entry-level")]
    EntryLevel,
    Professional,
}

impl ExperienceLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExperienceLevel::Senior => "Senior",
            ExperienceLevel::Junior => "Junior",
            ExperienceLevel::MidLevel => "Mid-level",
            ExperienceLevel::Executive => "Executive",
            ExperienceLevel::EntryLevel => "Entry-level",
            ExperienceLevel::Professional => "Professional",
        }
    }
}

impl std::fmt::Display for ExperienceLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Privacy-reduced projection of a profile, safe to show to contacts that
/// have not activated their account yet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeaserProfile {
    pub persona: String,
    pub industry: String,
    #[serde(rename = "experienceLevel")]
    pub experience_level: ExperienceLevel,
    pub interests: Vec<String>,
    pub seeking: Vec<String>,
}

/// Ranked match result. Output order is rank order, best first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredMatch {
    #[serde(rename = "memberId")]
    pub member_id: String,
    #[serde(rename = "displayName", default)]
    pub display_name: Option<String>,
    #[serde(flatten)]
    pub attributes: ProfileAttributes,
    #[serde(rename = "matchScore")]
    pub match_score: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attributes_deserialize_from_empty_object() {
        let attrs: ProfileAttributes = serde_json::from_str("{}").unwrap();
        assert!(attrs.industry.is_none());
        assert!(attrs.industries.is_empty());
        assert!(attrs.skills.is_empty());
        assert!(attrs.effective_goals().is_empty());
    }

    #[test]
    fn test_effective_goals_prefers_objectives() {
        let attrs = ProfileAttributes {
            goals: Some(Goals {
                objectives: vec!["Hire".to_string()],
            }),
            seeking: vec!["Find customers".to_string()],
            ..Default::default()
        };
        assert_eq!(attrs.effective_goals(), ["Hire".to_string()]);
    }

    #[test]
    fn test_effective_goals_falls_back_to_seeking() {
        let attrs = ProfileAttributes {
            goals: Some(Goals { objectives: vec![] }),
            seeking: vec!["Find customers".to_string()],
            ..Default::default()
        };
        assert_eq!(attrs.effective_goals(), ["Find customers".to_string()]);
    }

    #[test]
    fn test_experience_level_serializes_with_hyphens() {
        let json = serde_json::to_string(&ExperienceLevel::MidLevel).unwrap();
        assert_eq!(json, "\"Mid-level\"");
        let json = serde_json::to_string(&ExperienceLevel::EntryLevel).unwrap();
        assert_eq!(json, "\"Entry-level\"");
    }

    #[test]
    fn test_member_profile_flattens_attributes() {
        let json = r#"{
            "memberId": "m1",
            "displayName": "Ada",
            "industry": "Fintech",
            "skills": ["Rust"]
        }"#;
        let profile: MemberProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.member_id, "m1");
        assert_eq!(profile.attributes.industry.as_deref(), Some("Fintech"));
        assert!(profile.is_activated);
    }
}
