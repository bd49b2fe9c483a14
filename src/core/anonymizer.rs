use crate::core::experience::classify_experience;
use crate::models::{MemberProfile, TeaserProfile};

const DEFAULT_PERSONA: &str = "Professional";
const DEFAULT_INDUSTRY: &str = "Technology";

/// Project a full member profile into the reduced teaser view shown on
/// pre-consent surfaces. Empty strings count as absent when picking
/// fallbacks. Pure, total, no I/O.
///
/// Field precedence:
///     persona    role, else primary persona tag, else "Professional"
///     industry   industry, else first of industries, else "Technology"
///     interests  interests, else skills
///     seeking    seeking, else goal objectives
pub fn anonymize_profile(profile: &MemberProfile) -> TeaserProfile {
    let attrs = &profile.attributes;

    let persona = non_empty(attrs.role.as_deref())
        .or_else(|| {
            profile
                .persona
                .as_ref()
                .and_then(|p| non_empty(p.primary.as_deref()))
        })
        .unwrap_or(DEFAULT_PERSONA)
        .to_string();

    let industry = non_empty(attrs.industry.as_deref())
        .or_else(|| non_empty(attrs.industries.first().map(String::as_str)))
        .unwrap_or(DEFAULT_INDUSTRY)
        .to_string();

    let experience_level = classify_experience(attrs.title.as_deref(), attrs.role.as_deref());

    let interests = if !profile.interests.is_empty() {
        profile.interests.clone()
    } else {
        attrs.skills.clone()
    };

    let seeking = if !attrs.seeking.is_empty() {
        attrs.seeking.clone()
    } else {
        attrs
            .goals
            .as_ref()
            .map(|g| g.objectives.clone())
            .unwrap_or_default()
    };

    TeaserProfile {
        persona,
        industry,
        experience_level,
        interests,
        seeking,
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExperienceLevel, Goals, Persona, ProfileAttributes};

    fn bare_member() -> MemberProfile {
        MemberProfile {
            member_id: "m1".to_string(),
            display_name: None,
            persona: None,
            interests: vec![],
            is_activated: false,
            attributes: ProfileAttributes::default(),
        }
    }

    #[test]
    fn test_empty_profile_gets_all_defaults() {
        let teaser = anonymize_profile(&bare_member());

        assert_eq!(teaser.persona, "Professional");
        assert_eq!(teaser.industry, "Technology");
        assert_eq!(teaser.experience_level, ExperienceLevel::Professional);
        assert!(teaser.interests.is_empty());
        assert!(teaser.seeking.is_empty());
    }

    #[test]
    fn test_persona_prefers_role_over_persona_tag() {
        let mut member = bare_member();
        member.attributes.role = Some("investor".to_string());
        member.persona = Some(Persona {
            primary: Some("Connector".to_string()),
        });

        assert_eq!(anonymize_profile(&member).persona, "investor");
    }

    #[test]
    fn test_persona_tag_used_when_role_empty() {
        let mut member = bare_member();
        member.attributes.role = Some(String::new());
        member.persona = Some(Persona {
            primary: Some("Connector".to_string()),
        });

        assert_eq!(anonymize_profile(&member).persona, "Connector");
    }

    #[test]
    fn test_industry_falls_back_to_first_of_list() {
        let mut member = bare_member();
        member.attributes.industries = vec!["Climate".to_string(), "Energy".to_string()];

        assert_eq!(anonymize_profile(&member).industry, "Climate");
    }

    #[test]
    fn test_experience_level_derived_from_title() {
        let mut member = bare_member();
        member.attributes.title = Some("Senior Manager".to_string());

        assert_eq!(anonymize_profile(&member).experience_level, ExperienceLevel::Senior);
    }

    #[test]
    fn test_interests_fall_back_to_skills() {
        let mut member = bare_member();
        member.attributes.skills = vec!["Rust".to_string()];

        assert_eq!(anonymize_profile(&member).interests, ["Rust".to_string()]);

        member.interests = vec!["Climbing".to_string()];
        assert_eq!(anonymize_profile(&member).interests, ["Climbing".to_string()]);
    }

    #[test]
    fn test_seeking_falls_back_to_goal_objectives() {
        let mut member = bare_member();
        member.attributes.goals = Some(Goals {
            objectives: vec!["Hire".to_string()],
        });

        assert_eq!(anonymize_profile(&member).seeking, ["Hire".to_string()]);

        member.attributes.seeking = vec!["Find advisors".to_string()];
        assert_eq!(anonymize_profile(&member).seeking, ["Find advisors".to_string()]);
    }
}
