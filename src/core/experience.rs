use crate::models::ExperienceLevel;

/// Keyword groups tested in priority order; the first group with a hit wins,
/// even when a later group's keyword also appears in the title.
const SENIORITY_RULES: &[(&[&str], ExperienceLevel)] = &[
    (&["senior", "lead", "director", "vp", "chief", "head of"], ExperienceLevel::Senior),
    (&["junior", "associate", "analyst"], ExperienceLevel::Junior),
    (&["manager", "specialist"], ExperienceLevel::MidLevel),
    (&["founder", "ceo", "cto"], ExperienceLevel::Executive),
    (&["student", "intern"], ExperienceLevel::EntryLevel),
];

/// Derive a coarse seniority band from a member's free-text title, falling
/// back to the role when no title is present. Pure and total.
pub fn classify_experience(title: Option<&str>, role: Option<&str>) -> ExperienceLevel {
    let source = title
        .filter(|s| !s.is_empty())
        .or_else(|| role.filter(|s| !s.is_empty()));

    let source = match source {
        Some(text) => text.to_lowercase(),
        None => return ExperienceLevel::Professional,
    };

    for (keywords, level) in SENIORITY_RULES {
        if keywords.iter().any(|kw| source.contains(kw)) {
            return *level;
        }
    }

    ExperienceLevel::Professional
}
