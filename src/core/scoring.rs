use crate::models::ProfileAttributes;

/// Points awarded per factor.
///
/// Factor budget: industry 30, role 25, goals 25, skills 10, location 10.
const INDUSTRY_EXACT_POINTS: u32 = 30;
const INDUSTRY_SHARED_POINTS: u32 = 15;
const ROLE_EQUAL_POINTS: u32 = 10;
const ROLE_FALLBACK_POINTS: u32 = 5;
const GOAL_OVERLAP_POINTS: u32 = 8;
const GOAL_PAIR_POINTS: u32 = 10;
const GOALS_CAP: u32 = 25;
const SKILLS_POINTS: u32 = 10;
const LOCATION_POINTS: u32 = 10;
const MAX_SCORE: u32 = 100;

/// A complementary-role rule, matched by substring containment on
/// lower-cased roles. One-directional rules only fire as listed.
struct RoleRule {
    a: &'static str,
    b: &'static str,
    points: u32,
    bidirectional: bool,
}

/// Ordered rule table; the first hit wins.
const ROLE_RULES: &[RoleRule] = &[
    RoleRule { a: "founder", b: "investor", points: 25, bidirectional: true },
    RoleRule { a: "hiring", b: "talent", points: 25, bidirectional: true },
    RoleRule { a: "mentor", b: "mentee", points: 20, bidirectional: false },
    RoleRule { a: "advisor", b: "founder", points: 20, bidirectional: false },
];

/// Goal strings considered mutually satisfying, matched in either direction.
const COMPLEMENTARY_GOALS: &[(&str, &str)] = &[
    ("Raise capital", "Invest capital"),
    ("Hire", "Join a startup"),
    ("Find a cofounder", "Join a startup"),
    ("Find customers", "Partnership BD"),
    ("Get a mentor", "Find advisors"),
    ("Find service providers", "Find customers"),
];

/// Calculate the compatibility score (0-100) between two attribute sets
///
/// Scoring factors:
///     industry alignment      up to 30
///     role complementarity    up to 25
///     goals alignment         up to 25
///     skills overlap          flat 10
///     location                flat 10
///
/// Pure and deterministic; missing fields contribute zero.
pub fn compatibility_score(a: &ProfileAttributes, b: &ProfileAttributes) -> u8 {
    let total = industry_score(a, b)
        + role_score(a, b)
        + goals_score(a, b)
        + skills_score(a, b)
        + location_score(a, b);

    total.min(MAX_SCORE) as u8
}

/// Industry alignment: exact primary-industry match beats a shared entry
/// in the broader industries lists.
#[inline]
fn industry_score(a: &ProfileAttributes, b: &ProfileAttributes) -> u32 {
    if let (Some(ia), Some(ib)) = (non_empty(&a.industry), non_empty(&b.industry)) {
        if ia == ib {
            return INDUSTRY_EXACT_POINTS;
        }
    }

    if a.industries.iter().any(|i| b.industries.contains(i)) {
        INDUSTRY_SHARED_POINTS
    } else {
        0
    }
}

/// Role complementarity via the ordered rule table, then exact equality,
/// then a small both-present fallback.
#[inline]
fn role_score(a: &ProfileAttributes, b: &ProfileAttributes) -> u32 {
    let (role_a, role_b) = match (non_empty(&a.role), non_empty(&b.role)) {
        (Some(ra), Some(rb)) => (ra.to_lowercase(), rb.to_lowercase()),
        _ => return 0,
    };

    for rule in ROLE_RULES {
        let forward = role_a.contains(rule.a) && role_b.contains(rule.b);
        let reverse = rule.bidirectional && role_a.contains(rule.b) && role_b.contains(rule.a);
        if forward || reverse {
            return rule.points;
        }
    }

    if role_a == role_b {
        ROLE_EQUAL_POINTS
    } else {
        ROLE_FALLBACK_POINTS
    }
}

/// Goals alignment: direct overlap counted once per matching literal in the
/// first list, plus complementary pairs counted once per table row.
#[inline]
fn goals_score(a: &ProfileAttributes, b: &ProfileAttributes) -> u32 {
    let goals_a = a.effective_goals();
    let goals_b = b.effective_goals();

    if goals_a.is_empty() || goals_b.is_empty() {
        return 0;
    }

    let mut subtotal = 0;

    for goal in goals_a {
        if goals_b.contains(goal) {
            subtotal += GOAL_OVERLAP_POINTS;
        }
    }

    for (x, y) in COMPLEMENTARY_GOALS {
        let forward = goals_a.iter().any(|g| g == x) && goals_b.iter().any(|g| g == y);
        let reverse = goals_a.iter().any(|g| g == y) && goals_b.iter().any(|g| g == x);
        if forward || reverse {
            subtotal += GOAL_PAIR_POINTS;
        }
    }

    subtotal.min(GOALS_CAP)
}

/// Any shared skill scores the flat bonus.
#[inline]
fn skills_score(a: &ProfileAttributes, b: &ProfileAttributes) -> u32 {
    if a.skills.iter().any(|s| b.skills.contains(s)) {
        SKILLS_POINTS
    } else {
        0
    }
}

/// Exact city/region equality scores the flat bonus.
#[inline]
fn location_score(a: &ProfileAttributes, b: &ProfileAttributes) -> u32 {
    match (non_empty(&a.city_region), non_empty(&b.city_region)) {
        (Some(ca), Some(cb)) if ca == cb => LOCATION_POINTS,
        _ => 0,
    }
}

#[inline]
fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}
