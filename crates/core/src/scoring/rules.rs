//! Keyword rule tables behind the scoring policy.
//!
//! Tables are evaluated in declaration order and the first match wins.

use serde::Serialize;

use crate::normalize::EducationLevel;

/// Role bucket assigned to one experience entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RoleCategory {
    Technical,
    Managerial,
    Business,
    Legal,
    Other,
}

#[derive(Debug, Clone, Copy)]
pub struct RoleRule {
    pub category: RoleCategory,
    pub keywords: &'static [&'static str],
    /// Relevance when the role is the most recent entry
    pub primary: f64,
    /// Relevance for every later entry
    pub subsequent: f64,
}

pub const ROLE_RULES: &[RoleRule] = &[
    RoleRule {
        category: RoleCategory::Technical,
        keywords: &[
            "Engineer",
            "Developer",
            "Architect",
            "CTO",
            "Technical",
            "Software",
            "Full Stack",
            "Frontend",
            "Backend",
        ],
        primary: 1.0,
        subsequent: 0.8,
    },
    RoleRule {
        category: RoleCategory::Managerial,
        keywords: &["Manager", "Director", "Lead", "CEO", "CTO", "VP", "Head", "Chief"],
        primary: 0.9,
        subsequent: 0.7,
    },
    RoleRule {
        category: RoleCategory::Business,
        keywords: &["Analyst", "Consultant", "Product Manager", "Business", "Marketing", "Sales"],
        primary: 0.7,
        subsequent: 0.5,
    },
    RoleRule {
        category: RoleCategory::Legal,
        keywords: &["Attorney", "Legal", "Lawyer", "Counsel", "Partner"],
        primary: 0.8,
        subsequent: 0.6,
    },
];

pub const OTHER_ROLE_RELEVANCE: f64 = 0.2;

/// Positional multiplier for the most recent experience entry.
pub const MOST_RECENT_MULTIPLIER: f64 = 2.0;

/// Matched case-sensitively, unlike the role and skill tables.
pub const LEADERSHIP_KEYWORDS: &[&str] =
    &["Manager", "Director", "Lead", "Partner", "CEO", "CTO", "Founder"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillTier {
    HighValue,
    MediumValue,
    Business,
    Other,
}

#[derive(Debug, Clone, Copy)]
pub struct SkillRule {
    pub tier: SkillTier,
    pub keywords: &'static [&'static str],
    pub points: f64,
}

pub const SKILL_RULES: &[SkillRule] = &[
    SkillRule {
        tier: SkillTier::HighValue,
        keywords: &[
            "React",
            "JavaScript",
            "TypeScript",
            "Python",
            "Java",
            "AWS",
            "Docker",
            "Node JS",
            "Next JS",
        ],
        points: 2.0,
    },
    SkillRule {
        tier: SkillTier::MediumValue,
        keywords: &["Angular", "Vue", "PHP", "C#", "MongoDB", "PostgreSQL", "Redis"],
        points: 1.5,
    },
    SkillRule {
        tier: SkillTier::Business,
        keywords: &["Project Management", "Agile", "Scrum", "Analytics", "Marketing"],
        points: 1.0,
    },
];

pub const OTHER_SKILL_POINTS: f64 = 0.5;

pub const EDUCATION_BASE_POINTS: &[(&str, f64)] = &[
    ("High School Diploma", 3.0),
    ("Associate's Degree", 6.0),
    ("Bachelor's Degree", 10.0),
    ("Master's Degree", 16.0),
    ("Juris Doctor (J.D)", 18.0),
    ("PhD", 20.0),
];

pub const HIGH_GPA_BAND: &str = "GPA 3.5-3.9";
pub const HIGH_GPA_BONUS: f64 = 3.0;
pub const MEDIUM_GPA_BAND: &str = "GPA 3.0-3.4";
pub const MEDIUM_GPA_BONUS: f64 = 1.5;
pub const TOP25_SCHOOL_BONUS: f64 = 5.0;
pub const TOP50_SCHOOL_BONUS: f64 = 3.0;

/// Divisors that turn raw factor points into a share of the factor weight.
pub const RELEVANT_EXPERIENCE_DIVISOR: f64 = 6.0;
pub const EXPERIENCE_BREADTH_DIVISOR: f64 = 7.0;
pub const EDUCATION_DIVISOR: f64 = 25.0;
pub const SKILLS_DIVISOR: f64 = 10.0;

pub const PART_TIME_SHARE: f64 = 0.5;

fn contains_folded(haystack_lower: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| haystack_lower.contains(&keyword.to_lowercase()))
}

impl RoleCategory {
    pub fn classify(role_name: &str) -> Self {
        Self::rule_for(role_name).map_or(Self::Other, |rule| rule.category)
    }

    fn rule_for(role_name: &str) -> Option<&'static RoleRule> {
        let role = role_name.to_lowercase();
        ROLE_RULES.iter().find(|rule| contains_folded(&role, rule.keywords))
    }
}

/// Weighted relevance of one experience entry at `index` in the history.
pub fn role_relevance(role_name: &str, index: usize) -> f64 {
    let most_recent = index == 0;
    let relevance = match RoleCategory::rule_for(role_name) {
        Some(rule) if most_recent => rule.primary,
        Some(rule) => rule.subsequent,
        None => OTHER_ROLE_RELEVANCE,
    };
    let positional = if most_recent { MOST_RECENT_MULTIPLIER } else { 1.0 };
    relevance * positional
}

pub fn is_leadership_role(role_name: &str) -> bool {
    LEADERSHIP_KEYWORDS.iter().any(|keyword| role_name.contains(keyword))
}

impl SkillTier {
    pub fn classify(skill: &str) -> Self {
        let skill = skill.to_lowercase();
        SKILL_RULES
            .iter()
            .find(|rule| contains_folded(&skill, rule.keywords))
            .map_or(Self::Other, |rule| rule.tier)
    }

    pub fn points(&self) -> f64 {
        SKILL_RULES
            .iter()
            .find(|rule| rule.tier == *self)
            .map_or(OTHER_SKILL_POINTS, |rule| rule.points)
    }
}

pub fn education_base_points(level: &EducationLevel) -> f64 {
    EDUCATION_BASE_POINTS
        .iter()
        .find(|(label, _)| *label == level.label())
        .map_or(0.0, |(_, points)| *points)
}
