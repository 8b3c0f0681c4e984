//! Candidate scoring engine
//!
//! Turns a candidate record into a 0-100 score from six weighted factors.
//! Each factor is capped at its weight, the factors are summed, and the sum is
//! capped at 100 and rounded half-up.

mod calculator;
pub mod rules;
mod weights;

pub use calculator::{score, ComponentScores, ScoreCalculator};
pub use rules::{RoleCategory, SkillTier};
pub use weights::WeightConfig;

/// Default scoring weights
pub const DEFAULT_WEIGHTS: WeightConfig = WeightConfig {
    work_availability: 25.0,
    relevant_experience: 30.0,
    experience_breadth: 10.0,
    education: 20.0,
    skills: 10.0,
    leadership: 5.0,
};

/// Upper bound of every final score
pub const MAX_SCORE: u8 = 100;
