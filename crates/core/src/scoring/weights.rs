use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// Six-factor scoring policy.
///
/// Weights conventionally total 100 but any non-negative values are accepted;
/// each factor's sub-score is capped at its weight.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeightConfig {
    /// Full-time or part-time availability (default: 25)
    pub work_availability: f64,
    /// Role relevance of the experience history (default: 30)
    pub relevant_experience: f64,
    /// Number of roles held (default: 10)
    pub experience_breadth: f64,
    /// Degree level, GPA band and school prestige (default: 20)
    pub education: f64,
    /// Skill tiers (default: 10)
    pub skills: f64,
    /// Any leadership role (default: 5)
    pub leadership: f64,
}

impl Default for WeightConfig {
    fn default() -> Self {
        super::DEFAULT_WEIGHTS
    }
}

impl WeightConfig {
    pub const ZERO: Self = Self {
        work_availability: 0.0,
        relevant_experience: 0.0,
        experience_breadth: 0.0,
        education: 0.0,
        skills: 0.0,
        leadership: 0.0,
    };

    pub fn total(&self) -> f64 {
        self.factors().iter().map(|(_, value)| value).sum()
    }

    /// Whether the weights add up to the conventional 100.
    pub fn is_balanced(&self) -> bool {
        (self.total() - 100.0).abs() < 1e-9
    }

    pub fn factors(&self) -> [(&'static str, f64); 6] {
        [
            ("work_availability", self.work_availability),
            ("relevant_experience", self.relevant_experience),
            ("experience_breadth", self.experience_breadth),
            ("education", self.education),
            ("skills", self.skills),
            ("leadership", self.leadership),
        ]
    }

    /// Rejects negative or non-finite weights.
    pub fn validate(&self) -> Result<(), DomainError> {
        match self.factors().into_iter().find(|(_, value)| !value.is_finite() || *value < 0.0) {
            Some((factor, value)) => {
                Err(DomainError::InvalidWeight { factor: factor.to_string(), value })
            }
            None => Ok(()),
        }
    }

    /// Copy with negative and non-finite weights replaced by zero.
    pub fn sanitized(&self) -> Self {
        let clamp = |value: f64| if value.is_finite() && value > 0.0 { value } else { 0.0 };
        Self {
            work_availability: clamp(self.work_availability),
            relevant_experience: clamp(self.relevant_experience),
            experience_breadth: clamp(self.experience_breadth),
            education: clamp(self.education),
            skills: clamp(self.skills),
            leadership: clamp(self.leadership),
        }
    }
}
