//! Weighted candidate scoring

use serde::Serialize;
use tracing::debug;

use super::rules::{self, RoleCategory, SkillTier};
use super::weights::WeightConfig;
use super::MAX_SCORE;
use crate::domain::candidate::CandidateRecord;
use crate::domain::scored::ScoredCandidate;
use crate::normalize::{self, FULL_TIME, PART_TIME};

/// Per-factor sub-scores, each already capped at its weight.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct ComponentScores {
    pub work_availability: f64,
    pub relevant_experience: f64,
    pub experience_breadth: f64,
    pub education: f64,
    pub skills: f64,
    pub leadership: f64,
}

impl ComponentScores {
    /// Uncapped sum, accumulated in factor order.
    pub fn total(&self) -> f64 {
        let mut total = 0.0;
        total += self.work_availability;
        total += self.relevant_experience;
        total += self.experience_breadth;
        total += self.education;
        total += self.skills;
        total += self.leadership;
        total
    }

    /// Total capped at 100 and rounded half-up.
    pub fn final_score(&self) -> u8 {
        let capped = self.total().clamp(0.0, f64::from(MAX_SCORE));
        (capped + 0.5).floor() as u8
    }
}

/// Score calculator bound to one weight snapshot
#[derive(Debug, Clone)]
pub struct ScoreCalculator {
    weights: WeightConfig,
}

impl ScoreCalculator {
    /// Create a calculator with default weights
    pub fn new() -> Self {
        Self { weights: WeightConfig::default() }
    }

    /// Create with custom weights. Negative or non-finite weights count as zero.
    pub fn with_weights(weights: WeightConfig) -> Self {
        Self { weights: weights.sanitized() }
    }

    pub fn weights(&self) -> &WeightConfig {
        &self.weights
    }

    pub fn score(&self, record: &CandidateRecord) -> u8 {
        self.component_scores(record).final_score()
    }

    pub fn component_scores(&self, record: &CandidateRecord) -> ComponentScores {
        ComponentScores {
            work_availability: self.work_availability_score(record),
            relevant_experience: self.relevant_experience_score(record),
            experience_breadth: self.experience_breadth_score(record),
            education: self.education_score(record),
            skills: self.skills_score(record),
            leadership: self.leadership_score(record),
        }
    }

    pub fn score_candidate<'a>(
        &self,
        index: usize,
        record: &'a CandidateRecord,
    ) -> ScoredCandidate<'a> {
        let components = self.component_scores(record);
        let score = components.final_score();
        debug!(
            event_name = "scoring.candidate.scored",
            index,
            candidate = normalize::display_name(record),
            score,
            "computed candidate score"
        );

        ScoredCandidate {
            index,
            record,
            score,
            salary_num: normalize::salary_num(record),
            components,
        }
    }

    /// Score every record, preserving input order.
    pub fn score_all<'a>(&self, records: &'a [CandidateRecord]) -> Vec<ScoredCandidate<'a>> {
        records
            .iter()
            .enumerate()
            .map(|(index, record)| self.score_candidate(index, record))
            .collect()
    }

    /// Full weight for full-time, half for part-time only.
    pub fn work_availability_score(&self, record: &CandidateRecord) -> f64 {
        let weight = self.weights.work_availability;
        if normalize::availability(record).any(|mode| mode == FULL_TIME) {
            weight
        } else if normalize::availability(record).any(|mode| mode == PART_TIME) {
            weight * rules::PART_TIME_SHARE
        } else {
            0.0
        }
    }

    pub fn relevant_experience_score(&self, record: &CandidateRecord) -> f64 {
        let weight = self.weights.relevant_experience;
        let raw: f64 = normalize::role_names(record)
            .enumerate()
            .filter_map(|(index, role)| role.map(|role| rules::role_relevance(role, index)))
            .sum();

        (raw * (weight / rules::RELEVANT_EXPERIENCE_DIVISOR)).min(weight)
    }

    /// Counts every experience entry, malformed ones included.
    pub fn experience_breadth_score(&self, record: &CandidateRecord) -> f64 {
        let weight = self.weights.experience_breadth;
        let count = normalize::experiences(record).len() as f64;
        (count * (weight / rules::EXPERIENCE_BREADTH_DIVISOR)).min(weight)
    }

    pub fn education_score(&self, record: &CandidateRecord) -> f64 {
        let weight = self.weights.education;
        let mut points = rules::education_base_points(&normalize::education_level(record));

        let has_gpa = |band: &str| {
            normalize::degrees(record).any(|degree| degree.gpa.as_deref() == Some(band))
        };
        if has_gpa(rules::HIGH_GPA_BAND) {
            points += rules::HIGH_GPA_BONUS;
        } else if has_gpa(rules::MEDIUM_GPA_BAND) {
            points += rules::MEDIUM_GPA_BONUS;
        }

        if normalize::degrees(record).any(|degree| degree.is_top25 == Some(true)) {
            points += rules::TOP25_SCHOOL_BONUS;
        } else if normalize::degrees(record).any(|degree| degree.is_top50 == Some(true)) {
            points += rules::TOP50_SCHOOL_BONUS;
        }

        (points * (weight / rules::EDUCATION_DIVISOR)).min(weight)
    }

    pub fn skills_score(&self, record: &CandidateRecord) -> f64 {
        let weight = self.weights.skills;
        let points: f64 =
            normalize::skills(record).map(|skill| SkillTier::classify(skill).points()).sum();
        (points * (weight / rules::SKILLS_DIVISOR)).min(weight)
    }

    /// All or nothing.
    pub fn leadership_score(&self, record: &CandidateRecord) -> f64 {
        let leader = normalize::role_names(record).flatten().any(rules::is_leadership_role);
        if leader {
            self.weights.leadership
        } else {
            0.0
        }
    }

    /// Bucket of each experience entry, `None` where the role name is missing.
    pub fn role_categories(&self, record: &CandidateRecord) -> Vec<Option<RoleCategory>> {
        normalize::role_names(record).map(|role| role.map(RoleCategory::classify)).collect()
    }
}

impl Default for ScoreCalculator {
    fn default() -> Self {
        Self::new()
    }
}

/// Score one record under `weights`.
pub fn score(record: &CandidateRecord, weights: &WeightConfig) -> u8 {
    ScoreCalculator::with_weights(*weights).score(record)
}
