//! Search, attribute filters and aggregate tables over scored candidates.

use serde::Serialize;

use crate::domain::scored::ScoredCandidate;
use crate::errors::DomainError;
use crate::normalize;

/// Salary histogram buckets: label and exclusive upper bound. The last bucket
/// is open-ended.
pub const SALARY_BUCKETS: &[(&str, Option<u64>)] = &[
    ("0-50k", Some(50_000)),
    ("50k-75k", Some(75_000)),
    ("75k-100k", Some(100_000)),
    ("100k-125k", Some(125_000)),
    ("125k+", None),
];

/// Attribute filters; every populated field must match.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CandidateFilter {
    pub location: Option<String>,
    pub min_salary: Option<u64>,
    pub max_salary: Option<u64>,
    pub skills: Option<String>,
}

impl CandidateFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn with_salary_range(mut self, min: Option<u64>, max: Option<u64>) -> Self {
        self.min_salary = min;
        self.max_salary = max;
        self
    }

    pub fn with_skills(mut self, skills: impl Into<String>) -> Self {
        self.skills = Some(skills.into());
        self
    }

    pub fn matches(&self, candidate: &ScoredCandidate<'_>) -> bool {
        self.matches_location(candidate)
            && self.matches_salary(candidate)
            && self.matches_skills(candidate)
    }

    fn matches_location(&self, candidate: &ScoredCandidate<'_>) -> bool {
        match active(self.location.as_deref()) {
            Some(wanted) => contains_folded(normalize::location(candidate.record), wanted),
            None => true,
        }
    }

    fn matches_salary(&self, candidate: &ScoredCandidate<'_>) -> bool {
        self.min_salary.map_or(true, |min| candidate.salary_num >= min)
            && self.max_salary.map_or(true, |max| candidate.salary_num <= max)
    }

    fn matches_skills(&self, candidate: &ScoredCandidate<'_>) -> bool {
        match active(self.skills.as_deref()) {
            Some(wanted) => normalize::skills(candidate.record)
                .any(|skill| contains_folded(Some(skill), wanted)),
            None => true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocationCount {
    pub location: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SalaryBucket {
    pub range: &'static str,
    pub count: usize,
}

/// Headline numbers for the whole population.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardSummary {
    pub total_candidates: usize,
    /// Mean salary in thousands over candidates with a parsed salary
    pub average_salary_k: u64,
    pub average_score: u64,
}

fn active(value: Option<&str>) -> Option<&str> {
    value.filter(|value| !value.is_empty())
}

fn contains_folded(haystack: Option<&str>, needle: &str) -> bool {
    haystack.unwrap_or_default().to_lowercase().contains(&needle.to_lowercase())
}

/// Case-insensitive match of `query` against name, location or any skill.
/// An empty query matches every candidate.
pub fn matches_search(candidate: &ScoredCandidate<'_>, query: &str) -> bool {
    let record = candidate.record;
    contains_folded(record.name.as_deref(), query)
        || contains_folded(record.location.as_deref(), query)
        || normalize::skills(record).any(|skill| contains_folded(Some(skill), query))
}

/// Candidates matching both the search query and the filter, in input order.
pub fn filter_candidates<'a>(
    scored: &[ScoredCandidate<'a>],
    query: &str,
    filter: &CandidateFilter,
) -> Vec<ScoredCandidate<'a>> {
    scored
        .iter()
        .filter(|candidate| matches_search(candidate, query) && filter.matches(candidate))
        .copied()
        .collect()
}

/// Parse a user-entered salary bound. Blank input means unbounded.
pub fn parse_salary_bound(input: &str) -> Result<Option<u64>, DomainError> {
    let cleaned: String =
        input.trim().chars().filter(|ch| !matches!(ch, '$' | ',')).collect();
    if cleaned.is_empty() {
        return Ok(None);
    }

    cleaned
        .parse::<u64>()
        .map(Some)
        .map_err(|_| DomainError::InvalidSalaryBound { value: input.to_string() })
}

/// Stable descending sort by score; ties keep input order.
pub fn rank_by_score<'a>(scored: &[ScoredCandidate<'a>]) -> Vec<ScoredCandidate<'a>> {
    let mut ranked = scored.to_vec();
    ranked.sort_by(|a, b| b.score.cmp(&a.score));
    ranked
}

/// Candidate count per location in first-seen order.
pub fn location_counts(scored: &[ScoredCandidate<'_>]) -> Vec<LocationCount> {
    let mut counts: Vec<LocationCount> = Vec::new();
    for candidate in scored {
        let location = normalize::location_or_unknown(candidate.record);
        match counts.iter_mut().find(|entry| entry.location == location) {
            Some(entry) => entry.count += 1,
            None => counts.push(LocationCount { location: location.to_string(), count: 1 }),
        }
    }
    counts
}

pub fn salary_bucket(salary: u64) -> &'static str {
    SALARY_BUCKETS
        .iter()
        .find(|(_, upper)| upper.map_or(true, |bound| salary < bound))
        .map_or("125k+", |(label, _)| *label)
}

/// Fixed five-bucket salary histogram.
pub fn salary_histogram(scored: &[ScoredCandidate<'_>]) -> Vec<SalaryBucket> {
    let mut buckets: Vec<SalaryBucket> = SALARY_BUCKETS
        .iter()
        .map(|(range, _)| SalaryBucket { range: *range, count: 0 })
        .collect();

    for candidate in scored {
        let label = salary_bucket(candidate.salary_num);
        if let Some(bucket) = buckets.iter_mut().find(|bucket| bucket.range == label) {
            bucket.count += 1;
        }
    }
    buckets
}

pub fn summarize(scored: &[ScoredCandidate<'_>]) -> DashboardSummary {
    let salaries: Vec<u64> =
        scored.iter().map(|candidate| candidate.salary_num).filter(|salary| *salary > 0).collect();
    let salary_total: f64 = salaries.iter().map(|salary| *salary as f64).sum();
    let average_salary_k =
        (salary_total / salaries.len().max(1) as f64 / 1000.0).round() as u64;

    let average_score = if scored.is_empty() {
        0
    } else {
        let score_total: f64 = scored.iter().map(|candidate| f64::from(candidate.score)).sum();
        (score_total / scored.len() as f64).round() as u64
    };

    DashboardSummary { total_candidates: scored.len(), average_salary_k, average_score }
}
