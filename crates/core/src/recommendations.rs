//! Hiring recommendations
//!
//! Three selections over one scored population: the strongest candidates,
//! the best score per salary dollar, and a small team chosen for location and
//! role variety.

use std::collections::HashSet;

use serde::Serialize;
use tracing::debug;

use crate::domain::scored::ScoredCandidate;
use crate::normalize;
use crate::ranking::rank_by_score;

/// Size of every recommendation list.
pub const RECOMMENDATION_SIZE: usize = 5;
/// Members picked unconditionally before novelty is required.
pub const DIVERSITY_SEED_SIZE: usize = 3;
/// Best-value candidates must expect strictly less than this.
pub const BEST_VALUE_SALARY_CEILING: u64 = 100_000;

const VALUE_SCALE: f64 = 100_000.0;

/// One diverse team pick with the attributes it was chosen on.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TeamMember<'a> {
    pub candidate: ScoredCandidate<'a>,
    pub location: &'a str,
    pub role: &'a str,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct HiringRecommendations<'a> {
    pub top_performers: Vec<ScoredCandidate<'a>>,
    pub best_value: Vec<ScoredCandidate<'a>>,
    pub diverse_team: Vec<TeamMember<'a>>,
}

impl<'a> HiringRecommendations<'a> {
    pub fn build(scored: &[ScoredCandidate<'a>]) -> Self {
        let recommendations = Self {
            top_performers: top_performers(scored),
            best_value: best_value(scored),
            diverse_team: diverse_team(scored),
        };

        debug!(
            event_name = "recommendations.built",
            population = scored.len(),
            top_performers = recommendations.top_performers.len(),
            best_value = recommendations.best_value.len(),
            diverse_team = recommendations.diverse_team.len(),
            "hiring recommendations built"
        );
        recommendations
    }

    pub fn team_budget(&self) -> u64 {
        team_budget(self.diverse_team.iter().map(|member| &member.candidate))
    }
}

pub fn top_performers<'a>(scored: &[ScoredCandidate<'a>]) -> Vec<ScoredCandidate<'a>> {
    let mut ranked = rank_by_score(scored);
    ranked.truncate(RECOMMENDATION_SIZE);
    ranked
}

fn value_ratio(candidate: &ScoredCandidate<'_>) -> f64 {
    if candidate.salary_num == 0 {
        return 0.0;
    }
    f64::from(candidate.score) / candidate.salary_num as f64
}

/// Score per salary dollar scaled to 100k, rounded. Zero without a salary.
pub fn value_score(candidate: &ScoredCandidate<'_>) -> u64 {
    (value_ratio(candidate) * VALUE_SCALE).round() as u64
}

/// Highest score per salary among candidates with a salary below 100k.
pub fn best_value<'a>(scored: &[ScoredCandidate<'a>]) -> Vec<ScoredCandidate<'a>> {
    let mut eligible: Vec<ScoredCandidate<'a>> = scored
        .iter()
        .filter(|candidate| {
            candidate.salary_num > 0 && candidate.salary_num < BEST_VALUE_SALARY_CEILING
        })
        .copied()
        .collect();

    eligible.sort_by(|a, b| value_ratio(b).total_cmp(&value_ratio(a)));
    eligible.truncate(RECOMMENDATION_SIZE);
    eligible
}

/// Walk the ranking and keep candidates that bring a new location or role.
///
/// The first three picks are taken regardless. The team can end up smaller
/// than five when the population lacks variety.
pub fn diverse_team<'a>(scored: &[ScoredCandidate<'a>]) -> Vec<TeamMember<'a>> {
    let mut team: Vec<TeamMember<'a>> = Vec::with_capacity(RECOMMENDATION_SIZE);
    let mut locations: HashSet<&'a str> = HashSet::new();
    let mut roles: HashSet<&'a str> = HashSet::new();

    for candidate in rank_by_score(scored) {
        if team.len() >= RECOMMENDATION_SIZE {
            break;
        }

        let location = normalize::location_or_unknown(candidate.record);
        let role = normalize::most_recent_role(candidate.record);
        let novel = !locations.contains(location) || !roles.contains(role);
        if !novel && team.len() >= DIVERSITY_SEED_SIZE {
            continue;
        }

        locations.insert(location);
        roles.insert(role);
        team.push(TeamMember { candidate, location, role });
    }

    team
}

/// Sum of parsed salary expectations, saturating at `u64::MAX`.
pub fn team_budget<'a, 'b: 'a>(
    members: impl IntoIterator<Item = &'a ScoredCandidate<'b>>,
) -> u64 {
    members.into_iter().map(|candidate| candidate.salary_num).fold(0u64, u64::saturating_add)
}

#[cfg(test)]
mod tests {
    use serde_json::{json, Value};

    use super::*;
    use crate::domain::candidate::CandidateRecord;
    use crate::scoring::ScoreCalculator;

    fn record(name: &str, location: &str, role: &str, salary: &str, full_time: bool) -> Value {
        let availability = if full_time { vec!["full-time"] } else { vec![] };
        json!({
            "name": name,
            "email": format!("{}@example.com", name.to_lowercase()),
            "location": location,
            "work_availability": availability,
            "work_experiences": [{"company": "Acme", "roleName": role}],
            "annual_salary_expectation": {"full-time": salary}
        })
    }

    fn records(values: Vec<Value>) -> Vec<CandidateRecord> {
        values.into_iter().map(CandidateRecord::from_value).collect()
    }

    fn indices(candidates: &[ScoredCandidate<'_>]) -> Vec<usize> {
        candidates.iter().map(|candidate| candidate.index).collect()
    }

    #[test]
    fn top_performers_takes_five_highest_with_stable_ties() {
        let records = records(vec![
            record("A", "Austin", "Barista", "$50,000", false),
            record("B", "Austin", "Software Engineer", "$50,000", true),
            record("C", "Austin", "Barista", "$50,000", false),
            record("D", "Austin", "Software Engineer", "$50,000", true),
            record("E", "Austin", "Barista", "$50,000", false),
            record("F", "Austin", "Barista", "$50,000", false),
            record("G", "Austin", "Barista", "$50,000", false),
        ]);
        let scored = ScoreCalculator::new().score_all(&records);

        assert_eq!(indices(&top_performers(&scored)), vec![1, 3, 0, 2, 4]);
    }

    #[test]
    fn best_value_excludes_missing_and_high_salaries() {
        let mut values = vec![
            record("Free", "Austin", "Software Engineer", "", true),
            record("Pricey", "Austin", "Software Engineer", "$100,000", true),
            record("Cheap", "Austin", "Software Engineer", "$50,000", true),
            record("Mid", "Austin", "Software Engineer", "$80,000", true),
        ];
        values[1]["work_experiences"] =
            json!([{"roleName": "Founder and CTO"}, {"roleName": "Backend Engineer"}]);
        let records = records(values);
        let scored = ScoreCalculator::new().score_all(&records);

        // 25 + 2.8 * 30 / 6 + 2 * 10 / 7 + 5 = 46.86 against 36 for the rest
        assert_eq!(scored[1].score, 47);
        assert_eq!(scored[2].score, 36);
        assert_eq!(indices(&top_performers(&scored))[0], 1);

        let picks = best_value(&scored);
        assert_eq!(indices(&picks), vec![2, 3]);
        assert!(picks.iter().all(|candidate| candidate.salary_num > 0));
        assert!(picks.iter().all(|candidate| candidate.salary_num < BEST_VALUE_SALARY_CEILING));
    }

    #[test]
    fn best_value_is_stable_for_equal_ratios() {
        let records = records(vec![
            record("A", "Austin", "Barista", "$60,000", true),
            record("B", "Boston", "Barista", "$60,000", true),
        ]);
        let scored = ScoreCalculator::new().score_all(&records);
        assert_eq!(indices(&best_value(&scored)), vec![0, 1]);
    }

    #[test]
    fn value_score_scales_to_100k() {
        let records = records(vec![
            record("A", "Austin", "Software Engineer", "$50,000", true),
            record("B", "Austin", "Software Engineer", "", true),
        ]);
        let scored = ScoreCalculator::new().score_all(&records);

        // 25 availability + 10 experience + 10/7 breadth = 36.43 -> 36
        assert_eq!(scored[0].score, 36);
        assert_eq!(value_score(&scored[0]), 72);
        assert_eq!(value_score(&scored[1]), 0);
    }

    #[test]
    fn identical_candidates_stop_after_seed() {
        let records = records(
            (0..5)
                .map(|n| record(&format!("Dev{n}"), "Austin", "Engineer", "$70,000", true))
                .collect(),
        );
        let scored = ScoreCalculator::new().score_all(&records);
        let team = diverse_team(&scored);

        assert_eq!(team.len(), 3);
        assert_eq!(
            team.iter().map(|member| member.candidate.index).collect::<Vec<_>>(),
            vec![0, 1, 2]
        );
    }

    #[test]
    fn novelty_in_location_or_role_extends_team() {
        let records = records(vec![
            record("A", "Austin", "Engineer", "$70,000", true),
            record("B", "Austin", "Engineer", "$70,000", true),
            record("C", "Austin", "Engineer", "$70,000", true),
            record("D", "Austin", "Engineer", "$70,000", true),
            record("E", "Boston", "Engineer", "$70,000", true),
            record("F", "Austin", "Developer", "$70,000", true),
            record("G", "Denver", "Architect", "$70,000", true),
        ]);
        let scored = ScoreCalculator::new().score_all(&records);
        let team = diverse_team(&scored);

        let picked: Vec<usize> = team.iter().map(|member| member.candidate.index).collect();
        assert_eq!(picked, vec![0, 1, 2, 4, 5]);
        assert_eq!(team[3].location, "Boston");
        assert_eq!(team[4].role, "Developer");
    }

    #[test]
    fn missing_location_and_role_are_unknown() {
        let records =
            records(vec![json!({"name": "Nobody", "work_availability": ["full-time"]})]);
        let scored = ScoreCalculator::new().score_all(&records);
        let team = diverse_team(&scored);

        assert_eq!(team.len(), 1);
        assert_eq!(team[0].location, "Unknown");
        assert_eq!(team[0].role, "Unknown");
    }

    #[test]
    fn build_bundles_lists_and_budget() {
        let records = records(vec![
            record("A", "Austin", "Engineer", "$70,000", true),
            record("B", "Boston", "Designer", "$90,000", true),
            record("C", "Chicago", "Lawyer", "$120,000", false),
        ]);
        let scored = ScoreCalculator::new().score_all(&records);
        let recommendations = HiringRecommendations::build(&scored);

        assert_eq!(recommendations.top_performers.len(), 3);
        assert_eq!(indices(&recommendations.best_value), vec![0, 1]);
        assert_eq!(recommendations.diverse_team.len(), 3);
        assert_eq!(recommendations.team_budget(), 280_000);
        assert_eq!(team_budget(&scored[..2]), 160_000);
    }

    #[test]
    fn empty_population_yields_empty_lists() {
        let recommendations = HiringRecommendations::build(&[]);
        assert!(recommendations.top_performers.is_empty());
        assert!(recommendations.best_value.is_empty());
        assert!(recommendations.diverse_team.is_empty());
        assert_eq!(recommendations.team_budget(), 0);
    }

    #[test]
    fn team_budget_saturates_on_huge_salaries() {
        let records = records(vec![
            record("A", "Austin", "Engineer", "$99999999999999999999999", true),
            record("B", "Boston", "Designer", "$99999999999999999999999", true),
        ]);
        let scored = ScoreCalculator::new().score_all(&records);
        assert_eq!(scored[0].salary_num, u64::MAX);

        let recommendations = HiringRecommendations::build(&scored);
        assert_eq!(recommendations.diverse_team.len(), 2);
        assert_eq!(recommendations.team_budget(), u64::MAX);
        assert_eq!(team_budget(&scored), u64::MAX);
    }
}
