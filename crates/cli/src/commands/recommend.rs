use hirerank_core::config::AppConfig;
use hirerank_core::recommendations::{value_score, HiringRecommendations};
use hirerank_core::scoring::ScoreCalculator;
use serde::Serialize;
use tracing::info;

use crate::commands::{candidate_views, load_dataset, CandidateView, CommandResult};

#[derive(Debug, Serialize)]
struct ValuePick {
    value_score: u64,
    #[serde(flatten)]
    candidate: CandidateView,
}

#[derive(Debug, Serialize)]
struct TeamPick {
    team_location: String,
    team_role: String,
    #[serde(flatten)]
    candidate: CandidateView,
}

#[derive(Debug, Serialize)]
struct RecommendReport {
    top_performers: Vec<CandidateView>,
    best_value: Vec<ValuePick>,
    diverse_team: Vec<TeamPick>,
    team_budget: u64,
}

pub fn run(config: &AppConfig) -> CommandResult {
    let records = match load_dataset("recommend", config) {
        Ok(records) => records,
        Err(result) => return result,
    };

    let calculator = ScoreCalculator::with_weights(config.weights);
    let scored = calculator.score_all(&records);
    let recommendations = HiringRecommendations::build(&scored);

    let report = RecommendReport {
        top_performers: candidate_views(&calculator, &recommendations.top_performers),
        best_value: recommendations
            .best_value
            .iter()
            .map(|candidate| ValuePick {
                value_score: value_score(candidate),
                candidate: CandidateView::from_scored(&calculator, candidate),
            })
            .collect(),
        diverse_team: recommendations
            .diverse_team
            .iter()
            .map(|member| TeamPick {
                team_location: member.location.to_string(),
                team_role: member.role.to_string(),
                candidate: CandidateView::from_scored(&calculator, &member.candidate),
            })
            .collect(),
        team_budget: recommendations.team_budget(),
    };

    info!(
        event_name = "cli.recommend.completed",
        population = scored.len(),
        team_size = report.diverse_team.len(),
        team_budget = report.team_budget,
        "built hiring recommendations"
    );

    CommandResult::with_data(
        "recommend",
        format!(
            "recommended a team of {} with a budget of ${}",
            report.diverse_team.len(),
            report.team_budget
        ),
        report,
    )
}
