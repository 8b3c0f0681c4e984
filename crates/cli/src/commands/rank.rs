use hirerank_core::config::AppConfig;
use hirerank_core::ranking::rank_by_score;
use hirerank_core::scoring::ScoreCalculator;
use serde::Serialize;
use tracing::info;

use crate::commands::{candidate_views, load_dataset, CandidateView, CommandResult};

#[derive(Debug, Serialize)]
struct RankReport {
    total: usize,
    candidates: Vec<CandidateView>,
}

pub fn run(config: &AppConfig, limit: Option<usize>) -> CommandResult {
    let records = match load_dataset("rank", config) {
        Ok(records) => records,
        Err(result) => return result,
    };

    let calculator = ScoreCalculator::with_weights(config.weights);
    let scored = calculator.score_all(&records);
    let mut ranked = rank_by_score(&scored);
    if let Some(limit) = limit {
        ranked.truncate(limit);
    }

    info!(
        event_name = "cli.rank.completed",
        total = scored.len(),
        returned = ranked.len(),
        "ranked candidates"
    );

    let report =
        RankReport { total: scored.len(), candidates: candidate_views(&calculator, &ranked) };
    CommandResult::with_data(
        "rank",
        format!("ranked {} of {} candidates", ranked.len(), scored.len()),
        report,
    )
}
