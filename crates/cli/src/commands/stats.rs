use hirerank_core::config::AppConfig;
use hirerank_core::ranking::{
    location_counts, salary_histogram, summarize, DashboardSummary, LocationCount, SalaryBucket,
};
use hirerank_core::scoring::ScoreCalculator;
use serde::Serialize;

use crate::commands::{load_dataset, CommandResult};

#[derive(Debug, Serialize)]
struct StatsReport {
    summary: DashboardSummary,
    locations: Vec<LocationCount>,
    salary_histogram: Vec<SalaryBucket>,
}

pub fn run(config: &AppConfig) -> CommandResult {
    let records = match load_dataset("stats", config) {
        Ok(records) => records,
        Err(result) => return result,
    };

    let scored = ScoreCalculator::with_weights(config.weights).score_all(&records);
    let report = StatsReport {
        summary: summarize(&scored),
        locations: location_counts(&scored),
        salary_histogram: salary_histogram(&scored),
    };

    CommandResult::with_data(
        "stats",
        format!(
            "{} candidates, average salary {}k, average score {}",
            report.summary.total_candidates,
            report.summary.average_salary_k,
            report.summary.average_score
        ),
        report,
    )
}
