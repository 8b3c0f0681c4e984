use hirerank_core::config::AppConfig;
use hirerank_core::scoring::WeightConfig;
use serde::Serialize;

use crate::commands::CommandResult;

#[derive(Debug, Serialize)]
struct WeightsReport {
    weights: Vec<FactorWeight>,
    total: f64,
    balanced: bool,
}

#[derive(Debug, Serialize)]
struct FactorWeight {
    factor: &'static str,
    weight: f64,
}

fn report(weights: &WeightConfig) -> WeightsReport {
    WeightsReport {
        weights: weights
            .factors()
            .into_iter()
            .map(|(factor, weight)| FactorWeight { factor, weight })
            .collect(),
        total: weights.total(),
        balanced: weights.is_balanced(),
    }
}

pub fn run(config: &AppConfig) -> CommandResult {
    let report = report(&config.weights);
    let message = if report.balanced {
        "weights total 100".to_string()
    } else {
        format!("warning: weights total {} instead of 100", report.total)
    };
    CommandResult::with_data("weights", message, report)
}
