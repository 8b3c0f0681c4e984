use hirerank_core::config::AppConfig;
use hirerank_core::errors::{ApplicationError, DomainError};
use hirerank_core::ranking::{filter_candidates, parse_salary_bound, rank_by_score, CandidateFilter};
use hirerank_core::scoring::ScoreCalculator;
use serde::Serialize;
use tracing::info;

use crate::commands::{candidate_views, load_dataset, CandidateView, CommandResult};

/// Raw search input as typed by the operator.
#[derive(Debug, Clone, Default)]
pub struct SearchArgs {
    pub query: Option<String>,
    pub location: Option<String>,
    pub min_salary: Option<String>,
    pub max_salary: Option<String>,
    pub skills: Option<String>,
}

#[derive(Debug, Serialize)]
struct SearchReport {
    query: String,
    filter: CandidateFilter,
    total: usize,
    matched: usize,
    candidates: Vec<CandidateView>,
}

impl SearchArgs {
    fn filter(&self) -> Result<CandidateFilter, DomainError> {
        let bound = |raw: &Option<String>| match raw {
            Some(raw) => parse_salary_bound(raw),
            None => Ok(None),
        };

        let mut filter = CandidateFilter::new()
            .with_salary_range(bound(&self.min_salary)?, bound(&self.max_salary)?);
        if let Some(location) = &self.location {
            filter = filter.with_location(location.as_str());
        }
        if let Some(skills) = &self.skills {
            filter = filter.with_skills(skills.as_str());
        }
        Ok(filter)
    }
}

pub fn run(config: &AppConfig, args: &SearchArgs) -> CommandResult {
    let filter = match args.filter() {
        Ok(filter) => filter,
        Err(error) => {
            return CommandResult::from_error(
                &ApplicationError::from(error).into_interface("search"),
            );
        }
    };

    let records = match load_dataset("search", config) {
        Ok(records) => records,
        Err(result) => return result,
    };

    let query = args.query.clone().unwrap_or_default();
    let calculator = ScoreCalculator::with_weights(config.weights);
    let scored = calculator.score_all(&records);
    let matched = rank_by_score(&filter_candidates(&scored, &query, &filter));

    info!(
        event_name = "cli.search.completed",
        total = scored.len(),
        matched = matched.len(),
        "searched candidates"
    );

    let report = SearchReport {
        query,
        filter,
        total: scored.len(),
        matched: matched.len(),
        candidates: candidate_views(&calculator, &matched),
    };
    CommandResult::with_data(
        "search",
        format!("{} of {} candidates matched", report.matched, report.total),
        report,
    )
}
