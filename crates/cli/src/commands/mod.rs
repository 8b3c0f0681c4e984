pub mod rank;
pub mod recommend;
pub mod search;
pub mod stats;
pub mod weights;

use hirerank_core::config::AppConfig;
use hirerank_core::dataset::load_candidates;
use hirerank_core::domain::candidate::CandidateRecord;
use hirerank_core::domain::scored::ScoredCandidate;
use hirerank_core::errors::{ApplicationError, InterfaceError};
use hirerank_core::normalize::NormalizedCandidate;
use hirerank_core::scoring::{ComponentScores, RoleCategory, ScoreCalculator};
use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone)]
pub struct CommandResult {
    pub exit_code: u8,
    pub output: String,
}

#[derive(Debug, Serialize)]
struct CommandOutcome {
    command: String,
    status: String,
    error_class: Option<String>,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<Value>,
}

impl CommandResult {
    pub fn success(command: &str, message: impl Into<String>) -> Self {
        let payload = CommandOutcome {
            command: command.to_string(),
            status: "ok".to_string(),
            error_class: None,
            message: message.into(),
            data: None,
        };
        Self { exit_code: 0, output: serialize_payload(payload) }
    }

    /// Success carrying a structured `data` document.
    pub fn with_data(command: &str, message: impl Into<String>, data: impl Serialize) -> Self {
        let data = match serde_json::to_value(data) {
            Ok(data) => data,
            Err(error) => {
                return Self::failure(
                    command,
                    "serialization",
                    format!("could not serialize command output: {error}"),
                    1,
                );
            }
        };

        let payload = CommandOutcome {
            command: command.to_string(),
            status: "ok".to_string(),
            error_class: None,
            message: message.into(),
            data: Some(data),
        };
        Self { exit_code: 0, output: serialize_payload(payload) }
    }

    pub fn failure(
        command: &str,
        error_class: &str,
        message: impl Into<String>,
        exit_code: u8,
    ) -> Self {
        let payload = CommandOutcome {
            command: command.to_string(),
            status: "error".to_string(),
            error_class: Some(error_class.to_string()),
            message: message.into(),
            data: None,
        };
        Self { exit_code, output: serialize_payload(payload) }
    }

    pub fn from_error(error: &InterfaceError) -> Self {
        Self::failure(
            error.command(),
            error.error_class(),
            format!("{} ({})", error.user_message(), error.message()),
            error.exit_code(),
        )
    }
}

fn serialize_payload(payload: CommandOutcome) -> String {
    serde_json::to_string(&payload).unwrap_or_else(|error| {
        format!(
            "{{\"command\":\"unknown\",\"status\":\"error\",\"error_class\":\"serialization\",\"message\":\"{}\"}}",
            error.to_string().replace('\\', "\\\\").replace('"', "\\\"")
        )
    })
}

/// Load the configured dataset, mapping failures to a finished command result.
pub(crate) fn load_dataset(
    command: &str,
    config: &AppConfig,
) -> Result<Vec<CandidateRecord>, CommandResult> {
    load_candidates(&config.dataset.path).map_err(|error| {
        CommandResult::from_error(&ApplicationError::from(error).into_interface(command))
    })
}

/// Flattened candidate row shared by every listing command.
#[derive(Debug, Serialize)]
pub(crate) struct CandidateView {
    pub index: usize,
    pub score: u8,
    #[serde(flatten)]
    pub profile: NormalizedCandidate,
    pub components: ComponentScores,
    /// One bucket per experience entry, most recent first; `null` without a role name.
    pub role_categories: Vec<Option<RoleCategory>>,
}

impl CandidateView {
    pub fn from_scored(calculator: &ScoreCalculator, candidate: &ScoredCandidate<'_>) -> Self {
        Self {
            index: candidate.index,
            score: candidate.score,
            profile: NormalizedCandidate::from_record(candidate.record),
            components: candidate.components,
            role_categories: calculator.role_categories(candidate.record),
        }
    }
}

pub(crate) fn candidate_views(
    calculator: &ScoreCalculator,
    candidates: &[ScoredCandidate<'_>],
) -> Vec<CandidateView> {
    candidates.iter().map(|candidate| CandidateView::from_scored(calculator, candidate)).collect()
}

#[cfg(test)]
mod tests {
    use serde_json::{json, Value};

    use super::CommandResult;

    fn parse(output: &str) -> Value {
        serde_json::from_str(output).unwrap_or(Value::Null)
    }

    #[test]
    fn success_without_data_omits_the_field() {
        let result = CommandResult::success("weights", "weights total 100");
        let payload = parse(&result.output);

        assert_eq!(result.exit_code, 0);
        assert_eq!(payload["status"], "ok");
        assert!(payload["error_class"].is_null());
        assert!(payload.get("data").is_none());
    }

    #[test]
    fn data_is_embedded_in_the_payload() {
        let result = CommandResult::with_data("stats", "done", json!({"total": 3}));
        let payload = parse(&result.output);

        assert_eq!(payload["command"], "stats");
        assert_eq!(payload["data"]["total"], 3);
    }

    #[test]
    fn failure_carries_class_and_exit_code() {
        let result = CommandResult::failure("rank", "dataset_unavailable", "no file", 3);
        let payload = parse(&result.output);

        assert_eq!(result.exit_code, 3);
        assert_eq!(payload["status"], "error");
        assert_eq!(payload["error_class"], "dataset_unavailable");
        assert_eq!(payload["message"], "no file");
    }
}
