use serde::Serialize;
use tracing::debug;

use crate::domain::scored::ScoredCandidate;

/// Maximum number of shortlisted candidates.
pub const MAX_SHORTLIST: usize = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ShortlistOutcome {
    Added,
    Removed,
    /// The shortlist already holds five members; nothing changed.
    Full,
}

/// The operator's selection, keyed by email.
///
/// Toggling returns a new value, so callers decide when a selection becomes
/// current. Records without an email share one key.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Shortlist<'a> {
    members: Vec<ScoredCandidate<'a>>,
}

impl<'a> Shortlist<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle(&self, candidate: &ScoredCandidate<'a>) -> (Self, ShortlistOutcome) {
        let key = candidate.email();
        let outcome = if self.contains(key) {
            ShortlistOutcome::Removed
        } else if self.is_full() {
            ShortlistOutcome::Full
        } else {
            ShortlistOutcome::Added
        };

        let next = match outcome {
            ShortlistOutcome::Added => {
                let mut members = self.members.clone();
                members.push(*candidate);
                Self { members }
            }
            ShortlistOutcome::Removed => Self {
                members: self
                    .members
                    .iter()
                    .filter(|member| member.email() != key)
                    .copied()
                    .collect(),
            },
            ShortlistOutcome::Full => self.clone(),
        };

        debug!(
            event_name = "shortlist.toggled",
            email = key.unwrap_or_default(),
            outcome = ?outcome,
            size = next.len(),
            "shortlist toggled"
        );
        (next, outcome)
    }

    pub fn contains(&self, email: Option<&str>) -> bool {
        self.members.iter().any(|member| member.email() == email)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.members.len() >= MAX_SHORTLIST
    }

    /// Members in selection order.
    pub fn members(&self) -> &[ScoredCandidate<'a>] {
        &self.members
    }

    /// Sum of the members' salary expectations, saturating at `u64::MAX`.
    pub fn budget(&self) -> u64 {
        self.members.iter().map(|member| member.salary_num).fold(0u64, u64::saturating_add)
    }
}
