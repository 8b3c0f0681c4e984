use serde::Serialize;

use crate::domain::candidate::CandidateRecord;
use crate::scoring::ComponentScores;

/// A candidate record paired with the values derived from one weight snapshot.
///
/// Borrowing the record keeps the source data read-only; a new weight
/// configuration produces a new set of scored candidates.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ScoredCandidate<'a> {
    /// Position in the input collection, used for every tie-break.
    pub index: usize,
    pub record: &'a CandidateRecord,
    /// Final score, always within 0..=100.
    pub score: u8,
    /// Parsed full-time salary expectation, 0 when absent or unparseable.
    pub salary_num: u64,
    pub components: ComponentScores,
}

impl ScoredCandidate<'_> {
    pub fn email(&self) -> Option<&str> {
        self.record.email.as_deref()
    }
}
