//! Candidate dataset ingestion.
//!
//! The dataset is a JSON array of candidate records. Record shape problems are
//! tolerated by the lenient record model; only unreadable files and documents
//! that are not an array are rejected.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use thiserror::Error;
use tracing::{info, warn};

use crate::domain::candidate::CandidateRecord;

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("could not read dataset file `{path}`: {source}")]
    ReadFile { path: PathBuf, source: std::io::Error },
    #[error("could not parse dataset file `{path}`: {source}")]
    ParseFile { path: PathBuf, source: serde_json::Error },
    #[error("dataset file `{path}` must contain a JSON array of candidate records")]
    NotAnArray { path: PathBuf },
}

pub fn load_candidates(path: &Path) -> Result<Vec<CandidateRecord>, DatasetError> {
    let raw = fs::read_to_string(path)
        .map_err(|source| DatasetError::ReadFile { path: path.to_path_buf(), source })?;
    let records = parse_candidates(&raw, path)?;

    info!(
        event_name = "dataset.candidates.loaded",
        path = %path.display(),
        count = records.len(),
        "candidate dataset loaded"
    );
    Ok(records)
}

pub fn parse_candidates(raw: &str, origin: &Path) -> Result<Vec<CandidateRecord>, DatasetError> {
    let document: Value = serde_json::from_str(raw)
        .map_err(|source| DatasetError::ParseFile { path: origin.to_path_buf(), source })?;

    let Value::Array(items) = document else {
        return Err(DatasetError::NotAnArray { path: origin.to_path_buf() });
    };

    Ok(items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            if !item.is_object() {
                warn!(
                    event_name = "dataset.candidates.malformed_entry",
                    index,
                    "dataset entry is not an object, treating it as an empty record"
                );
            }
            CandidateRecord::from_value(item)
        })
        .collect())
}
