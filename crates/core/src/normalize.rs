//! Field normalization for loosely structured candidate records.
//!
//! This is the only place where defaults for missing or malformed fields are
//! decided. Nothing here fails: every accessor resolves to a documented
//! fallback.

use serde::Serialize;
use thiserror::Error;
use tracing::warn;

use crate::domain::candidate::{CandidateRecord, Degree, WorkExperience};

pub const UNKNOWN_NAME: &str = "Unknown";
pub const UNKNOWN_IDENTIFIER: &str = "unknown";
pub const UNKNOWN_LOCATION: &str = "Unknown";
pub const UNKNOWN_ROLE: &str = "Unknown";
pub const UNKNOWN_PHONE_ENDING: &str = "0000";
pub const SALARY_NOT_SPECIFIED: &str = "Not specified";
pub const FULL_TIME: &str = "full-time";
pub const PART_TIME: &str = "part-time";

/// Highest education level, matched exactly against the dataset's labels.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EducationLevel {
    HighSchool,
    Associate,
    Bachelor,
    Master,
    JurisDoctor,
    Phd,
    Other(String),
    NotSpecified,
}

impl EducationLevel {
    pub fn from_label(label: Option<&str>) -> Self {
        match label {
            None | Some("") => Self::NotSpecified,
            Some("High School Diploma") => Self::HighSchool,
            Some("Associate's Degree") => Self::Associate,
            Some("Bachelor's Degree") => Self::Bachelor,
            Some("Master's Degree") => Self::Master,
            Some("Juris Doctor (J.D)") => Self::JurisDoctor,
            Some("PhD") => Self::Phd,
            Some(other) => Self::Other(other.to_string()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::HighSchool => "High School Diploma",
            Self::Associate => "Associate's Degree",
            Self::Bachelor => "Bachelor's Degree",
            Self::Master => "Master's Degree",
            Self::JurisDoctor => "Juris Doctor (J.D)",
            Self::Phd => "PhD",
            Self::Other(label) => label,
            Self::NotSpecified => "Not specified",
        }
    }
}

/// Display-ready view of a record with every default applied.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NormalizedCandidate {
    pub display_name: String,
    pub identifier: String,
    pub phone_ending: String,
    pub location: String,
    pub most_recent_role: String,
    pub education_level: EducationLevel,
    pub salary_label: String,
    pub salary_num: u64,
    pub skills: Vec<String>,
}

impl NormalizedCandidate {
    pub fn from_record(record: &CandidateRecord) -> Self {
        Self {
            display_name: display_name(record).to_string(),
            identifier: identifier(record).to_string(),
            phone_ending: phone_ending(record),
            location: location_or_unknown(record).to_string(),
            most_recent_role: most_recent_role(record).to_string(),
            education_level: education_level(record),
            salary_label: salary_label(record).to_string(),
            salary_num: salary_num(record),
            skills: skills(record).map(str::to_string).collect(),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
enum SalaryParseError {
    #[error("salary value is not a string")]
    NotAString,
    #[error("salary `{0}` has no leading digits")]
    NoDigits(String),
    #[error("salary `{0}` is negative")]
    Negative(String),
}

fn non_empty(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).filter(|value| !value.is_empty())
}

pub fn display_name(record: &CandidateRecord) -> &str {
    non_empty(record.name.as_ref()).unwrap_or(UNKNOWN_NAME)
}

/// Local part of the email address, or `unknown`.
pub fn identifier(record: &CandidateRecord) -> &str {
    match non_empty(record.email.as_ref()) {
        Some(email) => email.split('@').next().unwrap_or(email),
        None => UNKNOWN_IDENTIFIER,
    }
}

pub fn phone_ending(record: &CandidateRecord) -> String {
    let chars: Vec<char> =
        record.phone.as_deref().map(|phone| phone.chars().collect()).unwrap_or_default();
    if chars.len() >= 4 {
        chars[chars.len() - 4..].iter().collect()
    } else {
        UNKNOWN_PHONE_ENDING.to_string()
    }
}

pub fn location(record: &CandidateRecord) -> Option<&str> {
    non_empty(record.location.as_ref())
}

pub fn location_or_unknown(record: &CandidateRecord) -> &str {
    location(record).unwrap_or(UNKNOWN_LOCATION)
}

pub fn availability(record: &CandidateRecord) -> impl Iterator<Item = &str> {
    record.work_availability.iter().flatten().flatten().map(String::as_str)
}

/// Experience entries in the order given, malformed entries included as `None`.
pub fn experiences(record: &CandidateRecord) -> &[Option<WorkExperience>] {
    record.work_experiences.as_deref().unwrap_or_default()
}

/// Role name per experience entry; `None` for malformed entries or blank names.
pub fn role_names(record: &CandidateRecord) -> impl Iterator<Item = Option<&str>> {
    experiences(record)
        .iter()
        .map(|entry| entry.as_ref().and_then(|experience| non_empty(experience.role_name.as_ref())))
}

pub fn most_recent_role(record: &CandidateRecord) -> &str {
    role_names(record).next().flatten().unwrap_or(UNKNOWN_ROLE)
}

/// Non-empty skills in order.
pub fn skills(record: &CandidateRecord) -> impl Iterator<Item = &str> {
    record
        .skills
        .iter()
        .flatten()
        .filter_map(|skill| non_empty(skill.as_ref()))
}

pub fn degrees(record: &CandidateRecord) -> impl Iterator<Item = &Degree> {
    record
        .education
        .iter()
        .flat_map(|education| education.degrees.iter().flatten())
        .flatten()
}

pub fn education_level(record: &CandidateRecord) -> EducationLevel {
    EducationLevel::from_label(
        record.education.as_ref().and_then(|education| education.highest_level.as_deref()),
    )
}

fn full_time_salary(record: &CandidateRecord) -> Option<&Option<String>> {
    record.annual_salary_expectation.as_ref().and_then(|salary| salary.get(FULL_TIME))
}

pub fn salary_label(record: &CandidateRecord) -> &str {
    full_time_salary(record)
        .and_then(|value| non_empty(value.as_ref()))
        .unwrap_or(SALARY_NOT_SPECIFIED)
}

/// Parsed full-time salary expectation.
///
/// Missing values count as `$0`. Values that cannot be read as an integer are
/// logged and treated as 0.
pub fn salary_num(record: &CandidateRecord) -> u64 {
    let parsed = match full_time_salary(record) {
        None => Ok(0),
        Some(None) => Err(SalaryParseError::NotAString),
        Some(Some(raw)) if raw.is_empty() => Ok(0),
        Some(Some(raw)) => parse_salary(raw),
    };

    parsed.unwrap_or_else(|error| {
        warn!(
            event_name = "normalize.salary.unparseable",
            candidate = display_name(record),
            error = %error,
            "could not parse salary expectation, using 0"
        );
        0
    })
}

/// Reads a leading integer after stripping `$` and `,`, ignoring any trailing
/// text the way a lenient integer parser does.
fn parse_salary(raw: &str) -> Result<u64, SalaryParseError> {
    let cleaned: String = raw.chars().filter(|ch| !matches!(ch, '$' | ',')).collect();
    let trimmed = cleaned.trim_start();
    let (negative, unsigned) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits: &str = unsigned
        .char_indices()
        .find(|(_, ch)| !ch.is_ascii_digit())
        .map_or(unsigned, |(end, _)| &unsigned[..end]);
    if digits.is_empty() {
        return Err(SalaryParseError::NoDigits(raw.to_string()));
    }

    let value = digits.parse::<u64>().unwrap_or(u64::MAX);
    if negative && value > 0 {
        return Err(SalaryParseError::Negative(raw.to_string()));
    }
    Ok(value)
}
