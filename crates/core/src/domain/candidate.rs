use std::collections::BTreeMap;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// One applicant's profile as ingested.
///
/// Every field is optional and every field tolerates a value of the wrong JSON
/// type: such values deserialize as absent instead of rejecting the record.
/// Sequences keep malformed elements as `None` so that positional meaning
/// (index 0 is the most recent experience) survives.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CandidateRecord {
    #[serde(deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub email: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub phone: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub location: Option<String>,
    #[serde(deserialize_with = "lenient_seq")]
    pub work_availability: Option<Vec<Option<String>>>,
    #[serde(deserialize_with = "lenient_seq")]
    pub work_experiences: Option<Vec<Option<WorkExperience>>>,
    #[serde(deserialize_with = "lenient")]
    pub education: Option<Education>,
    #[serde(deserialize_with = "lenient_seq")]
    pub skills: Option<Vec<Option<String>>>,
    #[serde(deserialize_with = "lenient_map")]
    pub annual_salary_expectation: Option<BTreeMap<String, Option<String>>>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkExperience {
    #[serde(rename = "roleName", deserialize_with = "lenient")]
    pub role_name: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub company: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Education {
    #[serde(deserialize_with = "lenient")]
    pub highest_level: Option<String>,
    #[serde(deserialize_with = "lenient_seq")]
    pub degrees: Option<Vec<Option<Degree>>>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Degree {
    #[serde(deserialize_with = "lenient")]
    pub gpa: Option<String>,
    #[serde(rename = "isTop25", deserialize_with = "lenient")]
    pub is_top25: Option<bool>,
    #[serde(rename = "isTop50", deserialize_with = "lenient")]
    pub is_top50: Option<bool>,
}

impl CandidateRecord {
    /// Build a record from an arbitrary JSON value. Non-object values yield an
    /// empty record.
    pub fn from_value(value: Value) -> Self {
        serde_json::from_value(value).unwrap_or_default()
    }
}

fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

fn lenient_seq<'de, D, T>(deserializer: D) -> Result<Option<Vec<Option<T>>>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    match Value::deserialize(deserializer)? {
        Value::Array(items) => {
            Ok(Some(items.into_iter().map(|item| serde_json::from_value(item).ok()).collect()))
        }
        _ => Ok(None),
    }
}

fn lenient_map<'de, D, T>(deserializer: D) -> Result<Option<BTreeMap<String, Option<T>>>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    match Value::deserialize(deserializer)? {
        Value::Object(entries) => Ok(Some(
            entries
                .into_iter()
                .map(|(key, value)| (key, serde_json::from_value(value).ok()))
                .collect(),
        )),
        _ => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::CandidateRecord;

    #[test]
    fn full_record_deserializes() {
        let record = CandidateRecord::from_value(json!({
            "name": "Ada Park",
            "email": "ada@example.com",
            "phone": "555-0101",
            "location": "Austin",
            "work_availability": ["full-time"],
            "work_experiences": [{"roleName": "Software Engineer", "company": "Acme"}],
            "education": {
                "highest_level": "Bachelor's Degree",
                "degrees": [{"gpa": "GPA 3.5-3.9", "isTop25": true, "isTop50": true}]
            },
            "skills": ["Rust", "React"],
            "annual_salary_expectation": {"full-time": "$120,000"}
        }));

        assert_eq!(record.name.as_deref(), Some("Ada Park"));
        let experiences = record.work_experiences.unwrap_or_default();
        assert_eq!(experiences.len(), 1);
        assert_eq!(
            experiences[0].as_ref().and_then(|exp| exp.role_name.as_deref()),
            Some("Software Engineer")
        );
        let degree = record
            .education
            .and_then(|education| education.degrees)
            .and_then(|degrees| degrees.into_iter().next().flatten())
            .unwrap_or_default();
        assert_eq!(degree.is_top25, Some(true));
        assert_eq!(
            record
                .annual_salary_expectation
                .and_then(|salary| salary.get("full-time").cloned().flatten()),
            Some("$120,000".to_string())
        );
    }

    #[test]
    fn wrongly_typed_fields_become_absent() {
        let record = CandidateRecord::from_value(json!({
            "name": 42,
            "location": null,
            "work_availability": "full-time",
            "skills": ["Python", null, 7],
            "education": "PhD",
            "annual_salary_expectation": {"full-time": 120000, "part-time": "$40"}
        }));

        assert_eq!(record.name, None);
        assert_eq!(record.location, None);
        assert_eq!(record.work_availability, None);
        assert_eq!(record.skills, Some(vec![Some("Python".to_string()), None, None]));
        assert_eq!(record.education, None);
        let salary = record.annual_salary_expectation.unwrap_or_default();
        assert_eq!(salary.get("full-time"), Some(&None));
        assert_eq!(salary.get("part-time"), Some(&Some("$40".to_string())));
    }

    #[test]
    fn malformed_experience_entries_keep_their_position() {
        let record = CandidateRecord::from_value(json!({
            "work_experiences": [null, {"roleName": "Attorney"}, "garbage"]
        }));

        let experiences = record.work_experiences.unwrap_or_default();
        assert_eq!(experiences.len(), 3);
        assert!(experiences[0].is_none());
        assert!(experiences[2].is_none());
    }

    #[test]
    fn non_object_value_yields_empty_record() {
        assert_eq!(CandidateRecord::from_value(json!([1, 2, 3])), CandidateRecord::default());
        assert_eq!(CandidateRecord::from_value(json!("Ada")), CandidateRecord::default());
    }
}
