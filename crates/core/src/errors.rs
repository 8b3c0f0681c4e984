use thiserror::Error;

use crate::config::ConfigError;
use crate::dataset::DatasetError;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum DomainError {
    #[error("invalid salary bound `{value}` (expected a whole number such as 75000 or $75,000)")]
    InvalidSalaryBound { value: String },
    #[error("weight `{factor}` must be a finite non-negative number, got {value}")]
    InvalidWeight { factor: String, value: f64 },
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum ApplicationError {
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error("dataset failure: {0}")]
    Dataset(String),
    #[error("configuration failure: {0}")]
    Configuration(String),
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum InterfaceError {
    #[error("bad input: {message}")]
    BadInput { message: String, command: String },
    #[error("dataset unavailable: {message}")]
    DatasetUnavailable { message: String, command: String },
    #[error("configuration invalid: {message}")]
    ConfigInvalid { message: String, command: String },
}

impl InterfaceError {
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::BadInput { .. } => {
                "The input could not be processed. Check arguments and try again."
            }
            Self::DatasetUnavailable { .. } => {
                "The candidate dataset could not be loaded. Check the dataset path and contents."
            }
            Self::ConfigInvalid { .. } => "The configuration is invalid. Fix it and rerun.",
        }
    }

    pub fn error_class(&self) -> &'static str {
        match self {
            Self::BadInput { .. } => "bad_input",
            Self::DatasetUnavailable { .. } => "dataset_unavailable",
            Self::ConfigInvalid { .. } => "config_validation",
        }
    }

    pub fn exit_code(&self) -> u8 {
        match self {
            Self::ConfigInvalid { .. } => 2,
            Self::DatasetUnavailable { .. } => 3,
            Self::BadInput { .. } => 4,
        }
    }

    pub fn command(&self) -> &str {
        match self {
            Self::BadInput { command, .. }
            | Self::DatasetUnavailable { command, .. }
            | Self::ConfigInvalid { command, .. } => command,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Self::BadInput { message, .. }
            | Self::DatasetUnavailable { message, .. }
            | Self::ConfigInvalid { message, .. } => message,
        }
    }
}

impl ApplicationError {
    pub fn into_interface(self, command: impl Into<String>) -> InterfaceError {
        let command = command.into();
        let mut mapped = InterfaceError::from(self);
        match &mut mapped {
            InterfaceError::BadInput { command: name, .. }
            | InterfaceError::DatasetUnavailable { command: name, .. }
            | InterfaceError::ConfigInvalid { command: name, .. } => *name = command,
        }
        mapped
    }
}

impl From<ApplicationError> for InterfaceError {
    fn from(value: ApplicationError) -> Self {
        match value {
            ApplicationError::Domain(error) => {
                Self::BadInput { message: error.to_string(), command: "unassigned".to_owned() }
            }
            ApplicationError::Dataset(message) => {
                Self::DatasetUnavailable { message, command: "unassigned".to_owned() }
            }
            ApplicationError::Configuration(message) => {
                Self::ConfigInvalid { message, command: "unassigned".to_owned() }
            }
        }
    }
}

impl From<ConfigError> for ApplicationError {
    fn from(value: ConfigError) -> Self {
        Self::Configuration(value.to_string())
    }
}

impl From<DatasetError> for ApplicationError {
    fn from(value: DatasetError) -> Self {
        Self::Dataset(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use crate::config::ConfigError;
    use crate::dataset::DatasetError;
    use crate::errors::{ApplicationError, DomainError, InterfaceError};

    #[test]
    fn domain_error_maps_to_bad_input() {
        let interface = ApplicationError::from(DomainError::InvalidSalaryBound {
            value: "lots".to_owned(),
        })
        .into_interface("search");

        assert!(matches!(
            interface,
            InterfaceError::BadInput {
                ref command,
                ref message,
            } if command == "search" && message.contains("lots")
        ));
        assert_eq!(interface.exit_code(), 4);
        assert_eq!(interface.error_class(), "bad_input");
    }

    #[test]
    fn bad_input_has_user_safe_message() {
        let interface = ApplicationError::from(DomainError::InvalidWeight {
            factor: "skills".to_owned(),
            value: -2.0,
        })
        .into_interface("rank");

        assert_eq!(
            interface.user_message(),
            "The input could not be processed. Check arguments and try again."
        );
    }

    #[test]
    fn dataset_error_maps_to_dataset_unavailable() {
        let interface = ApplicationError::from(DatasetError::NotAnArray {
            path: PathBuf::from("candidates.json"),
        })
        .into_interface("stats");

        assert!(matches!(interface, InterfaceError::DatasetUnavailable { .. }));
        assert_eq!(interface.exit_code(), 3);
        assert_eq!(interface.command(), "stats");
        assert!(interface.message().contains("candidates.json"));
    }

    #[test]
    fn configuration_error_maps_to_config_invalid() {
        let interface =
            ApplicationError::from(ConfigError::Validation("bad weights".to_owned()))
                .into_interface("weights");

        assert!(matches!(interface, InterfaceError::ConfigInvalid { .. }));
        assert_eq!(interface.exit_code(), 2);
        assert_eq!(interface.error_class(), "config_validation");
        assert_eq!(interface.user_message(), "The configuration is invalid. Fix it and rerun.");
    }
}
